// ZoomView -- Zoom and pan core for interactive image viewers
//
// Copyright (c) 2024-2025 Martin van der Werff <github (at) newinnovations.nl>
//
// This file is part of ZoomView.
//
// ZoomView is free software: you can redistribute it and/or modify it under the terms of
// the GNU Affero General Public License as published by the Free Software Foundation, either
// version 3 of the License, or (at your option) any later version.
//
// THIS SOFTWARE IS PROVIDED BY THE COPYRIGHT HOLDERS AND CONTRIBUTORS "AS IS" AND ANY EXPRESS OR
// IMPLIED WARRANTIES, INCLUDING, BUT NOT LIMITED TO, THE IMPLIED WARRANTIES OF MERCHANTABILITY AND
// FITNESS FOR A PARTICULAR PURPOSE ARE DISCLAIMED. IN NO EVENT SHALL THE AUTHOR BE LIABLE FOR ANY
// DIRECT, INDIRECT, INCIDENTAL, SPECIAL, EXEMPLARY, OR CONSEQUENTIAL DAMAGES (INCLUDING, BUT NOT
// LIMITED TO, PROCUREMENT OF SUBSTITUTE GOODS OR SERVICES; LOSS OF USE, DATA, OR PROFITS; OR
// BUSINESS INTERRUPTION) HOWEVER CAUSED AND ON ANY THEORY OF LIABILITY, WHETHER IN CONTRACT,
// STRICT LIABILITY, OR TORT (INCLUDING NEGLIGENCE OR OTHERWISE) ARISING IN ANY WAY OUT OF THE USE
// OF THIS SOFTWARE, EVEN IF ADVISED OF THE POSSIBILITY OF SUCH DAMAGE.

use crate::{
    error::{Error, Result},
    rect::SizeD,
};

/// The displayed image, reduced to what the geometry cares about: its
/// natural (original) pixel dimensions.
///
/// Decoding and drawing happen elsewhere; the viewer core only scales and
/// positions this size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Content {
    natural: SizeD,
}

impl Content {
    /// Creates content from its natural pixel dimensions.
    ///
    /// Dimensions must be positive, otherwise the zoom math would divide
    /// by zero.
    pub fn new(width: f64, height: f64) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(Error::InvalidContentSize { width, height });
        }
        Ok(Self {
            natural: SizeD::new(width, height),
        })
    }

    /// Original pixel dimensions.
    pub fn natural_size(&self) -> SizeD {
        self.natural
    }

    /// Dimensions at the given zoom factor.
    pub fn display_size(&self, zoom: f64) -> SizeD {
        SizeD::new(self.natural.width() * zoom, self.natural.height() * zoom)
    }
}
