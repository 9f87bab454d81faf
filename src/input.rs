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

//! Toolkit-free input vocabulary. The embedder translates its native events
//! into these values and feeds them to [`crate::view::ImageView`].

use crate::rect::VectorD;

/// Keys the viewer reacts to. Everything else maps to `Other`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    NumpadAdd,
    NumpadSubtract,
    NumpadDivide,
    NumpadMultiply,
    Other,
}

/// Keyboard modifier state accompanying a key press.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Modifiers {
    pub alt: bool,
    pub ctrl: bool,
    pub shift: bool,
}

impl Modifiers {
    pub const NONE: Modifiers = Modifiers {
        alt: false,
        ctrl: false,
        shift: false,
    };

    /// True when any modifier is held.
    pub fn any(&self) -> bool {
        self.alt || self.ctrl || self.shift
    }
}

/// Pointer cursor the embedder should display.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Cursor {
    /// Image fits entirely, nothing to pan.
    #[default]
    Default,
    /// Image overflows and can be dragged.
    Grab,
    /// A drag is in progress.
    Grabbing,
}

/// State captured when a pan gesture starts.
///
/// Motion events compute the new scroll position from these origins rather
/// than accumulating deltas, so a drag cannot drift.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragState {
    /// Pointer position at button press, in screen coordinates.
    pub pointer_origin: VectorD,
    /// Viewport scroll offset at button press.
    pub scroll_origin: VectorD,
}
