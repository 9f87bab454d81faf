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

use serde::{Deserialize, Serialize};

use crate::{
    content::Content,
    error::Error,
    rect::SizeD,
};

/// Default upper bound for the zoom factor.
pub const DEFAULT_MAX_ZOOM: f64 = 10.0;
/// Standard zoom increment/decrement multiplier for keyboard and wheel steps.
pub const ZOOM_MULTIPLIER: f64 = 1.1;
/// When zooming out below 1.0, the displayed image may not shrink under this
/// many pixels on its smaller natural axis.
pub const MIN_VISIBLE_SIZE: f64 = 100.0;

/// Floating point comparison epsilon for zoom state detection
const ZOOM_EPSILON: f64 = 1.0e-6;

/// Defines how the image is scaled within the viewport.
///
/// The fit modes recompute the zoom factor from the container size, and keep
/// doing so when the container is resized. Any direct change of the factor
/// (setter, keyboard, wheel) switches the view to `Manual`.
#[derive(Default, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ZoomMode {
    /// The zoom factor was set directly and stays put on resize
    Manual,
    /// Scale so the whole image fits the container, both axes
    #[default]
    FitSize,
    /// Scale so the image spans the container width, allowing vertical
    /// overflow (compensating for the vertical scrollbar)
    FitWidth,
    /// Scale so the image spans the container height, allowing horizontal
    /// overflow (compensating for the horizontal scrollbar)
    FitHeight,
}

impl TryFrom<&str> for ZoomMode {
    type Error = Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "manual" => Ok(ZoomMode::Manual),
            "fitsize" => Ok(ZoomMode::FitSize),
            "fitwidth" => Ok(ZoomMode::FitWidth),
            "fitheight" => Ok(ZoomMode::FitHeight),
            other => Err(Error::InvalidZoomMode(other.to_string())),
        }
    }
}

impl From<ZoomMode> for &str {
    fn from(value: ZoomMode) -> Self {
        match value {
            ZoomMode::Manual => "manual",
            ZoomMode::FitSize => "fitsize",
            ZoomMode::FitWidth => "fitwidth",
            ZoomMode::FitHeight => "fitheight",
        }
    }
}

/// Represents the current zoom state of the image relative to its original size.
///
/// This is determined by comparing the current zoom factor to 1.0 (original size)
/// with floating-point tolerance for comparison.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Clone, Copy)]
pub enum ZoomState {
    /// Image is displayed at original size (factor = 1.0)
    NoZoom,
    /// Image is enlarged (factor > 1.0)
    ZoomedIn,
    /// Image is reduced (factor < 1.0)
    ZoomedOut,
}

/// The zoom factor and the rules that constrain it.
///
/// Fit factors are computed from the container and assigned as-is — fitting
/// may shrink an oversized image arbitrarily. Manual changes run through
/// [`Zoom::clamp`], which enforces the upper bound and the minimum visible
/// size when shrinking below the original.
#[derive(Debug, Clone, PartialEq)]
pub struct Zoom {
    /// Current zoom factor (1.0 = original size)
    factor: f64,
    /// Upper bound applied by `clamp`
    max_factor: f64,
}

impl Default for Zoom {
    fn default() -> Self {
        Self {
            factor: 1.0,
            max_factor: DEFAULT_MAX_ZOOM,
        }
    }
}

impl Zoom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_factor(max_factor: f64) -> Self {
        Self {
            factor: 1.0,
            max_factor,
        }
    }

    /// Returns the current zoom factor
    pub fn factor(&self) -> f64 {
        self.factor
    }

    /// Sets the zoom factor without constraints. Callers that accept user
    /// input follow up with [`Zoom::clamp`].
    pub fn set_factor(&mut self, factor: f64) {
        self.factor = factor;
    }

    pub fn max_factor(&self) -> f64 {
        self.max_factor
    }

    pub fn set_max_factor(&mut self, max_factor: f64) {
        self.max_factor = max_factor;
    }

    /// Determines the current zoom state by comparing the factor to 1.0
    ///
    /// Uses floating-point epsilon comparison to handle precision issues.
    pub fn state(&self) -> ZoomState {
        if self.factor > 1.0 + ZOOM_EPSILON {
            ZoomState::ZoomedIn
        } else if self.factor < 1.0 - ZOOM_EPSILON {
            ZoomState::ZoomedOut
        } else {
            ZoomState::NoZoom
        }
    }

    /// Checks if the image is currently zoomed (not at 1.0 zoom factor)
    pub fn is_zoomed(&self) -> bool {
        self.state() != ZoomState::NoZoom
    }

    /// Candidate factor one step in, for keyboard/wheel zooming.
    pub fn stepped_in(&self, step: f64) -> f64 {
        self.factor * step
    }

    /// Candidate factor one step out.
    pub fn stepped_out(&self, step: f64) -> f64 {
        self.factor / step
    }

    /// Constrains the factor after a manual change.
    ///
    /// The factor is capped at `max_factor`. When zooming out below the
    /// original size, the displayed image may not become smaller than
    /// [`MIN_VISIBLE_SIZE`] on either axis; if it would, the factor snaps to
    /// the largest value satisfying that bound (or back to 1.0 for images
    /// already smaller than the bound).
    pub fn clamp(&mut self, content: &Content) {
        if self.factor > self.max_factor {
            self.factor = self.max_factor;
        } else if self.factor < 1.0 {
            let display = content.display_size(self.factor);
            if display.width() < MIN_VISIBLE_SIZE || display.height() < MIN_VISIBLE_SIZE {
                self.factor = (MIN_VISIBLE_SIZE / content.natural_size().min_side()).min(1.0);
            }
        }
    }

    /// Factor that fits the whole image inside the container, both axes.
    pub fn fit_size(&mut self, content: &Content, outer: SizeD) {
        let natural = content.natural_size();
        self.factor = (outer.width() / natural.width()).min(outer.height() / natural.height());
    }

    /// Factor that spans the container width.
    ///
    /// When the scaled image then overflows the container height, a vertical
    /// scrollbar will appear and eat into the width, so one scrollbar worth
    /// of factor is shaved off. If that overshoots — the height no longer
    /// overflows — the exact height fit is used instead.
    pub fn fit_width(&mut self, content: &Content, outer: SizeD, scrollbar_width: f64) {
        let natural = content.natural_size();
        let mut factor = outer.width() / natural.width();
        if natural.height() * factor > outer.height() {
            factor -= scrollbar_width / natural.width();
            if natural.height() * factor < outer.height() {
                factor = outer.height() / natural.height();
            }
        }
        self.factor = factor;
    }

    /// Factor that spans the container height. Mirror image of `fit_width`,
    /// compensating for the horizontal scrollbar.
    pub fn fit_height(&mut self, content: &Content, outer: SizeD, scrollbar_width: f64) {
        let natural = content.natural_size();
        let mut factor = outer.height() / natural.height();
        if natural.width() * factor > outer.width() {
            factor -= scrollbar_width / natural.height();
            if natural.width() * factor < outer.width() {
                factor = outer.width() / natural.width();
            }
        }
        self.factor = factor;
    }
}
