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
    content::Content,
    rect::{RectD, SizeD, VectorD},
};

/// Which scrollbars the container currently shows.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Scrollbars {
    pub horizontal: bool,
    pub vertical: bool,
}

impl Scrollbars {
    pub fn any(&self) -> bool {
        self.horizontal || self.vertical
    }
}

/// The scrollable container holding the image.
///
/// Only geometry lives here: the outer (border-box) size, the scroll offset
/// and the scrollbar thickness. The client (inner) size is derived, because
/// scrollbar presence depends on the displayed content size — and a
/// scrollbar on one axis can trigger the scrollbar on the other.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    outer: SizeD,
    scroll: VectorD,
    scrollbar_width: f64,
}

impl Viewport {
    /// Creates a viewport with the given outer size and scrollbar thickness.
    ///
    /// The thickness is whatever the embedder measured for its platform
    /// (the DOM trick of probing a hidden overflowing element, a toolkit
    /// constant, or zero for overlay scrollbars).
    pub fn new(outer: SizeD, scrollbar_width: f64) -> Self {
        Self {
            outer,
            scroll: VectorD::default(),
            scrollbar_width,
        }
    }

    pub fn outer_size(&self) -> SizeD {
        self.outer
    }

    pub fn set_outer_size(&mut self, outer: SizeD) {
        self.outer = outer;
    }

    pub fn scrollbar_width(&self) -> f64 {
        self.scrollbar_width
    }

    pub fn scroll(&self) -> VectorD {
        self.scroll
    }

    /// Resolves which scrollbars appear for the given displayed content size.
    ///
    /// An axis overflows when the content exceeds the space left over by the
    /// other axis' scrollbar. Resolution iterates to a fixed point: content
    /// slightly narrower than the outer width still gets a horizontal
    /// scrollbar once the vertical one eats into the width. Two passes
    /// suffice since presence only ever grows.
    pub fn scrollbars(&self, display: SizeD) -> Scrollbars {
        let mut sb = Scrollbars::default();
        loop {
            let horizontal = display.width()
                > self.outer.width() - if sb.vertical { self.scrollbar_width } else { 0.0 };
            let vertical = display.height()
                > self.outer.height() - if sb.horizontal { self.scrollbar_width } else { 0.0 };
            let next = Scrollbars {
                horizontal,
                vertical,
            };
            if next == sb {
                return sb;
            }
            sb = next;
        }
    }

    /// The inner size available to the content: outer size minus whichever
    /// scrollbars are present.
    pub fn client_size(&self, display: SizeD) -> SizeD {
        let sb = self.scrollbars(display);
        let width = self.outer.width() - if sb.vertical { self.scrollbar_width } else { 0.0 };
        let height = self.outer.height() - if sb.horizontal { self.scrollbar_width } else { 0.0 };
        SizeD::new(width.max(0.0), height.max(0.0))
    }

    /// The maximum scroll offset for the given displayed content size.
    /// Zero on an axis where the content fits.
    pub fn max_scroll(&self, display: SizeD) -> VectorD {
        let client = self.client_size(display);
        VectorD::new(
            (display.width() - client.width()).max(0.0),
            (display.height() - client.height()).max(0.0),
        )
    }

    /// Sets the scroll offset, clamped to the valid range for the given
    /// displayed content size. Mirrors how a DOM element clamps assignments
    /// to `scrollLeft`/`scrollTop`.
    pub fn set_scroll(&mut self, scroll: VectorD, display: SizeD) {
        let max = self.max_scroll(display);
        self.scroll = VectorD::new(
            scroll.x().clamp(0.0, max.x()),
            scroll.y().clamp(0.0, max.y()),
        );
    }

    /// Moves the scroll offset by a delta, clamped like `set_scroll`.
    pub fn scroll_by(&mut self, delta: VectorD, display: SizeD) {
        self.set_scroll(self.scroll + delta, display);
    }

    /// The content-space point currently shown at the center of the client
    /// area.
    ///
    /// On an axis where the content does not overflow the container there is
    /// no scrolling and the content midpoint is reported instead. This is
    /// the "save" half of the zoom coordinate preservation.
    pub fn visible_center(&self, content: &Content, zoom: f64) -> VectorD {
        let natural = content.natural_size();
        let display = content.display_size(zoom);
        let client = self.client_size(display);
        let x = if display.width() > self.outer.width() {
            (self.scroll.x() + client.width() / 2.0) / zoom
        } else {
            natural.width() / 2.0
        };
        let y = if display.height() > self.outer.height() {
            (self.scroll.y() + client.height() / 2.0) / zoom
        } else {
            natural.height() / 2.0
        };
        VectorD::new(x, y)
    }

    /// Scrolls so the given content-space point lands at the center of the
    /// client area, per axis, on axes where the content overflows. The
    /// "restore" half of the zoom coordinate preservation.
    pub fn center_on(&mut self, point: VectorD, content: &Content, zoom: f64) {
        let display = content.display_size(zoom);
        let client = self.client_size(display);
        let x = if display.width() > self.outer.width() {
            point.x() * zoom - client.width() / 2.0
        } else {
            self.scroll.x()
        };
        let y = if display.height() > self.outer.height() {
            point.y() * zoom - client.height() / 2.0
        } else {
            self.scroll.y()
        };
        self.set_scroll(VectorD::new(x, y), display);
    }

    /// The part of the content visible through the client area, in content
    /// coordinates. Useful for partial redraws.
    pub fn visible_rect(&self, content: &Content, zoom: f64) -> RectD {
        let display = content.display_size(zoom);
        let client = self.client_size(display);
        let window = RectD::new(
            self.scroll.x(),
            self.scroll.y(),
            self.scroll.x() + client.width(),
            self.scroll.y() + client.height(),
        )
        .scale(1.0 / zoom);
        RectD::new_from_size(content.natural_size()).intersect(&window)
    }
}
