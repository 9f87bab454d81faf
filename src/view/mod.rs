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

pub mod zoom;

use log::debug;

use crate::{
    config::Settings,
    content::Content,
    input::{Cursor, DragState, Key, Modifiers},
    rect::{RectD, SizeD, VectorD},
    viewport::{Scrollbars, Viewport},
};

pub use zoom::{Zoom, ZoomMode, ZoomState};

/// Everything a renderer needs to place the image: the scaled content size,
/// per-axis centering flags for content smaller than the container,
/// scrollbar presence, the clamped scroll offset and the pointer cursor.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub display_size: SizeD,
    pub center_h: bool,
    pub center_v: bool,
    pub scrollbars: Scrollbars,
    pub scroll: VectorD,
    pub cursor: Cursor,
}

/// The viewer state machine: one content in one viewport, plus the zoom
/// factor, zoom mode and drag-pan state.
///
/// All interaction funnels through the handler methods. Manual zoom changes
/// preserve the content point at the center of the visible area; fit modes
/// recompute the factor from the container, also on resize.
#[derive(Debug, Clone)]
pub struct ImageView {
    content: Content,
    viewport: Viewport,
    zoom: Zoom,
    mode: ZoomMode,
    zoom_step: f64,
    drag: Option<DragState>,
}

impl ImageView {
    /// Creates a view with default settings and applies the default zoom
    /// mode immediately.
    pub fn new(content: Content, viewport: Viewport) -> Self {
        Self::with_settings(content, viewport, &Settings::default())
    }

    pub fn with_settings(content: Content, viewport: Viewport, settings: &Settings) -> Self {
        let mut view = Self {
            content,
            viewport,
            zoom: Zoom::with_max_factor(settings.max_zoom),
            mode: settings.default_mode,
            zoom_step: settings.zoom_step,
            drag: None,
        };
        view.apply_mode(settings.default_mode);
        view
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn zoom_factor(&self) -> f64 {
        self.zoom.factor()
    }

    pub fn zoom_mode(&self) -> ZoomMode {
        self.mode
    }

    pub fn zoom_state(&self) -> ZoomState {
        self.zoom.state()
    }

    pub fn max_zoom(&self) -> f64 {
        self.zoom.max_factor()
    }

    pub fn scroll(&self) -> VectorD {
        self.viewport.scroll()
    }

    /// Sets the scroll offset directly, clamped to the scrollable range.
    pub fn set_scroll(&mut self, scroll: VectorD) {
        let display = self.content.display_size(self.zoom.factor());
        self.viewport.set_scroll(scroll, display);
    }

    /// Sets the zoom factor directly.
    ///
    /// This is the path every keyboard and wheel zoom takes: the content
    /// point at the center of the visible area is saved, the mode switches
    /// to manual, the factor is constrained, and the saved point is scrolled
    /// back to the center.
    pub fn set_zoom_factor(&mut self, factor: f64) {
        let center = self.viewport.visible_center(&self.content, self.zoom.factor());
        self.mode = ZoomMode::Manual;
        self.zoom.set_factor(factor);
        self.zoom.clamp(&self.content);
        self.viewport.center_on(center, &self.content, self.zoom.factor());
    }

    /// Sets the zoom upper bound, re-constraining the current factor through
    /// the same center-preserving path.
    pub fn set_max_zoom(&mut self, max_zoom: f64) {
        let center = self.viewport.visible_center(&self.content, self.zoom.factor());
        self.zoom.set_max_factor(max_zoom);
        self.zoom.clamp(&self.content);
        self.viewport.center_on(center, &self.content, self.zoom.factor());
    }

    /// Switches the zoom mode. Fit modes take effect immediately; manual
    /// keeps the current factor.
    pub fn set_zoom_mode(&mut self, mode: ZoomMode) {
        debug!("zoom mode {:?} -> {:?}", self.mode, mode);
        self.apply_mode(mode);
    }

    /// Scales to fit the whole image inside the container.
    pub fn fit_size(&mut self) {
        self.apply_mode(ZoomMode::FitSize);
    }

    /// Scales to span the container width.
    pub fn fit_width(&mut self) {
        self.apply_mode(ZoomMode::FitWidth);
    }

    /// Scales to span the container height.
    pub fn fit_height(&mut self) {
        self.apply_mode(ZoomMode::FitHeight);
    }

    fn apply_mode(&mut self, mode: ZoomMode) {
        self.mode = mode;
        let outer = self.viewport.outer_size();
        let scrollbar_width = self.viewport.scrollbar_width();
        match mode {
            ZoomMode::Manual => {}
            ZoomMode::FitSize => self.zoom.fit_size(&self.content, outer),
            ZoomMode::FitWidth => self.zoom.fit_width(&self.content, outer, scrollbar_width),
            ZoomMode::FitHeight => self.zoom.fit_height(&self.content, outer, scrollbar_width),
        }
        self.clamp_scroll();
    }

    fn clamp_scroll(&mut self) {
        let display = self.content.display_size(self.zoom.factor());
        self.viewport.set_scroll(self.viewport.scroll(), display);
    }

    /// Handles a key press. Returns whether the key was consumed.
    ///
    /// Plus/minus step the zoom, divide resets to original size, multiply
    /// returns to fit-size mode. Held modifiers leave the key to the
    /// embedder.
    pub fn handle_key(&mut self, key: Key, modifiers: Modifiers) -> bool {
        if modifiers.any() {
            return false;
        }
        match key {
            Key::NumpadAdd => {
                self.set_zoom_factor(self.zoom.stepped_in(self.zoom_step));
                true
            }
            Key::NumpadSubtract => {
                self.set_zoom_factor(self.zoom.stepped_out(self.zoom_step));
                true
            }
            Key::NumpadDivide => {
                self.set_zoom_factor(1.0);
                true
            }
            Key::NumpadMultiply => {
                self.set_zoom_mode(ZoomMode::FitSize);
                true
            }
            Key::Other => false,
        }
    }

    /// Handles a wheel event. Scrolling away zooms out, towards zooms in.
    /// Always consumed; the embedder should suppress its native scrolling.
    pub fn handle_wheel(&mut self, delta_y: f64) -> bool {
        let factor = if delta_y >= 0.0 {
            self.zoom.stepped_out(self.zoom_step)
        } else {
            self.zoom.stepped_in(self.zoom_step)
        };
        self.set_zoom_factor(factor);
        true
    }

    /// Starts a pan gesture at the given pointer position (screen
    /// coordinates). Ignored when the image fits entirely.
    pub fn button_press(&mut self, position: VectorD) {
        if self.drag.is_none() && self.is_pannable() {
            self.drag = Some(DragState {
                pointer_origin: position,
                scroll_origin: self.viewport.scroll(),
            });
        }
    }

    /// Continues a pan gesture. The image follows the pointer: scroll moves
    /// opposite to the pointer delta, clamped to the scrollable range.
    /// Returns whether a drag was in progress.
    pub fn motion(&mut self, position: VectorD) -> bool {
        if let Some(drag) = self.drag {
            let delta = position - drag.pointer_origin;
            let display = self.content.display_size(self.zoom.factor());
            self.viewport
                .set_scroll(drag.scroll_origin - delta, display);
            true
        } else {
            false
        }
    }

    /// Ends a pan gesture.
    pub fn button_release(&mut self) {
        self.drag = None;
    }

    /// The pointer left the widget; an active gesture ends.
    pub fn pointer_leave(&mut self) {
        self.drag = None;
    }

    /// Container resize: fit modes recompute the factor, manual mode keeps
    /// it and only re-clamps the scroll offset.
    pub fn resize(&mut self, outer: SizeD) {
        debug!(
            "resize to {}x{} in {:?}",
            outer.width(),
            outer.height(),
            self.mode
        );
        self.viewport.set_outer_size(outer);
        match self.mode {
            ZoomMode::Manual => self.clamp_scroll(),
            mode => self.apply_mode(mode),
        }
    }

    /// True when the image overflows the container on either axis.
    pub fn is_pannable(&self) -> bool {
        let display = self.content.display_size(self.zoom.factor());
        let outer = self.viewport.outer_size();
        display.width() > outer.width() || display.height() > outer.height()
    }

    /// The cursor the embedder should show: default when the image fits,
    /// grab when it can be dragged, grabbing during a drag.
    pub fn cursor(&self) -> Cursor {
        if !self.is_pannable() {
            Cursor::Default
        } else if self.drag.is_some() {
            Cursor::Grabbing
        } else {
            Cursor::Grab
        }
    }

    /// The part of the content visible through the client area, in content
    /// coordinates.
    pub fn visible_rect(&self) -> RectD {
        self.viewport.visible_rect(&self.content, self.zoom.factor())
    }

    /// Snapshot of the geometry for rendering.
    pub fn layout(&self) -> Layout {
        let display = self.content.display_size(self.zoom.factor());
        let outer = self.viewport.outer_size();
        Layout {
            display_size: display,
            center_h: display.width() < outer.width(),
            center_v: display.height() < outer.height(),
            scrollbars: self.viewport.scrollbars(display),
            scroll: self.viewport.scroll(),
            cursor: self.cursor(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SBW: f64 = 16.0;

    fn view(width: f64, height: f64) -> ImageView {
        let content = Content::new(width, height).unwrap();
        let viewport = Viewport::new(SizeD::new(400.0, 300.0), SBW);
        ImageView::new(content, viewport)
    }

    fn approx_eq(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_new_applies_fit_size() {
        let view = view(1000.0, 800.0);
        assert_eq!(view.zoom_mode(), ZoomMode::FitSize);
        // min(400/1000, 300/800)
        assert_eq!(view.zoom_factor(), 0.375);
        assert_eq!(view.scroll(), VectorD::new(0.0, 0.0));
    }

    #[test]
    fn test_set_zoom_factor_switches_to_manual() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);
        assert_eq!(view.zoom_mode(), ZoomMode::Manual);
        assert_eq!(view.zoom_factor(), 2.0);
    }

    #[test]
    fn test_set_zoom_factor_preserves_center() {
        let mut view = view(1000.0, 800.0);
        // Fitted image does not overflow: the center is the content midpoint
        let before = view.viewport().visible_center(
            &Content::new(1000.0, 800.0).unwrap(),
            view.zoom_factor(),
        );
        assert_eq!(before, VectorD::new(500.0, 400.0));

        view.set_zoom_factor(2.0);

        let after = view
            .viewport()
            .visible_center(&Content::new(1000.0, 800.0).unwrap(), 2.0);
        assert!(approx_eq(after.x(), 500.0, 1e-9));
        assert!(approx_eq(after.y(), 400.0, 1e-9));
        // Client is 384x284 with both scrollbars at zoom 2
        assert_eq!(view.scroll(), VectorD::new(808.0, 658.0));
    }

    #[test]
    fn test_repeated_zoom_keeps_center() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);
        view.set_zoom_factor(3.0);
        view.set_zoom_factor(1.5);
        let after = view
            .viewport()
            .visible_center(&Content::new(1000.0, 800.0).unwrap(), 1.5);
        assert!(approx_eq(after.x(), 500.0, 1e-9));
        assert!(approx_eq(after.y(), 400.0, 1e-9));
    }

    #[test]
    fn test_set_zoom_factor_clamps() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(100.0);
        assert_eq!(view.zoom_factor(), zoom::DEFAULT_MAX_ZOOM);

        view.set_zoom_factor(0.01);
        // 100 px minimum on the smaller natural axis (800)
        assert_eq!(view.zoom_factor(), 0.125);
    }

    #[test]
    fn test_set_max_zoom_snaps_current_factor() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(8.0);
        view.set_max_zoom(4.0);
        assert_eq!(view.zoom_factor(), 4.0);
        // Mode is untouched by the limit change
        assert_eq!(view.zoom_mode(), ZoomMode::Manual);
    }

    #[test]
    fn test_handle_key_zoom_steps() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);

        assert!(view.handle_key(Key::NumpadAdd, Modifiers::NONE));
        assert!(approx_eq(view.zoom_factor(), 2.2, 1e-12));

        assert!(view.handle_key(Key::NumpadSubtract, Modifiers::NONE));
        assert!(approx_eq(view.zoom_factor(), 2.0, 1e-12));
    }

    #[test]
    fn test_handle_key_reset_and_refit() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);

        assert!(view.handle_key(Key::NumpadDivide, Modifiers::NONE));
        assert_eq!(view.zoom_factor(), 1.0);
        assert_eq!(view.zoom_mode(), ZoomMode::Manual);

        assert!(view.handle_key(Key::NumpadMultiply, Modifiers::NONE));
        assert_eq!(view.zoom_mode(), ZoomMode::FitSize);
        assert_eq!(view.zoom_factor(), 0.375);
    }

    #[test]
    fn test_handle_key_ignores_modifiers_and_other_keys() {
        let mut view = view(1000.0, 800.0);
        let factor = view.zoom_factor();

        let ctrl = Modifiers {
            ctrl: true,
            ..Modifiers::NONE
        };
        assert!(!view.handle_key(Key::NumpadAdd, ctrl));
        assert_eq!(view.zoom_factor(), factor);

        assert!(!view.handle_key(Key::Other, Modifiers::NONE));
        assert_eq!(view.zoom_factor(), factor);
    }

    #[test]
    fn test_handle_wheel() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);

        assert!(view.handle_wheel(-1.0));
        assert!(approx_eq(view.zoom_factor(), 2.2, 1e-12));

        assert!(view.handle_wheel(1.0));
        assert!(approx_eq(view.zoom_factor(), 2.0, 1e-12));

        // Zero delta counts as scrolling away
        assert!(view.handle_wheel(0.0));
        assert!(approx_eq(view.zoom_factor(), 2.0 / 1.1, 1e-12));
    }

    #[test]
    fn test_drag_pans_against_pointer() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);
        assert_eq!(view.scroll(), VectorD::new(808.0, 658.0));

        view.button_press(VectorD::new(100.0, 100.0));
        assert_eq!(view.cursor(), Cursor::Grabbing);

        assert!(view.motion(VectorD::new(90.0, 80.0)));
        assert_eq!(view.scroll(), VectorD::new(818.0, 678.0));

        assert!(view.motion(VectorD::new(600.0, 600.0)));
        assert_eq!(view.scroll(), VectorD::new(308.0, 158.0));

        view.button_release();
        assert_eq!(view.cursor(), Cursor::Grab);
        assert!(!view.motion(VectorD::new(0.0, 0.0)));
    }

    #[test]
    fn test_drag_clamps_at_range_but_keeps_origin() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);
        view.set_scroll(VectorD::new(0.0, 0.0));

        view.button_press(VectorD::new(100.0, 100.0));
        // Dragging down-right pushes scroll negative: clamped
        view.motion(VectorD::new(150.0, 150.0));
        assert_eq!(view.scroll(), VectorD::new(0.0, 0.0));
        // Coming back re-enters the range smoothly from the origin
        view.motion(VectorD::new(80.0, 90.0));
        assert_eq!(view.scroll(), VectorD::new(20.0, 10.0));
    }

    #[test]
    fn test_press_ignored_when_image_fits() {
        let mut view = view(1000.0, 800.0);
        assert!(!view.is_pannable());
        assert_eq!(view.cursor(), Cursor::Default);

        view.button_press(VectorD::new(10.0, 10.0));
        assert_eq!(view.cursor(), Cursor::Default);
        assert!(!view.motion(VectorD::new(50.0, 50.0)));
    }

    #[test]
    fn test_pointer_leave_ends_drag() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);
        view.button_press(VectorD::new(100.0, 100.0));
        view.pointer_leave();
        assert!(!view.motion(VectorD::new(0.0, 0.0)));
        assert_eq!(view.cursor(), Cursor::Grab);
    }

    #[test]
    fn test_resize_refits_in_fit_modes() {
        let mut view = view(1000.0, 800.0);
        assert_eq!(view.zoom_factor(), 0.375);

        view.resize(SizeD::new(800.0, 600.0));
        assert_eq!(view.zoom_mode(), ZoomMode::FitSize);
        assert_eq!(view.zoom_factor(), 0.75);
    }

    #[test]
    fn test_resize_keeps_manual_factor() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);
        let factor = view.zoom_factor();

        view.resize(SizeD::new(2200.0, 1700.0));
        assert_eq!(view.zoom_factor(), factor);
        // Content 2000x1600 now fits: scroll clamps to zero
        assert_eq!(view.scroll(), VectorD::new(0.0, 0.0));
    }

    #[test]
    fn test_fit_width_mode_follows_resize() {
        let mut view = view(1000.0, 2000.0);
        view.fit_width();
        assert_eq!(view.zoom_mode(), ZoomMode::FitWidth);
        // 400/1000 shaved by one scrollbar
        assert!(approx_eq(view.zoom_factor(), 0.384, 1e-12));

        view.resize(SizeD::new(500.0, 300.0));
        assert!(approx_eq(view.zoom_factor(), 0.484, 1e-12));
    }

    #[test]
    fn test_layout_centered_small_image() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(1.0);
        // Grow the container past the display size
        view.resize(SizeD::new(1200.0, 900.0));
        let layout = view.layout();
        assert!(layout.center_h);
        assert!(layout.center_v);
        assert!(!layout.scrollbars.any());
        assert_eq!(layout.cursor, Cursor::Default);
        assert_eq!(layout.display_size, SizeD::new(1000.0, 800.0));
    }

    #[test]
    fn test_layout_overflowing_image() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);
        let layout = view.layout();
        assert!(!layout.center_h);
        assert!(!layout.center_v);
        assert!(layout.scrollbars.horizontal);
        assert!(layout.scrollbars.vertical);
        assert_eq!(layout.cursor, Cursor::Grab);
        assert_eq!(layout.display_size, SizeD::new(2000.0, 1600.0));
    }

    #[test]
    fn test_visible_rect_tracks_zoom_and_scroll() {
        let mut view = view(1000.0, 800.0);
        view.set_zoom_factor(2.0);
        view.set_scroll(VectorD::new(200.0, 100.0));
        let rect = view.visible_rect();
        assert_eq!(rect, RectD::new(100.0, 50.0, 292.0, 192.0));
    }
}
