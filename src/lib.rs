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

//! Zoom and pan core for interactive image viewers.
//!
//! One image inside one scrollable container: fit-to-container modes,
//! stepped zooming that keeps the visible center stationary, and click-drag
//! panning. The crate holds the geometry and the state machine only; event
//! sources and rendering belong to the embedder.

pub mod config;
pub mod content;
pub mod error;
pub mod input;
pub mod rect;
pub mod view;
pub mod viewport;

pub use config::{settings, Settings};
pub use content::Content;
pub use error::{Error, Result};
pub use input::{Cursor, Key, Modifiers};
pub use rect::{RectD, SizeD, VectorD};
pub use view::{ImageView, Layout, Zoom, ZoomMode, ZoomState};
pub use viewport::{Scrollbars, Viewport};
