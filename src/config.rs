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

use std::{
    fs::{create_dir_all, File},
    io::{BufWriter, Result, Write},
    path::PathBuf,
    sync::OnceLock,
};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::view::zoom::{DEFAULT_MAX_ZOOM, ZOOM_MULTIPLIER};
use crate::view::ZoomMode;

/// Conventional scrollbar thickness when the embedder has not probed one.
const DEFAULT_SCROLLBAR_WIDTH: f64 = 16.0;

/// Tool configuration: interaction parameters, not view state.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Settings {
    /// Multiplier applied per keyboard or wheel zoom step
    pub zoom_step: f64,
    /// Upper bound for the zoom factor
    pub max_zoom: f64,
    /// Scrollbar thickness used by the fit-width/fit-height compensation
    pub scrollbar_width: f64,
    /// Zoom mode applied when a view is created
    pub default_mode: ZoomMode,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            zoom_step: ZOOM_MULTIPLIER,
            max_zoom: DEFAULT_MAX_ZOOM,
            scrollbar_width: DEFAULT_SCROLLBAR_WIDTH,
            default_mode: ZoomMode::FitSize,
        }
    }
}

impl Settings {
    fn config_dir() -> PathBuf {
        let mut dir = dirs::config_dir().unwrap_or_default();
        dir.push("zoomview");
        dir
    }

    fn config_file() -> PathBuf {
        Self::config_dir().join("zoomview.json")
    }

    pub fn save(&self) -> Result<()> {
        create_dir_all(Self::config_dir())?;
        let file = File::create(Self::config_file())?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)?;
        writer.flush()?;
        Ok(())
    }
}

fn read_settings() -> Result<Settings> {
    let file = File::open(Settings::config_file())?;
    let settings: Settings = serde_json::from_reader(file)?;
    debug!("loaded settings {settings:?}");
    Ok(settings)
}

/// Process-wide settings, read once from the platform config dir. A default
/// file is written on first run.
pub fn settings<'a>() -> &'a Settings {
    static SETTINGS: OnceLock<Settings> = OnceLock::new();
    SETTINGS.get_or_init(|| {
        read_settings().unwrap_or_else(|_| {
            let settings = Settings::default();
            match settings.save() {
                Ok(_) => debug!(
                    "saved default settings to {:?}",
                    Settings::config_file()
                ),
                Err(e) => warn!(
                    "failed to save default settings to {:?}: {e}",
                    Settings::config_file()
                ),
            }
            settings
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.zoom_step, ZOOM_MULTIPLIER);
        assert_eq!(settings.max_zoom, DEFAULT_MAX_ZOOM);
        assert_eq!(settings.scrollbar_width, DEFAULT_SCROLLBAR_WIDTH);
        assert_eq!(settings.default_mode, ZoomMode::FitSize);
    }

    #[test]
    fn test_settings_json_shape() {
        let json = serde_json::to_string(&Settings::default()).unwrap();
        // Modes serialize as the lowercase names also accepted by TryFrom
        assert!(json.contains("\"fitsize\""));

        let parsed: Settings = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed.default_mode, ZoomMode::FitSize);
        assert_eq!(parsed.max_zoom, DEFAULT_MAX_ZOOM);
    }
}
