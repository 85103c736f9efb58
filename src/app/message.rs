// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::SliderConfig;
use crate::domain::reveal::SlideMode;
use crate::error::Error;
use crate::media::{ImageData, Side};
use crate::ui::reveal;
use std::ffi::OsString;
use std::path::PathBuf;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Reveal(reveal::Message),
    /// One image of the pair finished decoding.
    ImageLoaded {
        side: Side,
        result: Result<ImageData, Error>,
    },
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed from the command line when launching the app.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Foreground image, revealed left of the divider.
    pub before: Option<PathBuf>,
    /// Background image.
    pub after: Option<PathBuf>,
    /// Optional config directory override.
    pub config_dir: Option<String>,
    pub slide_mode: Option<SlideMode>,
    pub autoplay_duration_ms: Option<u64>,
    pub initial_percentage: Option<f32>,
    pub hide_handlebar: bool,
}

/// Usage text printed for `--help` and on argument errors.
pub const USAGE: &str = "\
Usage: iced_reveal [OPTIONS] <BEFORE> <AFTER>

Arguments:
  <BEFORE>  Image shown left of the divider
  <AFTER>   Image shown right of the divider

Options:
  --lang <LOCALE>         Interface language (e.g. en-US, fr)
  --mode <MODE>           hover, click, or drag
  --autoplay-ms <MS>      Advance the divider every MS milliseconds (0 disables)
  --initial <PERCENT>     Starting divider position (0 to 100)
  --no-handlebar          Hide the round handle on the divider
  --config-dir <PATH>     Read settings.toml from PATH
  -h, --help              Print this help
";

impl Flags {
    /// Parses flags from raw arguments (program name already stripped).
    ///
    /// # Errors
    ///
    /// Returns a human-readable message for malformed values, unknown options,
    /// or a wrong number of image paths.
    pub fn from_args(mut args: pico_args::Arguments) -> Result<Self, String> {
        let lang = args
            .opt_value_from_str("--lang")
            .map_err(|e| e.to_string())?;
        let slide_mode = args
            .opt_value_from_fn("--mode", str::parse::<SlideMode>)
            .map_err(|e| e.to_string())?;
        let autoplay_duration_ms = args
            .opt_value_from_str("--autoplay-ms")
            .map_err(|e| e.to_string())?;
        let initial_percentage = args
            .opt_value_from_str("--initial")
            .map_err(|e| e.to_string())?;
        let config_dir = args
            .opt_value_from_str("--config-dir")
            .map_err(|e| e.to_string())?;
        let hide_handlebar = args.contains("--no-handlebar");

        let rest = args.finish();
        if let Some(unknown) = rest
            .iter()
            .filter_map(|arg| arg.to_str())
            .find(|arg| arg.starts_with('-'))
        {
            return Err(format!("unknown option: {unknown}"));
        }

        let [before, after]: [OsString; 2] = rest
            .try_into()
            .map_err(|rest: Vec<OsString>| format!("expected 2 image paths, got {}", rest.len()))?;

        Ok(Self {
            lang,
            before: Some(PathBuf::from(before)),
            after: Some(PathBuf::from(after)),
            config_dir,
            slide_mode,
            autoplay_duration_ms,
            initial_percentage,
            hide_handlebar,
        })
    }

    /// Applies command-line overrides on top of persisted slider settings.
    pub fn apply_to(&self, slider: &mut SliderConfig) {
        if let Some(mode) = self.slide_mode {
            slider.slide_mode = mode;
        }
        if let Some(ms) = self.autoplay_duration_ms {
            slider.autoplay_duration_ms = ms;
        }
        if let Some(percent) = self.initial_percentage {
            slider.initial_percentage = percent;
        }
        if self.hide_handlebar {
            slider.show_handlebar = false;
        }
    }
}
