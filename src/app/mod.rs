// SPDX-License-Identifier: MPL-2.0
//! Application root state.
//!
//! The `App` struct wires the comparison slider to localization, persisted
//! preferences, and image loading, and translates messages into side effects.

mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message, USAGE};

use crate::config::{self, Config};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{self, ImageData, Side};
use crate::ui::reveal::{self, RevealConfig};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    reveal: reveal::State,
    before: Option<ImageData>,
    after: Option<ImageData>,
    load_errors: Vec<(Side, Error)>,
    /// i18n key of a warning raised while reading settings.
    config_warning: Option<String>,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("percent", &self.reveal.percent())
            .field("has_before", &self.before.is_some())
            .field("has_after", &self.after.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 600;
pub const WINDOW_DEFAULT_WIDTH: u32 = 800;
pub const MIN_WINDOW_HEIGHT: u32 = 240;
pub const MIN_WINDOW_WIDTH: u32 = 320;

/// Builds the window settings.
///
/// Close requests are routed through [`Message::WindowCloseRequested`] so
/// the slider can release its listeners before the app exits.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires an Fn boot closure; flags are consumed once
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings from disk, then builds the app and its image tasks.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        Self::with_config(flags, config, config_warning)
    }

    /// Builds the app from already-loaded settings.
    pub fn with_config(
        flags: Flags,
        mut config: Config,
        config_warning: Option<String>,
    ) -> (Self, Task<Message>) {
        let i18n = I18n::new(flags.lang.clone(), &config);
        flags.apply_to(&mut config.slider);

        let reveal_config = RevealConfig::from(&config.slider);
        tracing::info!(
            mode = %reveal_config.slide_mode,
            initial = reveal_config.initial_percentage.value(),
            autoplay_ms = reveal_config.autoplay_duration_ms,
            "starting comparison"
        );

        let app = App {
            i18n,
            reveal: reveal::State::new(&reveal_config),
            before: None,
            after: None,
            load_errors: Vec::new(),
            config_warning,
            theme_mode: config.general.theme_mode,
        };

        let tasks = [(Side::Before, flags.before), (Side::After, flags.after)]
            .into_iter()
            .filter_map(|(side, path)| path.map(|path| load_side(side, path)));

        (app, Task::batch(tasks))
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        self.theme_mode.to_iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_subscription(&self.reveal)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Reveal(msg) => {
                match self.reveal.update(msg) {
                    reveal::Effect::PercentChanged(percent) => {
                        tracing::trace!(percent = percent.value(), "divider moved");
                    }
                    reveal::Effect::DragStarted => tracing::debug!("drag started"),
                    reveal::Effect::DragEnded => tracing::debug!("drag ended"),
                    reveal::Effect::None => {}
                }
                Task::none()
            }
            Message::ImageLoaded { side, result } => {
                match result {
                    Ok(data) => {
                        tracing::debug!(?side, width = data.width, height = data.height, "image loaded");
                        match side {
                            Side::Before => self.before = Some(data),
                            Side::After => self.after = Some(data),
                        }
                    }
                    Err(err) => {
                        tracing::warn!(?side, "failed to load image: {err}");
                        self.load_errors.push((side, err));
                    }
                }
                Task::none()
            }
            Message::WindowCloseRequested(id) => {
                tracing::debug!(?id, "close requested");
                self.reveal.unmount();
                iced::exit()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            reveal: &self.reveal,
            before: self.before.as_ref(),
            after: self.after.as_ref(),
            load_errors: &self.load_errors,
            config_warning: self.config_warning.as_deref(),
            is_dark_theme: self.theme_mode.is_dark(),
        })
    }

    /// Slider state, for inspection by the host and tests.
    #[must_use]
    pub fn reveal(&self) -> &reveal::State {
        &self.reveal
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.before.is_some() && self.after.is_some() && self.load_errors.is_empty()
    }

    #[must_use]
    pub fn load_errors(&self) -> &[(Side, Error)] {
        &self.load_errors
    }
}

fn load_side(side: Side, path: std::path::PathBuf) -> Task<Message> {
    Task::perform(media::load_image_async(path), move |result| {
        Message::ImageLoaded { side, result }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::reveal::SlideMode;
    use crate::error::ImageError;
    use iced::{Point, Rectangle, Size};

    fn app(flags: Flags) -> App {
        let mut config = Config::default();
        config.general.language = Some("en-US".to_string());
        App::with_config(flags, config, None).0
    }

    fn pixel() -> ImageData {
        ImageData::from_rgba(1, 1, vec![0, 0, 0, 255])
    }

    #[test]
    fn flags_override_persisted_slider_settings() {
        let app = app(Flags {
            slide_mode: Some(SlideMode::Hover),
            initial_percentage: Some(20.0),
            ..Flags::default()
        });
        assert_eq!(app.reveal().mode(), SlideMode::Hover);
        assert_eq!(app.reveal().percent().value(), 20.0);
    }

    #[test]
    fn ready_once_both_images_arrive() {
        let mut app = app(Flags::default());
        assert!(!app.is_ready());

        let _ = app.update(Message::ImageLoaded {
            side: Side::Before,
            result: Ok(pixel()),
        });
        assert!(!app.is_ready());

        let _ = app.update(Message::ImageLoaded {
            side: Side::After,
            result: Ok(pixel()),
        });
        assert!(app.is_ready());
    }

    #[test]
    fn failed_load_is_recorded() {
        let mut app = app(Flags::default());
        let _ = app.update(Message::ImageLoaded {
            side: Side::After,
            result: Err(Error::Image(ImageError::Empty)),
        });
        assert_eq!(app.load_errors().len(), 1);
        assert_eq!(app.load_errors()[0].0, Side::After);
        assert!(!app.is_ready());
    }

    #[test]
    fn reveal_messages_reach_slider() {
        let mut app = app(Flags {
            slide_mode: Some(SlideMode::Hover),
            ..Flags::default()
        });
        let _ = app.update(Message::Reveal(reveal::Message::Pointer {
            bounds: Rectangle::new(Point::ORIGIN, Size::new(200.0, 100.0)),
            input: reveal::RawPointer::MouseMove { x: 150.0 },
        }));
        assert_eq!(app.reveal().percent().value(), 75.0);
    }

    #[test]
    fn close_request_unmounts_slider() {
        let mut app = app(Flags::default());
        let _ = app.update(Message::WindowCloseRequested(window::Id::unique()));
        assert!(!app.reveal().is_mounted());
        assert!(!app.reveal().listeners_attached());
    }

    #[test]
    fn theme_follows_config() {
        let mut config = Config::default();
        config.general.theme_mode = ThemeMode::Light;
        let (app, _) = App::with_config(Flags::default(), config, None);
        assert_eq!(app.theme(), Theme::Light);
    }

    #[test]
    fn title_is_localized() {
        let app = app(Flags::default());
        assert_eq!(app.title(), "IcedReveal");
    }
}
