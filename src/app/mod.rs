// SPDX-License-Identifier: MPL-2.0
//! Host application demonstrating the range slider.
//!
//! The `App` struct owns the two slider values and stores whatever the
//! slider reports through [`Message::RangeChanged`]. Range, initial selection,
//! language and theme come from `settings.toml` (see [`config`]).

pub mod config;
pub mod i18n;
mod message;
pub mod paths;
mod update;
mod view;

pub use message::{Flags, Message};
pub use view::format_value;

use crate::domain::slider::{CrossingPolicy, RangeValues, SliderRange};
use i18n::fluent::I18n;
use iced::{window, Element, Task, Theme};
use std::fmt;

/// Root Iced application state: the slider's range and the values it edits.
pub struct App {
    pub i18n: I18n,
    range: SliderRange,
    values: RangeValues,
    crossing: CrossingPolicy,
    theme: Theme,
    /// i18n key of a configuration warning to show above the slider.
    notice: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("range", &self.range)
            .field("values", &self.values)
            .field("crossing", &self.crossing)
            .field("notice", &self.notice)
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: f32 = 520.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 280.0;
pub const MIN_WINDOW_WIDTH: f32 = 320.0;
pub const MIN_WINDOW_HEIGHT: f32 = 240.0;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced requires an `Fn` boot closure; the flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self::from_config(None, config::Config::default(), None)
    }
}

impl App {
    /// Loads the configuration and builds the initial state.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, warning) = config::load();
        (Self::from_config(flags.lang, config, warning), Task::none())
    }

    /// Builds the state from an already loaded configuration.
    ///
    /// `warning` is the i18n key returned by [`config::load`], shown as a notice.
    #[must_use]
    pub fn from_config(lang: Option<String>, config: config::Config, warning: Option<String>) -> Self {
        let i18n = I18n::new(lang, &config);
        let range = config.slider.range().unwrap_or_default();
        let values = config.slider.initial_values(&range);
        tracing::info!(
            min = range.min(),
            max = range.max(),
            lower = values.lower,
            upper = values.upper,
            "range slider ready"
        );

        Self {
            i18n,
            range,
            values,
            crossing: config.slider.crossing.into(),
            theme: config.general.theme_mode.iced_theme(),
            notice: warning,
        }
    }

    #[must_use]
    pub fn range(&self) -> SliderRange {
        self.range
    }

    #[must_use]
    pub fn values(&self) -> RangeValues {
        self.values
    }

    #[must_use]
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    #[must_use]
    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme.clone()
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            range: self.range,
            values: self.values,
            crossing: self.crossing,
            notice: self.notice.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theming::ThemeMode;

    fn english_app(config: config::Config) -> App {
        App::from_config(Some("en-US".to_string()), config, None)
    }

    #[test]
    fn default_app_starts_with_reference_selection() {
        let app = english_app(config::Config::default());
        assert_eq!(app.range(), SliderRange::default());
        assert_eq!(app.values(), RangeValues::new(0.0, 50.0));
        assert!(app.notice().is_none());
    }

    #[test]
    fn title_shows_app_name() {
        let app = english_app(config::Config::default());
        assert_eq!(app.title(), "Range Slider");
    }

    #[test]
    fn range_changed_stores_reported_values() {
        let mut app = english_app(config::Config::default());
        let _ = app.update(Message::RangeChanged(RangeValues::new(10.0, 75.0)));
        assert_eq!(app.values(), RangeValues::new(10.0, 75.0));

        let _ = app.update(Message::RangeReleased);
        assert_eq!(app.values(), RangeValues::new(10.0, 75.0));
    }

    #[test]
    fn config_values_are_clamped_into_range() {
        let mut config = config::Config::default();
        config.slider.lower = -30.0;
        config.slider.upper = 130.0;
        let app = english_app(config);
        assert_eq!(app.values(), RangeValues::new(0.0, 100.0));
    }

    #[test]
    fn invalid_config_range_falls_back_to_default() {
        let mut config = config::Config::default();
        config.slider.min = 10.0;
        config.slider.max = 10.0;
        let app = english_app(config);
        assert_eq!(app.range(), SliderRange::default());
    }

    #[test]
    fn warning_is_shown_until_dismissed() {
        let mut app = App::from_config(
            Some("en-US".to_string()),
            config::Config::default(),
            Some(config::WARNING_LOAD_ERROR.to_string()),
        );
        assert_eq!(app.notice(), Some(config::WARNING_LOAD_ERROR));

        let _ = app.update(Message::DismissNotice);
        assert!(app.notice().is_none());
    }

    #[test]
    fn theme_follows_config() {
        let mut config = config::Config::default();
        config.general.theme_mode = ThemeMode::Light;
        assert_eq!(english_app(config).theme(), Theme::Light);
    }

    #[test]
    fn crossing_policy_comes_from_config() {
        let mut config = config::Config::default();
        config.slider.crossing = config::Crossing::Stop;
        assert_eq!(english_app(config).crossing, CrossingPolicy::Stop);
    }
}
