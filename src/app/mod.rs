// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the grid and lightbox.
//!
//! The `App` struct wires the album, the thumbnail grid, and the lightbox
//! together and translates component effects into state changes. Policy
//! decisions (window sizing, config warnings, where the album comes from)
//! live close to the main update loop so user-facing behavior is easy to
//! audit.

pub mod config;
mod message;
pub mod scroll_lock;
mod subscription;

pub use message::{Flags, Message};

use crate::album::Album;
use crate::ui::{grid, lightbox};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    album: Album,
    grid: grid::State,
    lightbox: lightbox::State,
    config: config::Config,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("photos", &self.album.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

/// Builds the window settings from the configured dimensions.
pub fn window_settings(config: &config::Config) -> window::Settings {
    window::Settings {
        size: iced::Size::new(
            config.window_width() as f32,
            config.window_height() as f32,
        ),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    let (config, config_warning) = config::load();
    let window = window_settings(&config);

    // Wrap boot inputs in RefCell<Option<_>> to satisfy the Fn trait
    // requirement while only consuming them once (iced requires Fn, not
    // FnOnce).
    let boot_state = RefCell::new(Some((flags, config, config_warning)));
    let boot = move || {
        let (flags, config, config_warning) = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags, config, config_warning)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window)
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state: loads the album named by `Flags` and
    /// applies configured lightbox behavior.
    fn new(flags: Flags, config: config::Config, config_warning: Option<String>) -> (Self, Task<Message>) {
        if let Some(warning) = config_warning {
            eprintln!("photogrid: {warning}");
        }

        let album_dir = flags.album_dir.unwrap_or_else(|| PathBuf::from("."));
        let album = match Album::load(&album_dir) {
            Ok(album) => album,
            Err(err) => {
                // Recoverable: warn and start with an empty album.
                eprintln!(
                    "photogrid: cannot open album {}: {err}",
                    album_dir.display()
                );
                Album::empty()
            }
        };

        let mut lightbox = lightbox::State::new();
        lightbox.set_fade_duration(config.fade_duration());
        lightbox.set_swipe_threshold(config.swipe_threshold_px());
        lightbox.set_cache_bytes(config.cache_bytes());

        (
            Self {
                album,
                grid: grid::State::new(),
                lightbox,
                config,
            },
            Task::none(),
        )
    }

    fn title(&self) -> String {
        match self.album.title() {
            Some(title) => format!("Photogrid — {title}"),
            None => "Photogrid".to_string(),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Dark
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Grid(message) => match self.grid.update(message) {
                grid::Effect::None => Task::none(),
                grid::Effect::OpenViewer(index) => self
                    .lightbox
                    .update(lightbox::Message::Open(index), &self.album)
                    .map(Message::Lightbox),
            },
            Message::Lightbox(message) => self
                .lightbox
                .update(message, &self.album)
                .map(Message::Lightbox),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        let grid_ctx = grid::ViewContext {
            thumbnail_size: self.config.thumbnail_size() as f32,
            columns: self.config.grid_columns(),
            scroll_enabled: !scroll_lock::is_locked(),
        };
        let grid_view = grid::view(&self.album, &self.grid, grid_ctx).map(Message::Grid);

        if self.lightbox.is_open() {
            iced::widget::Stack::new()
                .push(grid_view)
                .push(lightbox::view(&self.album, &self.lightbox).map(Message::Lightbox))
                .into()
        } else {
            grid_view
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_event_subscription(self.lightbox.is_open())
    }
}
