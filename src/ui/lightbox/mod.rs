// SPDX-License-Identifier: MPL-2.0
//! Lightbox component: full-window viewer for one photo at a time.
//!
//! The component owns an explicit open/closed mode, the preload-then-swap
//! pipeline, and gesture/keyboard navigation. The visible photo only changes
//! once a background decode finishes, so a half-loaded frame is never shown;
//! every decode carries a sequence number and completions that are not the
//! latest are discarded, which keeps rapid navigation from racing itself.

mod overlay;

pub use overlay::view;

use crate::album::Album;
use crate::app::scroll_lock::ScrollLock;
use crate::error::Error;
use crate::media::{self, CacheConfig, ImageData, PhotoCache};
use iced::{keyboard, touch, Event, Point, Task};
use std::path::PathBuf;
use std::time::Duration;

/// Viewer mode. While `Open`, `index` is always a valid photo index; there
/// is no index to read while `Closed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Closed,
    Open { index: usize },
}

/// Messages consumed by the lightbox.
#[derive(Debug, Clone)]
pub enum Message {
    /// Open the viewer at a photo index.
    Open(usize),
    Close,
    Next,
    Previous,
    BackdropPressed,
    /// Pointer position over the photo surface, tracked for mouse swipes.
    PointerMoved(Point),
    /// Mouse pressed over the photo surface; starts a swipe.
    SwipeStarted,
    /// Mouse released over the photo surface; ends a swipe.
    SwipeEnded,
    /// A background decode finished, successfully or not.
    PreloadFinished {
        seq: u64,
        path: PathBuf,
        result: Result<ImageData, Error>,
    },
    /// The fade transition around a swap has run its course.
    FadeEnded(u64),
    /// Keyboard or touch event routed from the application subscription.
    RawEvent(Event),
}

/// Lightbox state. One instance per application, reused for every photo.
pub struct State {
    mode: Mode,
    /// Photo currently committed to the screen, if the last decode
    /// succeeded.
    displayed: Option<ImageData>,
    fading: bool,
    /// Sequence number of the most recent decode request.
    preload_seq: u64,
    /// Horizontal position where the current swipe began.
    swipe_origin: Option<f32>,
    /// Last known pointer position over the photo surface.
    pointer_x: f32,
    /// Held while open; dropping it releases the scroll suppression.
    scroll_lock: Option<ScrollLock>,
    cache: PhotoCache,
    fade: Duration,
    swipe_threshold: f32,
}

impl State {
    pub fn new() -> Self {
        Self {
            mode: Mode::Closed,
            displayed: None,
            fading: false,
            preload_seq: 0,
            swipe_origin: None,
            pointer_x: 0.0,
            scroll_lock: None,
            cache: PhotoCache::with_defaults(),
            fade: Duration::from_millis(crate::app::config::DEFAULT_FADE_MILLIS),
            swipe_threshold: crate::app::config::DEFAULT_SWIPE_THRESHOLD_PX,
        }
    }

    /// Replaces the photo cache with one sized to `max_bytes`.
    pub fn set_cache_bytes(&mut self, max_bytes: usize) {
        self.cache = PhotoCache::new(CacheConfig::with_max_bytes(max_bytes));
    }

    pub fn set_fade_duration(&mut self, fade: Duration) {
        self.fade = fade;
    }

    pub fn set_swipe_threshold(&mut self, threshold_px: f32) {
        self.swipe_threshold = threshold_px;
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_open(&self) -> bool {
        matches!(self.mode, Mode::Open { .. })
    }

    /// Index of the photo on display, if open.
    pub fn current_index(&self) -> Option<usize> {
        match self.mode {
            Mode::Open { index } => Some(index),
            Mode::Closed => None,
        }
    }

    pub fn displayed(&self) -> Option<&ImageData> {
        self.displayed.as_ref()
    }

    pub fn is_fading(&self) -> bool {
        self.fading
    }

    pub fn update(&mut self, message: Message, album: &Album) -> Task<Message> {
        match message {
            Message::Open(index) => self.open(index, album),
            Message::Close | Message::BackdropPressed => {
                self.close();
                Task::none()
            }
            Message::Next => self.step(1, album),
            Message::Previous => self.step(-1, album),
            Message::PointerMoved(position) => {
                self.pointer_x = position.x;
                Task::none()
            }
            Message::SwipeStarted => {
                self.swipe_origin = Some(self.pointer_x);
                Task::none()
            }
            Message::SwipeEnded => {
                let end = self.pointer_x;
                self.finish_swipe(end, album)
            }
            Message::PreloadFinished { seq, path, result } => {
                if seq != self.preload_seq {
                    // A later navigation superseded this decode.
                    return Task::none();
                }
                match result {
                    Ok(image) => {
                        self.cache.insert(path, image.clone());
                        self.displayed = Some(image);
                    }
                    // Failed loads do not block navigation; the viewer
                    // falls back to its placeholder for this slot.
                    Err(_) => self.displayed = None,
                }
                self.schedule_fade_end(seq)
            }
            Message::FadeEnded(seq) => {
                if seq == self.preload_seq {
                    self.fading = false;
                }
                Task::none()
            }
            Message::RawEvent(event) => self.handle_raw_event(&event, album),
        }
    }

    /// Opens the viewer at `index`. A no-op for an empty album or an
    /// out-of-range index.
    fn open(&mut self, index: usize, album: &Album) -> Task<Message> {
        if index >= album.len() {
            return Task::none();
        }
        self.mode = Mode::Open { index };
        if self.scroll_lock.is_none() {
            self.scroll_lock = Some(ScrollLock::acquire());
        }
        self.show(index, album)
    }

    /// Closes the viewer and releases the scroll lock. Idempotent.
    fn close(&mut self) {
        self.mode = Mode::Closed;
        self.swipe_origin = None;
        self.scroll_lock = None;
    }

    /// Moves `direction` steps (+1/-1) with wraparound, then re-displays.
    fn step(&mut self, direction: i64, album: &Album) -> Task<Message> {
        let Mode::Open { index } = self.mode else {
            return Task::none();
        };
        if album.is_empty() {
            return Task::none();
        }
        let next = wrap_step(index, album.len(), direction);
        self.mode = Mode::Open { index: next };
        self.show(next, album)
    }

    /// Starts the preload-then-swap pipeline for the photo at `index`.
    fn show(&mut self, index: usize, album: &Album) -> Task<Message> {
        self.preload_seq += 1;
        let seq = self.preload_seq;
        self.fading = true;

        let Some(path) = album.photo_path(index) else {
            return Task::none();
        };

        if let Some(image) = self.cache.get(&path) {
            self.displayed = Some(image);
            return self.schedule_fade_end(seq);
        }

        Task::perform(media::load_photo(path), move |(path, result)| {
            Message::PreloadFinished { seq, path, result }
        })
    }

    fn schedule_fade_end(&self, seq: u64) -> Task<Message> {
        let fade = self.fade;
        Task::perform(tokio::time::sleep(fade), move |_| Message::FadeEnded(seq))
    }

    /// Ends a swipe at horizontal position `end`: a delta past the threshold
    /// navigates (left means next), anything shorter is ignored.
    fn finish_swipe(&mut self, end: f32, album: &Album) -> Task<Message> {
        let Some(origin) = self.swipe_origin.take() else {
            return Task::none();
        };
        let dx = end - origin;
        if dx.abs() > self.swipe_threshold {
            self.step(if dx < 0.0 { 1 } else { -1 }, album)
        } else {
            Task::none()
        }
    }

    fn handle_raw_event(&mut self, event: &Event, album: &Album) -> Task<Message> {
        if !self.is_open() {
            return Task::none();
        }
        match event {
            Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
                self.handle_key(key, album)
            }
            Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.swipe_origin = Some(position.x);
                Task::none()
            }
            Event::Touch(
                touch::Event::FingerLifted { position, .. }
                | touch::Event::FingerLost { position, .. },
            ) => {
                let end = position.x;
                self.finish_swipe(end, album)
            }
            _ => Task::none(),
        }
    }

    fn handle_key(&mut self, key: &keyboard::Key, album: &Album) -> Task<Message> {
        match key {
            keyboard::Key::Named(keyboard::key::Named::Escape) => {
                self.close();
                Task::none()
            }
            keyboard::Key::Named(keyboard::key::Named::ArrowLeft) => self.step(-1, album),
            keyboard::Key::Named(keyboard::key::Named::ArrowRight) => self.step(1, album),
            _ => Task::none(),
        }
    }

    #[cfg(test)]
    fn preload_seq(&self) -> u64 {
        self.preload_seq
    }

    #[cfg(test)]
    fn holds_scroll_lock(&self) -> bool {
        self.scroll_lock.is_some()
    }
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("State")
            .field("mode", &self.mode)
            .field("fading", &self.fading)
            .field("preload_seq", &self.preload_seq)
            .field("has_photo", &self.displayed.is_some())
            .finish()
    }
}

/// Moves `index` by `direction` steps within `len`, wrapping in both
/// directions. `len` must be non-zero.
pub fn wrap_step(index: usize, len: usize, direction: i64) -> usize {
    debug_assert!(len > 0);
    (index as i64 + direction).rem_euclid(len as i64) as usize
}

/// Formats the 1-based position counter, e.g. `"3 / 5"`.
pub fn counter_text(index: usize, len: usize) -> String {
    format!("{} / {}", index + 1, len)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::album::PhotoEntry;
    use crate::app::scroll_lock;
    use iced::touch::Finger;

    fn test_album(n: usize) -> Album {
        Album::from_entries(
            "/album",
            (0..n).map(|i| PhotoEntry::File(format!("photo-{i}.jpg"))),
            None,
        )
    }

    fn lock_serial() -> std::sync::MutexGuard<'static, ()> {
        scroll_lock::TEST_SERIAL
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    #[test]
    fn wrap_step_wraps_forward_from_last_index() {
        assert_eq!(wrap_step(4, 5, 1), 0);
        assert_eq!(wrap_step(0, 1, 1), 0);
    }

    #[test]
    fn wrap_step_wraps_backward_from_first_index() {
        assert_eq!(wrap_step(0, 5, -1), 4);
        assert_eq!(wrap_step(0, 1, -1), 0);
    }

    #[test]
    fn counter_is_one_based() {
        assert_eq!(counter_text(2, 5), "3 / 5");
        assert_eq!(counter_text(0, 1), "1 / 1");
    }

    #[test]
    fn open_sets_mode_and_acquires_lock() {
        let _serial = lock_serial();
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Open(1), &album);
        assert_eq!(state.mode(), Mode::Open { index: 1 });
        assert!(state.holds_scroll_lock());
        assert!(state.is_fading());
    }

    #[test]
    fn close_restores_closed_mode_and_releases_lock() {
        let _serial = lock_serial();
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        let _ = state.update(Message::Close, &album);
        assert_eq!(state.mode(), Mode::Closed);
        assert!(!state.holds_scroll_lock());

        // Closing while closed stays a no-op.
        let _ = state.update(Message::Close, &album);
        assert_eq!(state.mode(), Mode::Closed);
    }

    #[test]
    fn open_on_empty_album_is_a_no_op() {
        let _serial = lock_serial();
        let album = Album::empty();
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        assert_eq!(state.mode(), Mode::Closed);
        assert!(!state.holds_scroll_lock());
    }

    #[test]
    fn open_past_the_end_is_a_no_op() {
        let _serial = lock_serial();
        let album = test_album(2);
        let mut state = State::new();

        let _ = state.update(Message::Open(2), &album);
        assert_eq!(state.mode(), Mode::Closed);
    }

    #[test]
    fn next_and_previous_wrap_around() {
        let _serial = lock_serial();
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Open(2), &album);
        let _ = state.update(Message::Next, &album);
        assert_eq!(state.current_index(), Some(0));

        let _ = state.update(Message::Previous, &album);
        assert_eq!(state.current_index(), Some(2));
    }

    #[test]
    fn step_while_closed_is_a_no_op() {
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Next, &album);
        assert_eq!(state.mode(), Mode::Closed);
    }

    #[tokio::test]
    async fn stale_preload_completion_is_discarded() {
        let _serial = lock_serial();
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        let first_seq = state.preload_seq();
        let _ = state.update(Message::Next, &album);
        assert!(state.preload_seq() > first_seq);

        // The superseded completion must not touch the display.
        let stale = ImageData::from_rgba(1, 1, vec![0u8; 4]);
        let _ = state.update(
            Message::PreloadFinished {
                seq: first_seq,
                path: album.photo_path(0).unwrap(),
                result: Ok(stale),
            },
            &album,
        );
        assert!(state.displayed().is_none());

        // The current one commits.
        let fresh = ImageData::from_rgba(2, 2, vec![0u8; 16]);
        let _ = state.update(
            Message::PreloadFinished {
                seq: state.preload_seq(),
                path: album.photo_path(1).unwrap(),
                result: Ok(fresh),
            },
            &album,
        );
        assert_eq!(state.displayed().map(|d| d.width), Some(2));
    }

    #[tokio::test]
    async fn failed_load_swaps_to_placeholder_without_blocking_navigation() {
        let _serial = lock_serial();
        let album = test_album(2);
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        let seq = state.preload_seq();
        let _ = state.update(
            Message::PreloadFinished {
                seq,
                path: album.photo_path(0).unwrap(),
                result: Err(Error::Image("decode failed".into())),
            },
            &album,
        );
        assert!(state.displayed().is_none());
        assert_eq!(state.current_index(), Some(0));

        // Navigation still works after the failure.
        let _ = state.update(Message::Next, &album);
        assert_eq!(state.current_index(), Some(1));
    }

    #[test]
    fn fade_clears_only_for_the_current_sequence() {
        let _serial = lock_serial();
        let album = test_album(2);
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        let first_seq = state.preload_seq();
        let _ = state.update(Message::Next, &album);

        let _ = state.update(Message::FadeEnded(first_seq), &album);
        assert!(state.is_fading());

        let _ = state.update(Message::FadeEnded(state.preload_seq()), &album);
        assert!(!state.is_fading());
    }

    #[test]
    fn mouse_swipe_past_threshold_steps_forward() {
        let _serial = lock_serial();
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        let _ = state.update(Message::PointerMoved(Point::new(200.0, 50.0)), &album);
        let _ = state.update(Message::SwipeStarted, &album);
        let _ = state.update(Message::PointerMoved(Point::new(140.0, 55.0)), &album);
        let _ = state.update(Message::SwipeEnded, &album);

        // -60 px is past the 48 px threshold: same step as ArrowRight.
        assert_eq!(state.current_index(), Some(1));
    }

    #[test]
    fn short_swipe_is_ignored() {
        let _serial = lock_serial();
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        let _ = state.update(Message::PointerMoved(Point::new(200.0, 50.0)), &album);
        let _ = state.update(Message::SwipeStarted, &album);
        let _ = state.update(Message::PointerMoved(Point::new(170.0, 50.0)), &album);
        let _ = state.update(Message::SwipeEnded, &album);

        assert_eq!(state.current_index(), Some(0));
    }

    #[test]
    fn touch_swipe_left_navigates_next() {
        let _serial = lock_serial();
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        let _ = state.update(
            Message::RawEvent(Event::Touch(touch::Event::FingerPressed {
                id: Finger(0),
                position: Point::new(300.0, 100.0),
            })),
            &album,
        );
        let _ = state.update(
            Message::RawEvent(Event::Touch(touch::Event::FingerLifted {
                id: Finger(0),
                position: Point::new(240.0, 110.0),
            })),
            &album,
        );

        assert_eq!(state.current_index(), Some(1));
    }

    #[test]
    fn escape_closes_and_arrows_navigate() {
        let _serial = lock_serial();
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(Message::Open(1), &album);
        let _ = state.handle_key(
            &keyboard::Key::Named(keyboard::key::Named::ArrowRight),
            &album,
        );
        assert_eq!(state.current_index(), Some(2));

        let _ = state.handle_key(
            &keyboard::Key::Named(keyboard::key::Named::ArrowLeft),
            &album,
        );
        assert_eq!(state.current_index(), Some(1));

        let _ = state.handle_key(&keyboard::Key::Named(keyboard::key::Named::Escape), &album);
        assert_eq!(state.mode(), Mode::Closed);
    }

    #[test]
    fn raw_events_are_inert_while_closed() {
        let album = test_album(3);
        let mut state = State::new();

        let _ = state.update(
            Message::RawEvent(Event::Touch(touch::Event::FingerPressed {
                id: Finger(0),
                position: Point::new(300.0, 100.0),
            })),
            &album,
        );
        assert_eq!(state.mode(), Mode::Closed);
        assert!(state.swipe_origin.is_none());
    }

    #[test]
    fn backdrop_press_closes() {
        let _serial = lock_serial();
        let album = test_album(2);
        let mut state = State::new();

        let _ = state.update(Message::Open(0), &album);
        let _ = state.update(Message::BackdropPressed, &album);
        assert_eq!(state.mode(), Mode::Closed);
    }
}
