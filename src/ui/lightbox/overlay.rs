// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay view: backdrop, photo, controls, counter and caption.

use super::{counter_text, Message, Mode, State};
use crate::album::Album;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::{button, image, mouse_area, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, ContentFit, Element, Length};

/// Renders the lightbox overlay. Yields an empty element while closed.
pub fn view<'a>(album: &'a Album, state: &'a State) -> Element<'a, Message> {
    let Mode::Open { index } = state.mode() else {
        return Space::new().width(Length::Shrink).height(Length::Shrink).into();
    };

    let backdrop = mouse_area(
        Container::new(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let mut layers = Stack::new().push(backdrop);
    layers = layers.push(photo_surface(state));
    layers = layers.push(close_control());
    layers = layers.push(nav_control(icons::chevron_left(), Message::Previous, true));
    layers = layers.push(nav_control(icons::chevron_right(), Message::Next, false));
    layers = layers.push(caption_bar(album, index));

    Container::new(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

/// The photo itself, centered, with the fade and swipe surfaces attached.
///
/// Only the photo's own bounds capture presses. The image keeps its default
/// shrink sizing, so its bounds hug the fitted photo and presses in the dim
/// area around it fall through to the backdrop, which closes the viewer. The
/// outer surface tracks pointer movement and releases without capturing
/// presses, so a swipe that ends off the photo still finishes.
fn photo_surface(state: &State) -> Element<'_, Message> {
    let photo: Element<'_, Message> = match state.displayed() {
        Some(data) => {
            let alpha = if state.is_fading() {
                opacity::FADING
            } else {
                1.0
            };
            image(data.handle.clone())
                .content_fit(ContentFit::Contain)
                .opacity(alpha)
                .into()
        }
        // Decode failed or still in flight: show the placeholder glyph.
        None => icons::sized(icons::picture(), sizing::ICON_LG * 3.0).into(),
    };

    let swipe_target = mouse_area(photo).on_press(Message::SwipeStarted);

    let centered = Container::new(swipe_target)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    mouse_area(centered)
        .on_move(Message::PointerMoved)
        .on_release(Message::SwipeEnded)
        .into()
}

fn close_control<'a>() -> Element<'a, Message> {
    let close = control_button(icons::close(), Message::Close);

    Container::new(close)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Top)
        .into()
}

/// A square overlay control with a fixed hit target.
fn control_button(
    icon: iced::widget::svg::Svg<'static>,
    message: Message,
) -> iced::widget::Button<'static, Message> {
    button(
        Container::new(icons::sized(icon, sizing::ICON))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center),
    )
    .width(Length::Fixed(sizing::CONTROL))
    .height(Length::Fixed(sizing::CONTROL))
    .padding(0)
    .style(styles::overlay_button)
    .on_press(message)
}

fn nav_control<'a>(
    icon: iced::widget::svg::Svg<'static>,
    message: Message,
    left: bool,
) -> Element<'a, Message> {
    let control = control_button(icon, message);

    let align_x = if left {
        alignment::Horizontal::Left
    } else {
        alignment::Horizontal::Right
    };

    Container::new(control)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(align_x)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn caption_bar<'a>(album: &'a Album, index: usize) -> Element<'a, Message> {
    let counter = Text::new(counter_text(index, album.len()))
        .size(typography::COUNTER)
        .color(palette::GRAY_400);

    let caption = album
        .photo(index)
        .map(|photo| photo.caption.clone())
        .unwrap_or_default();

    let bar = Row::new()
        .spacing(spacing::MD)
        .push(counter)
        .push(Text::new(caption).size(typography::CAPTION));

    let bar = Container::new(bar).padding(spacing::SM).style(styles::caption_bar);

    Container::new(Column::new().push(bar))
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::MD)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::album::PhotoEntry;
    use crate::app::scroll_lock;

    #[test]
    fn overlay_renders_while_open() {
        let _serial = scroll_lock::TEST_SERIAL
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let album = Album::from_entries(
            "/album",
            [
                PhotoEntry::File("a.jpg".into()),
                PhotoEntry::Captioned {
                    file: "b.jpg".into(),
                    caption: "Blue hour".into(),
                },
            ],
            None,
        );
        let mut state = State::new();
        let _ = state.update(Message::Open(1), &album);
        let _element = view(&album, &state);
    }

    #[tokio::test]
    async fn overlay_renders_committed_photo() {
        let _serial = scroll_lock::TEST_SERIAL
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let album = Album::from_entries("/album", [PhotoEntry::File("a.jpg".into())], None);
        let mut state = State::new();
        let _ = state.update(Message::Open(0), &album);
        let _ = state.update(
            Message::PreloadFinished {
                seq: state.preload_seq(),
                path: album.photo_path(0).unwrap(),
                result: Ok(crate::media::ImageData::from_rgba(2, 2, vec![0u8; 16])),
            },
            &album,
        );
        assert!(state.displayed().is_some());
        let _element = view(&album, &state);
    }

    #[test]
    fn overlay_renders_empty_while_closed() {
        let album = Album::empty();
        let state = State::new();
        let _element = view(&album, &state);
    }
}
