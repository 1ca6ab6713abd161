// SPDX-License-Identifier: MPL-2.0
//! Thumbnail grid: one clickable tile per photo, in album order.
//!
//! Tiles show a lazily decoded thumbnail and a magnifier veil while hovered.
//! Activating a tile asks the application to open the lightbox at that
//! photo's index.

use crate::album::Album;
use crate::ui::design_tokens::{grid_surface_color, sizing, spacing, typography};
use crate::ui::{icons, styles};
use iced::widget::image::Handle;
use iced::widget::{
    button, container, image, mouse_area, scrollable, tooltip, Column, Container, Row, Stack, Text,
};
use iced::{alignment, Background, ContentFit, Element, Length, Theme};

/// Grid-local state: which tile, if any, the pointer is over.
#[derive(Debug, Clone, Default)]
pub struct State {
    hovered: Option<usize>,
}

impl State {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    pub fn update(&mut self, message: Message) -> Effect {
        match message {
            Message::TileHovered(index) => {
                self.hovered = Some(index);
                Effect::None
            }
            Message::HoverCleared => {
                self.hovered = None;
                Effect::None
            }
            Message::TilePressed(index) => Effect::OpenViewer(index),
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    TileHovered(usize),
    HoverCleared,
    TilePressed(usize),
}

/// Outcome of a grid message the application must act on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Open the lightbox at the given photo index.
    OpenViewer(usize),
}

/// Context required to render the grid.
#[derive(Debug, Clone, Copy)]
pub struct ViewContext {
    /// Tile edge length in pixels.
    pub thumbnail_size: f32,
    /// Tiles per row.
    pub columns: usize,
    /// Whether the surface may scroll. Disabled while a lightbox holds the
    /// scroll lock.
    pub scroll_enabled: bool,
}

/// Renders the grid, or an empty-state hint for an album with no photos.
pub fn view<'a>(album: &'a Album, state: &State, ctx: ViewContext) -> Element<'a, Message> {
    if album.is_empty() {
        return empty_view();
    }

    let mut rows = Column::new().spacing(spacing::SM).padding(spacing::MD);
    for row_indices in row_layout(album.len(), ctx.columns) {
        let mut row = Row::new().spacing(spacing::SM);
        for index in row_indices {
            row = row.push(tile(album, index, state.hovered == Some(index), ctx));
        }
        rows = rows.push(row);
    }

    let surface = Container::new(rows)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(grid_surface_color())),
            ..Default::default()
        });

    if ctx.scroll_enabled {
        scrollable(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        // Scroll lock held: render the same content without a scrollable.
        Container::new(surface)
            .width(Length::Fill)
            .height(Length::Fill)
            .clip(true)
            .into()
    }
}

/// Splits photo indices `0..len` into rows of at most `columns` tiles,
/// preserving album order. Every photo gets exactly one tile.
fn row_layout(len: usize, columns: usize) -> Vec<Vec<usize>> {
    let columns = columns.max(1);
    let indices: Vec<usize> = (0..len).collect();
    indices.chunks(columns).map(|row| row.to_vec()).collect()
}

fn tile<'a>(
    album: &'a Album,
    index: usize,
    hovered: bool,
    ctx: ViewContext,
) -> Element<'a, Message> {
    let size = ctx.thumbnail_size;
    let photo = &album.photos()[index];

    let thumbnail: Element<'static, Message> = match album.photo_path(index) {
        // Handle::from_path decodes lazily, on first paint.
        Some(path) => image(Handle::from_path(path))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .content_fit(ContentFit::Cover)
            .into(),
        None => icons::sized(icons::picture(), size).into(),
    };

    let mut layers = Stack::new().push(thumbnail);
    if hovered {
        let veil = Container::new(icons::sized(icons::magnifier(), sizing::ICON_LG))
            .width(Length::Fixed(size))
            .height(Length::Fixed(size))
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::tile_hover_veil);
        layers = layers.push(veil);
    }

    let tile_button = button(layers)
        .padding(0)
        .style(styles::tile_button)
        .on_press(Message::TilePressed(index));

    let tile_area = mouse_area(tile_button)
        .on_enter(Message::TileHovered(index))
        .on_exit(Message::HoverCleared);

    tooltip(
        tile_area,
        container(Text::new(photo.label()).size(typography::CAPTION)).padding(spacing::XS),
        tooltip::Position::Bottom,
    )
    .into()
}

fn empty_view<'a>() -> Element<'a, Message> {
    let icon = icons::sized(icons::picture(), sizing::ICON_LG * 2.0);
    let title = Text::new("No photos in this album").size(typography::TITLE);
    let hint = Text::new("Add image files or an album.toml manifest to the album directory")
        .size(typography::BODY);

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(icon)
        .push(title)
        .push(hint);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| iced::widget::container::Style {
            background: Some(Background::Color(grid_surface_color())),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::album::PhotoEntry;

    fn test_album(n: usize) -> Album {
        Album::from_entries(
            "/album",
            (0..n).map(|i| PhotoEntry::File(format!("photo-{i}.jpg"))),
            None,
        )
    }

    fn test_ctx() -> ViewContext {
        ViewContext {
            thumbnail_size: 240.0,
            columns: 4,
            scroll_enabled: true,
        }
    }

    #[test]
    fn hover_tracks_tile_under_pointer() {
        let mut state = State::new();
        assert_eq!(state.update(Message::TileHovered(3)), Effect::None);
        assert_eq!(state.hovered(), Some(3));
        assert_eq!(state.update(Message::HoverCleared), Effect::None);
        assert_eq!(state.hovered(), None);
    }

    #[test]
    fn tile_press_requests_viewer_at_index() {
        let mut state = State::new();
        assert_eq!(state.update(Message::TilePressed(7)), Effect::OpenViewer(7));
    }

    #[test]
    fn layout_has_one_tile_per_photo_in_album_order() {
        for len in [0, 1, 3, 4, 5, 9] {
            for columns in [1, 3, 4] {
                let rows = row_layout(len, columns);
                let flat: Vec<usize> = rows.iter().flatten().copied().collect();
                assert_eq!(flat, (0..len).collect::<Vec<_>>());
                assert!(rows.iter().all(|row| !row.is_empty() && row.len() <= columns));
                // Every row but the last is full.
                if let Some((_, full)) = rows.split_last() {
                    assert!(full.iter().all(|row| row.len() == columns));
                }
            }
        }
    }

    #[test]
    fn layout_treats_zero_columns_as_one() {
        let rows = row_layout(3, 0);
        assert_eq!(rows, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn grid_view_renders_non_empty_album() {
        let album = test_album(5);
        let state = State::new();
        let _element = view(&album, &state, test_ctx());
    }

    #[test]
    fn grid_view_renders_empty_album() {
        let album = Album::empty();
        let state = State::new();
        let _element = view(&album, &state, test_ctx());
    }

    #[test]
    fn grid_view_renders_with_scroll_disabled() {
        let album = test_album(2);
        let state = State::new();
        let ctx = ViewContext {
            scroll_enabled: false,
            ..test_ctx()
        };
        let _element = view(&album, &state, ctx);
    }
}
