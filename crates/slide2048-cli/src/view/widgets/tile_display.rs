use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::Widget,
};
use slide2048_engine::{Cell, Tile};

use super::color;

/// Background color of a cell, keyed by tile value.
///
/// Values from 2 through 131072 have their own color; empty cells and
/// anything larger share the empty-cell color.
#[must_use]
pub fn tile_color(cell: Cell) -> Color {
    match cell.map(Tile::value) {
        Some(2) => Color::Rgb(0xee, 0xe4, 0xda),
        Some(4) => Color::Rgb(0xed, 0xe0, 0xc8),
        Some(8) => Color::Rgb(0xf2, 0xb1, 0x79),
        Some(16) => Color::Rgb(0xf5, 0x95, 0x63),
        Some(32) => Color::Rgb(0xf6, 0x7c, 0x5f),
        Some(64) => Color::Rgb(0xf6, 0x5e, 0x3b),
        Some(128) => Color::Rgb(0xed, 0xcf, 0x72),
        Some(256) => Color::Rgb(0xed, 0xcc, 0x61),
        Some(512) => Color::Rgb(0xed, 0xc8, 0x50),
        Some(1024) => Color::Rgb(0xed, 0xc5, 0x3f),
        Some(2048) => Color::Rgb(0xed, 0xc2, 0x2e),
        Some(4096) => Color::Rgb(0x3c, 0x3a, 0x32),
        Some(8192) => Color::Rgb(0x3c, 0x3a, 0x33),
        Some(16384) => Color::Rgb(0x3c, 0x3a, 0x34),
        Some(32768) => Color::Rgb(0x3c, 0x3a, 0x35),
        Some(65536) => Color::Rgb(0x3c, 0x3a, 0x36),
        Some(131_072) => Color::Rgb(0x3c, 0x3a, 0x37),
        _ => color::EMPTY_CELL,
    }
}

/// Text size category of a cell, by the number of decimal digits shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontSize {
    /// Up to 2 digits (including an empty cell).
    Small,
    /// 3 digits.
    Medium,
    /// 4 digits.
    Large,
    /// 5 digits or more.
    Default,
}

impl FontSize {
    #[must_use]
    pub fn of(cell: Cell) -> Self {
        let digits = cell.map_or(0, |tile| tile.to_string().len());
        match digits {
            0..=2 => Self::Small,
            3 => Self::Medium,
            4 => Self::Large,
            _ => Self::Default,
        }
    }

    /// Terminal glyphs all have the same size, so the category picks a text weight instead.
    #[must_use]
    pub const fn modifier(self) -> Modifier {
        match self {
            Self::Small | Self::Medium => Modifier::BOLD,
            Self::Large => Modifier::empty(),
            Self::Default => Modifier::DIM,
        }
    }
}

/// One cell of the grid, drawn as a colored box with the value centered.
#[derive(Debug)]
pub struct TileDisplay {
    cell: Cell,
}

impl TileDisplay {
    pub const fn new(cell: Cell) -> Self {
        Self { cell }
    }

    pub const fn width() -> u16 {
        8
    }

    pub const fn height() -> u16 {
        3
    }

    pub fn style(&self) -> Style {
        let fg = match self.cell {
            Some(tile) if tile.value() <= 4 => color::DARK_TEXT,
            _ => color::LIGHT_TEXT,
        };
        Style::new()
            .fg(fg)
            .bg(tile_color(self.cell))
            .add_modifier(FontSize::of(self.cell).modifier())
    }
}

impl Widget for TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &TileDisplay {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        buf.set_style(area, style);
        if let Some(tile) = self.cell {
            let text_area = area.centered_vertically(Constraint::Length(1));
            Line::styled(tile.to_string(), style)
                .centered()
                .render(text_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(value: u32) -> Cell {
        Tile::from_value(value)
    }

    #[test]
    fn test_palette() {
        assert_eq!(tile_color(cell(2)), Color::Rgb(0xee, 0xe4, 0xda));
        assert_eq!(tile_color(cell(2048)), Color::Rgb(0xed, 0xc2, 0x2e));
        assert_eq!(tile_color(cell(131_072)), Color::Rgb(0x3c, 0x3a, 0x37));
    }

    #[test]
    fn test_palette_fallback() {
        assert_eq!(tile_color(None), color::EMPTY_CELL);
        assert_eq!(tile_color(cell(262_144)), color::EMPTY_CELL);
        assert_eq!(tile_color(cell(1 << 31)), color::EMPTY_CELL);
    }

    #[test]
    fn test_font_size_by_digits() {
        assert_eq!(FontSize::of(None), FontSize::Small);
        assert_eq!(FontSize::of(cell(2)), FontSize::Small);
        assert_eq!(FontSize::of(cell(64)), FontSize::Small);
        assert_eq!(FontSize::of(cell(128)), FontSize::Medium);
        assert_eq!(FontSize::of(cell(512)), FontSize::Medium);
        assert_eq!(FontSize::of(cell(1024)), FontSize::Large);
        assert_eq!(FontSize::of(cell(8192)), FontSize::Large);
        assert_eq!(FontSize::of(cell(16384)), FontSize::Default);
        assert_eq!(FontSize::of(cell(131_072)), FontSize::Default);
    }

    #[test]
    fn test_render_centers_value() {
        let area = Rect::new(0, 0, TileDisplay::width(), TileDisplay::height());
        let mut buf = Buffer::empty(area);
        TileDisplay::new(cell(256)).render(area, &mut buf);

        let middle = (0..area.width)
            .map(|x| buf[(x, 1)].symbol().to_string())
            .collect::<String>();
        assert_eq!(middle.trim(), "256");
        assert_eq!(buf[(0, 0)].bg, tile_color(cell(256)));
    }
}
