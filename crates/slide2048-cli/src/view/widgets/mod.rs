use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    grid_display::*, key_binding_display::*, notice_display::*, score_display::*,
    tile_display::*,
};

mod grid_display;
mod key_binding_display;
mod notice_display;
mod score_display;
mod tile_display;

mod color {
    use ratatui::style::Color;

    pub const BOARD: Color = Color::Rgb(0xbb, 0xad, 0xa0);
    pub const EMPTY_CELL: Color = Color::Rgb(0xcd, 0xc1, 0xb4);
    pub const DARK_TEXT: Color = Color::Rgb(0x77, 0x6e, 0x65);
    pub const LIGHT_TEXT: Color = Color::Rgb(0xf9, 0xf6, 0xf2);
    pub const GOLD: Color = Color::Rgb(0xed, 0xc2, 0x2e);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
    pub const CYAN: Color = Color::Rgb(0, 255, 255);
    pub const RED: Color = Color::Rgb(255, 80, 80);
}

pub mod style {
    use ratatui::style::{Color, Modifier, Style};

    use super::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    pub const DEFAULT: Style = Style::new().fg(color::WHITE);
    pub const BOARD: Style = fg_bg(color::DARK_TEXT, color::BOARD);
    pub const TITLE: Style = Style::new().fg(color::GOLD).add_modifier(Modifier::BOLD);
    pub const LABEL: Style = Style::new().fg(color::GRAY);
    pub const KEY: Style = Style::new().fg(color::CYAN);
    pub const SEPARATOR: Style = Style::new().fg(color::GRAY);
    pub const WIN: Style = Style::new().fg(color::GOLD).add_modifier(Modifier::BOLD);
    pub const GAME_OVER: Style = Style::new().fg(color::RED).add_modifier(Modifier::BOLD);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
