use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Flex, Layout, Rect},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};
use slide2048_engine::{GRID_SIZE, Grid};

use super::{TileDisplay, style};

const GAP: u16 = 1;

#[derive(Debug)]
pub struct GridDisplay<'a> {
    grid: &'a Grid,
    block: Option<BlockWidget<'a>>,
}

impl<'a> GridDisplay<'a> {
    pub fn new(grid: &'a Grid) -> Self {
        Self { grid, block: None }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn width(&self) -> u16 {
        let n = GRID_SIZE as u16;
        n * TileDisplay::width() + (n + 1) * GAP + super::block_horizontal_margin(self.block.as_ref())
    }

    #[expect(clippy::cast_possible_truncation)]
    pub fn height(&self) -> u16 {
        let n = GRID_SIZE as u16;
        n * TileDisplay::height() + (n + 1) * GAP + super::block_vertical_margin(self.block.as_ref())
    }
}

impl Widget for GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &GridDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        buf.set_style(area, style::BOARD);

        let col_constraints = (0..GRID_SIZE).map(|_| Constraint::Length(TileDisplay::width()));
        let row_constraints = (0..GRID_SIZE).map(|_| Constraint::Length(TileDisplay::height()));
        let horizontal = Layout::horizontal(col_constraints)
            .spacing(GAP)
            .flex(Flex::Center);
        let vertical = Layout::vertical(row_constraints)
            .spacing(GAP)
            .flex(Flex::Center);

        let grid_cells = area
            .layout::<GRID_SIZE>(&vertical)
            .into_iter()
            .map(|row| row.layout::<GRID_SIZE>(&horizontal));

        for (grid_row, row) in iter::zip(grid_cells, self.grid.rows()) {
            for (grid_cell, cell) in iter::zip(grid_row, row) {
                TileDisplay::new(cell).render(grid_cell, buf);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_renders_every_value() {
        let grid = Grid::from_values([
            [2, 0, 0, 0],
            [0, 64, 0, 0],
            [0, 0, 1024, 0],
            [0, 0, 0, 16384],
        ]);
        let display = GridDisplay::new(&grid).block(BlockWidget::bordered());
        let area = Rect::new(0, 0, display.width(), display.height());
        let mut buf = Buffer::empty(area);
        display.render(area, &mut buf);

        let text = (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol().to_string())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n");
        for value in ["2", "64", "1024", "16384"] {
            assert!(text.contains(value), "{value} missing from\n{text}");
        }
    }

    #[test]
    fn test_size() {
        let grid = Grid::EMPTY;
        let display = GridDisplay::new(&grid);
        assert_eq!(display.width(), 4 * 8 + 5);
        assert_eq!(display.height(), 4 * 3 + 5);
        let display = display.block(BlockWidget::bordered());
        assert_eq!(display.width(), 4 * 8 + 5 + 2);
    }
}
