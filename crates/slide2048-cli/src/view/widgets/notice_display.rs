use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    style::Style,
    text::{Line, Text},
    widgets::{Block as BlockWidget, Clear, Padding, Paragraph, Widget},
};

use super::style;

/// A modal box drawn over whatever is already on screen.
#[derive(Debug)]
pub struct NoticeDisplay<'a> {
    title: &'a str,
    lines: Vec<Line<'a>>,
    style: Style,
}

impl<'a> NoticeDisplay<'a> {
    pub fn new(title: &'a str, style: Style) -> Self {
        Self {
            title,
            lines: vec![],
            style,
        }
    }

    pub fn line(mut self, line: impl Into<Line<'a>>) -> Self {
        self.lines.push(line.into());
        self
    }

    fn block(&self) -> BlockWidget<'a> {
        BlockWidget::bordered()
            .title(Line::styled(self.title, self.style).centered())
            .border_style(self.style)
            .padding(Padding::symmetric(2, 1))
    }

    pub fn width(&self) -> u16 {
        let content = self.lines.iter().map(Line::width).max().unwrap_or(0);
        let title = self.title.chars().count();
        let width = usize::max(content, title) + 6;
        u16::try_from(width).unwrap_or(u16::MAX)
    }

    pub fn height(&self) -> u16 {
        u16::try_from(self.lines.len() + 4).unwrap_or(u16::MAX)
    }
}

impl Widget for NoticeDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let area = area.centered(
            Constraint::Length(self.width()),
            Constraint::Length(self.height()),
        );
        Clear.render(area, buf);
        let block = self.block();
        Paragraph::new(Text::from(self.lines))
            .style(style::DEFAULT)
            .centered()
            .block(block)
            .render(area, buf);
    }
}
