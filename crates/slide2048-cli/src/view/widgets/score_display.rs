use std::iter;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    text::Line,
    widgets::{Block as BlockWidget, BlockExt as _, Widget},
};
use slide2048_engine::{GameSession, HighScore, Tile};

use super::style;

/// Score panel: current score, high score and session counters.
pub struct ScoreDisplay<'a> {
    session: &'a GameSession,
    high_score: HighScore,
    block: Option<BlockWidget<'a>>,
}

impl<'a> ScoreDisplay<'a> {
    pub fn new(session: &'a GameSession, high_score: HighScore) -> Self {
        Self {
            session,
            high_score,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    pub fn width(&self) -> u16 {
        18 + super::block_horizontal_margin(self.block.as_ref())
    }

    pub fn height(&self) -> u16 {
        ROW_COUNT + super::block_vertical_margin(self.block.as_ref())
    }
}

type Value = &'static dyn Fn(&GameSession, HighScore) -> String;

#[derive(Clone, Copy)]
enum Row {
    Empty,
    FullLabel(&'static str),
    FullValue(Value),
    LabelValue(&'static str, Value),
}

#[expect(clippy::cast_possible_truncation)]
const ROW_COUNT: u16 = ROWS.len() as u16;

const ROWS: &[Row] = &[
    Row::FullLabel("SCORE:"),
    Row::FullValue(&|session, _| session.stats().score().to_string()),
    Row::FullLabel("BEST:"),
    Row::FullValue(&|_, high_score| high_score.value().to_string()),
    Row::Empty,
    Row::LabelValue("MOVES:", &|session, _| session.stats().moves().to_string()),
    Row::LabelValue("MERGES:", &|session, _| session.stats().merges().to_string()),
    Row::LabelValue("MAX:", &|session, _| {
        session.stats().max_tile().map_or(0, Tile::value).to_string()
    }),
];

impl Widget for ScoreDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);

        let rows_areas =
            Layout::vertical((0..ROWS.len()).map(|_| Constraint::Length(1))).split(area);

        for (row, area) in iter::zip(ROWS.iter().copied(), rows_areas.iter().copied()) {
            match row {
                Row::Empty => {}
                Row::FullLabel(label) => {
                    Line::styled(label, style::LABEL)
                        .left_aligned()
                        .render(area, buf);
                }
                Row::FullValue(value) => {
                    Line::styled(value(self.session, self.high_score), style::DEFAULT)
                        .right_aligned()
                        .render(area, buf);
                }
                Row::LabelValue(label, value) => {
                    let [label_area, value_area] = area.layout(&Layout::horizontal([
                        Constraint::Fill(1),
                        Constraint::Fill(1),
                    ]));
                    Line::styled(label, style::LABEL)
                        .left_aligned()
                        .render(label_area, buf);
                    Line::styled(value(self.session, self.high_score), style::DEFAULT)
                        .right_aligned()
                        .render(value_area, buf);
                }
            }
        }
    }
}
