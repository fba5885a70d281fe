use ratatui::{
    prelude::{Buffer, Rect},
    text::{Line, Span},
    widgets::{Block as BlockWidget, BlockExt, Widget},
};

use super::style;

/// Keys shown for an action, and the action's description.
pub type KeyBinding<'a> = (&'a [&'a str], &'a str);

#[derive(Debug)]
pub struct KeyBindingDisplay<'a> {
    bindings: &'a [KeyBinding<'a>],
    block: Option<BlockWidget<'a>>,
}

impl<'a> KeyBindingDisplay<'a> {
    pub fn new(bindings: &'a [KeyBinding<'a>]) -> Self {
        Self {
            bindings,
            block: None,
        }
    }

    pub fn block(self, block: BlockWidget<'a>) -> Self {
        Self {
            block: Some(block),
            ..self
        }
    }

    fn line(&self) -> Line<'a> {
        let mut spans = vec![];
        for (i, (keys, desc)) in self.bindings.iter().copied().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" | ", style::SEPARATOR));
            }
            for (i, key) in keys.iter().copied().enumerate() {
                if i > 0 {
                    spans.push(Span::styled("/", style::SEPARATOR));
                }
                spans.push(Span::styled(key, style::KEY));
            }
            spans.push(Span::from(" "));
            spans.push(Span::styled(desc, style::DEFAULT));
        }
        Line::from(spans).centered()
    }
}

impl Widget for KeyBindingDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        self.block.as_ref().render(area, buf);
        let area = self.block.inner_if_some(area);
        self.line().render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_text() {
        let bindings: &[KeyBinding] = &[(&["←", "h"], "Left"), (&["q"], "Quit")];
        let line = KeyBindingDisplay::new(bindings).line();
        assert_eq!(line.to_string(), "←/h Left | q Quit");
    }
}
