//! Single-line text input

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Input field state. `cursor` is a byte offset on a char boundary.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    pub value: String,
    pub cursor: usize,
    pub placeholder: String,
    pub focused: bool,
}

impl InputState {
    pub fn with_placeholder(mut self, placeholder: &str) -> Self {
        self.placeholder = placeholder.to_string();
        self
    }

    pub fn insert(&mut self, c: char) {
        self.value.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_backward(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.value.remove(idx);
            self.cursor = idx;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.value.len() {
            self.value.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some((idx, _)) = self.value[..self.cursor].char_indices().next_back() {
            self.cursor = idx;
        }
    }

    pub fn move_right(&mut self) {
        if let Some(c) = self.value[self.cursor..].chars().next() {
            self.cursor += c.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.value.len();
    }

    /// Rendered line: value with a block cursor when focused, placeholder
    /// in grey when empty.
    pub fn line(&self) -> Line<'_> {
        let cursor_style = Style::default().bg(Color::White).fg(Color::Black);
        let value_style = Style::default().fg(Color::White);
        let placeholder_style = Style::default().fg(Color::DarkGray);

        if self.value.is_empty() {
            let mut spans = Vec::new();
            if self.focused {
                spans.push(Span::styled(" ", cursor_style));
            }
            spans.push(Span::styled(self.placeholder.as_str(), placeholder_style));
            return Line::from(spans);
        }
        if !self.focused {
            return Line::from(Span::styled(self.value.as_str(), value_style));
        }

        let (before, after) = self.value.split_at(self.cursor);
        let split = after.chars().next().map_or(0, char::len_utf8);
        let (at_cursor, rest) = after.split_at(split);
        Line::from(vec![
            Span::styled(before, value_style),
            Span::styled(if at_cursor.is_empty() { " " } else { at_cursor }, cursor_style),
            Span::styled(rest, value_style),
        ])
    }

    pub fn widget(&self) -> Paragraph<'_> {
        let border = if self.focused { Color::Cyan } else { Color::Gray };
        Paragraph::new(self.line()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(border))
                .title(Span::styled(
                    " Email ",
                    Style::default().fg(border).add_modifier(Modifier::BOLD),
                )),
        )
    }
}
