use ratatui::style::{Color, Modifier, Style};

const MAX_LINES: usize = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogKind {
    Heading,
    Info,
    Success,
    Error,
}

impl LogKind {
    pub fn style(self) -> Style {
        match self {
            LogKind::Heading => Style::default().add_modifier(Modifier::BOLD),
            LogKind::Info => Style::default(),
            LogKind::Success => Style::default().fg(Color::Green),
            LogKind::Error => Style::default().fg(Color::Red),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    pub kind: LogKind,
    pub text: String,
}

/// Scrolling output log. `offset` counts lines scrolled up from the bottom;
/// new lines snap the view back to the bottom.
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    lines: Vec<LogLine>,
    offset: usize,
}

impl OutputLog {
    pub fn push(&mut self, kind: LogKind, text: impl Into<String>) {
        self.lines.push(LogLine {
            kind,
            text: text.into(),
        });
        if self.lines.len() > MAX_LINES {
            let excess = self.lines.len() - MAX_LINES;
            self.lines.drain(..excess);
        }
        self.offset = 0;
    }

    /// Pushes every line of a multi-line block.
    pub fn push_block(&mut self, kind: LogKind, block: &str) {
        for line in block.lines() {
            self.push(kind, line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.offset = 0;
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = (self.offset + n).min(self.lines.len().saturating_sub(1));
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn lines(&self) -> &[LogLine] {
        &self.lines
    }

    /// Lines visible in a window `height` rows tall.
    pub fn visible(&self, height: usize) -> &[LogLine] {
        let end = self.lines.len().saturating_sub(self.offset);
        let start = end.saturating_sub(height);
        &self.lines[start..end]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_only_the_latest_lines() {
        let mut log = OutputLog::default();
        for i in 0..MAX_LINES + 10 {
            log.push(LogKind::Info, i.to_string());
        }
        assert_eq!(log.lines().len(), MAX_LINES);
        assert_eq!(log.lines()[0].text, "10");
    }

    #[test]
    fn scrolling_moves_the_window() {
        let mut log = OutputLog::default();
        log.push_block(LogKind::Info, "a\nb\nc\nd");
        let texts = |lines: &[LogLine]| lines.iter().map(|l| l.text.clone()).collect::<Vec<_>>();

        assert_eq!(texts(log.visible(2)), ["c", "d"]);
        log.scroll_up(1);
        assert_eq!(texts(log.visible(2)), ["b", "c"]);
        log.scroll_up(100);
        assert_eq!(texts(log.visible(2)), ["a"]);
        log.scroll_down(100);
        assert_eq!(texts(log.visible(2)), ["c", "d"]);
    }
}
