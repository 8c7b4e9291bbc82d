use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Focus};

const VERSION: &str = env!("CARGO_PKG_VERSION");
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

pub fn draw(f: &mut Frame, app: &App) {
    let [header, prompt, input, button, log, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Min(5),
        Constraint::Length(1),
    ])
    .areas(f.area());

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("Mail Host Lookup", Style::default().add_modifier(Modifier::BOLD)),
            Span::styled(format!(" v{VERSION}"), Style::default().fg(Color::DarkGray)),
        ])),
        header,
    );
    f.render_widget(
        Paragraph::new("Enter an email address to lookup its mail host:"),
        prompt,
    );
    f.render_widget(app.input.widget(), input);
    render_button(f, button, app);
    render_log(f, log, app);
    render_status(f, status, app);
}

fn render_button(f: &mut Frame, area: Rect, app: &App) {
    let style = if app.focus == Focus::Button {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    f.render_widget(Paragraph::new(Span::styled("[ Lookup ]", style)), area);
}

fn render_log(f: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().borders(Borders::ALL).title(" Output ");
    let height = block.inner(area).height as usize;
    let lines: Vec<Line> = app
        .log
        .visible(height)
        .iter()
        .map(|line| Line::from(Span::styled(line.text.as_str(), line.kind.style())))
        .collect();
    f.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = Vec::new();
    if app.pending.is_some() {
        spans.push(Span::styled(
            format!("{} looking up... ", SPINNER[app.spinner % SPINNER.len()]),
            Style::default().fg(Color::Yellow),
        ));
    }
    let quit = if app.focus == Focus::Input { "Ctrl+Q" } else { "q/Ctrl+Q" };
    spans.push(Span::styled(
        format!("Tab: focus  Enter: lookup  Esc: cancel  ↑/↓: scroll  {quit}: quit"),
        Style::default().fg(Color::DarkGray),
    ));
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
