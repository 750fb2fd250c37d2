use crate::chat_surface::{InputField, MessageList, Node};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

pub fn draw_chat(f: &mut Frame, container: &mut MessageList, input: &InputField, endpoint: &str) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Min(1),
            Constraint::Length(3),
            Constraint::Length(1),
        ])
        .split(f.area());

    draw_messages(f, container, chunks[0]);
    draw_input(f, input, chunks[1]);
    draw_footer(f, endpoint, chunks[2]);
}

fn draw_messages(f: &mut Frame, container: &mut MessageList, area: Rect) {
    let mut lines = Vec::new();
    for node in container.nodes() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        match node {
            Node::Message(message) => lines.extend(message.render(area.width)),
            Node::Indicator(indicator) => lines.push(indicator.render()),
        }
    }

    let (top, scroll_limit) = scroll_window(lines.len(), area.height, container.scroll_back());
    container.set_scroll_limit(scroll_limit);

    let visible: Vec<Line> = lines
        .into_iter()
        .skip(top)
        .take(area.height as usize)
        .collect();
    f.render_widget(Paragraph::new(visible), area);
}

/// First visible line index and the furthest the view may scroll back.
fn scroll_window(total_lines: usize, height: u16, scroll_back: u16) -> (usize, u16) {
    let max_scroll = total_lines.saturating_sub(height as usize);
    let top = max_scroll - (scroll_back as usize).min(max_scroll);
    (top, u16::try_from(max_scroll).unwrap_or(u16::MAX))
}

fn draw_input(f: &mut Frame, input: &InputField, area: Rect) {
    let visible_width = area.width.saturating_sub(2);
    let text_width = input.value().width() as u16;
    let scroll_offset = text_width.saturating_sub(visible_width.saturating_sub(1));

    let paragraph = Paragraph::new(input.value())
        .style(Style::default().fg(Color::LightYellow))
        .block(Block::default().borders(Borders::ALL).title("Message"))
        .scroll((0, scroll_offset));
    f.render_widget(paragraph, area);

    f.set_cursor_position((area.x + 1 + text_width - scroll_offset, area.y + 1));
}

fn draw_footer(f: &mut Frame, endpoint: &str, area: Rect) {
    let footer = Line::from(vec![
        Span::styled(endpoint, Style::default().fg(Color::DarkGray)),
        Span::raw("  "),
        Span::styled(
            "Enter send · PgUp/PgDn scroll · Esc quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    f.render_widget(Paragraph::new(footer), area);
}
