use crate::constants::{BOT_MESSAGE_CLASS, USER_MESSAGE_CLASS};
use chrono::{DateTime, Local};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use textwrap::wrap;

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Origin {
    User,
    Bot,
}

impl Origin {
    pub fn class_name(self) -> &'static str {
        match self {
            Origin::User => USER_MESSAGE_CLASS,
            Origin::Bot => BOT_MESSAGE_CLASS,
        }
    }

    fn label(self) -> &'static str {
        match self {
            Origin::User => "You",
            Origin::Bot => "Bot",
        }
    }
}

#[derive(Debug, Clone)]
pub struct ChatMessage {
    text: String,
    origin: Origin,
    timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn new(text: impl Into<String>, origin: Origin) -> Self {
        Self {
            text: text.into(),
            origin,
            timestamp: Local::now(),
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn origin(&self) -> Origin {
        self.origin
    }

    /// Text is emitted as raw spans and never parsed for markup.
    pub fn render(&self, width: u16) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        let style = self.get_base_style();
        let indent = if self.origin == Origin::User { "  " } else { "" };

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("┌─".to_string(), style),
            Span::styled(
                self.timestamp.format("%H:%M").to_string(),
                style.add_modifier(Modifier::DIM),
            ),
            Span::styled(" ".to_string(), style),
            Span::styled(
                self.origin.label().to_string(),
                style.add_modifier(Modifier::BOLD),
            ),
        ]));

        let wrap_width = (width as usize).saturating_sub(indent.len() + 2).max(1);
        for wrapped_line in wrap(&self.text, wrap_width) {
            lines.push(Line::from(vec![
                Span::styled(indent.to_string(), style),
                Span::styled("│ ".to_string(), style),
                Span::styled(wrapped_line.into_owned(), style),
            ]));
        }

        lines.push(Line::from(vec![
            Span::styled(indent.to_string(), style),
            Span::styled("╰─".to_string(), style),
        ]));

        lines
    }

    fn get_base_style(&self) -> Style {
        Style::default().fg(match self.origin {
            Origin::User => Color::Rgb(255, 223, 128),
            Origin::Bot => Color::Rgb(144, 238, 144),
        })
    }
}
