use crate::constants::{LOADING_CLASS, LOADING_INDICATOR_ID, TYPING_TEXT};
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

const SPINNER_FRAMES: [&str; 4] = ["◐", "◓", "◑", "◒"];

/// The "Bot is typing..." node shown while a request is in flight.
#[derive(Debug, Clone)]
pub struct PendingIndicator {
    spinner_idx: usize,
}

impl PendingIndicator {
    pub fn new() -> Self {
        Self { spinner_idx: 0 }
    }

    pub fn id(&self) -> &'static str {
        LOADING_INDICATOR_ID
    }

    pub fn class_name(&self) -> &'static str {
        LOADING_CLASS
    }

    pub fn text(&self) -> &'static str {
        TYPING_TEXT
    }

    pub fn update_spinner(&mut self) {
        self.spinner_idx = self.spinner_idx.wrapping_add(1);
    }

    pub fn render(&self) -> Line<'static> {
        let frame = SPINNER_FRAMES[self.spinner_idx % SPINNER_FRAMES.len()];
        Line::from(vec![
            Span::styled(frame, Style::default().fg(Color::Gray)),
            Span::raw(" "),
            Span::styled(
                TYPING_TEXT,
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ),
        ])
    }
}

impl Default for PendingIndicator {
    fn default() -> Self {
        Self::new()
    }
}
