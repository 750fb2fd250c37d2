use crate::widget::ChatWidget;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE_LINES: u16 = 10;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    None,
    Submit,
    Quit,
}

/// Applies editing and scrolling keys to the widget. Enter is reported back
/// as `Submit` so the caller can run the submission as its own task.
pub async fn handle_chat_input(key: KeyEvent, widget: &ChatWidget) -> KeyAction {
    if key.kind != KeyEventKind::Press {
        return KeyAction::None;
    }

    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char(_)
            if key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            KeyAction::None
        }
        KeyCode::Char(c) => {
            widget.input().lock().await.push(c);
            KeyAction::None
        }
        KeyCode::Backspace => {
            widget.input().lock().await.pop();
            KeyAction::None
        }
        KeyCode::PageUp => {
            widget.container().lock().await.scroll_up(PAGE_LINES);
            KeyAction::None
        }
        KeyCode::PageDown => {
            widget.container().lock().await.scroll_down(PAGE_LINES);
            KeyAction::None
        }
        KeyCode::Up => {
            widget.container().lock().await.scroll_up(1);
            KeyAction::None
        }
        KeyCode::Down => {
            widget.container().lock().await.scroll_down(1);
            KeyAction::None
        }
        _ => KeyAction::None,
    }
}
