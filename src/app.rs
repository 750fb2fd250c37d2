use crate::chat_view::draw_chat;
use crate::key_handlers::{handle_chat_input, KeyAction};
use crate::widget::ChatWidget;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use log::{debug, info, warn};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;

const TICK_RATE: Duration = Duration::from_millis(120);

pub struct App {
    pub widget: ChatWidget,
    pub should_quit: bool,
}

impl App {
    pub fn new(widget: ChatWidget) -> App {
        App {
            widget,
            should_quit: false,
        }
    }

    /// Main loop. Key events and redraw ticks are handled on this task; only
    /// the request half of a submission is spawned, so typing stays
    /// responsive while a reply is pending.
    pub async fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        let mut events = EventStream::new();
        let mut ticker = tokio::time::interval(TICK_RATE);

        while !self.should_quit {
            self.draw(terminal).await?;

            tokio::select! {
                _ = ticker.tick() => {
                    self.widget.container().lock().await.update_spinners();
                }
                maybe_event = events.next() => match maybe_event {
                    Some(Ok(Event::Key(key))) => self.on_key(key).await,
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        warn!("Terminal event error: {}", e);
                        return Err(e);
                    }
                    None => self.should_quit = true,
                },
            }
        }

        info!("Quitting");
        Ok(())
    }

    async fn on_key(&mut self, key: crossterm::event::KeyEvent) {
        match handle_chat_input(key, &self.widget).await {
            KeyAction::Submit => {
                // Input is read and cleared here, before the next key is handled.
                let Some(question) = self.widget.take_question().await else {
                    return;
                };
                let widget = self.widget.clone();
                tokio::spawn(async move {
                    let outcome = widget.settle_question(&question).await;
                    debug!("Submission finished: {:?}", outcome);
                });
            }
            KeyAction::Quit => self.should_quit = true,
            KeyAction::None => {}
        }
    }

    async fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> std::io::Result<()> {
        let input = self.widget.input().lock().await;
        let mut container = self.widget.container().lock().await;
        let endpoint = self.widget.client().endpoint();
        terminal.draw(|f| draw_chat(f, &mut container, &input, endpoint))?;
        Ok(())
    }
}
