use crate::{
    api::ChatClient,
    chat_message::{ChatMessage, Origin},
    chat_surface::{InputField, MessageList, Node},
    constants::{FALLBACK_REPLY, LOADING_INDICATOR_ID},
    status_indicator::PendingIndicator,
};
use log::{error, info};
use std::sync::Arc;
use tokio::sync::Mutex;

/// How a call to [`ChatWidget::submit_user_message`] ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Input was empty after trimming; nothing happened.
    Ignored,
    Answered,
    Failed,
}

/// The chat controller. Holds its slots for its whole lifetime; clones share
/// the same slots, so each submission can run as its own task.
///
/// Submissions are not serialized: a second one may start while the first is
/// still pending, and replies are appended in whatever order they settle.
///
/// Lock order is `input` before `container`.
#[derive(Debug, Clone)]
pub struct ChatWidget {
    container: Arc<Mutex<MessageList>>,
    input: Arc<Mutex<InputField>>,
    client: ChatClient,
}

impl ChatWidget {
    pub fn new(client: ChatClient) -> Self {
        Self {
            container: Arc::new(Mutex::new(MessageList::new())),
            input: Arc::new(Mutex::new(InputField::new())),
            client,
        }
    }

    pub fn container(&self) -> &Arc<Mutex<MessageList>> {
        &self.container
    }

    pub fn input(&self) -> &Arc<Mutex<InputField>> {
        &self.input
    }

    pub fn client(&self) -> &ChatClient {
        &self.client
    }

    pub async fn append_message(&self, text: &str, origin: Origin) {
        let mut container = self.container.lock().await;
        container.append(Node::Message(ChatMessage::new(text, origin)));
        container.scroll_to_bottom();
    }

    /// Not idempotent: two calls without a hide in between leave two
    /// indicators in the list.
    pub async fn show_pending(&self) {
        let mut container = self.container.lock().await;
        container.append(Node::Indicator(PendingIndicator::new()));
        container.scroll_to_bottom();
    }

    pub async fn hide_pending(&self) {
        self.container
            .lock()
            .await
            .remove_by_id(LOADING_INDICATOR_ID);
    }

    pub async fn submit_user_message(&self) -> SubmitOutcome {
        match self.take_question().await {
            Some(question) => self.settle_question(&question).await,
            None => SubmitOutcome::Ignored,
        }
    }

    /// First half of a submission, run directly in the Enter handler: trims
    /// the input and, when it is not blank, appends it as a user message,
    /// clears the field and shows the indicator. Returns the question to send.
    pub async fn take_question(&self) -> Option<String> {
        let mut input = self.input.lock().await;
        let question = input.value().trim().to_string();
        if question.is_empty() {
            return None;
        }
        self.append_message(&question, Origin::User).await;
        input.clear();
        drop(input);

        self.show_pending().await;
        Some(question)
    }

    /// Second half of a submission: sends `question` and replaces the
    /// indicator with the answer or the fallback reply.
    pub async fn settle_question(&self, question: &str) -> SubmitOutcome {
        info!("Sending question to {}", self.client.endpoint());

        match self.client.ask(question).await {
            Ok(reply) => {
                self.hide_pending().await;
                self.append_message(&reply.answer, Origin::Bot).await;
                SubmitOutcome::Answered
            }
            Err(e) => {
                error!("Error: {}", e);
                self.hide_pending().await;
                self.append_message(FALLBACK_REPLY, Origin::Bot).await;
                SubmitOutcome::Failed
            }
        }
    }
}
