//! The widget's slots: the scrollable message list and the text input.
//! The pending indicator lives inside the message list under a fixed id.

use crate::chat_message::{ChatMessage, Origin};
use crate::constants::{CHAT_CONTAINER_ID, MESSAGE_CLASS, USER_INPUT_ID};
use crate::status_indicator::PendingIndicator;

#[derive(Debug, Clone)]
pub enum Node {
    Message(ChatMessage),
    Indicator(PendingIndicator),
}

impl Node {
    pub fn id(&self) -> Option<&'static str> {
        match self {
            Node::Message(_) => None,
            Node::Indicator(indicator) => Some(indicator.id()),
        }
    }

    /// Space separated class list, e.g. `message user-message`.
    pub fn class_list(&self) -> String {
        match self {
            Node::Message(message) => {
                format!("{} {}", MESSAGE_CLASS, message.origin().class_name())
            }
            Node::Indicator(indicator) => indicator.class_name().to_string(),
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Node::Message(message) => message.text(),
            Node::Indicator(indicator) => indicator.text(),
        }
    }
}

/// Append-only list of nodes. Scroll position is kept as a distance from the
/// bottom and never exceeds the limit recorded by the last layout.
#[derive(Debug)]
pub struct MessageList {
    nodes: Vec<Node>,
    scroll_back: u16,
    scroll_limit: u16,
}

impl Default for MessageList {
    fn default() -> Self {
        Self {
            nodes: Vec::new(),
            scroll_back: 0,
            scroll_limit: u16::MAX,
        }
    }
}

impl MessageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &'static str {
        CHAT_CONTAINER_ID
    }

    pub fn append(&mut self, node: Node) {
        self.nodes.push(node);
    }

    /// Removes the first node with `id`, mirroring a document id lookup.
    pub fn remove_by_id(&mut self, id: &str) -> Option<Node> {
        let index = self.nodes.iter().position(|n| n.id() == Some(id))?;
        Some(self.nodes.remove(index))
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn messages(&self) -> impl Iterator<Item = &ChatMessage> {
        self.nodes.iter().filter_map(|n| match n {
            Node::Message(message) => Some(message),
            Node::Indicator(_) => None,
        })
    }

    pub fn messages_from(&self, origin: Origin) -> Vec<&str> {
        self.messages()
            .filter(|m| m.origin() == origin)
            .map(|m| m.text())
            .collect()
    }

    pub fn indicator_count(&self) -> usize {
        self.nodes
            .iter()
            .filter(|n| matches!(n, Node::Indicator(_)))
            .count()
    }

    pub fn update_spinners(&mut self) {
        for node in &mut self.nodes {
            if let Node::Indicator(indicator) = node {
                indicator.update_spinner();
            }
        }
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back.saturating_add(lines).min(self.scroll_limit);
    }

    /// Records how far the laid out history can scroll and pulls the current
    /// position back inside it.
    pub fn set_scroll_limit(&mut self, max_scroll: u16) {
        self.scroll_limit = max_scroll;
        self.scroll_back = self.scroll_back.min(max_scroll);
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll_back = self.scroll_back.saturating_sub(lines);
    }

    pub fn scroll_back(&self) -> u16 {
        self.scroll_back
    }

    pub fn is_at_bottom(&self) -> bool {
        self.scroll_back == 0
    }
}

#[derive(Debug, Default)]
pub struct InputField {
    value: String,
}

impl InputField {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> &'static str {
        USER_INPUT_ID
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    pub fn push(&mut self, c: char) {
        self.value.push(c);
    }

    pub fn pop(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_by_id_takes_first_match_only() {
        let mut list = MessageList::new();
        list.append(Node::Message(ChatMessage::new("hi", Origin::User)));
        list.append(Node::Indicator(PendingIndicator::new()));
        list.append(Node::Indicator(PendingIndicator::new()));

        assert!(list.remove_by_id("loading-indicator").is_some());
        assert_eq!(list.indicator_count(), 1);
        assert!(list.remove_by_id("loading-indicator").is_some());
        assert!(list.remove_by_id("loading-indicator").is_none());
        assert_eq!(list.nodes().len(), 1);
    }

    #[test]
    fn test_class_list_per_node_kind() {
        let user = Node::Message(ChatMessage::new("a", Origin::User));
        let bot = Node::Message(ChatMessage::new("b", Origin::Bot));
        let pending = Node::Indicator(PendingIndicator::new());

        assert_eq!(user.class_list(), "message user-message");
        assert_eq!(bot.class_list(), "message bot-message");
        assert_eq!(pending.class_list(), "loading");
        assert_eq!(pending.text(), "Bot is typing...");
    }

    #[test]
    fn test_scroll_saturates() {
        let mut list = MessageList::new();
        list.scroll_down(3);
        assert!(list.is_at_bottom());
        list.scroll_up(5);
        list.scroll_down(2);
        assert_eq!(list.scroll_back(), 3);
        list.scroll_to_bottom();
        assert!(list.is_at_bottom());
    }

    #[test]
    fn test_scroll_stays_within_laid_out_limit() {
        let mut list = MessageList::new();
        list.scroll_up(50);
        list.set_scroll_limit(8);
        assert_eq!(list.scroll_back(), 8);

        list.scroll_up(10);
        assert_eq!(list.scroll_back(), 8);
        list.scroll_down(1);
        assert_eq!(list.scroll_back(), 7);
    }

    #[test]
    fn test_input_editing() {
        let mut input = InputField::new();
        input.push('h');
        input.push('i');
        input.push('!');
        input.pop();
        assert_eq!(input.value(), "hi");
        input.clear();
        assert_eq!(input.value(), "");
    }
}
