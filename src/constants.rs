// Surface ids
pub const CHAT_CONTAINER_ID: &str = "chat-container";
pub const USER_INPUT_ID: &str = "user-input";
pub const LOADING_INDICATOR_ID: &str = "loading-indicator";

// Style classes
pub const MESSAGE_CLASS: &str = "message";
pub const USER_MESSAGE_CLASS: &str = "user-message";
pub const BOT_MESSAGE_CLASS: &str = "bot-message";
pub const LOADING_CLASS: &str = "loading";

// Display texts
pub const TYPING_TEXT: &str = "Bot is typing...";
pub const FALLBACK_REPLY: &str = "Sorry, there was an error processing your request.";

// API Constants
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_API_PATH: &str = "/api/chat";
pub const DEFAULT_LOG_LEVEL: &str = "info";
