use crate::{
    config::Config,
    errors::{ChatError, ChatResult},
    logging::log_api_call,
};
use log::debug;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Instant;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    question: &'a str,
}

/// Body returned by the chat endpoint. Only `answer` is required.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    pub answer: String,
    #[serde(default)]
    pub message: Option<String>,
}

/// Posts questions to the chat endpoint. Cloning shares the connection pool.
#[derive(Debug, Clone)]
pub struct ChatClient {
    http: Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(config: &Config) -> Self {
        Self::with_endpoint(config.endpoint_url())
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends one question and returns the parsed reply. Network errors, HTTP
    /// error statuses and unusable bodies all come back as `RequestFailed`.
    pub async fn ask(&self, question: &str) -> ChatResult<ChatReply> {
        let started = Instant::now();
        let summary = format!("question ({} chars)", question.chars().count());

        let response = match self
            .http
            .post(&self.endpoint)
            .json(&ChatRequest { question })
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                log_api_call(&self.endpoint, &summary, None, started.elapsed().as_millis());
                return Err(e.into());
            }
        };

        let status = response.status();
        log_api_call(
            &self.endpoint,
            &summary,
            Some(status.as_u16()),
            started.elapsed().as_millis(),
        );

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(ChatError::request_failed(format!(
                "server returned {} - {}",
                status, error_text
            )));
        }

        let reply: ChatReply = response.json().await?;
        if let Some(message) = &reply.message {
            debug!("server status message: {}", message);
        }
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use wiremock::{
        matchers::{body_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client_for(server: &MockServer) -> ChatClient {
        ChatClient::with_endpoint(format!("{}/api/chat", server.uri()))
    }

    #[tokio::test]
    async fn test_ask_posts_question_as_json() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({ "question": "what is rust?" })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "message": "success",
                "answer": "A systems language."
            })))
            .expect(1)
            .mount(&mock_server)
            .await;

        let reply = client_for(&mock_server).ask("what is rust?").await.unwrap();
        assert_eq!(reply.answer, "A systems language.");
        assert_eq!(reply.message.as_deref(), Some("success"));
    }

    #[tokio::test]
    async fn test_ask_rejects_error_status() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).ask("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_ask_rejects_body_without_answer() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/api/chat"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "message": "success" })))
            .mount(&mock_server)
            .await;

        let err = client_for(&mock_server).ask("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::RequestFailed(_)));
    }

    #[tokio::test]
    async fn test_ask_reports_connection_failure() {
        let port = {
            let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
            listener.local_addr().unwrap().port()
        };
        let client = ChatClient::with_endpoint(format!("http://127.0.0.1:{}/api/chat", port));

        let err = client.ask("hi").await.unwrap_err();
        assert!(matches!(err, ChatError::RequestFailed(_)));
    }
}
