//! Commentator backed by an OpenAI-compatible chat completions API.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::{Commentator, CommentaryError, CommentaryRequest};

/// Default API base URL.
pub const DEFAULT_COMMENTARY_BASE_URL: &str = "https://api.x.ai";

/// Default chat model.
pub const DEFAULT_COMMENTARY_MODEL: &str = "grok-beta";

#[derive(Clone)]
pub struct ChatCommentator {
    client: Client,
    base_url: String,
    model: String,
    api_key: String,
}

impl ChatCommentator {
    pub fn new(base_url: &str, model: &str, api_key: &str, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!(error = %e, "HTTP client build failed; commentary runs without a client timeout");
                Client::new()
            });

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            model: model.to_string(),
            api_key: api_key.to_string(),
        }
    }

    pub fn endpoint(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url)
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    stream: bool,
    temperature: f32,
    messages: Vec<ChatMessage>,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

pub(crate) fn build_prompt(request: &CommentaryRequest) -> String {
    format!(
        "You are the cheerleader of a word guessing game. A game has a title and a list of \
         words; players try to guess the words. Game title: {title}. Words: {words}. \
         Player: {player}. Guess: {guess}. Correct: {correct}. \
         Reply with a funny cheer of at most 10 words. Tease wrong guesses sarcastically, \
         and never reveal the right word when the guess is wrong.",
        title = request.game_title,
        words = request.words.join(","),
        player = request.player_name,
        guess = request.guessed_word,
        correct = request.is_correct,
    )
}

fn extract_text(response: ChatResponse) -> Result<String, CommentaryError> {
    let text = response
        .choices
        .into_iter()
        .next()
        .map(|c| c.message.content.trim().to_string())
        .ok_or_else(|| CommentaryError::InvalidResponse("no choices in response".to_string()))?;
    if text.is_empty() {
        return Err(CommentaryError::InvalidResponse("empty message".to_string()));
    }
    Ok(text)
}

#[async_trait]
impl Commentator for ChatCommentator {
    async fn comment(&self, request: &CommentaryRequest) -> Result<String, CommentaryError> {
        let body = ChatRequest {
            model: &self.model,
            stream: false,
            temperature: 0.0,
            messages: vec![ChatMessage {
                role: "system".to_string(),
                content: build_prompt(request),
            }],
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    CommentaryError::Timeout
                } else {
                    CommentaryError::RequestFailed(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(CommentaryError::RequestFailed(format!(
                "status {}",
                response.status()
            )));
        }

        let parsed: ChatResponse = response
            .json()
            .await
            .map_err(|e| CommentaryError::InvalidResponse(e.to_string()))?;

        extract_text(parsed)
    }
}
