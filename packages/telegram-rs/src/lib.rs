//! Minimal Telegram Bot API client.
//!
//! Only `sendMessage` is supported. Messages are always sent in HTML parse
//! mode with link previews disabled, which is what the job digest expects.

use std::time::Duration;

pub mod models;
use reqwest::Client;

use crate::models::{ApiResponse, SendMessageRequest, SentMessage};

const BASE_URL: &str = "https://api.telegram.org";

/// Hard per-message ceiling enforced by Telegram.
pub const MAX_MESSAGE_LENGTH: usize = 4096;

#[derive(Debug, thiserror::Error)]
pub enum TelegramError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Telegram returned HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Telegram API error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TelegramError>;

#[derive(Debug, Clone)]
pub struct TelegramOptions {
    pub bot_token: String,
    pub chat_id: String,
}

#[derive(Debug, Clone)]
pub struct TelegramService {
    options: TelegramOptions,
    client: Client,
    base_url: String,
}

impl TelegramService {
    pub fn new(options: TelegramOptions) -> Result<Self> {
        let client = Client::builder().timeout(Duration::from_secs(30)).build()?;

        Ok(Self {
            options,
            client,
            base_url: BASE_URL.to_string(),
        })
    }

    /// Point the client at a different API host (local Bot API server, test double).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    pub fn chat_id(&self) -> &str {
        &self.options.chat_id
    }

    fn send_message_url(&self) -> String {
        format!(
            "{base}/bot{token}/sendMessage",
            base = self.base_url,
            token = self.options.bot_token
        )
    }

    pub async fn send_message(&self, text: &str) -> Result<SentMessage> {
        let body = SendMessageRequest {
            chat_id: &self.options.chat_id,
            text,
            parse_mode: "HTML",
            disable_web_page_preview: true,
        };

        let response = self
            .client
            .post(self.send_message_url())
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            tracing::error!(status = %status, "Telegram rejected sendMessage");
            return Err(TelegramError::Status {
                status: status.as_u16(),
                message,
            });
        }

        let api_resp: ApiResponse<SentMessage> = response.json().await?;
        let sent = into_result(api_resp)?;
        tracing::info!(
            message_id = sent.message_id,
            length = text.chars().count(),
            "Telegram message sent"
        );

        Ok(sent)
    }
}

fn into_result<T>(resp: ApiResponse<T>) -> Result<T> {
    match (resp.ok, resp.result) {
        (true, Some(result)) => Ok(result),
        (true, None) => Err(TelegramError::Api("response missing result".to_string())),
        (false, _) => Err(TelegramError::Api(
            resp.description
                .unwrap_or_else(|| format!("error code {}", resp.error_code.unwrap_or_default())),
        )),
    }
}
