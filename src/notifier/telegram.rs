// Telegram transport: delivers prepared text blocks, nothing else.
use crate::config::AppConfig;
use crate::model::NotifyError;
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::{info, warn};

pub struct TelegramNotifier {
    bot_token: String,
    chat_id: i64,
    client: Client,
}

impl TelegramNotifier {
    pub fn new(config: &AppConfig) -> Result<Self, NotifyError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;
        Ok(Self {
            bot_token: config.telegram_bot_token.clone(),
            chat_id: config.telegram_chat_id,
            client,
        })
    }

    /// Отправляет один текстовый блок в чат.
    pub async fn send_text(&self, text: &str) -> Result<(), NotifyError> {
        let url = format!("https://api.telegram.org/bot{}/sendMessage", self.bot_token);
        let payload = json!({
            "chat_id": self.chat_id,
            "text": text,
            "disable_web_page_preview": true,
        });

        let response = self.client.post(&url).json(&payload).send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_else(|_| "unknown".into());
            warn!("❌ Telegram error [{}]: {}", status, body);
            return Err(NotifyError::Api { status, body });
        }
        info!("✅ Telegram message sent [{}]", status);
        Ok(())
    }

    /// Блоки уходят по одному сообщению на блок, в исходном порядке.
    pub async fn send_blocks(&self, blocks: &[String]) -> Result<(), NotifyError> {
        for block in blocks {
            self.send_text(block).await?;
        }
        Ok(())
    }
}
