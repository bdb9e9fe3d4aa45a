use serde::Deserialize;
use std::fs;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_chat_id: i64,
    pub shop_token: String,
    /// Сессионный cookie каталога; без него товары обычно приходят пустыми.
    #[serde(default)]
    pub shop_cookie: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_state_file")]
    pub state_file: String,
    #[serde(default = "default_keyword_sale")]
    pub keyword_sale: String,
    #[serde(default = "default_keyword_tobacco")]
    pub keyword_tobacco: String,
    #[serde(default = "default_work_start_hour")]
    pub work_start_hour: u32,
    #[serde(default = "default_work_end_hour")]
    pub work_end_hour: u32,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    #[serde(default = "default_page_delay_ms")]
    pub page_delay_ms: u64,
}

impl AppConfig {
    pub fn referer(&self) -> String {
        format!("https://b2b.moysklad.ru/{}/catalog", self.shop_token)
    }
}

fn default_base_url() -> String {
    "https://b2b.moysklad.ru/desktop-api".to_string()
}

fn default_state_file() -> String {
    "state.json".to_string()
}

fn default_keyword_sale() -> String {
    "распродажа".to_string()
}

fn default_keyword_tobacco() -> String {
    "табак".to_string()
}

fn default_work_start_hour() -> u32 {
    8
}

fn default_work_end_hour() -> u32 {
    18
}

fn default_page_size() -> usize {
    100
}

fn default_page_delay_ms() -> u64 {
    150
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}
