use crate::config::AppConfig;
use crate::model::{Category, FetchError};
use crate::scraper::traits::CatalogApi;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, COOKIE, HeaderMap, HeaderValue, REFERER};
use serde_json::Value;
use std::time::Duration;
use tracing::warn;

const UA: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) \
                  AppleWebKit/537.36 (KHTML, like Gecko) \
                  Chrome/120.0.0.0 Safari/537.36";

/// Клиент desktop-API каталога b2b.moysklad.
pub struct SkladClient {
    client: Client,
    base_url: String,
    shop_token: String,
}

impl SkladClient {
    pub fn new(config: &AppConfig) -> Result<Self, FetchError> {
        let mut headers = HeaderMap::new();
        headers.insert(
            ACCEPT,
            HeaderValue::from_static("application/json, text/plain, */*"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            HeaderValue::from_static("ru-RU,ru;q=0.9,en-US;q=0.8,en;q=0.7"),
        );
        match HeaderValue::from_str(&config.referer()) {
            Ok(value) => {
                headers.insert(REFERER, value);
            }
            Err(e) => warn!("Bad referer header, skipping: {}", e),
        }
        if !config.shop_cookie.is_empty() {
            match HeaderValue::from_str(&config.shop_cookie) {
                Ok(value) => {
                    headers.insert(COOKIE, value);
                }
                Err(e) => warn!("Bad cookie header, skipping: {}", e),
            }
        }

        let client = Client::builder()
            .user_agent(UA)
            .default_headers(headers)
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            shop_token: config.shop_token.clone(),
        })
    }

    async fn get_json(&self, request: reqwest::RequestBuilder) -> Result<Value, FetchError> {
        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }
        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl CatalogApi for SkladClient {
    async fn fetch_categories(&self) -> Result<Vec<Value>, FetchError> {
        let url = format!("{}/{}/categories.json", self.base_url, self.shop_token);
        let data = self.get_json(self.client.get(&url)).await?;

        // список приходит то голым, то завёрнутым в {"rows": [...]}
        Ok(match data {
            Value::Array(list) => list,
            Value::Object(mut map) => match map.remove("rows") {
                Some(Value::Array(list)) => list,
                _ => Vec::new(),
            },
            _ => Vec::new(),
        })
    }

    async fn fetch_products_page(
        &self,
        category: &Category,
        limit: usize,
        offset: usize,
    ) -> Result<Value, FetchError> {
        let url = format!("{}/{}/products.json", self.base_url, self.shop_token);
        let request = self
            .client
            .get(&url)
            .query(&[
                ("category", category.name.as_str()),
                ("category_id", category.id.as_str()),
                ("search", ""),
            ])
            .query(&[("limit", limit), ("offset", offset)]);
        self.get_json(request).await
    }
}
