use crate::extractor::{self, RawEntry};
use crate::model::{Category, FetchError};
use crate::scraper::traits::CatalogApi;
use serde_json::Value;
use std::time::Duration;
use tokio::time::sleep;
use tracing::debug;

/// Краткий слепок структуры последнего ответа. Нужен только когда категория
/// внезапно отдаёт 0 товаров: по типу и ключам видно, как уехала схема.
#[derive(Debug, Default, Clone)]
pub struct ShapeDigest {
    pub top_level: Option<&'static str>,
    pub keys: Option<Vec<String>>,
    pub sample_keys: Option<Vec<String>>,
}

fn sorted_keys(entry: &serde_json::Map<String, Value>) -> Vec<String> {
    let mut keys: Vec<String> = entry.keys().cloned().collect();
    keys.sort();
    keys.truncate(25);
    keys
}

impl ShapeDigest {
    fn observe(&mut self, data: &Value) {
        match data {
            Value::Array(list) => {
                self.top_level = Some("list");
                self.keys = None;
                if let Some(first) = list.first().and_then(Value::as_object) {
                    self.sample_keys = Some(sorted_keys(first));
                }
            }
            Value::Object(map) => {
                self.top_level = Some("dict");
                self.keys = Some(sorted_keys(map));
                for value in map.values() {
                    if let Some(first) = value
                        .as_array()
                        .and_then(|list| list.first())
                        .and_then(Value::as_object)
                    {
                        self.sample_keys = Some(sorted_keys(first));
                        break;
                    }
                }
            }
            _ => {
                self.top_level = Some("scalar");
            }
        }
    }

    /// Одна строка для диагностического сообщения.
    pub fn summary(&self) -> String {
        format!(
            "resp_type={}, keys={:?}, sample_keys={:?}",
            self.top_level.unwrap_or("none"),
            self.keys,
            self.sample_keys
        )
    }
}

/// Выкачивает все страницы категории.
///
/// Остановка: пустая выборка (категория кончилась или схема не распознана —
/// различить нельзя, итог один) либо неполная страница. Между полными
/// страницами — короткая пауза, чтобы не душить API.
pub async fn fetch_all(
    api: &dyn CatalogApi,
    category: &Category,
    page_size: usize,
    page_delay: Duration,
) -> Result<(Vec<RawEntry>, ShapeDigest), FetchError> {
    let mut all = Vec::new();
    let mut offset = 0;
    let mut digest = ShapeDigest::default();

    loop {
        let data = api.fetch_products_page(category, page_size, offset).await?;
        digest.observe(&data);

        let rows = extractor::extract_records(&data);
        debug!(
            "Page offset={} for '{}': {} rows",
            offset,
            category.name,
            rows.len()
        );
        if rows.is_empty() {
            break;
        }

        let count = rows.len();
        all.extend(rows);

        if count < page_size {
            break;
        }
        offset += page_size;
        sleep(page_delay).await;
    }

    Ok((all, digest))
}
