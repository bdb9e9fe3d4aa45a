use crate::model::{Category, FetchError};
use serde_json::Value;

/// Доступ к каталожному API; за трейтом — чтобы пагинатор
/// можно было гонять на заглушке без сети.
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Сырой список категорий магазина.
    async fn fetch_categories(&self) -> Result<Vec<Value>, FetchError>;

    /// Одна страница товаров категории; форма ответа не гарантируется.
    async fn fetch_products_page(
        &self,
        category: &Category,
        limit: usize,
        offset: usize,
    ) -> Result<Value, FetchError>;
}
