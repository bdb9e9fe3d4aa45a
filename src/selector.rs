// Picks the watched categories out of the upstream category list.
use crate::config::AppConfig;
use crate::matcher;
use crate::model::Category;
use crate::normalizer;
use serde_json::Value;

/// Алиасы идентификатора категории.
const CATEGORY_ID_KEYS: [&str; 3] = ["id", "uuid", "category_id"];

/// Категория без id или названия бесполезна — молча пропускаем.
pub fn parse_category(raw: &Value) -> Option<Category> {
    let entry = raw.as_object()?;
    let id = normalizer::first_text(entry, &CATEGORY_ID_KEYS)?;
    let name = normalizer::first_text(entry, &["name"])?;
    Some(Category { id, name })
}

/// Оставляет категории, в названии которых есть оба ключевых слова.
/// Порядок входного списка сохраняется; пустой результат — валидный ответ.
pub fn select_categories(raw: &[Value], config: &AppConfig) -> Vec<Category> {
    raw.iter()
        .filter_map(parse_category)
        .filter(|c| matcher::matches_keywords(&c.name, &config.keyword_sale, &config.keyword_tobacco))
        .collect()
}
