// Builds canonical product records out of raw catalog entries.
use crate::extractor::{self, RawEntry};
use crate::model::ProductRecord;
use serde_json::Value;

/// Алиасы цены, в порядке приоритета: сначала основной "price",
/// потом варианты из разных ревизий API.
const PRICE_KEYS: [&str; 7] = [
    "price",
    "salePrice",
    "minPrice",
    "retail_price",
    "retailPrice",
    "price_value",
    "priceValue",
];

fn numeric(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Извлекает цену в рублях из записи.
///
/// Первый подходящий кандидат решает всё: объект с полем "value" или
/// просто число. Если его значение не удаётся привести к числу,
/// остальные кандидаты уже не рассматриваются.
///
/// Порог 1000: у источника нет признака единицы измерения, и значения
/// от 1000 почти всегда оказываются копейками. Это непроверенная
/// бизнес-эвристика, сохранена как есть.
pub fn normalize_price(entry: &RawEntry) -> Option<f64> {
    let mut value = None;
    for key in PRICE_KEYS {
        let Some(candidate) = entry.get(key) else {
            continue;
        };
        if let Some(nested) = candidate.as_object() {
            if let Some(inner) = nested.get("value") {
                value = numeric(inner);
                break;
            }
        } else if candidate.is_number() {
            value = candidate.as_f64();
            break;
        }
    }

    let v = value?;
    let rub = if v >= 1000.0 { v / 100.0 } else { v };
    Some((rub * 100.0).round() / 100.0)
}

/// Первое заполненное поле из списка алиасов, приведённое к строке и обрезанное.
pub(crate) fn first_text(entry: &RawEntry, keys: &[&str]) -> Option<String> {
    let raw = keys
        .iter()
        .filter_map(|k| entry.get(*k))
        .find(|v| extractor::field_filled(v))?;
    let text = match raw {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => return None,
    };
    let trimmed = text.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Собирает каноническую запись; без id или названия запись молча отбрасывается.
pub fn normalize_product(entry: &RawEntry, category_name: &str) -> Option<ProductRecord> {
    let id = first_text(entry, &extractor::ID_KEYS)?;
    let name = first_text(entry, &extractor::NAME_KEYS)?;
    Some(ProductRecord {
        id,
        name,
        price_rub: normalize_price(entry),
        category: category_name.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn entry(value: serde_json::Value) -> RawEntry {
        value.as_object().cloned().expect("object literal")
    }

    #[test]
    fn large_price_is_treated_as_kopecks() {
        assert_eq!(normalize_price(&entry(json!({"price": 15000}))), Some(150.0));
    }

    #[test]
    fn nested_value_field_is_used() {
        let e = entry(json!({"price": {"value": 9990}}));
        assert_eq!(normalize_price(&e), Some(99.9));
    }

    #[test]
    fn small_price_is_already_rubles() {
        assert_eq!(normalize_price(&entry(json!({"price": 50}))), Some(50.0));
    }

    #[test]
    fn no_candidates_means_no_price() {
        assert_eq!(normalize_price(&entry(json!({}))), None);
    }

    #[test]
    fn alias_order_is_respected() {
        let e = entry(json!({"salePrice": 200, "price": 100}));
        assert_eq!(normalize_price(&e), Some(100.0));
    }

    #[test]
    fn string_prices_are_not_picked_directly() {
        // голая строка кандидатом не считается, но строка внутри "value" — да
        assert_eq!(normalize_price(&entry(json!({"price": "150"}))), None);
        let e = entry(json!({"price": {"value": "9990"}}));
        assert_eq!(normalize_price(&e), Some(99.9));
    }

    #[test]
    fn unparsable_nested_value_stops_the_probe() {
        let e = entry(json!({"price": {"value": "n/a"}, "salePrice": 500}));
        assert_eq!(normalize_price(&e), None);
    }

    #[test]
    fn valid_entry_is_normalized_and_trimmed() {
        let e = entry(json!({"id": " 42 ", "name": " Сигары ", "price": 12345}));
        let record = normalize_product(&e, "Распродажа табак").expect("record");
        assert_eq!(record.id, "42");
        assert_eq!(record.name, "Сигары");
        assert_eq!(record.price_rub, Some(123.45));
        assert_eq!(record.category, "Распродажа табак");
    }

    #[test]
    fn entry_without_name_is_dropped() {
        let e = entry(json!({"id": "42", "name": ""}));
        assert!(normalize_product(&e, "c").is_none());
    }

    #[test]
    fn entry_without_id_is_dropped() {
        let e = entry(json!({"title": "A"}));
        assert!(normalize_product(&e, "c").is_none());
    }

    #[test]
    fn id_and_name_aliases_are_accepted() {
        let e = entry(json!({"uuid": "u-1", "title": "B", "price": 70}));
        let record = normalize_product(&e, "c").expect("record");
        assert_eq!(record.id, "u-1");
        assert_eq!(record.name, "B");
        assert_eq!(record.price_rub, Some(70.0));
    }

    #[test]
    fn numeric_id_is_stringified() {
        let e = entry(json!({"id": 7, "name": "A"}));
        assert_eq!(normalize_product(&e, "c").expect("record").id, "7");
    }
}
