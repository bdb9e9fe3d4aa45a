// Envelope-tolerant extraction of record lists from upstream JSON.
//
// Формат ответа каталога нигде не задокументирован и уже менялся:
// то голый список, то обёртка {"rows": [...]}, то вообще неожиданный ключ.
// Поэтому вместо схемы — приоритетный перебор вариантов, который никогда
// не падает и в худшем случае возвращает пустой список.
use serde_json::{Map, Value};

/// Одна сырая запись каталога; набор ключей не контрактный.
pub type RawEntry = Map<String, Value>;

/// Частые ключи-контейнеры, в порядке приоритета.
const CONTAINER_KEYS: [&str; 5] = ["rows", "products", "items", "data", "result"];

/// Алиасы идентификатора товара.
pub const ID_KEYS: [&str; 3] = ["id", "uuid", "product_id"];

/// Алиасы названия товара.
pub const NAME_KEYS: [&str; 2] = ["name", "title"];

/// Непустое значение в смысле "поле заполнено".
pub(crate) fn field_filled(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Эвристика "похоже на товар": есть заполненное имя и какой-то id.
pub(crate) fn looks_like_record(entry: &RawEntry) -> bool {
    let filled = |keys: &[&str]| {
        keys.iter()
            .any(|k| entry.get(*k).map(field_filled).unwrap_or(false))
    };
    filled(&NAME_KEYS) && filled(&ID_KEYS)
}

fn object_items(list: &[Value]) -> Vec<RawEntry> {
    list.iter().filter_map(|v| v.as_object().cloned()).collect()
}

/// Непустой список, начинающийся с объекта — кандидат на список записей.
fn plausible_list(value: &Value) -> Option<&Vec<Value>> {
    let list = value.as_array()?;
    if !list.is_empty() && list[0].is_object() {
        Some(list)
    } else {
        None
    }
}

/// Достаёт список записей из ответа произвольной формы.
pub fn extract_records(data: &Value) -> Vec<RawEntry> {
    if let Value::Array(list) = data {
        return object_items(list);
    }
    let Some(map) = data.as_object() else {
        return Vec::new();
    };

    for key in CONTAINER_KEYS {
        if let Some(list) = map.get(key).and_then(plausible_list) {
            return object_items(list);
        }
    }

    // Знакомых ключей нет — берём самый "товарный" список среди всех значений.
    let mut best: Option<&Vec<Value>> = None;
    let mut best_score = 0usize;
    for value in map.values() {
        if let Some(list) = plausible_list(value) {
            let score = list
                .iter()
                .take(10)
                .filter(|v| v.as_object().map(looks_like_record).unwrap_or(false))
                .count();
            if score > best_score {
                best_score = score;
                best = Some(list);
            }
        }
    }
    best.map(|list| object_items(list)).unwrap_or_default()
}
