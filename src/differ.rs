// Snapshot diffing: detects added products and price changes between runs.
//
// Исчезнувшие id намеренно не репортятся: пагинация периодически
// "теряет" страницы, и алерты об удалении были бы в основном ложными.
use crate::model::{ChangeSet, Snapshot};

/// Цены равны, если совпадают с точностью до копейки; обе отсутствующие —
/// тоже равны. Переход между "нет цены" и "есть цена" — изменение.
fn price_eq(a: Option<f64>, b: Option<f64>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(x), Some(y)) => (x * 100.0).round() as i64 == (y * 100.0).round() as i64,
        _ => false,
    }
}

/// Сравнивает текущий снапшот с предыдущим.
pub fn diff(previous: &Snapshot, current: &Snapshot) -> ChangeSet {
    let mut changes = ChangeSet::default();

    for (id, cur) in current {
        match previous.get(id) {
            None => changes.added.push(cur.clone()),
            Some(old) if !price_eq(old.price_rub, cur.price_rub) => {
                changes.changed.push((old.clone(), cur.clone()));
            }
            Some(_) => {}
        }
    }

    changes.added.sort_by_key(|p| p.name.to_lowercase());
    changes
        .changed
        .sort_by_key(|(_, cur)| cur.name.to_lowercase());
    changes
}
