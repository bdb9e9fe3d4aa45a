// Pure text layout for Telegram reports: money formatting, line chunking,
// full-list and change rendering. Отправка — не здесь.
use crate::model::{ChangeSet, StoredProduct};

/// Бюджет одного сообщения в символах (лимит Telegram — 4096, оставляем запас).
pub const MAX_CHUNK_CHARS: usize = 3500;

/// Сколько позиций показываем в списке изменений, остальное — одной строкой "...и ещё N".
pub const MAX_LISTED_CHANGES: usize = 60;

/// "12 345.67 ₽" — пробел как разделитель тысяч.
pub fn format_money(price_rub: Option<f64>) -> String {
    let Some(value) = price_rub else {
        return "цена не найдена".to_string();
    };
    let cents = (value * 100.0).round() as i64;
    let sign = if cents < 0 { "-" } else { "" };
    let cents = cents.abs();
    let whole = (cents / 100).to_string();
    let frac = cents % 100;

    let mut grouped = String::new();
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(digit);
    }
    format!("{sign}{grouped}.{frac:02} ₽")
}

/// Режет список строк на блоки, не превышающие `max_chars` символов.
///
/// Блок растёт построчно; если следующая строка не влезает — блок
/// закрывается. Строка длиннее бюджета не режется и уходит отдельным
/// блоком как есть.
pub fn chunk_lines(lines: &[String], max_chars: usize) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut current: Vec<&str> = Vec::new();
    let mut current_len = 0usize;

    for line in lines {
        let add_len = line.chars().count() + 1;
        if !current.is_empty() && current_len + add_len > max_chars {
            chunks.push(current.join("\n"));
            current.clear();
            current_len = 0;
        }
        current.push(line);
        current_len += add_len;
    }
    if !current.is_empty() {
        chunks.push(current.join("\n"));
    }
    chunks
}

/// Полный отчёт первого запуска: по секции на категорию.
pub fn render_full_list(
    categories: &[(String, Vec<StoredProduct>)],
    keyword_sale: &str,
    keyword_tobacco: &str,
) -> Vec<String> {
    let mut lines = vec![format!(
        "🧾 Актуальный список (категории: {} + {}):",
        keyword_sale, keyword_tobacco
    )];
    for (name, items) in categories {
        lines.push(String::new());
        lines.push(format!("📁 {} — {} шт.", name, items.len()));
        for item in items {
            lines.push(format!("• {} — {}", item.name, format_money(item.price_rub)));
        }
    }
    chunk_lines(&lines, MAX_CHUNK_CHARS)
}

/// Отчёт об изменениях: новые товары и изменившиеся цены.
pub fn render_changes(changes: &ChangeSet) -> Vec<String> {
    let mut chunks = Vec::new();

    if !changes.added.is_empty() {
        let mut lines = vec![format!("🆕 Добавили ({}):", changes.added.len())];
        for item in changes.added.iter().take(MAX_LISTED_CHANGES) {
            lines.push(format!(
                "• [{}] {} — {}",
                item.category,
                item.name,
                format_money(item.price_rub)
            ));
        }
        if changes.added.len() > MAX_LISTED_CHANGES {
            lines.push(format!(
                "...и ещё {}",
                changes.added.len() - MAX_LISTED_CHANGES
            ));
        }
        chunks.extend(chunk_lines(&lines, MAX_CHUNK_CHARS));
    }

    if !changes.changed.is_empty() {
        let mut lines = vec![format!("💸 Цена изменилась ({}):", changes.changed.len())];
        for (old, cur) in changes.changed.iter().take(MAX_LISTED_CHANGES) {
            lines.push(format!(
                "• [{}] {}: {} → {}",
                cur.category,
                cur.name,
                format_money(old.price_rub),
                format_money(cur.price_rub)
            ));
        }
        if changes.changed.len() > MAX_LISTED_CHANGES {
            lines.push(format!(
                "...и ещё {}",
                changes.changed.len() - MAX_LISTED_CHANGES
            ));
        }
        chunks.extend(chunk_lines(&lines, MAX_CHUNK_CHARS));
    }

    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(name: &str, price: Option<f64>) -> StoredProduct {
        StoredProduct {
            name: name.to_string(),
            price_rub: price,
            category: "Распродажа табак".to_string(),
        }
    }

    #[test]
    fn money_is_grouped_with_spaces() {
        assert_eq!(format_money(Some(150.0)), "150.00 ₽");
        assert_eq!(format_money(Some(9990.5)), "9 990.50 ₽");
        assert_eq!(format_money(Some(1234567.89)), "1 234 567.89 ₽");
    }

    #[test]
    fn missing_price_has_a_placeholder() {
        assert_eq!(format_money(None), "цена не найдена");
    }

    #[test]
    fn short_input_stays_in_one_chunk() {
        let lines = vec!["a".to_string(), "b".to_string()];
        assert_eq!(chunk_lines(&lines, 3500), vec!["a\nb".to_string()]);
    }

    #[test]
    fn long_input_is_split_within_budget() {
        let lines: Vec<String> = (0..200).map(|i| format!("строка номер {}", i)).collect();
        let chunks = chunk_lines(&lines, 200);
        assert!(chunks.len() > 1);
        for chunk in &chunks {
            assert!(chunk.chars().count() <= 200);
        }
        // ничего не потеряли
        let total: usize = chunks.iter().map(|c| c.lines().count()).sum();
        assert_eq!(total, 200);
    }

    #[test]
    fn oversized_line_becomes_its_own_chunk() {
        let lines = vec![
            "short".to_string(),
            "x".repeat(500),
            "tail".to_string(),
        ];
        let chunks = chunk_lines(&lines, 100);
        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[1], "x".repeat(500));
    }

    #[test]
    fn budget_counts_characters_not_bytes() {
        // кириллица: 2 байта на символ, бюджет должен мерить символы
        let lines = vec!["ш".repeat(60), "ш".repeat(60)];
        let chunks = chunk_lines(&lines, 130);
        assert_eq!(chunks.len(), 1);
    }

    #[test]
    fn full_list_renders_sections_per_category() {
        let categories = vec![(
            "Распродажа табак".to_string(),
            vec![product("Сигары", Some(150.0)), product("Трубка", None)],
        )];
        let chunks = render_full_list(&categories, "распродажа", "табак");
        assert_eq!(chunks.len(), 1);
        let text = &chunks[0];
        assert!(text.contains("📁 Распродажа табак — 2 шт."));
        assert!(text.contains("• Сигары — 150.00 ₽"));
        assert!(text.contains("• Трубка — цена не найдена"));
    }

    #[test]
    fn change_report_truncates_after_sixty_entries() {
        let changes = ChangeSet {
            added: (0..75).map(|i| product(&format!("Товар {}", i), Some(10.0))).collect(),
            changed: Vec::new(),
        };
        let chunks = render_changes(&changes);
        let text = chunks.join("\n");
        assert!(text.contains("🆕 Добавили (75):"));
        assert!(text.contains("...и ещё 15"));
        // 60 позиций + заголовок + строка-остаток
        assert_eq!(text.lines().count(), 62);
    }

    #[test]
    fn change_report_shows_old_and_new_price() {
        let changes = ChangeSet {
            added: Vec::new(),
            changed: vec![(product("Сигары", Some(150.0)), product("Сигары", Some(120.0)))],
        };
        let text = render_changes(&changes).join("\n");
        assert!(text.contains("150.00 ₽ → 120.00 ₽"));
    }

    #[test]
    fn empty_changeset_renders_nothing() {
        assert!(render_changes(&ChangeSet::default()).is_empty());
    }
}
