// Confusable-aware keyword matching for category names.

/// Заменяет латинские буквы, неотличимые на глаз от кириллических,
/// на кириллические. Названия категорий в каталоге мешают оба алфавита,
/// и без этой замены фильтр по ключевым словам молча ничего не находит.
fn fold_confusables(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'a' => 'а',
            'c' => 'с',
            'e' => 'е',
            'o' => 'о',
            'p' => 'р',
            'x' => 'х',
            'y' => 'у',
            'k' => 'к',
            'm' => 'м',
            't' => 'т',
            'b' => 'в',
            'A' => 'А',
            'C' => 'С',
            'E' => 'Е',
            'O' => 'О',
            'P' => 'Р',
            'X' => 'Х',
            'Y' => 'У',
            'K' => 'К',
            'M' => 'М',
            'T' => 'Т',
            'B' => 'В',
            other => other,
        })
        .collect()
}

/// Приводит метку к сравниваемому виду: сначала замена двойников, затем lowercase.
pub fn canonical(label: &str) -> String {
    fold_confusables(label).to_lowercase()
}

/// true, если оба ключевых слова входят в метку после нормализации.
pub fn matches_keywords(label: &str, keyword_a: &str, keyword_b: &str) -> bool {
    let folded = canonical(label);
    folded.contains(&canonical(keyword_a)) && folded.contains(&canonical(keyword_b))
}
