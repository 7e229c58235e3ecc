use crate::utils::{QUOTED_FIELD_DELIMITER, strip_outer_quotes, unescape_quotes};

/// Приводит строку заголовка к виду `name1,name2,...`.
///
/// Если строка целиком обернута в кавычки, внешняя пара снимается, содержимое
/// делится по `","`, а первый фрагмент, если в нем остались запятые, дополнительно
/// делится по обычным запятым. Каждое имя очищается от экранированных кавычек,
/// пробелов и крайних `"`.
///
/// Иначе строка делится по запятым, а у каждого имени срезаются пробелы и
/// окружающие кавычки.
///
/// # Пример
///
/// ```rust
/// use registrations_fixer::normalize_header;
///
/// let header = r#""ID,""First Name"",""Email""""#;
/// assert_eq!(normalize_header(header), "ID,First Name,Email");
///
/// assert_eq!(normalize_header(" \"Name\" , Email "), "Name,Email");
/// ```
pub fn normalize_header(line: &str) -> String {
    let Some(inner) = strip_outer_quotes(line) else {
        return line
            .split(',')
            .map(|name| name.trim().trim_matches('"'))
            .collect::<Vec<_>>()
            .join(",");
    };

    let mut candidates = inner.split(QUOTED_FIELD_DELIMITER);
    let mut names: Vec<String> = Vec::new();
    if let Some(first) = candidates.next() {
        // Внешние кавычки могли поглотить неэкранированный префикс
        names.extend(first.split(',').map(clean_name));
    }
    names.extend(candidates.map(clean_name));
    names.join(",")
}

fn clean_name(raw: &str) -> String {
    unescape_quotes(raw)
        .trim()
        .trim_matches('"')
        .trim()
        .to_string()
}
