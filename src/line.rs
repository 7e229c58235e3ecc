use crate::utils::{QUOTED_FIELD_DELIMITER, strip_outer_quotes, unescape_quotes};

/// Исправляет строку данных.
///
/// Строка, обернутая во внешние кавычки, разворачивается: содержимое делится по
/// `","`, в каждой части `""` заменяется на `"`, части склеиваются через запятую.
/// Остальные строки возвращаются как есть.
///
/// ```rust
/// use registrations_fixer::fix_line;
///
/// assert_eq!(
///     fix_line(r#""John","john@example.com","Active""#),
///     "John,john@example.com,Active"
/// );
/// assert_eq!(fix_line("Jane,jane@example.com,Active"), "Jane,jane@example.com,Active");
/// ```
pub fn fix_line(line: &str) -> String {
    match strip_outer_quotes(line) {
        Some(inner) => inner
            .split(QUOTED_FIELD_DELIMITER)
            .map(unescape_quotes)
            .collect::<Vec<_>>()
            .join(","),
        None => line.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escaped_quotes_are_unescaped() {
        let got = fix_line(r#""She said ""hi""","x""#);
        assert_eq!(got, r#"She said "hi",x"#);
    }

    #[test]
    fn test_fields_are_not_trimmed() {
        let got = fix_line(r#""  padded ","a, b""#);
        assert_eq!(got, "  padded ,a, b");
    }

    #[test]
    fn test_unwrapped_lines_pass_through() {
        for line in ["", "plain", "\"open only", "close only\"", "1,\"two\",3"] {
            assert_eq!(fix_line(line), line);
        }
    }

    #[test]
    fn test_wrapped_single_field() {
        assert_eq!(fix_line("\"\""), "");
        assert_eq!(fix_line("\"solo\""), "solo");
    }
}
