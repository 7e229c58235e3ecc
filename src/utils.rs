/// Разделитель полей внутри строки, обернутой во внешние кавычки.
pub(crate) const QUOTED_FIELD_DELIMITER: &str = "\",\"";

/// Снимает внешнюю пару кавычек, если строка начинается и заканчивается на `"`.
///
/// Строка из единственной кавычки считается обернутой и дает пустое содержимое.
pub(crate) fn strip_outer_quotes(line: &str) -> Option<&str> {
    if !(line.starts_with('"') && line.ends_with('"')) {
        return None;
    }
    Some(line.get(1..line.len() - 1).unwrap_or(""))
}

pub(crate) fn unescape_quotes(s: &str) -> String {
    s.replace("\"\"", "\"")
}

/// Разбивает текст на строки по универсальному соглашению о переводах строк.
///
/// `\n`, `\r\n` и одиночный `\r` завершают строку, сами разделители отбрасываются.
/// Завершающий перевод строки не порождает лишней пустой строки, а пустой текст
/// дает пустой список.
///
/// ```rust
/// use registrations_fixer::split_lines;
///
/// assert_eq!(split_lines("a\r\nb\nc\rd\n"), vec!["a", "b", "c", "d"]);
/// assert!(split_lines("").is_empty());
/// ```
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&text[start..i]);
                i += 1;
                if bytes.get(i) == Some(&b'\n') {
                    i += 1;
                }
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < bytes.len() {
        lines.push(&text[start..]);
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strip_outer_quotes() {
        assert_eq!(strip_outer_quotes("\"abc\""), Some("abc"));
        assert_eq!(strip_outer_quotes("\"\""), Some(""));
        assert_eq!(strip_outer_quotes("\""), Some(""));
        assert_eq!(strip_outer_quotes("abc\""), None);
        assert_eq!(strip_outer_quotes(""), None);
    }

    #[test]
    fn test_unescape_quotes() {
        assert_eq!(unescape_quotes("She said \"\"hi\"\""), "She said \"hi\"");
        assert_eq!(unescape_quotes("\"\"\""), "\"\"");
    }

    #[test]
    fn test_split_lines_keeps_blank_lines() {
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert_eq!(split_lines("a\n\n"), vec!["a", ""]);
    }

    #[test]
    fn test_split_lines_mixed_terminators() {
        assert_eq!(split_lines("x\r\ny\rz"), vec!["x", "y", "z"]);
        assert_eq!(split_lines("\r\r\n"), vec!["", ""]);
    }
}
