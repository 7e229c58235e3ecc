//! Проход по документу целиком: чтение, исправление заголовка и строк, запись.
//!
//! Эвристика разворачивания кавычек спрятана за трейтом [`Repair`], так что ее
//! можно заменить полноценным CSV-парсером, не трогая [`fix_file`].

use std::fs;

use tracing::{debug, info};

use crate::error::FixError;
use crate::types::{FixPaths, FixReport};
use crate::utils::split_lines;

/// Трейт, который должны реализовывать все способы починки строк документа.
pub trait Repair {
    /// Приводит первую строку документа к чистому заголовку.
    fn repair_header(&self, line: &str) -> String;
    /// Исправляет строку данных.
    fn repair_line(&self, line: &str) -> String;
}

/// Снимает внешнюю обертку из кавычек и раскрывает `""`.
#[derive(Debug, Default, Clone, Copy)]
pub struct QuoteWrapperRepair;

impl Repair for QuoteWrapperRepair {
    fn repair_header(&self, line: &str) -> String {
        crate::header::normalize_header(line)
    }

    fn repair_line(&self, line: &str) -> String {
        crate::line::fix_line(line)
    }
}

fn repair_lines(repair: &impl Repair, text: &str) -> Result<Vec<String>, FixError> {
    let lines = split_lines(text);
    let Some((header, rows)) = lines.split_first() else {
        return Err(FixError::EmptyInput);
    };

    let mut fixed = Vec::with_capacity(lines.len());
    fixed.push(repair.repair_header(header));
    debug!(header = %fixed[0], "normalized header");
    fixed.extend(rows.iter().map(|line| repair.repair_line(line)));
    debug!(lines = fixed.len(), "repaired document");
    Ok(fixed)
}

/// Исправляет документ заданным способом [`Repair`].
///
/// ## Возвращаемое значение
///
/// Строки результата склеены через `\n` без завершающего перевода строки;
/// их столько же, сколько строк во входном тексте.
///
/// ## Ошибки
///
/// [`FixError::EmptyInput`], если в тексте нет ни одной строки.
pub fn fix_document_with(repair: &impl Repair, text: &str) -> Result<String, FixError> {
    Ok(repair_lines(repair, text)?.join("\n"))
}

/// Исправляет документ эвристикой [`QuoteWrapperRepair`].
///
/// # Пример
///
/// ```rust
/// use registrations_fixer::fix_document;
///
/// let data = "\"\"\"Name\"\",\"\"Email\"\"\"\r\n\"John\",\"john@example.com\"\r\n";
/// let fixed = fix_document(data).expect("Ошибка исправления");
/// assert_eq!(fixed, "Name,Email\nJohn,john@example.com");
/// ```
pub fn fix_document(text: &str) -> Result<String, FixError> {
    fix_document_with(&QuoteWrapperRepair, text)
}

/// Читает `paths.input`, исправляет его и записывает результат в `paths.output`.
///
/// Файл результата создается или перезаписывается. Если чтение или исправление
/// не удалось, ничего не записывается.
///
/// # Пример
///
/// ```no_run
/// use registrations_fixer::{fix_file, types::FixPaths};
///
/// let report = fix_file(&FixPaths::default()).expect("Ошибка исправления");
/// println!("Wrote {}", report.output.display());
/// ```
pub fn fix_file(paths: &FixPaths) -> Result<FixReport, FixError> {
    fix_file_with(&QuoteWrapperRepair, paths)
}

/// То же, что [`fix_file`], но строки чинятся заданным способом [`Repair`].
pub fn fix_file_with(repair: &impl Repair, paths: &FixPaths) -> Result<FixReport, FixError> {
    let text = fs::read_to_string(&paths.input).map_err(|source| FixError::Read {
        path: paths.input.clone(),
        source,
    })?;
    debug!(path = %paths.input.display(), bytes = text.len(), "read input");

    let fixed = repair_lines(repair, &text)?;
    fs::write(&paths.output, fixed.join("\n")).map_err(|source| FixError::Write {
        path: paths.output.clone(),
        source,
    })?;
    info!(path = %paths.output.display(), lines = fixed.len(), "wrote fixed csv");

    Ok(FixReport {
        output: paths.output.clone(),
        lines: fixed.len(),
    })
}
