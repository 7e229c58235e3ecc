use std::path::PathBuf;

/// Файл выгрузки регистраций, который нужно исправить.
pub const DEFAULT_INPUT_PATH: &str = "public/Registrations Report.csv";
/// Куда по умолчанию записывается исправленный CSV.
pub const DEFAULT_OUTPUT_PATH: &str = "public/Registrations Report.fixed.csv";

/// Пара путей: исходный файл и файл с исправленным результатом.
#[derive(Debug, Clone, PartialEq)]
pub struct FixPaths {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl FixPaths {
    pub fn new(input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        FixPaths {
            input: input.into(),
            output: output.into(),
        }
    }
}

impl Default for FixPaths {
    fn default() -> Self {
        FixPaths::new(DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH)
    }
}

/// Итог успешного запуска.
#[derive(Debug, Clone, PartialEq)]
pub struct FixReport {
    pub output: PathBuf,
    pub lines: usize,
}
