//! # registrations_fixer
//!
//! Библиотека для починки выгрузки регистраций в CSV, у которой заголовок и строки
//! данных завернуты во внешнюю пару кавычек.
//!
//! Крейт предоставляет:
//! * [`normalize_header`]: чистый заголовок вида `name1,name2,...`;
//! * [`fix_line`]: разворачивание строки данных и раскрытие `""`;
//! * [`fix_document`] / [`fix_file`]: проход по документу или файлу целиком.
//!
//! ## Быстрый старт
//!
//! ```rust
//! use registrations_fixer::fix_document;
//!
//! let data = "\"Id,\"\"Name\"\"\"\n\"1\",\"John\"";
//! let fixed = fix_document(data).expect("Ошибка исправления");
//! assert_eq!(fixed, "Id,Name\n1,John");
//! ```
//!
//! ## Обработка ошибок
//! [`fix_document`] и [`fix_file`] возвращают [`Result`] с ошибкой [`error::FixError`]:
//! пустой вход, ошибка чтения или ошибка записи.

pub mod error;
pub mod fixer;
pub mod types;

mod header;
mod line;
mod utils;

pub use header::normalize_header;
pub use line::fix_line;
pub use utils::split_lines;

pub use fixer::{
    QuoteWrapperRepair, Repair, fix_document, fix_document_with, fix_file, fix_file_with,
};
