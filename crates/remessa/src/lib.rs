//! Библиотека для работы с файлами обмена с банком (remessa / retorno).
//!
//! Файл обмена — текстовый файл из строк фиксированной ширины, каждая из
//! которых начинается с трёхсимвольного кода типа записи. Крейт состоит из
//! трёх частей:
//!
//! - [`codec`] — кодирование типизированных значений (даты, суммы с неявной
//!   десятичной точкой, текст) в поля фиксированной ширины и обратно
//! - [`file`] — жизненный цикл одного файла: исключительное создание,
//!   чтение с классификацией строк, перемещение, удаление
//! - [`directory`] — перечисление и очистка директории с защищёнными именами
//!
//! # Быстрый старт
//!
//! ```
//! use chrono::NaiveDate;
//! use remessa::prelude::*;
//!
//! let dir = tempfile::tempdir()?;
//! let file = RecordFile::with_template(dir.path(), FileNameTemplate::new("CB%s")?)?;
//!
//! let mut header = LineBuilder::new();
//! header
//!     .alpha("100", 3)?
//!     .numeric(&encode_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap()), 6)?;
//! let mut detail = LineBuilder::new();
//! detail.alpha("200", 3)?.numeric(&encode_float(1500.75, 2)?, 10)?;
//!
//! file.save_lines([header.finish(), detail.finish()], "0001")?;
//!
//! let records = file.read("0001")?;
//! assert_eq!(records[0].record_type, "100");
//! let amount = decode_float(field(&records[1].raw_line, 3, 10)?, 2)?;
//! assert_eq!(amount, 1500.75);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod codec;
pub mod directory;
pub mod error;
pub mod file;
pub mod line;
pub mod record;
pub mod template;

pub use error::{EdiError, Result};

/// Часто используемые типы и функции.
pub mod prelude {
    pub use crate::{
        codec::*,
        directory::DirectoryGuard,
        error::{EdiError, Result},
        file::RecordFile,
        line::{LineBuilder, RecordReader, RecordWriter, field},
        record::{LineRecord, RecordType},
        template::FileNameTemplate,
    };
}
