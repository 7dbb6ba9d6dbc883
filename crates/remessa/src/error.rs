//! Модуль ошибок работы с файлами обмена.

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::codec::FieldError;

/// Главная ошибка крейта.
///
/// Ошибки конфигурации (`InvalidDirectory`, `InvalidTemplate`,
/// `InvalidFileName`) возникают сразу при задании некорректного значения.
/// Операционные ошибки содержат путь к файлу для диагностики.
#[derive(Debug, Error)]
pub enum EdiError {
    // === Ошибки конфигурации ===
    /// Путь не существует или не является директорией.
    #[error("'{}' is not a directory", .0.display())]
    InvalidDirectory(PathBuf),

    /// Шаблон имени файла без подстановки `%s`.
    #[error("File name template '{0}' must contain the '%s' placeholder")]
    InvalidTemplate(String),

    /// Недопустимый токен имени файла.
    #[error("Invalid file name token '{token}': {reason}")]
    InvalidFileName {
        /// Переданный токен.
        token: String,
        /// Причина отказа.
        reason: &'static str,
    },

    // === Операционные ошибки ===
    /// Файл с таким именем уже существует; перезапись запрещена.
    #[error("File already exists at {}", .0.display())]
    AlreadyExists(PathBuf),

    /// Файл не найден.
    #[error("File not found at {}", .0.display())]
    NotFound(PathBuf),

    /// Ошибка создания или записи файла.
    #[error("Failed to write {}: {source}", .url.display())]
    Write {
        /// Путь к файлу.
        url: PathBuf,
        /// Исходная ошибка ввода/вывода.
        #[source]
        source: io::Error,
    },

    /// Ошибка чтения файла.
    #[error("Failed to read {}: {source}", .url.display())]
    Read {
        /// Путь к файлу.
        url: PathBuf,
        /// Исходная ошибка ввода/вывода.
        #[source]
        source: io::Error,
    },

    /// Не удалось переместить файл.
    #[error("Failed to move {} to {}: {source}", .from.display(), .to.display())]
    Move {
        /// Исходный путь.
        from: PathBuf,
        /// Путь назначения.
        to: PathBuf,
        /// Исходная ошибка ввода/вывода.
        #[source]
        source: io::Error,
    },

    /// В директории назначения уже есть файл с тем же именем.
    #[error("Another file with the same name exists at {}", .0.display())]
    DestinationConflict(PathBuf),

    // === Ошибки полей ===
    /// Поле фиксированной ширины не удалось закодировать или декодировать.
    #[error("Malformed field: {0}")]
    MalformedField(#[from] FieldError),
}

/// Удобный alias для Result с EdiError.
pub type Result<T> = std::result::Result<T, EdiError>;
