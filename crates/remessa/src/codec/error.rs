//! Ошибки кодека полей.

use thiserror::Error;

/// Поле фиксированной ширины, которое не удалось закодировать или декодировать.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FieldError {
    /// Текст не является корректным значением ожидаемого вида.
    #[error("Malformed {kind} field '{value}': {reason}")]
    Malformed {
        /// Вид поля (например, "date", "float").
        kind: &'static str,
        /// Исходный текст поля.
        value: String,
        /// Описание ошибки.
        reason: String,
    },

    /// В поле с подразумеваемой точкой меньше цифр, чем знаков после запятой.
    #[error("Field '{value}' has fewer than {precision} digits for its implied decimal point")]
    ShorterThanPrecision {
        /// Исходный текст поля.
        value: String,
        /// Число подразумеваемых знаков после запятой.
        precision: u32,
    },

    /// NaN или бесконечность передана числовому кодировщику.
    #[error("Cannot encode non-finite value {0}")]
    NotFinite(f64),

    /// Значение не помещается в объявленную ширину поля.
    #[error("Value '{value}' does not fit into {width} characters")]
    Overflow {
        /// Размещаемое значение.
        value: String,
        /// Объявленная ширина поля.
        width: usize,
    },

    /// Запрошенный срез выходит за пределы строки.
    #[error("Field at {start}..{end} is out of range for a line of {len} characters")]
    OutOfRange {
        /// Первый символ поля (0-based).
        start: usize,
        /// Позиция после последнего символа.
        end: usize,
        /// Длина строки в символах.
        len: usize,
    },
}

impl FieldError {
    pub(crate) fn malformed(kind: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self::Malformed { kind, value: value.to_string(), reason: reason.into() }
    }
}

/// Сокращённый тип Result для операций кодека.
pub type Result<T> = std::result::Result<T, FieldError>;
