//! Классифицированные строки файла обмена.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Длина кода типа записи в начале строки.
pub const RECORD_TYPE_LEN: usize = 3;

/// Код типа записи — первые три символа строки.
///
/// Код не проверяется по списку известных типов: классификация чисто
/// позиционная. Для строки короче трёх символов кодом считается вся строка.
///
/// # Пример
///
/// ```
/// use remessa::record::RecordType;
///
/// assert_eq!(RecordType::from_line("100HEADER").as_str(), "100");
/// assert_eq!(RecordType::from_line("9").as_str(), "9");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordType(String);

impl RecordType {
    /// Извлекает код из начала строки (по символам, а не байтам).
    #[must_use]
    pub fn from_line(line: &str) -> Self {
        let end = line.char_indices().nth(RECORD_TYPE_LEN).map_or(line.len(), |(i, _)| i);
        Self(line[..end].to_string())
    }

    /// Возвращает код в виде строки.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RecordType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl PartialEq<&str> for RecordType {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Непустая строка файла вместе с её типом записи.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineRecord {
    /// Строка без символа конца строки.
    pub raw_line: String,
    /// Первые три символа строки.
    pub record_type: RecordType,
}

impl LineRecord {
    /// Классифицирует строку. Перевод строки должен быть уже отрезан.
    #[must_use]
    pub fn new(raw_line: impl Into<String>) -> Self {
        let raw_line = raw_line.into();
        let record_type = RecordType::from_line(&raw_line);
        Self { raw_line, record_type }
    }
}
