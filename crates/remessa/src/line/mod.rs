//! Сборка и разрезание строк фиксированной ширины.
//!
//! Макеты записей определяет вызывающий код. Модуль даёт ему два примитива:
//! дополнение закодированных значений до ширины поля ([`LineBuilder`]) и
//! извлечение поля обратно из строки ([`field`]). Ширина и смещения
//! считаются в символах, а не в байтах.

mod reader;
mod writer;

pub use reader::RecordReader;
pub use writer::RecordWriter;

use crate::codec::{FieldError, Result};

/// Собирает одну строку фиксированной ширины поле за полем.
///
/// # Пример
///
/// ```
/// use remessa::codec::{encode_float, encode_string};
/// use remessa::line::LineBuilder;
///
/// let mut line = LineBuilder::new();
/// line.alpha("200", 3)?
///     .numeric(&encode_float(19.9, 2)?, 8)?
///     .alpha(&encode_string("João"), 6)?;
/// assert_eq!(line.finish(), "20000001990Joao  ");
/// # Ok::<(), remessa::codec::FieldError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct LineBuilder {
    line: String,
    width: usize,
}

impl LineBuilder {
    /// Создаёт пустую строку.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет строку цифр, дополненную нулями слева до `width`.
    pub fn numeric(&mut self, digits: &str, width: usize) -> Result<&mut Self> {
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(FieldError::malformed("numeric", digits, "expected digits only"));
        }
        self.pad(digits, width, '0', true)
    }

    /// Добавляет текст, дополненный пробелами справа до `width`.
    pub fn alpha(&mut self, text: &str, width: usize) -> Result<&mut Self> {
        if text.contains(['\n', '\r']) {
            return Err(FieldError::malformed("alphanumeric", text, "contains a line break"));
        }
        self.pad(text, width, ' ', false)
    }

    /// Добавляет `width` копий символа `fill`.
    pub fn filler(&mut self, fill: char, width: usize) -> &mut Self {
        self.line.extend(std::iter::repeat_n(fill, width));
        self.width += width;
        self
    }

    /// Текущая ширина строки в символах.
    #[must_use]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Возвращает собранную строку без символа конца строки.
    #[must_use]
    pub fn finish(self) -> String {
        self.line
    }

    fn pad(&mut self, value: &str, width: usize, fill: char, left: bool) -> Result<&mut Self> {
        let len = value.chars().count();
        if len > width {
            return Err(FieldError::Overflow { value: value.to_string(), width });
        }

        let padding = std::iter::repeat_n(fill, width - len);
        if left {
            self.line.extend(padding);
            self.line.push_str(value);
        } else {
            self.line.push_str(value);
            self.line.extend(padding);
        }
        self.width += width;
        Ok(self)
    }
}

/// Вырезает поле из `width` символов, начиная с символа `start`.
///
/// # Пример
///
/// ```
/// use remessa::line::field;
///
/// assert_eq!(field("200000123SILVA", 3, 6).unwrap(), "000123");
/// assert!(field("200", 2, 5).is_err());
/// ```
pub fn field(line: &str, start: usize, width: usize) -> Result<&str> {
    let len = || line.chars().count();
    let Some(end) = start.checked_add(width) else {
        return Err(FieldError::OutOfRange { start, end: usize::MAX, len: len() });
    };
    let mut offsets = line.char_indices().map(|(i, _)| i).chain(std::iter::once(line.len()));

    let from = offsets.nth(start);
    let to = if width == 0 { from } else { offsets.nth(width - 1) };
    match (from, to) {
        (Some(from), Some(to)) => Ok(&line[from..to]),
        _ => Err(FieldError::OutOfRange { start, end, len: len() }),
    }
}
