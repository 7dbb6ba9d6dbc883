//! Потоковый reader строк файла обмена.
//!
//! Предоставляет [`RecordReader`] — итератор, который читает
//! классифицированные строки из любого источника, реализующего [`Read`].

use std::io::{self, BufRead, BufReader, Read};

use crate::record::LineRecord;

/// Потоковый reader строк.
///
/// Пустые строки пропускаются, символы `\n` и `\r\n` отрезаются.
/// После первой ошибки итератор завершается.
///
/// # Пример
///
/// ```
/// use std::io::Cursor;
///
/// use remessa::line::RecordReader;
///
/// let reader = RecordReader::new(Cursor::new("100HEADER\n\n200DETAIL\n"));
/// let codes: Vec<String> =
///     reader.map(|r| r.unwrap().record_type.to_string()).collect();
/// assert_eq!(codes, ["100", "200"]);
/// ```
pub struct RecordReader<R> {
    inner: BufReader<R>,
    buf: String,
    /// Счётчик прочитанных записей.
    records_read: usize,
    /// Флаг достижения EOF или ошибки.
    finished: bool,
}

impl<R: Read> RecordReader<R> {
    /// Создаёт новый reader.
    ///
    /// Входной reader оборачивается в [`BufReader`] для построчного чтения.
    pub fn new(reader: R) -> Self {
        Self { inner: BufReader::new(reader), buf: String::new(), records_read: 0, finished: false }
    }

    /// Возвращает количество прочитанных непустых строк.
    #[must_use]
    pub fn records_read(&self) -> usize {
        self.records_read
    }
}

impl<R: Read> Iterator for RecordReader<R> {
    type Item = io::Result<LineRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        loop {
            self.buf.clear();
            match self.inner.read_line(&mut self.buf) {
                Ok(0) => {
                    self.finished = true;
                    return None;
                }
                Ok(_) => {
                    let line = self.buf.strip_suffix('\n').unwrap_or(self.buf.as_str());
                    let line = line.strip_suffix('\r').unwrap_or(line);
                    if line.is_empty() {
                        continue;
                    }
                    self.records_read += 1;
                    return Some(Ok(LineRecord::new(line)));
                }
                Err(e) => {
                    self.finished = true; // Остановка при ошибке
                    return Some(Err(e));
                }
            }
        }
    }
}
