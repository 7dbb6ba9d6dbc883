//! Потоковый writer строк файла обмена.
//!
//! Предоставляет [`RecordWriter`] для записи строк фиксированной ширины
//! в любой тип, реализующий [`Write`].

use std::io::{self, BufWriter, Write};

/// Потоковый writer строк.
///
/// Каждая строка завершается символом `\n`. Строки с переводом строки
/// внутри отклоняются: они сломали бы классификацию по типу записи.
///
/// # Пример
///
/// ```
/// use remessa::line::RecordWriter;
///
/// let mut output = Vec::new();
/// let mut writer = RecordWriter::new(&mut output);
/// writer.write_line("100HEADER").unwrap();
/// writer.write_line("900TRAILER").unwrap();
/// writer.flush().unwrap();
/// drop(writer);
///
/// assert_eq!(output, b"100HEADER\n900TRAILER\n");
/// ```
pub struct RecordWriter<W: Write> {
    inner: BufWriter<W>,
    /// Счётчик записанных строк.
    records_written: usize,
}

impl<W: Write> RecordWriter<W> {
    /// Создаёт новый writer.
    pub fn new(writer: W) -> Self {
        Self { inner: BufWriter::new(writer), records_written: 0 }
    }

    /// Записывает одну строку.
    pub fn write_line(&mut self, line: &str) -> io::Result<()> {
        if line.contains(['\n', '\r']) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("line {} contains a line break", self.records_written + 1),
            ));
        }
        self.inner.write_all(line.as_bytes())?;
        self.inner.write_all(b"\n")?;
        self.records_written += 1;
        Ok(())
    }

    /// Записывает несколько строк.
    pub fn write_all<I, S>(&mut self, lines: I) -> io::Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for line in lines {
            self.write_line(line.as_ref())?;
        }
        Ok(())
    }

    /// Принудительно сбрасывает буфер.
    pub fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }

    /// Возвращает количество записанных строк.
    #[must_use]
    pub fn records_written(&self) -> usize {
        self.records_written
    }

    /// Извлекает внутренний writer (с предварительным flush).
    pub fn into_inner(self) -> Result<W, io::IntoInnerError<BufWriter<W>>> {
        self.inner.into_inner()
    }
}
