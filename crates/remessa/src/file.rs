//! Жизненный цикл файла обмена на диске.
//!
//! Путь к файлу: `directory / template(token) + ".txt"`. Сохранённый файл
//! никогда не перезаписывается: повторное сохранение завершается ошибкой
//! [`EdiError::AlreadyExists`]. Затем файл можно прочитать как
//! классифицированные строки, переместить в другую директорию или удалить.

use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
};

use tracing::{debug, info, warn};

use crate::{
    codec::FieldError,
    error::{EdiError, Result},
    line::{RecordReader, RecordWriter},
    record::LineRecord,
    template::FileNameTemplate,
};

/// Расширение всех файлов обмена.
pub const EXTENSION: &str = "txt";

/// Менеджер файлов обмена в одной директории.
///
/// Токен имени файла передаётся в каждый вызов, поэтому один экземпляр
/// обслуживает любое количество файлов.
///
/// # Пример
///
/// ```
/// use remessa::file::RecordFile;
/// use remessa::template::FileNameTemplate;
///
/// let dir = tempfile::tempdir()?;
/// let file = RecordFile::with_template(dir.path(), FileNameTemplate::new("CB%s")?)?;
///
/// file.save("100HEADER\n200DETAIL\n", "0001")?;
/// let records = file.read("0001")?;
/// assert_eq!(records[1].record_type, "200");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct RecordFile {
    directory: PathBuf,
    template: FileNameTemplate,
}

impl RecordFile {
    /// Открывает директорию с шаблоном по умолчанию (`%s`).
    pub fn new(directory: impl Into<PathBuf>) -> Result<Self> {
        Self::with_template(directory, FileNameTemplate::default())
    }

    /// Открывает директорию с заданным шаблоном имени файла.
    ///
    /// # Ошибки
    ///
    /// [`EdiError::InvalidDirectory`], если `directory` не существует или не
    /// является директорией.
    pub fn with_template(directory: impl Into<PathBuf>, template: FileNameTemplate) -> Result<Self> {
        let directory = directory.into();
        if !directory.is_dir() {
            return Err(EdiError::InvalidDirectory(directory));
        }
        Ok(Self { directory, template })
    }

    /// Текущая директория файлов.
    #[must_use]
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// Шаблон имён файлов.
    #[must_use]
    pub fn template(&self) -> &FileNameTemplate {
        &self.template
    }

    /// Имя файла для `token` вместе с расширением.
    pub fn file_name(&self, token: &str) -> Result<String> {
        Ok(format!("{}.{EXTENSION}", self.template.render(token)?))
    }

    /// Полный путь к файлу для `token`.
    pub fn url(&self, token: &str) -> Result<PathBuf> {
        Ok(self.directory.join(self.file_name(token)?))
    }

    /// Существует ли файл для `token`.
    pub fn exists(&self, token: &str) -> Result<bool> {
        Ok(self.checked_url(token)?.exists())
    }

    /// Записывает `content` без изменений в новый файл.
    ///
    /// Создание эксклюзивное: если файл с таким именем уже есть, он не
    /// трогается и возвращается [`EdiError::AlreadyExists`]. Сбой записи
    /// посередине может оставить усечённый файл.
    pub fn save(&self, content: &str, token: &str) -> Result<PathBuf> {
        let url = self.checked_url(token)?;
        let mut file = create_new(&url)?;
        file.write_all(content.as_bytes())
            .map_err(|source| EdiError::Write { url: url.clone(), source })?;

        info!(url = %url.display(), bytes = content.len(), "file saved");
        Ok(url)
    }

    /// Записывает строки в новый файл, завершая каждую символом `\n`.
    ///
    /// Правила эксклюзивности те же, что у [`RecordFile::save`]. Строки
    /// проверяются до создания файла: строка с переводом строки внутри даёт
    /// [`EdiError::MalformedField`], и файл не создаётся.
    pub fn save_lines<I, S>(&self, lines: I, token: &str) -> Result<PathBuf>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lines: Vec<S> = lines.into_iter().collect();
        for line in &lines {
            let line = line.as_ref();
            if line.contains(['\n', '\r']) {
                return Err(FieldError::malformed("line", line, "contains a line break").into());
            }
        }

        let url = self.checked_url(token)?;
        let mut writer = RecordWriter::new(create_new(&url)?);
        writer.write_all(&lines).map_err(|source| EdiError::Write { url: url.clone(), source })?;
        let written = writer.records_written();
        writer
            .into_inner()
            .map_err(|e| EdiError::Write { url: url.clone(), source: e.into_error() })?;

        info!(url = %url.display(), lines = written, "file saved");
        Ok(url)
    }

    /// Читает все непустые строки вместе с их типом записи.
    ///
    /// # Ошибки
    ///
    /// [`EdiError::NotFound`], если файла для `token` нет;
    /// [`EdiError::Read`] при любом сбое ввода/вывода (включая невалидный UTF-8).
    pub fn read(&self, token: &str) -> Result<Vec<LineRecord>> {
        let url = self.checked_url(token)?;
        let file = File::open(&url).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => EdiError::NotFound(url.clone()),
            _ => EdiError::Read { url: url.clone(), source },
        })?;

        let records = RecordReader::new(file)
            .collect::<io::Result<Vec<_>>>()
            .map_err(|source| EdiError::Read { url: url.clone(), source })?;

        debug!(url = %url.display(), records = records.len(), "file read");
        Ok(records)
    }

    /// Удаляет файл для `token`.
    ///
    /// Возвращает `false` вместо ошибки, если файла нет или его не удалось
    /// удалить.
    pub fn remove(&self, token: &str) -> bool {
        let url = match self.url(token) {
            Ok(url) => url,
            Err(e) => {
                warn!(%e, "file not removed");
                return false;
            }
        };

        match fs::remove_file(&url) {
            Ok(()) => {
                info!(url = %url.display(), "file removed");
                true
            }
            Err(e) => {
                warn!(url = %url.display(), %e, "file not removed");
                false
            }
        }
    }

    /// Перемещает файл для `token` в `destination`.
    ///
    /// Абсолютный `destination` используется как есть, относительный
    /// разрешается от текущей директории экземпляра. При успехе экземпляр
    /// переключается на новую директорию, при ошибке остаётся прежним.
    ///
    /// # Ошибки
    ///
    /// - [`EdiError::NotFound`] если исходного файла нет
    /// - [`EdiError::InvalidDirectory`] если назначение не является директорией
    /// - [`EdiError::DestinationConflict`] если в назначении есть файл с тем же именем
    /// - [`EdiError::Move`] если переименование не удалось
    pub fn move_to(&mut self, token: &str, destination: impl AsRef<Path>) -> Result<PathBuf> {
        let from = self.checked_url(token)?;
        if !from.exists() {
            return Err(EdiError::NotFound(from));
        }

        let destination = destination.as_ref();
        let target_dir = if destination.is_absolute() {
            destination.to_path_buf()
        } else {
            self.directory.join(destination)
        };
        if !target_dir.is_dir() {
            return Err(EdiError::InvalidDirectory(target_dir));
        }

        let to = target_dir.join(self.file_name(token)?);
        if to.exists() {
            return Err(EdiError::DestinationConflict(to));
        }

        fs::rename(&from, &to)
            .map_err(|source| EdiError::Move { from: from.clone(), to: to.clone(), source })?;

        info!(from = %from.display(), to = %to.display(), "file moved");
        self.directory = target_dir;
        Ok(to)
    }

    fn checked_url(&self, token: &str) -> Result<PathBuf> {
        if !self.directory.is_dir() {
            return Err(EdiError::InvalidDirectory(self.directory.clone()));
        }
        self.url(token)
    }
}

fn create_new(url: &Path) -> Result<File> {
    OpenOptions::new().write(true).create_new(true).open(url).map_err(|source| {
        match source.kind() {
            io::ErrorKind::AlreadyExists => EdiError::AlreadyExists(url.to_path_buf()),
            _ => EdiError::Write { url: url.to_path_buf(), source },
        }
    })
}
