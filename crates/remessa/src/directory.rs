//! Список файлов и очистка директории обмена.

use std::{
    collections::HashSet,
    fs::{self, DirEntry},
    io,
    path::Path,
};

use tracing::{debug, warn};

use crate::file::EXTENSION;

/// Перечисляет файлы обмена и очищает директорию, не трогая защищённые имена.
///
/// Набор защищённых имён всегда содержит `.` и `..`.
///
/// # Пример
///
/// ```
/// use remessa::directory::DirectoryGuard;
///
/// let dir = tempfile::tempdir()?;
/// std::fs::write(dir.path().join("a.txt"), "100")?;
/// std::fs::write(dir.path().join("keep.cfg"), "")?;
///
/// let mut guard = DirectoryGuard::new();
/// guard.protect("keep.cfg");
/// assert_eq!(guard.list(dir.path()), ["a.txt"]);
/// assert!(guard.purge(dir.path()));
/// assert!(dir.path().join("keep.cfg").exists());
/// # Ok::<(), std::io::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryGuard {
    protected: HashSet<String>,
}

impl Default for DirectoryGuard {
    fn default() -> Self {
        Self { protected: [".", ".."].into_iter().map(String::from).collect() }
    }
}

impl DirectoryGuard {
    /// Создаёт guard, защищающий только `.` и `..`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавляет `name` в набор защищённых имён.
    pub fn protect(&mut self, name: impl Into<String>) {
        self.protected.insert(name.into());
    }

    /// Защищено ли `name` от [`DirectoryGuard::purge`].
    #[must_use]
    pub fn is_protected(&self, name: &str) -> bool {
        self.protected.contains(name)
    }

    /// Имена записей с расширением ровно `txt`, в порядке директории.
    ///
    /// Расширением считается всё после последней точки, поэтому файл `.txt`
    /// тоже попадает в список. Отсутствующая или нечитаемая директория даёт
    /// пустой список.
    pub fn list(&self, directory: impl AsRef<Path>) -> Vec<String> {
        let directory = directory.as_ref();
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %directory.display(), %e, "directory not listed");
                return Vec::new();
            }
        };

        entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| name.rsplit_once('.').is_some_and(|(_, ext)| ext == EXTENSION))
            .collect()
    }

    /// Удаляет все незащищённые обычные файлы в `directory`.
    ///
    /// Возвращает `false`, если директорию не удалось прочитать или хотя бы
    /// одно удаление не прошло. После сбоя остальные файлы всё равно
    /// обрабатываются.
    pub fn purge(&self, directory: impl AsRef<Path>) -> bool {
        let directory = directory.as_ref();
        let entries = match fs::read_dir(directory) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %directory.display(), %e, "purge failed");
                return false;
            }
        };

        match self.purge_entries(directory, entries) {
            0 => true,
            failed => {
                warn!(dir = %directory.display(), failed, "purge incomplete");
                false
            }
        }
    }

    /// Возвращает количество записей, которые не удалось обработать.
    fn purge_entries(
        &self,
        directory: &Path,
        entries: impl IntoIterator<Item = io::Result<DirEntry>>,
    ) -> usize {
        let mut failed = 0;
        for entry in entries {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!(dir = %directory.display(), %e, "entry not read");
                    failed += 1;
                    continue;
                }
            };
            let name = entry.file_name();
            if name.to_str().is_some_and(|name| self.is_protected(name)) {
                continue;
            }
            match entry.file_type() {
                Ok(file_type) if file_type.is_file() => {}
                Ok(_) => continue,
                Err(e) => {
                    warn!(path = %entry.path().display(), %e, "file type unknown");
                    failed += 1;
                    continue;
                }
            }

            let path = entry.path();
            match fs::remove_file(&path) {
                Ok(()) => debug!(path = %path.display(), "purged"),
                Err(e) => {
                    warn!(path = %path.display(), %e, "file not purged");
                    failed += 1;
                }
            }
        }
        failed
    }
}
