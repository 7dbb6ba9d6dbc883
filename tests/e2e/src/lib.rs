//! # e2e-tests - End-to-end тесты CLI инструментов
//!
//! Этот крейт содержит e2e тесты для CLI `remessa` — менеджера файлов
//! обмена с банком.
//!
//! ## Фикстуры
//!
//! Тестовые файлы расположены в `fixtures/`:
//! - `retorno_example.txt` — файл ответа банка: заголовок `100`, две детальные
//!   записи `200`, пустая строка и завершающая запись `900`

use std::path::PathBuf;

/// Получить путь к директории фикстур.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Получить путь к фикстуре по имени файла.
pub fn fixture(name: &str) -> PathBuf {
    fixtures_dir().join(name)
}
