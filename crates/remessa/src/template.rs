//! Шаблоны имён файлов.

use std::fmt;

use crate::error::{EdiError, Result};

/// Маркер подстановки в шаблоне.
pub const PLACEHOLDER: &str = "%s";

/// Базовое имя файла с подстановкой `%s` для токена конкретного файла.
///
/// # Пример
///
/// ```
/// use remessa::template::FileNameTemplate;
///
/// let template = FileNameTemplate::new("CB%s").unwrap();
/// assert_eq!(template.render("0042").unwrap(), "CB0042");
/// assert!(FileNameTemplate::new("static").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameTemplate(String);

impl FileNameTemplate {
    /// Проверяет шаблон и создаёт его.
    pub fn new(template: impl Into<String>) -> Result<Self> {
        let template = template.into();
        if !template.contains(PLACEHOLDER) {
            return Err(EdiError::InvalidTemplate(template));
        }
        Ok(Self(template))
    }

    /// Подставляет `token` вместо первого `%s`.
    ///
    /// Пустые токены и токены, выводящие за пределы директории,
    /// отклоняются с [`EdiError::InvalidFileName`].
    pub fn render(&self, token: &str) -> Result<String> {
        validate_token(token)?;
        Ok(self.0.replacen(PLACEHOLDER, token, 1))
    }

    /// Исходный текст шаблона.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FileNameTemplate {
    fn default() -> Self {
        Self(PLACEHOLDER.to_string())
    }
}

impl fmt::Display for FileNameTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

fn validate_token(token: &str) -> Result<()> {
    let reason = if token.is_empty() {
        "must not be empty"
    } else if token.contains(['/', '\\']) {
        "must not contain a path separator"
    } else if token.contains('\0') {
        "must not contain a NUL byte"
    } else if token == "." || token == ".." {
        "must not be a directory reference"
    } else {
        return Ok(());
    };
    Err(EdiError::InvalidFileName { token: token.to_string(), reason })
}
