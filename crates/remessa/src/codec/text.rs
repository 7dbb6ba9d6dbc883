//! Алфавитно-цифровые поля.

use std::{collections::HashMap, sync::LazyLock};

/// Латинские символы с диакритикой, выровненные по позициям с [`PLAIN`].
const ACCENTED: &str = "ŠŒŽšœžŸ¥µÀÁÂÃÄÅÆÇÈÉÊËÌÍÎÏÐÑÒÓÔÕÖØÙÚÛÜÝßàáâãäåæçèéêëìíîïðñòóôõöøùúûüýÿ";

/// Ближайшая ASCII-буква без диакритики для каждого символа [`ACCENTED`].
const PLAIN: &str = "SOZsozYYuAAAAAAACEEEEIIIIDNOOOOOOUUUUYsaaaaaaaceeeeiiiionoooooouuuuyy";

static TRANSLITERATION: LazyLock<HashMap<char, char>> =
    LazyLock::new(|| ACCENTED.chars().zip(PLAIN.chars()).collect());

/// Заменяет символы с диакритикой на их ASCII-аналоги.
///
/// Символы без замены остаются как есть.
///
/// # Пример
///
/// ```
/// use remessa::codec::encode_string;
///
/// assert_eq!(encode_string("São Paulo"), "Sao Paulo");
/// assert_eq!(encode_string("Ação Ñandú"), "Acao Nandu");
/// ```
pub fn encode_string(text: &str) -> String {
    text.chars().map(|c| TRANSLITERATION.get(&c).copied().unwrap_or(c)).collect()
}

/// Возвращает текст поля как есть. Обрезка пробелов остаётся макету записи.
pub fn decode_string(text: &str) -> String {
    text.to_string()
}
