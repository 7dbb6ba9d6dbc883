//! Поля даты и времени.
//!
//! Поле из одних нулей в файлах обмена означает «не задано», поэтому каждый
//! декодер возвращает `Ok(None)` для нулевого или пустого поля.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{FieldError, Result};

/// Двузначные годы меньше этого значения относятся к 2000-м.
const CENTURY_PIVOT: i32 = 70;

/// Кодирует дату как `yymmdd`.
pub fn encode_date(date: NaiveDate) -> String {
    date.format("%y%m%d").to_string()
}

/// Декодирует поле `yymmdd`.
///
/// # Пример
///
/// ```
/// use chrono::NaiveDate;
/// use remessa::codec::decode_date;
///
/// assert_eq!(decode_date("240131").unwrap(), NaiveDate::from_ymd_opt(2024, 1, 31));
/// assert_eq!(decode_date("000000").unwrap(), None);
/// ```
pub fn decode_date(text: &str) -> Result<Option<NaiveDate>> {
    let Some(parts) = split_digits::<3>("date", text)? else {
        return Ok(None);
    };
    to_date(text, parts).map(Some)
}

/// Кодирует время суток как `HHmmss`.
pub fn encode_time(time: NaiveTime) -> String {
    time.format("%H%M%S").to_string()
}

/// Декодирует поле `HHmmss`.
pub fn decode_time(text: &str) -> Result<Option<NaiveTime>> {
    let Some([h, m, s]) = split_digits::<3>("time", text)? else {
        return Ok(None);
    };
    to_time("time", text, h, m, s).map(Some)
}

/// Кодирует часы и минуты как `HHmm`.
pub fn encode_hour(time: NaiveTime) -> String {
    time.format("%H%M").to_string()
}

/// Декодирует поле `HHmm`. Секунды всегда равны нулю.
pub fn decode_hour(text: &str) -> Result<Option<NaiveTime>> {
    let Some([h, m]) = split_digits::<2>("hour", text)? else {
        return Ok(None);
    };
    to_time("hour", text, h, m, 0).map(Some)
}

/// Кодирует момент времени как `yymmddHHmmss`.
pub fn encode_datetime(value: NaiveDateTime) -> String {
    value.format("%y%m%d%H%M%S").to_string()
}

/// Декодирует поле `yymmddHHmmss`.
pub fn decode_datetime(text: &str) -> Result<Option<NaiveDateTime>> {
    let Some([yy, mm, dd, h, m, s]) = split_digits::<6>("datetime", text)? else {
        return Ok(None);
    };
    let date = to_date(text, [yy, mm, dd])?;
    let time = to_time("datetime", text, h, m, s)?;
    Ok(Some(date.and_time(time)))
}

/// Разбивает поле на `N` двузначных групп.
///
/// Возвращает `None` для пустого или нулевого поля.
fn split_digits<const N: usize>(kind: &'static str, text: &str) -> Result<Option<[u32; N]>> {
    let trimmed = text.trim();
    if trimmed.bytes().all(|b| b == b'0') {
        return Ok(None);
    }
    if trimmed.len() != N * 2 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::malformed(kind, text, format!("expected {} digits", N * 2)));
    }

    let bytes = trimmed.as_bytes();
    let mut parts = [0u32; N];
    for (i, part) in parts.iter_mut().enumerate() {
        *part = u32::from(bytes[i * 2] - b'0') * 10 + u32::from(bytes[i * 2 + 1] - b'0');
    }
    Ok(Some(parts))
}

fn to_date(text: &str, [yy, mm, dd]: [u32; 3]) -> Result<NaiveDate> {
    let yy = yy as i32;
    let year = if yy < CENTURY_PIVOT { 2000 + yy } else { 1900 + yy };
    NaiveDate::from_ymd_opt(year, mm, dd)
        .ok_or_else(|| FieldError::malformed("date", text, "not a calendar date"))
}

fn to_time(kind: &'static str, text: &str, h: u32, m: u32, s: u32) -> Result<NaiveTime> {
    NaiveTime::from_hms_opt(h, m, s)
        .ok_or_else(|| FieldError::malformed(kind, text, "not a time of day"))
}
