//! Целые поля и суммы с подразумеваемой десятичной точкой.
//!
//! Суммы передаются без разделителя: `123.45` при точности 2 хранится как
//! `12345`. Округление выполняется над десятичной записью числа (половина от
//! нуля), поэтому `1.005` при точности 2 даёт `101`, а не `100`. Целые поля
//! декодируются без промежуточного `f64` и не теряют разряды.

use super::{FieldError, Result};

/// Кодирует значение как строку цифр, округляя до ближайшего целого.
///
/// Дополнение до ширины поля не выполняется: это забота макета записи.
///
/// # Пример
///
/// ```
/// use remessa::codec::encode_integer;
///
/// assert_eq!(encode_integer(42.0).unwrap(), "42");
/// assert_eq!(encode_integer(2.5).unwrap(), "3");
/// ```
pub fn encode_integer(value: f64) -> Result<String> {
    encode_float(value, 0)
}

/// Декодирует числовое поле в ближайшее целое.
///
/// Дробный текст вида `"12.6"` принимается и округляется. Пустое поле
/// декодируется в `0`.
///
/// # Пример
///
/// ```
/// use remessa::codec::decode_integer;
///
/// assert_eq!(decode_integer("12345678901234567").unwrap(), 12_345_678_901_234_567);
/// assert_eq!(decode_integer("12.6").unwrap(), 13);
/// ```
pub fn decode_integer(text: &str) -> Result<i64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0);
    }
    if let Ok(value) = trimmed.parse::<i64>() {
        return Ok(value);
    }

    let (negative, unsigned) = match trimmed.as_bytes()[0] {
        b'-' => (true, &trimmed[1..]),
        b'+' => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, ""));
    let is_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (int_part.is_empty() && frac_part.is_empty()) || !is_digits(int_part) || !is_digits(frac_part)
    {
        return Err(FieldError::malformed("integer", text, "not a number"));
    }

    let mut digits: Vec<u8> = int_part.bytes().collect();
    if frac_part.bytes().next().is_some_and(|d| d >= b'5') {
        increment(&mut digits);
    }
    if digits.is_empty() {
        return Ok(0);
    }

    let mut literal = String::with_capacity(digits.len() + 1);
    if negative {
        literal.push('-');
    }
    literal.extend(digits.iter().map(|&d| d as char));
    literal.parse().map_err(|_| FieldError::malformed("integer", text, "out of range"))
}

/// Кодирует `value` с `precision` подразумеваемыми знаками после запятой.
///
/// # Пример
///
/// ```
/// use remessa::codec::encode_float;
///
/// assert_eq!(encode_float(123.45, 2).unwrap(), "12345");
/// assert_eq!(encode_float(7.0, 2).unwrap(), "700");
/// ```
pub fn encode_float(value: f64, precision: u32) -> Result<String> {
    if !value.is_finite() {
        return Err(FieldError::NotFinite(value));
    }

    let precision = precision as usize;
    // Display для f64 никогда не использует экспоненту.
    let repr = value.abs().to_string();
    let (int_part, frac_part) = repr.split_once('.').unwrap_or((repr.as_str(), ""));

    let mut digits: Vec<u8> = int_part.bytes().collect();
    let mut frac = frac_part.bytes();
    for _ in 0..precision {
        digits.push(frac.next().unwrap_or(b'0'));
    }
    if frac.next().is_some_and(|d| d >= b'5') {
        increment(&mut digits);
    }

    let start = digits.iter().position(|&d| d != b'0').unwrap_or(digits.len());
    let magnitude = &digits[start..];
    if magnitude.is_empty() {
        return Ok("0".to_string());
    }

    let mut out = String::with_capacity(magnitude.len() + 1);
    if value.is_sign_negative() {
        out.push('-');
    }
    out.extend(magnitude.iter().map(|&d| d as char));
    Ok(out)
}

/// Декодирует строку цифр с `precision` подразумеваемыми знаками.
///
/// Пустое поле декодируется в `0.0`. Допускается ведущий знак.
///
/// # Ошибки
///
/// [`FieldError::ShorterThanPrecision`], если цифр меньше, чем знаков после
/// запятой; [`FieldError::Malformed`] для любых символов, кроме цифр.
///
/// # Пример
///
/// ```
/// use remessa::codec::decode_float;
///
/// assert_eq!(decode_float("12345", 2).unwrap(), 123.45);
/// assert!(decode_float("5", 2).is_err());
/// ```
pub fn decode_float(text: &str, precision: u32) -> Result<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }

    let (sign, digits) = match trimmed.as_bytes()[0] {
        b'-' => ("-", &trimmed[1..]),
        b'+' => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldError::malformed("float", text, "expected digits only"));
    }
    if digits.len() < precision as usize {
        return Err(FieldError::ShorterThanPrecision { value: text.to_string(), precision });
    }

    let split = digits.len() - precision as usize;
    let int_part = if split == 0 { "0" } else { &digits[..split] };
    let frac_part = &digits[split..];
    let literal = if frac_part.is_empty() {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    };

    literal.parse().map_err(|_| FieldError::malformed("float", text, "not a number"))
}

/// Прибавляет единицу к строке ASCII-цифр, удлиняя её при переносе.
fn increment(digits: &mut Vec<u8>) {
    for d in digits.iter_mut().rev() {
        if *d == b'9' {
            *d = b'0';
        } else {
            *d += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Integer ====================

    #[test]
    fn encode_integer_rounds_half_away_from_zero() {
        assert_eq!(encode_integer(0.5).unwrap(), "1");
        assert_eq!(encode_integer(1.49).unwrap(), "1");
        assert_eq!(encode_integer(-2.5).unwrap(), "-3");
        assert_eq!(encode_integer(-0.2).unwrap(), "0");
    }

    #[test]
    fn encode_integer_has_no_padding_or_exponent() {
        assert_eq!(encode_integer(0.0).unwrap(), "0");
        assert_eq!(encode_integer(1e20).unwrap(), "100000000000000000000");
    }

    #[test]
    fn decode_integer_rounds_fractional_text() {
        assert_eq!(decode_integer("12.6").unwrap(), 13);
        assert_eq!(decode_integer("0000042").unwrap(), 42);
        assert_eq!(decode_integer("-7").unwrap(), -7);
    }

    #[test]
    fn decode_integer_keeps_digits_beyond_f64_precision() {
        assert_eq!(decode_integer("12345678901234567").unwrap(), 12_345_678_901_234_567);
        assert_eq!(decode_integer("9223372036854775807").unwrap(), i64::MAX);
        assert_eq!(decode_integer("-9223372036854775808").unwrap(), i64::MIN);
        assert_eq!(decode_integer("12345678901234567.5").unwrap(), 12_345_678_901_234_568);
    }

    #[test]
    fn decode_integer_rounds_half_away_from_zero() {
        assert_eq!(decode_integer("2.5").unwrap(), 3);
        assert_eq!(decode_integer("-2.5").unwrap(), -3);
        assert_eq!(decode_integer("-0.4").unwrap(), 0);
        assert_eq!(decode_integer(".7").unwrap(), 1);
    }

    #[test]
    fn decode_integer_out_of_range() {
        assert!(matches!(
            decode_integer("9223372036854775808"),
            Err(FieldError::Malformed { .. })
        ));
    }

    #[test]
    fn decode_integer_blank_is_zero() {
        assert_eq!(decode_integer("").unwrap(), 0);
        assert_eq!(decode_integer("     ").unwrap(), 0);
    }

    #[test]
    fn decode_integer_rejects_garbage() {
        assert!(matches!(decode_integer("12A"), Err(FieldError::Malformed { .. })));
        assert!(matches!(decode_integer("NaN"), Err(FieldError::Malformed { .. })));
        assert!(matches!(decode_integer("1e3"), Err(FieldError::Malformed { .. })));
        assert!(matches!(decode_integer("."), Err(FieldError::Malformed { .. })));
        assert!(matches!(decode_integer("1.2.3"), Err(FieldError::Malformed { .. })));
    }

    #[test]
    fn integer_roundtrip_for_non_negative_values() {
        for n in [0_i64, 1, 9, 10, 99, 12345, 9_007_199_254_740_992] {
            let encoded = encode_integer(n as f64).unwrap();
            assert_eq!(decode_integer(&encoded).unwrap(), n, "value {n}");
        }
    }

    // ==================== Float ====================

    #[test]
    fn encode_float_removes_decimal_point() {
        assert_eq!(encode_float(123.45, 2).unwrap(), "12345");
        assert_eq!(encode_float(0.07, 2).unwrap(), "7");
        assert_eq!(encode_float(12.0, 3).unwrap(), "12000");
    }

    #[test]
    fn encode_float_rounds_on_decimal_representation() {
        assert_eq!(encode_float(1.005, 2).unwrap(), "101");
        assert_eq!(encode_float(9.995, 2).unwrap(), "1000");
        assert_eq!(encode_float(2.344, 2).unwrap(), "234");
        assert_eq!(encode_float(-1.005, 2).unwrap(), "-101");
    }

    #[test]
    fn encode_float_rejects_non_finite() {
        assert!(matches!(encode_float(f64::NAN, 2), Err(FieldError::NotFinite(_))));
        assert!(matches!(encode_float(f64::INFINITY, 2), Err(FieldError::NotFinite(_))));
    }

    #[test]
    fn decode_float_inserts_decimal_point() {
        assert_eq!(decode_float("12345", 2).unwrap(), 123.45);
        assert_eq!(decode_float("0000012345", 2).unwrap(), 123.45);
        assert_eq!(decode_float("45", 2).unwrap(), 0.45);
        assert_eq!(decode_float("-150", 2).unwrap(), -1.5);
        assert_eq!(decode_float("77", 0).unwrap(), 77.0);
    }

    #[test]
    fn decode_float_blank_is_zero() {
        assert_eq!(decode_float("", 2).unwrap(), 0.0);
        assert_eq!(decode_float("   ", 2).unwrap(), 0.0);
    }

    #[test]
    fn decode_float_shorter_than_precision_fails() {
        assert_eq!(
            decode_float("5", 2),
            Err(FieldError::ShorterThanPrecision { value: "5".to_string(), precision: 2 })
        );
    }

    #[test]
    fn decode_float_rejects_non_digits() {
        assert!(matches!(decode_float("12.45", 2), Err(FieldError::Malformed { .. })));
        assert!(matches!(decode_float("-", 2), Err(FieldError::Malformed { .. })));
    }

    #[test]
    fn float_roundtrip_within_precision() {
        let cases = [(123.45, 2), (0.01, 2), (1_000_000.5, 1), (3.14159, 5), (42.0, 0)];
        for (value, precision) in cases {
            let encoded = encode_float(value, precision).unwrap();
            let decoded = decode_float(&encoded, precision).unwrap();
            let tolerance = 10f64.powi(-(precision as i32));
            assert!((decoded - value).abs() < tolerance, "{value} at {precision} -> {decoded}");
        }
    }
}
