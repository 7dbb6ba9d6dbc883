//! Типизированный кодек полей.
//!
//! Преобразования без состояния между значениями предметной области и
//! текстовым представлением полей фиксированной ширины:
//!
//! | Значение     | Кодировщик         | Форма в файле       |
//! |--------------|--------------------|---------------------|
//! | целое        | [`encode_integer`] | `42`                |
//! | сумма        | [`encode_float`]   | `12345` (= 123.45)  |
//! | дата         | [`encode_date`]    | `yymmdd`            |
//! | время        | [`encode_time`]    | `HHmmss`            |
//! | час          | [`encode_hour`]    | `HHmm`              |
//! | дата и время | [`encode_datetime`]| `yymmddHHmmss`      |
//! | текст        | [`encode_string`]  | ASCII без диакритики|
//!
//! Дополнение до ширины поля здесь не выполняется, см. [`crate::line::LineBuilder`].

mod calendar;
mod error;
mod numeric;
mod text;

pub use calendar::{
    decode_date, decode_datetime, decode_hour, decode_time, encode_date, encode_datetime,
    encode_hour, encode_time,
};
pub use error::{FieldError, Result};
pub use numeric::{decode_float, decode_integer, encode_float, encode_integer};
pub use text::{decode_string, encode_string};
