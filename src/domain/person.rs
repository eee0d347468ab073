use super::*;
pub use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Textual form of a birthdate, both on disk and on the command line.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Field order here is the key order in the saved file. Extra keys are
/// refused, since a later save could not write them back.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
#[serde(deny_unknown_fields)]
pub struct Person {
    #[serde(rename = "фамилия")]
    pub surname: String,

    #[serde(rename = "имя")]
    pub first_name: String,

    #[serde(rename = "номер телефона")]
    pub phone_number: String,

    #[serde(
        rename = "дата рождения",
        serialize_with = "serialize_birthdate",
        deserialize_with = "deserialize_birthdate"
    )]
    pub birthdate: NaiveDate,
}

impl Person {
    pub fn new(
        surname: String,
        first_name: String,
        phone_number: String,
        birthdate: NaiveDate,
    ) -> Self {
        Person {
            surname,
            first_name,
            phone_number,
            birthdate,
        }
    }

    pub fn birth_month(&self) -> u32 {
        self.birthdate.month()
    }

    pub fn birthdate_str(&self) -> String {
        format_date(self.birthdate)
    }
}

/// Parse a `DD.MM.YYYY` date. Only that exact shape is accepted:
/// two-digit day, two-digit month, four-digit year, dots in between.
pub fn parse_date(s: &str) -> Result<NaiveDate, AppError> {
    let bytes = s.as_bytes();

    let well_formed = bytes.len() == 10
        && bytes[2] == b'.'
        && bytes[5] == b'.'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 2 || i == 5 || b.is_ascii_digit());

    if !well_formed {
        return Err(AppError::Format(s.to_string()));
    }

    // Shape checked above, so the slices are ASCII digits.
    let day: u32 = s[0..2].parse().map_err(|_| AppError::Format(s.to_string()))?;
    let month: u32 = s[3..5].parse().map_err(|_| AppError::Format(s.to_string()))?;
    let year: i32 = s[6..10].parse().map_err(|_| AppError::Format(s.to_string()))?;

    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| AppError::Format(s.to_string()))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn serialize_birthdate<S>(date: &NaiveDate, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format_date(*date))
}

fn deserialize_birthdate<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    parse_date(&s).map_err(serde::de::Error::custom)
}
