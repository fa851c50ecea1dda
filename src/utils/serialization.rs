//! Wire-format conversions for the Youzan open API.
//!
//! The platform encodes instants two different ways (epoch seconds as a
//! string, epoch milliseconds) and one boolean as the string `"1"`. Each
//! encoding gets its own named pair of functions so a field can never be
//! run through the wrong format.

use chrono::{DateTime, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

/// Seconds since the epoch carried as a string, e.g. `"1465271530"`.
/// Absent, null and empty string all mean unset.
pub fn de_opt_epoch_seconds<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => {
            let secs: i64 = text
                .parse()
                .map_err(|_| D::Error::custom(format!("invalid epoch-second string {:?}", text)))?;
            DateTime::from_timestamp(secs, 0)
                .map(Some)
                .ok_or_else(|| D::Error::custom(format!("epoch seconds out of range: {}", secs)))
        }
    }
}

pub fn ser_opt_epoch_seconds<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(instant) => serializer.serialize_str(&instant.timestamp().to_string()),
        None => serializer.serialize_none(),
    }
}

// Milliseconds arrive as a JSON number or a numeric string depending on
// the endpoint.
#[derive(Deserialize)]
#[serde(untagged)]
enum MillisRepr {
    Num(i64),
    Text(String),
}

/// Milliseconds since the epoch, number or numeric string.
pub fn de_opt_epoch_millis<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = match Option::<MillisRepr>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(MillisRepr::Num(n)) => n,
        Some(MillisRepr::Text(text)) => {
            let trimmed = text.trim();
            if trimmed.is_empty() {
                return Ok(None);
            }
            trimmed.parse().map_err(|_| {
                D::Error::custom(format!("invalid epoch-millisecond string {:?}", text))
            })?
        }
    };
    DateTime::from_timestamp_millis(millis)
        .map(Some)
        .ok_or_else(|| D::Error::custom(format!("epoch milliseconds out of range: {}", millis)))
}

pub fn ser_opt_epoch_millis<S>(
    value: &Option<DateTime<Utc>>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(instant) => serializer.serialize_i64(instant.timestamp_millis()),
        None => serializer.serialize_none(),
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum FlagRepr {
    Text(String),
    Num(i64),
    Flag(bool),
}

/// The platform sends `"1"` for true; anything else, including a missing
/// key, reads as false.
pub fn de_bool_one<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<FlagRepr>::deserialize(deserializer)? {
        Some(FlagRepr::Text(s)) => s == "1",
        Some(FlagRepr::Num(n)) => n == 1,
        Some(FlagRepr::Flag(b)) => b,
        None => false,
    })
}

pub fn ser_bool_one<S>(value: &bool, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(if *value { "1" } else { "0" })
}
