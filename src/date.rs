use std::fmt::{Display, Formatter, Write as _};
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::DateError;

const LAYOUT: &str = "%Y-%m-%d";

lazy_static! {
    static ref DATE_SHAPE: Regex = Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").unwrap();
}

/// A calendar date without time of day, exchanged as `"YYYY-MM-DD"`.
///
/// The default value is the unset date, which serializes as `null`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(Option<NaiveDate>);

impl Date {
    pub fn new(date: NaiveDate) -> Self {
        Self(Some(date))
    }

    pub fn from_ymd(year: i32, month: u32, day: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, day).map(Self::new)
    }

    pub fn unset() -> Self {
        Self(None)
    }

    /// Parses exactly `YYYY-MM-DD`. Anything else, timestamps included, is rejected.
    pub fn parse(input: &str) -> Result<Self, DateError> {
        if !DATE_SHAPE.is_match(input) {
            return Err(DateError::InvalidDateFormat(input.to_owned()));
        }
        NaiveDate::parse_from_str(input, LAYOUT)
            .map(Self::new)
            .map_err(|_| DateError::InvalidDateFormat(input.to_owned()))
    }

    pub fn is_unset(&self) -> bool {
        self.0.is_none()
    }

    pub fn as_naive_date(&self) -> Option<NaiveDate> {
        self.0
    }

    /// Midnight UTC of this date.
    pub fn to_timestamp(&self) -> Option<DateTime<Utc>> {
        self.midnight()
            .map(|midnight| Utc.from_utc_datetime(&midnight))
    }

    /// Formats the date, at midnight, with a `strftime`-like layout (see
    /// [chrono::format::strftime]). Returns `None` for an unset date or a layout chrono can't
    /// render, such as one asking for a timezone.
    pub fn format(&self, layout: &str) -> Option<String> {
        let midnight = self.midnight()?;
        let mut formatted = String::new();
        write!(formatted, "{}", midnight.format(layout)).ok()?;
        Some(formatted)
    }

    fn midnight(&self) -> Option<NaiveDateTime> {
        self.0.and_then(|date| date.and_hms_opt(0, 0, 0))
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Self::new(date)
    }
}

/// Keeps the calendar date as seen in the timestamp's own timezone.
impl<Tz: TimeZone> From<DateTime<Tz>> for Date {
    fn from(timestamp: DateTime<Tz>) -> Self {
        Self::new(timestamp.date_naive())
    }
}

impl FromStr for Date {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Unset dates display as an empty string.
impl Display for Date {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0 {
            Some(date) => write!(f, "{}", date.format(LAYOUT)),
            None => Ok(()),
        }
    }
}

impl Serialize for Date {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.0 {
            Some(date) => serializer.serialize_str(&date.format(LAYOUT).to_string()),
            None => serializer.serialize_none(),
        }
    }
}

struct DateVisitor;

impl<'de> Visitor<'de> for DateVisitor {
    type Value = Date;

    fn expecting(&self, formatter: &mut Formatter) -> std::fmt::Result {
        formatter.write_str("a date string in the YYYY-MM-DD format, or null")
    }

    fn visit_str<E>(self, value: &str) -> Result<Date, E>
    where
        E: de::Error,
    {
        Date::parse(value).map_err(E::custom)
    }

    fn visit_none<E>(self) -> Result<Date, E>
    where
        E: de::Error,
    {
        Ok(Date::unset())
    }

    fn visit_unit<E>(self) -> Result<Date, E>
    where
        E: de::Error,
    {
        Ok(Date::unset())
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Date, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_str(self)
    }
}

impl<'de> Deserialize<'de> for Date {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_option(DateVisitor)
    }
}
