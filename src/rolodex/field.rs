//! Validated field types.
//!
//! Every value that comes from the user passes through one of these types
//! before it reaches a [`ContactRecord`](crate::model::ContactRecord):
//!
//! - [`Name`]: letters only, stored in title case (`alice` becomes `Alice`)
//! - [`Phone`]: digits only
//! - [`Birthday`]: an ISO calendar date, `YYYY-MM-DD`
//!
//! A field can only be built through [`Field::parse`], so a value that exists
//! is a value that passed validation. The same holds for data read back from
//! disk: serde goes through `TryFrom<String>`, which calls `parse`.

use crate::error::{RolodexError, Result};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

const BIRTHDAY_FORMAT: &str = "%Y-%m-%d";

/// A value whose format is checked whenever it is created or replaced.
pub trait Field: Sized + fmt::Display {
    /// Field label used in error messages.
    const LABEL: &'static str;
    /// Human description of the accepted shape.
    const EXPECTED: &'static str;

    fn parse(raw: &str) -> Result<Self>;

    /// Replaces the value in place. On failure the current value is kept.
    fn set(&mut self, raw: &str) -> Result<()> {
        *self = Self::parse(raw)?;
        Ok(())
    }

    fn invalid(raw: &str) -> RolodexError {
        RolodexError::invalid(Self::LABEL, raw, Self::EXPECTED)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Name {
    const LABEL: &'static str = "name";
    const EXPECTED: &'static str = "letters only";

    fn parse(raw: &str) -> Result<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || !trimmed.chars().all(char::is_alphabetic) {
            return Err(Self::invalid(raw));
        }
        // Case mapping can introduce combining marks (İ lowercases to i + U+0307)
        // or change under a second pass (ß uppercases to SS), so the stored form
        // must itself be letters only and already title-cased.
        let normalized = title_case(trimmed);
        if !normalized.chars().all(char::is_alphabetic) || title_case(&normalized) != normalized
        {
            return Err(Self::invalid(raw));
        }
        Ok(Name(normalized))
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Phone(String);

impl Phone {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Field for Phone {
    const LABEL: &'static str = "phone";
    const EXPECTED: &'static str = "digits only";

    fn parse(raw: &str) -> Result<Self> {
        if raw.is_empty() || !raw.chars().all(|c| c.is_ascii_digit()) {
            return Err(Self::invalid(raw));
        }
        Ok(Phone(raw.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Birthday(NaiveDate);

impl Birthday {
    pub fn date(&self) -> NaiveDate {
        self.0
    }

    /// `None` means "no birthday" and is always accepted.
    pub fn parse_optional(raw: Option<&str>) -> Result<Option<Self>> {
        raw.map(Self::parse).transpose()
    }
}

impl Field for Birthday {
    const LABEL: &'static str = "birthday";
    const EXPECTED: &'static str = "YYYY-MM-DD";

    fn parse(raw: &str) -> Result<Self> {
        // chrono tolerates unpadded months and days; the stored shape does not.
        let bytes = raw.as_bytes();
        let digits =
            |range: std::ops::Range<usize>| bytes[range].iter().all(u8::is_ascii_digit);
        if bytes.len() != 10
            || bytes[4] != b'-'
            || bytes[7] != b'-'
            || !digits(0..4)
            || !digits(5..7)
            || !digits(8..10)
        {
            return Err(Self::invalid(raw));
        }
        NaiveDate::parse_from_str(raw, BIRTHDAY_FORMAT)
            .map(Birthday)
            .map_err(|_| Self::invalid(raw))
    }
}

impl fmt::Display for Name {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Phone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for Birthday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(BIRTHDAY_FORMAT))
    }
}

impl TryFrom<String> for Name {
    type Error = RolodexError;

    fn try_from(value: String) -> Result<Self> {
        Name::parse(&value)
    }
}

impl TryFrom<String> for Phone {
    type Error = RolodexError;

    fn try_from(value: String) -> Result<Self> {
        Phone::parse(&value)
    }
}

impl TryFrom<String> for Birthday {
    type Error = RolodexError;

    fn try_from(value: String) -> Result<Self> {
        Birthday::parse(&value)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

impl From<Phone> for String {
    fn from(phone: Phone) -> Self {
        phone.0
    }
}

impl From<Birthday> for String {
    fn from(birthday: Birthday) -> Self {
        birthday.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_invalid<T: Field + fmt::Debug>(raw: &str, expected: &str) {
        match T::parse(raw) {
            Err(RolodexError::InvalidFormat {
                expected: got, value, ..
            }) => {
                assert_eq!(got, expected);
                assert_eq!(value, raw);
            }
            other => panic!("expected InvalidFormat for {:?}, got {:?}", raw, other),
        }
    }

    #[test]
    fn phone_accepts_digit_strings_verbatim() {
        for raw in ["0", "12345", "0044123456789", "000"] {
            assert_eq!(Phone::parse(raw).unwrap().as_str(), raw);
        }
    }

    #[test]
    fn phone_rejects_non_digits() {
        for raw in ["", "12a45", "+380501234567", "123 456", "12-34", "١٢٣"] {
            assert_invalid::<Phone>(raw, "digits only");
        }
    }

    #[test]
    fn phone_set_keeps_old_value_on_failure() {
        let mut phone = Phone::parse("111").unwrap();
        assert!(phone.set("abc").is_err());
        assert_eq!(phone.as_str(), "111");

        phone.set("222").unwrap();
        assert_eq!(phone.as_str(), "222");
    }

    #[test]
    fn name_is_title_cased() {
        assert_eq!(Name::parse("alice").unwrap().as_str(), "Alice");
        assert_eq!(Name::parse("BOB").unwrap().as_str(), "Bob");
        assert_eq!(Name::parse("  carol ").unwrap().as_str(), "Carol");
        assert_eq!(Name::parse("олена").unwrap().as_str(), "Олена");
    }

    #[test]
    fn name_survives_reparsing() {
        for raw in ["олена", "ÉMILE", "zoë", "Ægir", "İlker", "straße", "Σοφία"] {
            let name = Name::parse(raw).unwrap();
            assert_eq!(Name::parse(name.as_str()).unwrap(), name, "{}", raw);
        }
    }

    #[test]
    fn name_rejects_case_mappings_that_are_not_letters() {
        // Lowercase İ is i + U+0307, a combining mark.
        assert_invalid::<Name>("Aİ", "letters only");
        // Uppercase ß is SS, which would re-parse as Ss.
        assert_invalid::<Name>("ßa", "letters only");
    }

    #[test]
    fn name_rejects_non_letters() {
        for raw in ["", "   ", "Al1ce", "Mary Ann", "o'neil"] {
            assert_invalid::<Name>(raw, "letters only");
        }
    }

    #[test]
    fn birthday_accepts_real_dates() {
        let b = Birthday::parse("1997-05-03").unwrap();
        assert_eq!(b.date(), NaiveDate::from_ymd_opt(1997, 5, 3).unwrap());
        assert_eq!(b.to_string(), "1997-05-03");

        assert!(Birthday::parse("2000-02-29").is_ok());
    }

    #[test]
    fn birthday_rejects_malformed_or_impossible_dates() {
        for raw in [
            "",
            "1997-5-3",
            "03-05-1997",
            "1997/05/03",
            "1997-13-01",
            "1999-02-29",
            "1997-05-32",
            "+997-05-03",
            "-997-05-03",
            " 997-05-03",
            "1997-+5-03",
            "1997-05- 3",
            "tomorrow",
        ] {
            assert_invalid::<Birthday>(raw, "YYYY-MM-DD");
        }
    }

    #[test]
    fn absent_birthday_is_valid() {
        assert_eq!(Birthday::parse_optional(None).unwrap(), None);
        assert!(Birthday::parse_optional(Some("1990-01-01"))
            .unwrap()
            .is_some());
        assert!(Birthday::parse_optional(Some("soon")).is_err());
    }

    #[test]
    fn deserialization_validates() {
        let phone: Phone = serde_json::from_str("\"0501234567\"").unwrap();
        assert_eq!(phone.as_str(), "0501234567");

        assert!(serde_json::from_str::<Phone>("\"05-01\"").is_err());
        assert!(serde_json::from_str::<Birthday>("\"1990-02-30\"").is_err());

        let json = serde_json::to_string(&Birthday::parse("1990-12-01").unwrap()).unwrap();
        assert_eq!(json, "\"1990-12-01\"");
    }
}
