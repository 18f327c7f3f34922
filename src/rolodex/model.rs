use crate::error::Result;
use crate::field::{Birthday, Field, Name, Phone};
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactRecord {
    pub name: Name,
    phones: Vec<Phone>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub birthday: Option<Birthday>,
}

impl ContactRecord {
    pub fn new(name: Name, phone: Phone) -> Self {
        Self {
            name,
            phones: vec![phone],
            birthday: None,
        }
    }

    /// Phones in the order they were added. Never contains duplicates.
    pub fn phones(&self) -> &[Phone] {
        &self.phones
    }

    pub fn has_phone(&self, raw: &str) -> bool {
        self.phones.iter().any(|p| p.as_str() == raw)
    }

    pub fn add_phone(&mut self, raw: &str) -> Result<()> {
        let phone = Phone::parse(raw)?;
        if !self.phones.contains(&phone) {
            self.phones.push(phone);
        }
        Ok(())
    }

    /// Removing a phone the record does not have is a no-op.
    pub fn remove_phone(&mut self, raw: &str) {
        self.phones.retain(|p| p.as_str() != raw);
    }

    /// Swaps `old` for `new`. `new` is validated before anything is touched,
    /// so an invalid replacement leaves the record exactly as it was.
    pub fn edit_phone(&mut self, old: &str, new: &str) -> Result<()> {
        let replacement = Phone::parse(new)?;
        self.remove_phone(old);
        if !self.phones.contains(&replacement) {
            self.phones.push(replacement);
        }
        Ok(())
    }

    pub fn replace_phones(&mut self, phone: Phone) {
        self.phones.clear();
        self.phones.push(phone);
    }

    pub fn set_birthday(&mut self, raw: Option<&str>) -> Result<()> {
        self.birthday = Birthday::parse_optional(raw)?;
        Ok(())
    }

    /// Case-sensitive substring match against the name and every phone.
    pub fn matches(&self, query: &str) -> bool {
        self.name.as_str().contains(query)
            || self.phones.iter().any(|p| p.as_str().contains(query))
    }

    pub fn days_to_birthday(&self) -> Option<i64> {
        self.days_to_birthday_from(Local::now().date_naive())
    }

    /// Whole days from `today` until the next occurrence of the birthday.
    /// A birthday falling on `today` is 0 days away.
    pub fn days_to_birthday_from(&self, today: NaiveDate) -> Option<i64> {
        let birthday = self.birthday?.date();
        let this_year = anniversary(birthday, today.year());
        let next = if this_year >= today {
            this_year
        } else {
            anniversary(birthday, today.year() + 1)
        };
        Some((next - today).num_days())
    }
}

/// The birthday's month and day in `year`. Feb 29 falls back to Feb 28 in
/// non-leap years.
fn anniversary(birthday: NaiveDate, year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day())
        .or_else(|| NaiveDate::from_ymd_opt(year, birthday.month(), birthday.day() - 1))
        .unwrap_or(birthday)
}
