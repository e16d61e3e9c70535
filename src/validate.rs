//! Input validation for facts about the target
//!
//! Each validator takes raw user input and returns the normalized value that
//! ends up in the token collection, or `None` when the input is blank.

use crate::error::{Error, Result};
use regex::Regex;
use std::sync::OnceLock;

/// Symbols suggested to the operator when asking for symbols
pub const SUGGESTED_SYMBOLS: &str = "@#$_&-+()/";

const DATE_PATTERN: &str =
    r"^(?P<month>0[1-9]|1[012])/(?P<day>0[1-9]|[12][0-9]|3[01])/(?P<year>(?:19|20)[0-9]{2})$";
const EMAIL_PATTERN: &str = r"^[\w\.-]+@[\w\.-]+\.\w+$";

const MAX_AGE: u32 = 99;
const MIN_PHONE_DIGITS: usize = 7;
const MAX_PHONE_DIGITS: usize = 15;

fn date_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(DATE_PATTERN).expect("date pattern is valid"))
}

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(EMAIL_PATTERN).expect("email pattern is valid"))
}

fn blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// A name: spaces removed, letters only
pub fn name(field: &'static str, input: &str) -> Result<Option<String>> {
    if blank(input) {
        return Ok(None);
    }

    let name: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if !name.chars().all(char::is_alphabetic) {
        return Err(Error::invalid(field, format!("'{}' must contain letters only", input.trim())));
    }
    Ok(Some(name))
}

/// A username: taken as typed, surrounding whitespace trimmed
pub fn username(input: &str) -> Option<String> {
    let input = input.trim();
    (!input.is_empty()).then(|| input.to_string())
}

/// A date in `MM/DD/YYYY` form
pub fn date(field: &'static str, input: &str) -> Result<Option<DateParts>> {
    if blank(input) {
        return Ok(None);
    }

    let input = input.trim();
    let Some(caps) = date_regex().captures(input) else {
        return Err(Error::invalid(field, format!("'{}' is not a MM/DD/YYYY date", input)));
    };

    Ok(Some(DateParts {
        month: caps["month"].to_string(),
        day: caps["day"].to_string(),
        year: caps["year"].to_string(),
    }))
}

/// An age between 0 and 99
pub fn age(field: &'static str, input: &str) -> Result<Option<u32>> {
    if blank(input) {
        return Ok(None);
    }

    let age: u32 = input
        .trim()
        .parse()
        .map_err(|_| Error::invalid(field, format!("'{}' is not a number", input.trim())))?;
    if age > MAX_AGE {
        return Err(Error::invalid(field, format!("{} is out of range 0-{}", age, MAX_AGE)));
    }
    Ok(Some(age))
}

/// An email address
pub fn email(field: &'static str, input: &str) -> Result<Option<String>> {
    if blank(input) {
        return Ok(None);
    }

    let input = input.trim();
    if !email_regex().is_match(input) {
        return Err(Error::invalid(field, format!("'{}' is not an email address", input)));
    }
    Ok(Some(input.to_string()))
}

/// A phone number, reduced to its digits.
///
/// Accepts an optional leading `+` and the usual separators.
pub fn phone(field: &'static str, input: &str) -> Result<Option<String>> {
    if blank(input) {
        return Ok(None);
    }

    let input = input.trim();
    let body = input.strip_prefix('+').unwrap_or(input);
    let mut digits = String::with_capacity(body.len());
    for c in body.chars() {
        match c {
            '0'..='9' => digits.push(c),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => {
                return Err(Error::invalid(field, format!("'{}' contains '{}'", input, c)));
            }
        }
    }

    if !(MIN_PHONE_DIGITS..=MAX_PHONE_DIGITS).contains(&digits.len()) {
        return Err(Error::invalid(
            field,
            format!(
                "'{}' must have {}-{} digits",
                input, MIN_PHONE_DIGITS, MAX_PHONE_DIGITS
            ),
        ));
    }
    Ok(Some(digits))
}

/// A symbol string, split into one token per character.
///
/// The first character must not be a letter, digit or underscore.
pub fn symbols(field: &'static str, input: &str) -> Result<Vec<String>> {
    let input: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    let Some(first) = input.chars().next() else {
        return Ok(Vec::new());
    };

    if first.is_alphanumeric() || first == '_' {
        return Err(Error::invalid(field, format!("'{}' must start with a symbol", input)));
    }
    Ok(input.chars().map(String::from).collect())
}

/// A free-form word, spaces removed
pub fn word(input: &str) -> Option<String> {
    let word: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    (!word.is_empty()).then_some(word)
}

/// Check the generation bounds the operator asked for.
///
/// Stricter than what the generator accepts: the maximum length has to be
/// greater than the minimum.
pub fn bounds(min_length: usize, max_length: usize, max_arity: usize) -> Result<()> {
    if min_length == 0 {
        return Err(Error::InvalidBounds("minimum length must be greater than zero".to_string()));
    }
    if max_length <= min_length {
        return Err(Error::InvalidBounds(format!(
            "maximum length ({}) must be greater than minimum length ({})",
            max_length, min_length
        )));
    }
    if max_arity == 0 {
        return Err(Error::InvalidBounds(
            "number of tokens to combine must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// A validated `MM/DD/YYYY` date split into its parts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateParts {
    pub month: String,
    pub day: String,
    pub year: String,
}

impl DateParts {
    /// `MMDDYYYY`
    pub fn compact(&self) -> String {
        format!("{}{}{}", self.month, self.day, self.year)
    }

    /// The compact date followed by month, day and year
    pub fn tokens(&self) -> [String; 4] {
        [
            self.compact(),
            self.month.clone(),
            self.day.clone(),
            self.year.clone(),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name() {
        assert_eq!(name("firstname", "Mary Ann").unwrap(), Some("MaryAnn".to_string()));
        assert_eq!(name("firstname", "  ").unwrap(), None);
        assert!(name("firstname", "R2D2").is_err());
        assert!(name("lastname", "o'neil").is_err());
    }

    #[test]
    fn test_username_is_free_form() {
        assert_eq!(username(" x_dark.99 "), Some("x_dark.99".to_string()));
        assert_eq!(username(""), None);
    }

    #[test]
    fn test_date() {
        let parts = date("dob", "07/04/1990").unwrap().unwrap();
        assert_eq!(parts.compact(), "07041990");
        assert_eq!(parts.tokens(), ["07041990", "07", "04", "1990"].map(String::from));

        assert_eq!(date("dob", "").unwrap(), None);
        assert!(date("dob", "13/01/1990").is_err());
        assert!(date("dob", "01/32/1990").is_err());
        assert!(date("dob", "01/01/1890").is_err());
        assert!(date("dob", "1/1/1990").is_err());
        assert!(date("dob", "01/01/19901").is_err());
    }

    #[test]
    fn test_date_rejects_non_ascii_digits() {
        assert!(date("dob", "01/1\u{0663}/1990").is_err());
        assert!(date("dob", "01/01/19\u{0663}\u{0663}").is_err());
        assert!(date("dob", "\u{0660}1/01/1990").is_err());
    }

    #[test]
    fn test_age() {
        assert_eq!(age("age", "34").unwrap(), Some(34));
        assert_eq!(age("age", "0").unwrap(), Some(0));
        assert_eq!(age("age", "").unwrap(), None);
        assert!(age("age", "100").is_err());
        assert!(age("age", "-1").is_err());
        assert!(age("age", "old").is_err());
    }

    #[test]
    fn test_email() {
        assert_eq!(
            email("email", "jane.doe@mail.example.com").unwrap(),
            Some("jane.doe@mail.example.com".to_string())
        );
        assert!(email("email", "jane.doe").is_err());
        assert!(email("email", "jane@localhost").is_err());
    }

    #[test]
    fn test_phone() {
        assert_eq!(
            phone("phonenumber", "+63 912-345-6789").unwrap(),
            Some("639123456789".to_string())
        );
        assert_eq!(
            phone("phonenumber", "(555) 010.2030").unwrap(),
            Some("5550102030".to_string())
        );
        assert!(phone("phonenumber", "12345").is_err());
        assert!(phone("phonenumber", "555-CALL-NOW").is_err());
        assert!(phone("phonenumber", "1234567890123456").is_err());
    }

    #[test]
    fn test_symbols() {
        assert_eq!(symbols("symbols", "@#!").unwrap(), vec!["@", "#", "!"]);
        assert_eq!(symbols("symbols", "@ 1").unwrap(), vec!["@", "1"]);
        assert!(symbols("symbols", "").unwrap().is_empty());
        assert!(symbols("symbols", "a@").is_err());
        assert!(symbols("symbols", "_!").is_err());
    }

    #[test]
    fn test_word() {
        assert_eq!(word("new york"), Some("newyork".to_string()));
        assert_eq!(word("   "), None);
    }

    #[test]
    fn test_bounds() {
        assert!(bounds(6, 12, 2).is_ok());
        assert!(bounds(0, 12, 2).is_err());
        assert!(bounds(8, 8, 2).is_err());
        assert!(bounds(8, 4, 2).is_err());
        assert!(bounds(6, 12, 0).is_err());
    }
}
