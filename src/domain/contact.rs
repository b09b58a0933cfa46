use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// Column names of the persisted table, in field order.
pub const HEADER: [&str; 3] = ["First Name", "Last Name", "Phone Number"];

pub const MIN_PHONE_DIGITS: usize = 7;

#[derive(Debug, PartialEq, Eq, Clone, Serialize, Deserialize)]
pub struct Contact {
    #[serde(rename = "First Name")]
    pub first_name: String,

    #[serde(rename = "Last Name")]
    pub last_name: String,

    #[serde(rename = "Phone Number")]
    pub phone_number: String,
}

pub enum ValidationReq {
    __,
}

impl ValidationReq {
    pub fn phone_req() -> String {
        format!(
            "Phone number should contain digits only, at least {} of them",
            MIN_PHONE_DIGITS
        )
    }
}

impl Contact {
    pub fn new(first_name: String, last_name: String, phone_number: String) -> Self {
        Contact {
            first_name,
            last_name,
            phone_number,
        }
    }

    /// Identity key used for duplicate and existence checks.
    pub fn key(&self) -> (String, String) {
        (normalize(&self.first_name), normalize(&self.last_name))
    }

    pub fn matches_key(&self, first_name: &str, last_name: &str) -> bool {
        self.key() == (normalize(first_name), normalize(last_name))
    }

    /// Raw comparison, no trimming or case folding.
    pub fn matches_exactly(&self, first_name: &str, last_name: &str) -> bool {
        self.first_name == first_name && self.last_name == last_name
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

pub fn validate_phone_number(phone: &str) -> Result<bool, AppError> {
    // Every character must be an ASCII digit
    // At least MIN_PHONE_DIGITS of them
    let re = Regex::new(&format!(r"^[0-9]{{{},}}$", MIN_PHONE_DIGITS))?;
    Ok(re.is_match(phone))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phone_number_validation() -> Result<(), AppError> {
        assert!(!validate_phone_number("12345")?);
        assert!(validate_phone_number("1234567")?);
        assert!(validate_phone_number("5551234567")?);
        assert!(!validate_phone_number("555-1234567")?);
        assert!(!validate_phone_number("")?);
        assert!(!validate_phone_number(" 1234567")?);
        Ok(())
    }

    #[test]
    fn key_ignores_case_and_surrounding_whitespace() {
        let contact = Contact::new(
            "Jane".to_string(),
            "Doe".to_string(),
            "5551234".to_string(),
        );

        assert!(contact.matches_key("  jane ", "DOE"));
        assert!(!contact.matches_key("Janet", "Doe"));
        assert!(contact.matches_exactly("Jane", "Doe"));
        assert!(!contact.matches_exactly("jane", "Doe"));
    }
}
