//! Field rules for employee payloads.
//!
//! Required fields fail when absent, `null` or the empty string. Email, phone and
//! date of birth additionally have to match a fixed shape; the date check is a
//! digit pattern only, so `31-02-2020` is accepted.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::employee::EmployeeInput;
use crate::errors::ValidationErrors;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

static PHONE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone pattern compiles"));

static DOB_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(0[1-9]|[1-2][0-9]|3[0-1])-(0[1-9]|1[0-2])-[0-9]{4}$").expect("dob pattern compiles")
});

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}

/// Exactly ten ASCII digits.
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_RE.is_match(phone)
}

/// `DD-MM-YYYY` with day 01-31 and month 01-12; no calendar check.
pub fn is_valid_dob(dob: &str) -> bool {
    DOB_RE.is_match(dob)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn require(errors: &mut Vec<String>, value: &Option<String>, message: &str) {
    if present(value).is_none() {
        errors.push(message.to_string());
    }
}

fn require_format(
    errors: &mut Vec<String>,
    value: &Option<String>,
    missing: &str,
    check: fn(&str) -> bool,
    invalid: &str,
) {
    match present(value) {
        None => errors.push(missing.to_string()),
        Some(v) if !check(v) => errors.push(invalid.to_string()),
        Some(_) => {}
    }
}

/// Collect every failed check for `input`; an empty list means the payload is valid.
pub fn validate_employee(input: &EmployeeInput) -> Vec<String> {
    let mut errors = Vec::new();

    require(&mut errors, &input.salutation, "Salutation is required");
    require(&mut errors, &input.first_name, "First Name is required");
    require(&mut errors, &input.last_name, "Last Name is required");
    require_format(&mut errors, &input.email, "Email is required", is_valid_email, "Invalid email format");
    require_format(&mut errors, &input.phone, "Phone is required", is_valid_phone, "Invalid phone number format");
    require_format(
        &mut errors,
        &input.dob,
        "Date of Birth is required",
        is_valid_dob,
        "Invalid date format. Please use DD-MM-YYYY format",
    );
    require(&mut errors, &input.gender, "Gender is required");
    require(&mut errors, &input.qualifications, "Qualifications are required");
    require(&mut errors, &input.address, "Address is required");
    require(&mut errors, &input.city, "City is required");
    require(&mut errors, &input.state, "State is required");
    require(&mut errors, &input.country, "Country is required");
    require(&mut errors, &input.username, "Username is required");
    require(&mut errors, &input.password, "Password is required");

    errors
}

/// Same checks as [`validate_employee`], as a `Result`.
pub fn check_employee(input: &EmployeeInput) -> Result<(), ValidationErrors> {
    let errors = validate_employee(input);
    if errors.is_empty() { Ok(()) } else { Err(ValidationErrors(errors)) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::tests::valid_input;

    #[test]
    fn phone_needs_exactly_ten_digits() {
        assert!(!is_valid_phone("12345"));
        assert!(is_valid_phone("1234567890"));
        assert!(!is_valid_phone("12345678901"));
        assert!(!is_valid_phone("12345abcde"));
        assert!(!is_valid_phone("123 456 7890"));
        // non-ASCII digits are not decimal digits here
        assert!(!is_valid_phone("١٢٣٤٥٦٧٨٩٠"));
    }

    #[test]
    fn email_needs_a_dotted_domain() {
        assert!(!is_valid_email("a@b"));
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("jane.doe@mail.example.org"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("a@@b.c"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@b."));
    }

    #[test]
    fn dob_is_a_digit_pattern_only() {
        assert!(is_valid_dob("01-01-2000"));
        assert!(is_valid_dob("31-12-1999"));
        assert!(!is_valid_dob("32-01-2020"));
        assert!(!is_valid_dob("00-01-2020"));
        assert!(!is_valid_dob("15-13-2020"));
        assert!(!is_valid_dob("2020-01-15"));
        assert!(!is_valid_dob("1-1-2020"));
        // calendar-impossible dates pass on purpose
        assert!(is_valid_dob("31-02-2020"));
        assert!(is_valid_dob("31-04-2020"));
        assert!(is_valid_dob("29-02-2023"));
    }

    #[test]
    fn valid_input_has_no_errors() {
        assert!(validate_employee(&valid_input()).is_empty());
        assert!(check_employee(&valid_input()).is_ok());
    }

    #[test]
    fn empty_input_reports_every_field_in_order() {
        let errors = validate_employee(&EmployeeInput::default());
        assert_eq!(
            errors,
            vec![
                "Salutation is required",
                "First Name is required",
                "Last Name is required",
                "Email is required",
                "Phone is required",
                "Date of Birth is required",
                "Gender is required",
                "Qualifications are required",
                "Address is required",
                "City is required",
                "State is required",
                "Country is required",
                "Username is required",
                "Password is required",
            ]
        );
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut input = valid_input();
        input.city = Some(String::new());
        assert_eq!(validate_employee(&input), vec!["City is required"]);
    }

    #[test]
    fn format_errors_replace_required_errors() {
        let mut input = valid_input();
        input.email = Some("a@b".into());
        input.phone = Some("12345".into());
        input.dob = Some("32-01-2020".into());
        let err = check_employee(&input).unwrap_err();
        assert_eq!(
            err.messages(),
            &[
                "Invalid email format".to_string(),
                "Invalid phone number format".to_string(),
                "Invalid date format. Please use DD-MM-YYYY format".to_string(),
            ]
        );
    }

    #[test]
    fn each_missing_field_yields_one_error() {
        let blank: [fn(&mut EmployeeInput); 14] = [
            |i| i.salutation = None,
            |i| i.first_name = None,
            |i| i.last_name = None,
            |i| i.email = None,
            |i| i.phone = None,
            |i| i.dob = None,
            |i| i.gender = None,
            |i| i.qualifications = None,
            |i| i.address = None,
            |i| i.city = None,
            |i| i.state = None,
            |i| i.country = None,
            |i| i.username = None,
            |i| i.password = None,
        ];
        for clear in blank {
            let mut input = valid_input();
            clear(&mut input);
            assert_eq!(validate_employee(&input).len(), 1);
        }
    }
}
