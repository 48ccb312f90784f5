use once_cell::sync::Lazy;
use regex::Regex;

use crate::{EmployeeUpdate, NewEmployee};

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles")
});

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    FirstName,
    LastName,
    PhoneNumber,
    EmailAddress,
}

/// A rejected field plus the localization key of its message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message_key: &'static str,
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Form rules for a new record. Dates, department and position are typed
/// and therefore always present.
pub fn validate_new(data: &NewEmployee) -> Vec<FieldError> {
    let mut errors = Vec::new();
    check_text(&mut errors, Field::FirstName, &data.first_name);
    check_text(&mut errors, Field::LastName, &data.last_name);
    check_text(&mut errors, Field::PhoneNumber, &data.phone_number);
    check_email(&mut errors, &data.email);
    errors
}

/// Same rules, applied only to the fields an update carries.
pub fn validate_update(update: &EmployeeUpdate) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if let Some(value) = &update.first_name {
        check_text(&mut errors, Field::FirstName, value);
    }
    if let Some(value) = &update.last_name {
        check_text(&mut errors, Field::LastName, value);
    }
    if let Some(value) = &update.phone_number {
        check_text(&mut errors, Field::PhoneNumber, value);
    }
    if let Some(value) = &update.email {
        check_email(&mut errors, value);
    }
    errors
}

fn check_text(errors: &mut Vec<FieldError>, field: Field, value: &str) {
    if value.trim().is_empty() {
        errors.push(FieldError {
            field,
            message_key: required_key(field),
        });
    }
}

fn check_email(errors: &mut Vec<FieldError>, value: &str) {
    let message_key = if value.trim().is_empty() {
        "validation_required_emailAddress"
    } else if !is_valid_email(value) {
        "validation_invalid_emailAddress"
    } else {
        return;
    };
    errors.push(FieldError {
        field: Field::EmailAddress,
        message_key,
    });
}

fn required_key(field: Field) -> &'static str {
    match field {
        Field::FirstName => "validation_required_firstName",
        Field::LastName => "validation_required_lastName",
        Field::PhoneNumber => "validation_required_phoneNumber",
        Field::EmailAddress => "validation_required_emailAddress",
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::{Department, Position};

    fn draft() -> NewEmployee {
        NewEmployee {
            first_name: "Ayşe".into(),
            last_name: "Kaya".into(),
            date_of_employment: NaiveDate::from_ymd_opt(2022, 9, 12).unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1996, 6, 30).unwrap(),
            phone_number: "+90 535 456 78 90".into(),
            email: "ayse.kaya@example.com".into(),
            department: Department::Analytics,
            position: Position::Junior,
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("local@domain.tld"));
        assert!(!is_valid_email("local@domain"));
        assert!(!is_valid_email("lo cal@domain.tld"));
        assert!(!is_valid_email("@domain.tld"));
    }

    #[test]
    fn complete_draft_passes() {
        assert!(validate_new(&draft()).is_empty());
    }

    #[test]
    fn blank_fields_are_reported_with_message_keys() {
        let mut data = draft();
        data.first_name = "  ".into();
        data.phone_number = String::new();
        data.email = "not-an-email".into();
        let keys: Vec<&str> = validate_new(&data).iter().map(|e| e.message_key).collect();
        assert_eq!(
            keys,
            vec![
                "validation_required_firstName",
                "validation_required_phoneNumber",
                "validation_invalid_emailAddress",
            ]
        );
    }

    #[test]
    fn updates_only_check_present_fields() {
        assert!(validate_update(&EmployeeUpdate::default()).is_empty());
        let update = EmployeeUpdate {
            email: Some(" ".into()),
            ..EmployeeUpdate::default()
        };
        assert_eq!(
            validate_update(&update),
            vec![FieldError {
                field: Field::EmailAddress,
                message_key: "validation_required_emailAddress",
            }]
        );
    }
}
