use std::{fmt, str::FromStr};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Department {
    Analytics,
    Tech,
}

impl Department {
    pub const ALL: [Department; 2] = [Department::Analytics, Department::Tech];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::Analytics => "Analytics",
            Department::Tech => "Tech",
        }
    }

    /// Localization key for the display label.
    pub fn label_key(self) -> &'static str {
        match self {
            Department::Analytics => "department_analytics",
            Department::Tech => "department_tech",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum Position {
    Junior,
    Medior,
    Senior,
}

impl Position {
    pub const ALL: [Position; 3] = [Position::Junior, Position::Medior, Position::Senior];

    pub fn as_str(self) -> &'static str {
        match self {
            Position::Junior => "Junior",
            Position::Medior => "Medior",
            Position::Senior => "Senior",
        }
    }

    pub fn label_key(self) -> &'static str {
        match self {
            Position::Junior => "position_junior",
            Position::Medior => "position_medior",
            Position::Senior => "position_senior",
        }
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown {kind} {value:?}; expected one of {expected}")]
pub struct ParseEnumError {
    kind: &'static str,
    value: String,
    expected: &'static str,
}

impl FromStr for Department {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|dept| dept.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "department",
                value: s.to_string(),
                expected: "Analytics, Tech",
            })
    }
}

impl FromStr for Position {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::ALL
            .into_iter()
            .find(|pos| pos.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseEnumError {
                kind: "position",
                value: s.to_string(),
                expected: "Junior, Medior, Senior",
            })
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One stored employee. The JSON shape is the persisted snapshot format.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

impl Employee {
    pub fn from_new(id: String, data: NewEmployee) -> Self {
        Self {
            id,
            first_name: data.first_name,
            last_name: data.last_name,
            date_of_employment: data.date_of_employment,
            date_of_birth: data.date_of_birth,
            phone_number: data.phone_number,
            email: data.email,
            department: data.department,
            position: data.position,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Overwrites every field present in `update`; `id` is never touched.
    pub fn apply(&mut self, update: EmployeeUpdate) {
        let EmployeeUpdate {
            first_name,
            last_name,
            date_of_employment,
            date_of_birth,
            phone_number,
            email,
            department,
            position,
        } = update;
        if let Some(value) = first_name {
            self.first_name = value;
        }
        if let Some(value) = last_name {
            self.last_name = value;
        }
        if let Some(value) = date_of_employment {
            self.date_of_employment = value;
        }
        if let Some(value) = date_of_birth {
            self.date_of_birth = value;
        }
        if let Some(value) = phone_number {
            self.phone_number = value;
        }
        if let Some(value) = email {
            self.email = value;
        }
        if let Some(value) = department {
            self.department = value;
        }
        if let Some(value) = position {
            self.position = value;
        }
    }

    /// Textual form of every field, `id` included, as used by search.
    pub fn search_fields(&self) -> [String; 9] {
        [
            self.id.clone(),
            self.first_name.clone(),
            self.last_name.clone(),
            self.date_of_employment.to_string(),
            self.date_of_birth.to_string(),
            self.phone_number.clone(),
            self.email.clone(),
            self.department.as_str().to_string(),
            self.position.as_str().to_string(),
        ]
    }
}

/// Employee data before the store assigns an id.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub date_of_employment: NaiveDate,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
    pub email: String,
    pub department: Department,
    pub position: Position,
}

/// Partial change set; `None` keeps the stored value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_employment: Option<NaiveDate>,
    pub date_of_birth: Option<NaiveDate>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub department: Option<Department>,
    pub position: Option<Position>,
}

impl EmployeeUpdate {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<NewEmployee> for EmployeeUpdate {
    fn from(data: NewEmployee) -> Self {
        Self {
            first_name: Some(data.first_name),
            last_name: Some(data.last_name),
            date_of_employment: Some(data.date_of_employment),
            date_of_birth: Some(data.date_of_birth),
            phone_number: Some(data.phone_number),
            email: Some(data.email),
            department: Some(data.department),
            position: Some(data.position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Employee {
        Employee {
            id: "1".into(),
            first_name: "John".into(),
            last_name: "Doe".into(),
            date_of_employment: NaiveDate::from_ymd_opt(2020, 1, 15).unwrap(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 5, 20).unwrap(),
            phone_number: "+90 532 123 45 67".into(),
            email: "john.doe@example.com".into(),
            department: Department::Tech,
            position: Position::Senior,
        }
    }

    #[test]
    fn serializes_with_snapshot_field_names() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "1",
                "firstName": "John",
                "lastName": "Doe",
                "dateOfEmployment": "2020-01-15",
                "dateOfBirth": "1990-05-20",
                "phoneNumber": "+90 532 123 45 67",
                "email": "john.doe@example.com",
                "department": "Tech",
                "position": "Senior"
            })
        );
    }

    #[test]
    fn rejects_partial_and_extra_fields() {
        let partial = json!([{ "id": "test1", "firstName": "Stored User" }]);
        assert!(serde_json::from_value::<Vec<Employee>>(partial).is_err());

        let mut extra = serde_json::to_value(sample()).unwrap();
        extra["nickname"] = json!("JD");
        assert!(serde_json::from_value::<Employee>(extra).is_err());
    }

    #[test]
    fn apply_merges_only_present_fields() {
        let mut employee = sample();
        employee.apply(EmployeeUpdate {
            last_name: Some("Updated".into()),
            position: Some(Position::Junior),
            ..EmployeeUpdate::default()
        });
        assert_eq!(employee.id, "1");
        assert_eq!(employee.first_name, "John");
        assert_eq!(employee.last_name, "Updated");
        assert_eq!(employee.position, Position::Junior);
        assert_eq!(employee.department, Department::Tech);
    }

    #[test]
    fn enums_parse_case_insensitively() {
        assert_eq!("analytics".parse::<Department>(), Ok(Department::Analytics));
        assert_eq!(" SENIOR ".parse::<Position>(), Ok(Position::Senior));
        let err = "Sales".parse::<Department>().unwrap_err();
        assert!(err.to_string().contains("Analytics, Tech"));
    }
}
