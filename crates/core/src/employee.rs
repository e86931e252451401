//! Employee roster: presence checks, role stats, and lookups.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::EntityId;

/// Role offered when the roster uses developers as its headline group.
pub const ROLE_DEVELOPER: &str = "Developer";

/// Roles an add-employee form offers. Stored roles are free text and need
/// not come from this list.
pub const OFFERED_ROLES: &[&str] = &[
    ROLE_DEVELOPER,
    "Designer",
    "Project Manager",
    "QA Engineer",
    "DevOps Engineer",
    "Product Manager",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: EntityId,
    pub name: String,
    pub email: String,
    pub role: String,
}

/// Presence checks for a new employee. All three fields are required.
pub fn validate_new_employee(name: &str, email: &str, role: &str) -> Result<(), CoreError> {
    let missing: Vec<&str> = [("name", name), ("email", email), ("role", role)]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
        .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Missing required employee fields: {}",
            missing.join(", ")
        )))
    }
}

/// Head counts shown above the roster.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RosterStats {
    pub total: usize,
    pub developers: usize,
    pub others: usize,
}

pub fn roster_stats(employees: &[Employee]) -> RosterStats {
    let developers = employees
        .iter()
        .filter(|e| e.role == ROLE_DEVELOPER)
        .count();
    RosterStats {
        total: employees.len(),
        developers,
        others: employees.len() - developers,
    }
}

pub fn find_employee<'a>(employees: &'a [Employee], id: &str) -> Option<&'a Employee> {
    employees.iter().find(|e| e.id == id)
}

/// Comment authors are stored by display name, so they resolve by name.
pub fn find_employee_by_name<'a>(employees: &'a [Employee], name: &str) -> Option<&'a Employee> {
    employees.iter().find(|e| e.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn employee(id: &str, name: &str, role: &str) -> Employee {
        Employee {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{id}@company.com"),
            role: role.to_string(),
        }
    }

    #[test]
    fn complete_employee_passes() {
        assert!(validate_new_employee("John Doe", "john@company.com", "Developer").is_ok());
    }

    #[test]
    fn blank_fields_are_reported_together() {
        let err = validate_new_employee("  ", "john@company.com", "").unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg.contains("name, role"));
    }

    #[test]
    fn free_text_role_is_accepted() {
        assert!(validate_new_employee("Ada", "ada@company.com", "Chief Tinkerer").is_ok());
        assert!(!OFFERED_ROLES.contains(&"Chief Tinkerer"));
    }

    #[test]
    fn stats_split_developers_from_everyone_else() {
        let roster = vec![
            employee("1", "Sarah Johnson", "Project Manager"),
            employee("2", "Michael Chen", "Developer"),
            employee("3", "Emma Wilson", "Designer"),
            employee("4", "James Brown", "Developer"),
        ];
        assert_eq!(
            roster_stats(&roster),
            RosterStats {
                total: 4,
                developers: 2,
                others: 2,
            }
        );
        assert_eq!(roster_stats(&[]), RosterStats::default());
    }

    #[test]
    fn lookups_return_none_when_unresolved() {
        let roster = vec![employee("1", "Sarah Johnson", "Project Manager")];
        assert_eq!(find_employee(&roster, "1").map(|e| e.name.as_str()), Some("Sarah Johnson"));
        assert!(find_employee(&roster, "2").is_none());
        assert_eq!(
            find_employee_by_name(&roster, "Sarah Johnson").map(|e| e.role.as_str()),
            Some("Project Manager")
        );
        assert!(find_employee_by_name(&roster, "Nobody").is_none());
    }
}
