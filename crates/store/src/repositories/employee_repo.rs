//! Repository for the employee roster.

use projectdesk_core::employee::{find_employee, validate_new_employee, Employee};
use projectdesk_core::error::CoreError;
use validator::Validate;

use crate::models::employee::CreateEmployee;
use crate::repositories::validation_error;
use crate::DataStore;

/// Roster reads plus add and delete. There is no update.
pub struct EmployeeRepo;

impl EmployeeRepo {
    pub fn list(store: &DataStore) -> &[Employee] {
        &store.employees
    }

    pub fn find_by_id<'a>(store: &'a DataStore, id: &str) -> Option<&'a Employee> {
        find_employee(&store.employees, id)
    }

    /// Add an employee with a freshly generated id, returning the new row.
    pub fn create(store: &mut DataStore, input: &CreateEmployee) -> Result<Employee, CoreError> {
        input.validate().map_err(validation_error)?;
        validate_new_employee(&input.name, &input.email, &input.role)?;

        let employee = Employee {
            id: uuid::Uuid::new_v4().to_string(),
            name: input.name.trim().to_string(),
            email: input.email.trim().to_string(),
            role: input.role.trim().to_string(),
        };

        let mut employees = store.employees.clone();
        employees.push(employee.clone());
        store.employees = employees;

        tracing::debug!(employee_id = %employee.id, "Employee added to store");
        Ok(employee)
    }

    /// Remove an employee. Returns `false` when no employee had that id.
    ///
    /// Work logs that reference the employee are left in place and resolve
    /// to an unknown employee from then on.
    pub fn delete(store: &mut DataStore, id: &str) -> bool {
        let before = store.employees.len();
        let remaining: Vec<Employee> = store
            .employees
            .iter()
            .filter(|e| e.id != id)
            .cloned()
            .collect();
        let removed = remaining.len() != before;
        store.employees = remaining;

        tracing::debug!(employee_id = %id, removed, "Employee delete applied");
        removed
    }
}
