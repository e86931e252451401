//! Employee input model.

use serde::Deserialize;
use validator::Validate;

/// DTO for adding an employee to the roster.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateEmployee {
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    #[validate(length(min = 1, message = "email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "role is required"))]
    pub role: String,
}
