//! Data Transfer Objects (DTOs)
//!
//! Raw, unvalidated input for the use cases.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// =============================================================================
// Department Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateDepartmentCommand {
    pub name: String,
    pub identifier: String,
    /// `None` creates a root department
    pub parent_id: Option<Uuid>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RenameDepartmentCommand {
    pub department_id: Uuid,
    pub name: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MoveDepartmentCommand {
    pub department_id: Uuid,
    /// `None` promotes the department to a root
    pub new_parent_id: Option<Uuid>,
}

// =============================================================================
// Location / Position Commands
// =============================================================================

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreateLocationCommand {
    pub name: String,
    /// Comma-delimited address, e.g. "Moscow, Tverskaya 1"
    pub address: String,
    /// `Region/City`
    pub timezone: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CreatePositionCommand {
    pub name: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_department_command_from_json() {
        let command: CreateDepartmentCommand =
            serde_json::from_str(r#"{"name":"Engineering","identifier":"ENG","parent_id":null}"#).unwrap();
        assert_eq!(command.identifier, "ENG");
        assert!(command.parent_id.is_none());
    }
}
