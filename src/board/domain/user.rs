//! User record and role types.

use super::{ParseUserRoleError, UserId};
use serde::{Deserialize, Serialize};

/// Fixed role set resolved by the authentication collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    /// Full administrative access.
    Admin,
    /// Finance treasurer.
    Treasurer,
    /// Finance accountant.
    Accountant,
    /// Human-resources manager.
    HrManager,
    /// Head of a department.
    DepartmentHead,
    /// Regular staff member.
    Employee,
    /// External account holder.
    Citizen,
}

impl UserRole {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Treasurer => "treasurer",
            Self::Accountant => "accountant",
            Self::HrManager => "hr_manager",
            Self::DepartmentHead => "department_head",
            Self::Employee => "employee",
            Self::Citizen => "citizen",
        }
    }
}

impl TryFrom<&str> for UserRole {
    type Error = ParseUserRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "admin" => Ok(Self::Admin),
            "treasurer" => Ok(Self::Treasurer),
            "accountant" => Ok(Self::Accountant),
            "hr_manager" => Ok(Self::HrManager),
            "department_head" => Ok(Self::DepartmentHead),
            "employee" => Ok(Self::Employee),
            "citizen" => Ok(Self::Citizen),
            _ => Err(ParseUserRoleError(value.to_owned())),
        }
    }
}

/// User record as read from the board store.
///
/// Users are read-only from the engine's perspective.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// User identifier.
    pub id: UserId,
    /// Login name.
    pub username: String,
    /// Display name.
    pub full_name: String,
    /// Resolved role.
    pub role: UserRole,
    /// Department label, if the user belongs to one.
    pub department: Option<String>,
    /// Whether the user can receive work.
    pub is_active: bool,
}

impl User {
    /// Creates an active user with the given role.
    #[must_use]
    pub fn new(username: impl Into<String>, full_name: impl Into<String>, role: UserRole) -> Self {
        Self {
            id: UserId::new(),
            username: username.into(),
            full_name: full_name.into(),
            role,
            department: None,
            is_active: true,
        }
    }

    /// Sets the department label, dropping blank input.
    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        let value = department.into();
        let normalized = value.trim();
        self.department = (!normalized.is_empty()).then_some(normalized.to_owned());
        self
    }

    /// Marks the user inactive.
    #[must_use]
    pub const fn deactivated(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Returns whether the user has a non-empty department label.
    #[must_use]
    pub fn has_department(&self) -> bool {
        self.department.as_deref().is_some_and(|label| !label.is_empty())
    }
}
