//! User roles assigned by the credential store

use serde::{Deserialize, Serialize};

/// Role assigned to an authenticated user.
///
/// Stored in the credential table as lowercase text; `parse` is the
/// inverse of `as_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Engineer,
    Technician,
    Manager,
}

impl Role {
    /// Parse the role text stored in the users table
    pub fn parse(text: &str) -> Option<Self> {
        match text {
            "admin" => Some(Self::Admin),
            "engineer" => Some(Self::Engineer),
            "technician" => Some(Self::Technician),
            "manager" => Some(Self::Manager),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Engineer => "engineer",
            Self::Technician => "technician",
            Self::Manager => "manager",
        }
    }

    /// Capitalized name for window titles
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Engineer => "Engineer",
            Self::Technician => "Technician",
            Self::Manager => "Manager",
        }
    }

    /// Whether this role may mutate simulated sensor values
    pub fn can_simulate(&self) -> bool {
        matches!(self, Self::Admin | Self::Engineer)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trip() {
        for role in [Role::Admin, Role::Engineer, Role::Technician, Role::Manager] {
            assert_eq!(Role::parse(role.as_str()), Some(role));
        }
        assert_eq!(Role::parse("root"), None);
        assert_eq!(Role::parse("Admin"), None);
    }

    #[test]
    fn test_simulate_permission() {
        assert!(Role::Admin.can_simulate());
        assert!(Role::Engineer.can_simulate());
        assert!(!Role::Technician.can_simulate());
        assert!(!Role::Manager.can_simulate());
    }
}
