//! Session roles

use crate::routes::RouteName;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Role carried by a session
///
/// Parsing never fails: a role string the client does not know about is kept
/// as [`Role::Unrecognized`] so navigation can still treat the session as
/// signed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Admin,
    Doctor,
    Patient,
    Unrecognized(String),
}

impl Role {
    /// The known roles, in route-table order
    pub const KNOWN: [Self; 3] = [Self::Admin, Self::Doctor, Self::Patient];

    /// Parse a role string as stored by the backend
    pub fn parse(value: &str) -> Self {
        match value {
            "admin" => Self::Admin,
            "doctor" => Self::Doctor,
            "patient" => Self::Patient,
            other => Self::Unrecognized(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Admin => "admin",
            Self::Doctor => "doctor",
            Self::Patient => "patient",
            Self::Unrecognized(other) => other,
        }
    }

    pub const fn is_recognized(&self) -> bool {
        !matches!(self, Self::Unrecognized(_))
    }

    /// Landing view for this role after sign-in
    pub const fn dashboard(&self) -> Option<RouteName> {
        match self {
            Self::Admin => Some(RouteName::AdminDashboard),
            Self::Doctor => Some(RouteName::DoctorDashboard),
            Self::Patient => Some(RouteName::PatientDashboard),
            Self::Unrecognized(_) => None,
        }
    }

    /// Path prefix of the route subtree reserved for this role
    pub const fn path_prefix(&self) -> Option<&'static str> {
        match self {
            Self::Admin => Some("/admin"),
            Self::Doctor => Some("/doctor"),
            Self::Patient => Some("/patient"),
            Self::Unrecognized(_) => None,
        }
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        match value.as_str() {
            "admin" => Self::Admin,
            "doctor" => Self::Doctor,
            "patient" => Self::Patient,
            _ => Self::Unrecognized(value),
        }
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Unrecognized(other) => other,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_roles() {
        assert_eq!(Role::parse("admin"), Role::Admin);
        assert_eq!(Role::parse("doctor"), Role::Doctor);
        assert_eq!(Role::parse("patient"), Role::Patient);
    }

    #[test]
    fn test_parse_keeps_unknown_role() {
        let role = Role::parse("nurse");
        assert_eq!(role, Role::Unrecognized("nurse".to_string()));
        assert_eq!(role.as_str(), "nurse");
        assert!(!role.is_recognized());
        assert!(role.dashboard().is_none());
        assert!(role.path_prefix().is_none());
    }

    #[test]
    fn test_from_owned_string() {
        assert_eq!(Role::from("admin".to_string()), Role::Admin);
        assert_eq!(Role::from("doctor".to_string()), Role::Doctor);
        assert_eq!(Role::from("patient".to_string()), Role::Patient);
        assert_eq!(
            Role::from("nurse".to_string()),
            Role::Unrecognized("nurse".to_string())
        );
    }

    #[test]
    fn test_role_is_case_sensitive() {
        assert!(!Role::parse("Admin").is_recognized());
    }

    #[test]
    fn test_dashboards() {
        assert_eq!(Role::Admin.dashboard(), Some(RouteName::AdminDashboard));
        assert_eq!(Role::Doctor.dashboard(), Some(RouteName::DoctorDashboard));
        assert_eq!(Role::Patient.dashboard(), Some(RouteName::PatientDashboard));
    }

    #[test]
    fn test_serializes_as_plain_string() {
        assert_eq!(serde_json::to_string(&Role::Doctor).unwrap(), "\"doctor\"");
        let role: Role = serde_json::from_str("\"receptionist\"").unwrap();
        assert_eq!(role, Role::Unrecognized("receptionist".to_string()));
        let role: Role = serde_json::from_str("\"patient\"").unwrap();
        assert_eq!(role, Role::Patient);
    }
}
