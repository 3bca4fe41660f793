//! Static route table

use crate::role::Role;
use std::collections::HashMap;

/// Named views of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Landing,
    Login,
    Register,

    AdminDashboard,
    AdminDoctors,
    AdminPatients,
    AdminAppointments,
    AdminAppointmentDetails,
    AdminReports,

    DoctorDashboard,
    DoctorAppointments,
    DoctorPatientHistory,
    DoctorAvailability,
    DoctorProfile,
    DoctorMyPatients,
    DoctorStatistics,

    PatientDashboard,
    PatientProfile,
    PatientAppointments,
    PatientBook,
    PatientDepartments,
    PatientDoctors,
    PatientHistory,
}

/// Who may open a route
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteAccess {
    Public,
    Role(Role),
}

/// One entry of the route table
#[derive(Debug)]
pub struct RouteDef {
    pub name: RouteName,
    /// Path pattern; `:name` segments capture parameters
    pub path: &'static str,
    pub access: RouteAccess,
}

const fn public(name: RouteName, path: &'static str) -> RouteDef {
    RouteDef {
        name,
        path,
        access: RouteAccess::Public,
    }
}

const fn admin(name: RouteName, path: &'static str) -> RouteDef {
    RouteDef {
        name,
        path,
        access: RouteAccess::Role(Role::Admin),
    }
}

const fn doctor(name: RouteName, path: &'static str) -> RouteDef {
    RouteDef {
        name,
        path,
        access: RouteAccess::Role(Role::Doctor),
    }
}

const fn patient(name: RouteName, path: &'static str) -> RouteDef {
    RouteDef {
        name,
        path,
        access: RouteAccess::Role(Role::Patient),
    }
}

/// All registered routes
pub static ROUTES: [RouteDef; 23] = [
    public(RouteName::Landing, "/"),
    public(RouteName::Login, "/login"),
    public(RouteName::Register, "/register"),
    admin(RouteName::AdminDashboard, "/admin/dashboard"),
    admin(RouteName::AdminDoctors, "/admin/doctors"),
    admin(RouteName::AdminPatients, "/admin/patients"),
    admin(RouteName::AdminAppointments, "/admin/appointments"),
    admin(RouteName::AdminAppointmentDetails, "/admin/appointments/:id"),
    admin(RouteName::AdminReports, "/admin/reports"),
    doctor(RouteName::DoctorDashboard, "/doctor/dashboard"),
    doctor(RouteName::DoctorAppointments, "/doctor/appointments"),
    doctor(RouteName::DoctorPatientHistory, "/doctor/patient-history"),
    doctor(RouteName::DoctorAvailability, "/doctor/availability"),
    doctor(RouteName::DoctorProfile, "/doctor/profile"),
    doctor(RouteName::DoctorMyPatients, "/doctor/patients"),
    doctor(RouteName::DoctorStatistics, "/doctor/statistics"),
    patient(RouteName::PatientDashboard, "/patient/dashboard"),
    patient(RouteName::PatientProfile, "/patient/profile"),
    patient(RouteName::PatientAppointments, "/patient/appointments"),
    patient(RouteName::PatientBook, "/patient/book"),
    patient(RouteName::PatientDepartments, "/patient/departments"),
    patient(RouteName::PatientDoctors, "/patient/doctors"),
    patient(RouteName::PatientHistory, "/patient/history"),
];

/// Paths reachable without a session
pub const PUBLIC_PATHS: [&str; 3] = ["/", "/login", "/register"];

impl RouteName {
    pub fn def(self) -> &'static RouteDef {
        ROUTES
            .iter()
            .find(|route| route.name == self)
            .unwrap_or_else(|| unreachable!("{self:?} is missing from the route table"))
    }

    /// Path pattern of the route
    pub fn path(self) -> &'static str {
        self.def().path
    }

    pub fn access(self) -> &'static RouteAccess {
        &self.def().access
    }
}

/// A concrete path resolved against the route table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    pub name: RouteName,
    pub params: HashMap<String, String>,
}

/// Resolve a concrete path to its route; query strings and fragments are ignored
pub fn recognize(path: &str) -> Option<RouteMatch> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    ROUTES.iter().find_map(|route| {
        match_pattern(route.path, path).map(|params| RouteMatch {
            name: route.name,
            params,
        })
    })
}

fn match_pattern(pattern: &str, path: &str) -> Option<HashMap<String, String>> {
    let mut params = HashMap::new();
    let mut pattern_segments = pattern.trim_end_matches('/').split('/');
    let mut path_segments = path.trim_end_matches('/').split('/');

    loop {
        match (pattern_segments.next(), path_segments.next()) {
            (None, None) => return Some(params),
            (Some(expected), Some(actual)) => {
                if let Some(name) = expected.strip_prefix(':') {
                    if actual.is_empty() {
                        return None;
                    }
                    params.insert(name.to_string(), actual.to_string());
                } else if expected != actual {
                    return None;
                }
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_registered_once() {
        for route in &ROUTES {
            let count = ROUTES.iter().filter(|r| r.name == route.name).count();
            assert_eq!(count, 1, "{:?} registered {count} times", route.name);
            assert_eq!(route.name.path(), route.path);
        }
    }

    #[test]
    fn test_public_routes_match_public_paths() {
        let public: Vec<_> = ROUTES
            .iter()
            .filter(|route| route.access == RouteAccess::Public)
            .map(|route| route.path)
            .collect();
        assert_eq!(public, PUBLIC_PATHS);
    }

    #[test]
    fn test_role_routes_live_under_role_prefix() {
        for route in &ROUTES {
            if let RouteAccess::Role(role) = &route.access {
                let prefix = role.path_prefix().unwrap();
                assert!(route.path.starts_with(prefix), "{}", route.path);
            }
        }
    }

    #[test]
    fn test_recognize_static_paths() {
        assert_eq!(recognize("/").unwrap().name, RouteName::Landing);
        assert_eq!(recognize("/login").unwrap().name, RouteName::Login);
        assert_eq!(
            recognize("/doctor/patient-history").unwrap().name,
            RouteName::DoctorPatientHistory
        );
        assert_eq!(
            recognize("/patient/book?slot=3").unwrap().name,
            RouteName::PatientBook
        );
    }

    #[test]
    fn test_recognize_captures_params() {
        let matched = recognize("/admin/appointments/42").unwrap();
        assert_eq!(matched.name, RouteName::AdminAppointmentDetails);
        assert_eq!(matched.params.get("id").map(String::as_str), Some("42"));

        assert_eq!(
            recognize("/admin/appointments").unwrap().name,
            RouteName::AdminAppointments
        );
    }

    #[test]
    fn test_recognize_unknown_paths() {
        assert!(recognize("/administrator").is_none());
        assert!(recognize("/admin/appointments/42/edit").is_none());
        assert!(recognize("/nowhere").is_none());
    }
}
