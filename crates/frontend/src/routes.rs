//! Browser routes

use clinic_core::RouteName;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq, Eq, Debug)]
pub enum Route {
    #[at("/")]
    Landing,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,

    #[at("/admin/dashboard")]
    AdminDashboard,
    #[at("/admin/doctors")]
    AdminDoctors,
    #[at("/admin/patients")]
    AdminPatients,
    #[at("/admin/appointments")]
    AdminAppointments,
    #[at("/admin/appointments/:id")]
    AdminAppointmentDetails { id: String },
    #[at("/admin/reports")]
    AdminReports,

    #[at("/doctor/dashboard")]
    DoctorDashboard,
    #[at("/doctor/appointments")]
    DoctorAppointments,
    #[at("/doctor/patient-history")]
    DoctorPatientHistory,
    #[at("/doctor/availability")]
    DoctorAvailability,
    #[at("/doctor/profile")]
    DoctorProfile,
    #[at("/doctor/patients")]
    DoctorMyPatients,
    #[at("/doctor/statistics")]
    DoctorStatistics,

    #[at("/patient/dashboard")]
    PatientDashboard,
    #[at("/patient/profile")]
    PatientProfile,
    #[at("/patient/appointments")]
    PatientAppointments,
    #[at("/patient/book")]
    PatientBook,
    #[at("/patient/departments")]
    PatientDepartments,
    #[at("/patient/doctors")]
    PatientDoctors,
    #[at("/patient/history")]
    PatientHistory,

    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// Entry of the shared route table, if this is a registered view
    pub fn name(&self) -> Option<RouteName> {
        let name = match self {
            Self::Landing => RouteName::Landing,
            Self::Login => RouteName::Login,
            Self::Register => RouteName::Register,
            Self::AdminDashboard => RouteName::AdminDashboard,
            Self::AdminDoctors => RouteName::AdminDoctors,
            Self::AdminPatients => RouteName::AdminPatients,
            Self::AdminAppointments => RouteName::AdminAppointments,
            Self::AdminAppointmentDetails { .. } => RouteName::AdminAppointmentDetails,
            Self::AdminReports => RouteName::AdminReports,
            Self::DoctorDashboard => RouteName::DoctorDashboard,
            Self::DoctorAppointments => RouteName::DoctorAppointments,
            Self::DoctorPatientHistory => RouteName::DoctorPatientHistory,
            Self::DoctorAvailability => RouteName::DoctorAvailability,
            Self::DoctorProfile => RouteName::DoctorProfile,
            Self::DoctorMyPatients => RouteName::DoctorMyPatients,
            Self::DoctorStatistics => RouteName::DoctorStatistics,
            Self::PatientDashboard => RouteName::PatientDashboard,
            Self::PatientProfile => RouteName::PatientProfile,
            Self::PatientAppointments => RouteName::PatientAppointments,
            Self::PatientBook => RouteName::PatientBook,
            Self::PatientDepartments => RouteName::PatientDepartments,
            Self::PatientDoctors => RouteName::PatientDoctors,
            Self::PatientHistory => RouteName::PatientHistory,
            Self::NotFound => return None,
        };
        Some(name)
    }

    /// Route for a redirect target; parameterised views have no bare route
    pub fn from_name(name: RouteName) -> Option<Self> {
        let route = match name {
            RouteName::Landing => Self::Landing,
            RouteName::Login => Self::Login,
            RouteName::Register => Self::Register,
            RouteName::AdminDashboard => Self::AdminDashboard,
            RouteName::AdminDoctors => Self::AdminDoctors,
            RouteName::AdminPatients => Self::AdminPatients,
            RouteName::AdminAppointments => Self::AdminAppointments,
            RouteName::AdminAppointmentDetails => return None,
            RouteName::AdminReports => Self::AdminReports,
            RouteName::DoctorDashboard => Self::DoctorDashboard,
            RouteName::DoctorAppointments => Self::DoctorAppointments,
            RouteName::DoctorPatientHistory => Self::DoctorPatientHistory,
            RouteName::DoctorAvailability => Self::DoctorAvailability,
            RouteName::DoctorProfile => Self::DoctorProfile,
            RouteName::DoctorMyPatients => Self::DoctorMyPatients,
            RouteName::DoctorStatistics => Self::DoctorStatistics,
            RouteName::PatientDashboard => Self::PatientDashboard,
            RouteName::PatientProfile => Self::PatientProfile,
            RouteName::PatientAppointments => Self::PatientAppointments,
            RouteName::PatientBook => Self::PatientBook,
            RouteName::PatientDepartments => Self::PatientDepartments,
            RouteName::PatientDoctors => Self::PatientDoctors,
            RouteName::PatientHistory => Self::PatientHistory,
        };
        Some(route)
    }
}
