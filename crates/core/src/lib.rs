//! Clinic session model: auth store, route table and navigation guard

pub mod guard;
pub mod navigation;
pub mod persistence;
pub mod role;
pub mod routes;
pub mod session;
pub mod store;

pub use guard::{evaluate, GuardError, NavigationDecision, NavigationGuard};
pub use navigation::{Navigator, RecordingNavigator};
pub use persistence::{
    KeyValueStorage, MemoryStorage, SessionPersistence, StorageError, TieredPersistence,
};
pub use role::Role;
pub use routes::{recognize, RouteAccess, RouteDef, RouteMatch, RouteName, ROUTES};
pub use session::Session;
pub use store::{AuthStore, Subscription};
