//! Authentication context

pub mod context;

pub use context::{use_auth, use_session, AuthContext, AuthProvider};
