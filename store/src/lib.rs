//! Persistence layer for the Pokemon team builder.
//!
//! # Architecture
//!
//! ```text
//! TeamGateway / Accounts / EditSessionStore   (team builder operations)
//!          │
//!          ▼
//! TeamStore, UserStore, IdentityProvider, SessionStorage   (backend contracts)
//!          │
//!          ▼
//! memory::*   (in-memory backends for tests and demos)
//! ```
//!
//! The gateway never re-checks business rules. The client enforces the save
//! preconditions before calling [`TeamGateway::create_team`], or
//! [`TeamGateway::update_team`] when saving a team that is being edited.

pub mod accounts;
pub mod gateway;
pub mod memory;
pub mod session;
pub mod traits;

pub use accounts::{Accounts, UserProfile};
pub use gateway::TeamGateway;
pub use memory::{MemoryIdentity, MemorySessionStorage, MemoryTeamStore, MemoryUserStore};
pub use session::EditSessionStore;
pub use traits::{AuthUser, IdentityProvider, SessionStorage, TeamStore, UserStore};

/// Backend errors
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Username already taken: {0}")]
    UsernameTaken(String),

    #[error("Email already registered: {0}")]
    EmailTaken(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Not signed in")]
    NotAuthenticated,

    #[error("Backend error: {0}")]
    Backend(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, StoreError>;
