//! Authentication HTTP Handlers
//!
//! Handlers for the `/api/v1/auth` endpoints.
//!
//! ```text
//! handlers/
//! ├── mod.rs     - Handler exports
//! ├── types.rs   - Request/response types
//! ├── signup.rs  - User registration handler
//! ├── login.rs   - User authentication handler
//! ├── profile.rs - Own-profile handler
//! └── logout.rs  - Logout acknowledgement handler
//! ```

pub mod types;

mod login;
mod logout;
mod profile;
mod signup;

pub use login::login;
pub use logout::logout;
pub use profile::profile;
pub use signup::signup;
