//! Users Module
//!
//! The persisted user entity plus the admin-gated CRUD surface.
//!
//! # Module Structure
//!
//! ```text
//! users/
//! ├── mod.rs      - Module exports and documentation
//! ├── model.rs    - User entity, Role and Status enums
//! ├── service.rs  - Admin-gated CRUD, seed, delete-all orchestration
//! ├── seed.rs     - Fixed sample-user set
//! └── handlers.rs - HTTP handlers for the /user endpoints
//! ```

pub mod handlers;
pub mod model;
pub mod seed;
pub mod service;

pub use model::{Role, Status, User};
pub use service::UserService;
