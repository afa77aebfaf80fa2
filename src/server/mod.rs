//! Server Module
//!
//! Configuration, shared application state, and startup wiring.
//!
//! ```text
//! server/
//! ├── mod.rs    - Module exports
//! ├── config.rs - Environment-driven configuration
//! ├── state.rs  - AppState container
//! └── init.rs   - Application assembly
//! ```

pub mod config;
pub mod init;
pub mod state;

pub use config::AppConfig;
pub use init::{create_app, create_app_with_store};
pub use state::AppState;
