//! Authentication Module
//!
//! User authentication, registration, and bearer-token session
//! management.
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs      - Module exports and documentation
//! ├── password.rs - bcrypt hashing adapter
//! ├── tokens.rs   - Bearer-token issuing and verification
//! ├── service.rs  - Signup, login, profile, logout orchestration
//! └── handlers/   - HTTP handlers for the /auth endpoints
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Signup**: validated body → uniqueness check → bcrypt hash → persist
//! 2. **Login**: lookup by email → hash verify → one-hour token + cookie
//! 3. **Profile**: middleware-resolved identity → re-fetch by email
//! 4. **Logout**: stateless acknowledgement, cookie cleared client-side
//!
//! # Security
//!
//! - Passwords are stored only as bcrypt hashes (cost 10)
//! - Tokens are signed with a server-held secret and expire after one hour
//! - No refresh mechanism and no revocation list exist; a compromised
//!   token stays valid until natural expiry

pub mod handlers;
pub mod password;
pub mod service;
pub mod tokens;

pub use service::AuthService;
pub use tokens::{TokenData, TokenIssuer};
