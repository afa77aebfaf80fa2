/**
 * Server Configuration
 *
 * Loads server configuration from environment variables, with sensible
 * defaults for local development. Values come from the process
 * environment (optionally seeded from a `.env` file by the binary).
 *
 * # Variables
 *
 * - `PORT` - Listen port (default 8080)
 * - `MONGODB_URL` - Document store connection string
 * - `DATABASE_NAME` - Database name (default `cyzygy`)
 * - `JWT_SECRET` - Token signing secret; a development fallback is used
 *   with a logged warning when unset
 * - `ORIGIN` - CORS allow-origin (default `*`)
 * - `UPLOADS_DIR` - Directory served at `/uploads` (default `uploads`)
 */

/// Server configuration loaded from the environment
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub mongodb_url: String,
    pub database_name: String,
    pub jwt_secret: String,
    pub origin: String,
    pub uploads_dir: String,
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or(8080);

        let mongodb_url = std::env::var("MONGODB_URL")
            .unwrap_or_else(|_| "mongodb://localhost:27017".to_string());

        let database_name =
            std::env::var("DATABASE_NAME").unwrap_or_else(|_| "cyzygy".to_string());

        let jwt_secret = std::env::var("JWT_SECRET").unwrap_or_else(|_| {
            tracing::warn!("JWT_SECRET not set, using the development fallback");
            "your-secret-key-change-in-production".to_string()
        });

        let origin = std::env::var("ORIGIN").unwrap_or_else(|_| "*".to_string());

        let uploads_dir =
            std::env::var("UPLOADS_DIR").unwrap_or_else(|_| "uploads".to_string());

        Self {
            port,
            mongodb_url,
            database_name,
            jwt_secret,
            origin,
            uploads_dir,
        }
    }
}
