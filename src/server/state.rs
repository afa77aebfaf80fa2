/**
 * Application State
 *
 * This module defines the state container shared by every handler. The
 * store and services are constructed once at process start and injected
 * by reference; nothing here is a module-level singleton.
 *
 * # Thread Safety
 *
 * `AppState` is cheap to clone: the store sits behind an `Arc`, and each
 * service holds its own handle to it. No request ever mutates shared
 * state outside the store.
 */

use std::sync::Arc;

use crate::auth::service::AuthService;
use crate::auth::tokens::TokenIssuer;
use crate::store::UserStore;
use crate::users::service::UserService;

/// Application state that holds the store, services, and token issuer
#[derive(Clone)]
pub struct AppState {
    /// User store handle, shared with both services
    pub store: Arc<dyn UserStore>,
    /// Token issuer used by the auth middleware to verify bearer tokens
    pub tokens: TokenIssuer,
    /// Session-facing operations (signup, login, profile, logout)
    pub auth: AuthService,
    /// Admin-gated user CRUD and bulk utilities
    pub users: UserService,
}

impl AppState {
    /// Wire the services around one store and one token issuer
    pub fn new(store: Arc<dyn UserStore>, tokens: TokenIssuer) -> Self {
        Self {
            auth: AuthService::new(store.clone(), tokens.clone()),
            users: UserService::new(store.clone()),
            store,
            tokens,
        }
    }
}
