/**
 * API Route Tables
 *
 * Route tables for the `/api/v1` surface.
 *
 * # Routes
 *
 * ## Authentication
 * - `POST /auth/signup` - User registration (public)
 * - `POST /auth/login`  - User login (public, sets the bearer cookie)
 * - `GET  /auth`        - Own profile (bearer)
 * - `POST /auth/logout` - Logout acknowledgement (bearer, clears cookie)
 *
 * ## Users
 * - `POST   /user`           - Add user (bearer; admin checked in service)
 * - `GET    /user`           - List users (bearer; admin)
 * - `GET    /user/{userId}`  - Get user (bearer; admin)
 * - `PUT    /user/{userId}`  - Update user (bearer; admin)
 * - `DELETE /user/{userId}`  - Delete user (bearer; admin)
 * - `POST   /user/seed/users`   - Insert the fixed sample set (public)
 * - `POST   /user/delete/users` - Public; currently dispatches to the
 *   seed handler, reproducing the deployed routing
 */

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use crate::auth::handlers::{login, logout, profile, signup};
use crate::middleware::auth::auth_middleware;
use crate::server::state::AppState;
use crate::users::handlers::{
    add_user, delete_user, get_user, get_users, seed_users, update_user,
};

/// Build the `/api/v1` route table
///
/// Public routes carry no guard; protected routes share the bearer-token
/// middleware. Role checks stay in the services.
pub fn api_routes(state: AppState) -> Router<AppState> {
    let public = Router::new()
        .route("/auth/signup", post(signup))
        .route("/auth/login", post(login))
        .route("/user/seed/users", post(seed_users))
        // TODO: confirm with the API consumers whether this route should
        // dispatch to a bulk-delete handler instead of the seed handler.
        .route("/user/delete/users", post(seed_users));

    let protected = Router::new()
        .route("/auth", get(profile))
        .route("/auth/logout", post(logout))
        .route("/user", post(add_user).get(get_users))
        .route(
            "/user/{user_id}",
            get(get_user).put(update_user).delete(delete_user),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    public.merge(protected)
}
