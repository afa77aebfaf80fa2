//! End-to-end API tests
//!
//! Drives the full router over HTTP with the in-memory store injected in
//! place of a live database, covering the auth flow, the admin-gated
//! CRUD surface, and the bulk seed/delete routes.

use std::sync::Arc;

use axum::http::{header, HeaderValue, StatusCode};
use axum_test::TestServer;
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::{json, Value};

use cyzygy_backend::auth::tokens::{Claims, TokenIssuer};
use cyzygy_backend::server::{create_app_with_store, AppConfig};
use cyzygy_backend::store::{MemoryUserStore, UserStore};
use cyzygy_backend::users::model::{Role, User};

const SECRET: &str = "api-test-secret";

fn test_config() -> AppConfig {
    AppConfig {
        port: 0,
        mongodb_url: String::new(),
        database_name: String::new(),
        jwt_secret: SECRET.to_string(),
        origin: "*".to_string(),
        uploads_dir: "uploads".to_string(),
    }
}

fn test_server() -> (TestServer, Arc<dyn UserStore>) {
    let store: Arc<dyn UserStore> = Arc::new(MemoryUserStore::new());
    let app = create_app_with_store(store.clone(), &test_config());
    (TestServer::new(app).unwrap(), store)
}

fn bearer(user: &User) -> HeaderValue {
    let token = TokenIssuer::new(SECRET).issue(&user.id).unwrap().token;
    HeaderValue::from_str(&format!("Bearer {token}")).unwrap()
}

fn header_value(value: &str) -> HeaderValue {
    HeaderValue::from_str(value).unwrap()
}

async fn seed_admin(store: &Arc<dyn UserStore>) -> User {
    let admin = User::new("Root", "Admin", "root@example.com", "hash", Role::Admin);
    store.insert(admin).await.unwrap()
}

async fn signup(server: &TestServer, email: &str) -> Value {
    let response = server
        .post("/api/v1/auth/signup")
        .json(&json!({
            "firstName": "A",
            "lastName": "B",
            "email": email,
            "password": "12345678",
        }))
        .await;
    response.assert_status(StatusCode::CREATED);
    response.json::<Value>()
}

#[tokio::test]
async fn signup_persists_hashed_user_and_rejects_duplicates() {
    let (server, store) = test_server();

    let body = signup(&server, "a@b.com").await;
    assert_eq!(body["message"], "User created successfully");
    assert_eq!(body["data"]["name"], "A B");
    assert_eq!(body["data"]["role"], "user");
    assert_eq!(body["data"]["status"], "active");
    assert_ne!(body["data"]["password"], "12345678");

    let stored = store.find_by_email("a@b.com").await.unwrap().unwrap();
    assert_ne!(stored.password, "12345678");

    // An immediate repeat signup with the same email conflicts.
    let repeat = server
        .post("/api/v1/auth/signup")
        .json(&json!({
            "firstName": "A",
            "lastName": "B",
            "email": "a@b.com",
            "password": "12345678",
        }))
        .await;
    repeat.assert_status(StatusCode::CONFLICT);
    assert_eq!(
        repeat.json::<Value>()["message"],
        "This email a@b.com already exists"
    );
}

#[tokio::test]
async fn signup_validation_enumerates_every_violation() {
    let (server, _) = test_server();

    let response = server
        .post("/api/v1/auth/signup")
        .json(&json!({
            "email": "not-an-email",
            "password": "short",
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .to_string();
    for field in ["firstName", "lastName", "email", "password"] {
        assert!(message.contains(field), "missing {field} in: {message}");
    }
}

#[tokio::test]
async fn login_returns_token_bound_to_identity_and_sets_cookie() {
    let (server, _) = test_server();
    let created = signup(&server, "a@b.com").await;

    let response = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "a@b.com", "password": "12345678" }))
        .await;
    response.assert_status_ok();

    let headers = response.headers();
    let cookie = headers
        .get(header::SET_COOKIE)
        .expect("login sets the bearer cookie")
        .to_str()
        .unwrap();
    assert!(cookie.starts_with("Authorization="));
    assert!(cookie.contains("HttpOnly"));
    assert!(cookie.contains("Max-Age=3600"));

    let body = response.json::<Value>();
    assert_eq!(body["message"], "Loggedin successfull");
    assert_eq!(body["data"]["role"], "user");
    assert_eq!(body["data"]["expires_in"], 3600);

    // Decoding the returned token yields the identity that logged in.
    let token = body["data"]["token"].as_str().unwrap();
    let user_id = TokenIssuer::new(SECRET).decode(token).unwrap();
    assert_eq!(user_id, created["data"]["_id"].as_str().unwrap());
}

#[tokio::test]
async fn login_failures_are_unauthorized_whichever_field_is_wrong() {
    let (server, _) = test_server();
    signup(&server, "a@b.com").await;

    let wrong_password = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "a@b.com", "password": "wrong-password" }))
        .await;
    wrong_password.assert_status(StatusCode::UNAUTHORIZED);

    let unknown_email = server
        .post("/api/v1/auth/login")
        .json(&json!({ "email": "nobody@b.com", "password": "12345678" }))
        .await;
    unknown_email.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn profile_requires_a_valid_token() {
    let (server, store) = test_server();
    signup(&server, "a@b.com").await;
    let user = store.find_by_email("a@b.com").await.unwrap().unwrap();

    // No token at all.
    let missing = server.get("/api/v1/auth").await;
    missing.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        missing.json::<Value>()["message"],
        "Authentication token missing"
    );

    // Garbage token.
    let garbage = server
        .get("/api/v1/auth")
        .add_header(header::AUTHORIZATION, header_value("Bearer not.a.token"))
        .await;
    garbage.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        garbage.json::<Value>()["message"],
        "Wrong authentication token"
    );

    // Valid token; this endpoint responds 201 per the contract.
    let response = server
        .get("/api/v1/auth")
        .add_header(header::AUTHORIZATION, bearer(&user))
        .await;
    response.assert_status(StatusCode::CREATED);
    let body = response.json::<Value>();
    assert_eq!(body["message"], "User profile retrieved successfully");
    assert_eq!(body["data"]["email"], "a@b.com");
}

#[tokio::test]
async fn middleware_accepts_the_authorization_cookie() {
    let (server, store) = test_server();
    signup(&server, "a@b.com").await;
    let user = store.find_by_email("a@b.com").await.unwrap().unwrap();
    let token = TokenIssuer::new(SECRET).issue(&user.id).unwrap().token;

    let response = server
        .get("/api/v1/auth")
        .add_header(
            header::COOKIE,
            header_value(&format!("Authorization={token}")),
        )
        .await;
    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn expired_tokens_are_rejected() {
    let (server, store) = test_server();
    signup(&server, "a@b.com").await;
    let user = store.find_by_email("a@b.com").await.unwrap().unwrap();

    // Hand-craft a token issued more than an hour ago.
    let now = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_secs();
    let claims = Claims {
        user_id: user.id.clone(),
        iat: now - 7200,
        exp: now - 3600,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(SECRET.as_ref()),
    )
    .unwrap();

    let response = server
        .get("/api/v1/auth")
        .add_header(
            header::AUTHORIZATION,
            header_value(&format!("Bearer {token}")),
        )
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn token_for_a_deleted_user_is_rejected() {
    let (server, store) = test_server();
    signup(&server, "a@b.com").await;
    let user = store.find_by_email("a@b.com").await.unwrap().unwrap();
    let auth = bearer(&user);
    store.delete_by_id(&user.id).await.unwrap();

    let response = server
        .get("/api/v1/auth")
        .add_header(header::AUTHORIZATION, auth)
        .await;
    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn logout_acknowledges_and_clears_the_cookie() {
    let (server, store) = test_server();
    signup(&server, "a@b.com").await;
    let user = store.find_by_email("a@b.com").await.unwrap().unwrap();

    let response = server
        .post("/api/v1/auth/logout")
        .add_header(header::AUTHORIZATION, bearer(&user))
        .await;
    response.assert_status_ok();

    let headers = response.headers();
    let cookie = headers.get(header::SET_COOKIE).unwrap().to_str().unwrap();
    assert_eq!(cookie, "Authorization=; Max-age=0");
    assert_eq!(response.json::<Value>()["message"], "logout");
}

#[tokio::test]
async fn user_routes_reject_non_admin_callers_even_with_valid_tokens() {
    let (server, store) = test_server();
    signup(&server, "a@b.com").await;
    let user = store.find_by_email("a@b.com").await.unwrap().unwrap();
    let auth = bearer(&user);

    // The contract responds 401 for role failures, not 403.
    let list = server
        .get("/api/v1/user")
        .add_header(header::AUTHORIZATION, auth.clone())
        .await;
    list.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(
        list.json::<Value>()["message"],
        "Unauthorized to perform this operation"
    );

    let add = server
        .post("/api/v1/user")
        .add_header(header::AUTHORIZATION, auth)
        .json(&json!({
            "firstName": "New",
            "lastName": "Person",
            "email": "new@example.com",
            "role": "user",
        }))
        .await;
    add.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn admin_crud_flow() {
    let (server, store) = test_server();
    let admin = seed_admin(&store).await;
    let auth = bearer(&admin);

    // Add.
    let added = server
        .post("/api/v1/user")
        .add_header(header::AUTHORIZATION, auth.clone())
        .json(&json!({
            "firstName": "New",
            "lastName": "Person",
            "email": "new@example.com",
            "role": "guest",
        }))
        .await;
    added.assert_status_ok();
    let added = added.json::<Value>();
    assert_eq!(added["message"], "User added successfully");
    assert_eq!(added["data"]["name"], "New Person");
    assert_eq!(added["data"]["role"], "guest");
    let user_id = added["data"]["_id"].as_str().unwrap().to_string();
    let original_password = added["data"]["password"].as_str().unwrap().to_string();

    // List includes the admin and the new user.
    let list = server
        .get("/api/v1/user")
        .add_header(header::AUTHORIZATION, auth.clone())
        .await;
    list.assert_status_ok();
    assert_eq!(list.json::<Value>()["data"].as_array().unwrap().len(), 2);

    // Get by id.
    let fetched = server
        .get(&format!("/api/v1/user/{user_id}"))
        .add_header(header::AUTHORIZATION, auth.clone())
        .await;
    fetched.assert_status_ok();
    assert_eq!(fetched.json::<Value>()["data"]["email"], "new@example.com");

    // Update changes name/role/photo and leaves email and password alone.
    let updated = server
        .put(&format!("/api/v1/user/{user_id}"))
        .add_header(header::AUTHORIZATION, auth.clone())
        .json(&json!({
            "firstName": "Renamed",
            "lastName": "Account",
            "email": "different@example.com",
            "role": "user",
            "profilePhoto": "uploads/p.png",
        }))
        .await;
    updated.assert_status_ok();
    let updated = updated.json::<Value>();
    assert_eq!(updated["data"]["name"], "Renamed Account");
    assert_eq!(updated["data"]["role"], "user");
    assert_eq!(updated["data"]["profilePhoto"], "uploads/p.png");
    assert_eq!(updated["data"]["email"], "new@example.com");
    assert_eq!(updated["data"]["password"], original_password);

    // Delete, then a repeat delete reports the missing resource.
    let deleted = server
        .delete(&format!("/api/v1/user/{user_id}"))
        .add_header(header::AUTHORIZATION, auth.clone())
        .await;
    deleted.assert_status_ok();
    assert_eq!(
        deleted.json::<Value>()["message"],
        "User deleted successfully"
    );

    // Missing resources respond 400 per the contract.
    let missing = server
        .get(&format!("/api/v1/user/{user_id}"))
        .add_header(header::AUTHORIZATION, auth)
        .await;
    missing.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(missing.json::<Value>()["message"], "User does not exist");
}

#[tokio::test]
async fn add_user_rejects_unknown_roles() {
    let (server, store) = test_server();
    let admin = seed_admin(&store).await;

    let response = server
        .post("/api/v1/user")
        .add_header(header::AUTHORIZATION, bearer(&admin))
        .json(&json!({
            "firstName": "New",
            "lastName": "Person",
            "email": "new@example.com",
            "role": "superuser",
        }))
        .await;
    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(response.json::<Value>()["message"]
        .as_str()
        .unwrap()
        .contains("role"));
}

#[tokio::test]
async fn seed_route_inserts_the_fixed_sample_set() {
    let (server, store) = test_server();

    let response = server.post("/api/v1/user/seed/users").await;
    response.assert_status_ok();
    let body = response.json::<Value>();
    assert_eq!(body["message"], "Users seeded successfully");
    assert_eq!(body["data"].as_array().unwrap().len(), 5);
    assert_eq!(store.find_all().await.unwrap().len(), 5);
}

#[tokio::test]
async fn delete_users_route_currently_dispatches_to_the_seed_handler() {
    let (server, store) = test_server();

    let response = server.post("/api/v1/user/delete/users").await;
    response.assert_status_ok();
    assert_eq!(
        response.json::<Value>()["message"],
        "Users seeded successfully"
    );
    assert_eq!(store.find_all().await.unwrap().len(), 5);
}

#[tokio::test]
async fn unknown_routes_fall_back_to_404() {
    let (server, _) = test_server();
    let response = server.get("/api/v1/nope").await;
    response.assert_status_not_found();
}
