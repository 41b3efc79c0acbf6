use crate::konto::{
    handlers::{storage, valid_email, valid_password, UserResponse},
    password,
};
use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sqlx::PgPool;
use tracing::{debug, error, instrument};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(ToSchema, Deserialize, Debug)]
pub struct UserRegister {
    name: String,
    email: String,
    #[schema(value_type = String)]
    password: SecretString,
}

#[utoipa::path(
    post,
    path= "/signup",
    request_body = UserRegister,
    responses (
        (status = 201, description = "Registration successful", body = [UserResponse], content_type = "application/json"),
        (status = 400, description = "User with the same email already exists"),
        (status = 500, description = "Failed to create user"),
    ),
    tag= "signup"
)]
// axum handler for signup
#[instrument]
pub async fn register(pool: Extension<PgPool>, payload: Option<Json<UserRegister>>) -> Response {
    let user: UserRegister = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!("user: {:?}", user);

    // if not valid name, email or password return 400
    if user.name.is_empty() {
        return (StatusCode::BAD_REQUEST, "Invalid name".to_string()).into_response();
    }

    if !valid_email(&user.email) {
        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    if !valid_password(user.password.expose_secret()) {
        return (StatusCode::BAD_REQUEST, "Invalid password".to_string()).into_response();
    }

    // check if user exists
    match storage::user_exists(&pool, &user.email).await {
        Ok(true) => {
            error!("User already exists");
            return (
                StatusCode::BAD_REQUEST,
                "User with the same email already exists!".to_string(),
            )
                .into_response();
        }
        Ok(false) => (),
        Err(e) => {
            error!("Error checking if user exists: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create user".to_string(),
            )
                .into_response();
        }
    }

    // hash the password, fresh salt per call
    let hashed = match password::hash(user.password.expose_secret()) {
        Ok(hashed) => hashed,
        Err(e) => {
            error!("Error hashing password: {:?}", e);
            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create user".to_string(),
            )
                .into_response();
        }
    };

    // insert user into database; the UNIQUE constraint on email stays
    // authoritative for duplicates racing past the pre-check
    match storage::insert_user(&pool, Uuid::new_v4(), &user.name, &user.email, &hashed).await {
        Ok(storage::InsertOutcome::Created(id)) => (
            StatusCode::CREATED,
            Json(UserResponse {
                id: id.to_string(),
                name: user.name,
                email: user.email,
            }),
        )
            .into_response(),
        Ok(storage::InsertOutcome::Conflict) => {
            error!("User already exists");
            (
                StatusCode::BAD_REQUEST,
                "User with the same email already exists!".to_string(),
            )
                .into_response()
        }
        Err(e) => {
            error!("Error inserting user: {:?}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to create user".to_string(),
            )
                .into_response()
        }
    }
}
