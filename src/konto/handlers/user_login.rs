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

#[derive(ToSchema, Deserialize, Debug)]
pub struct UserLogin {
    email: String,
    #[schema(value_type = String)]
    password: SecretString,
}

#[utoipa::path(
    post,
    path= "/login",
    request_body = UserLogin,
    responses (
        (status = 200, description = "Login successful", body = [UserResponse], content_type = "application/json"),
        (status = 400, description = "Unknown email or incorrect password"),
        (status = 500, description = "Failed to authenticate user"),
    ),
    tag= "login"
)]
// axum handler for login
#[instrument]
pub async fn login(pool: Extension<PgPool>, payload: Option<Json<UserLogin>>) -> Response {
    let user: UserLogin = match payload {
        Some(Json(payload)) => payload,
        None => return (StatusCode::BAD_REQUEST, "Missing payload".to_string()).into_response(),
    };

    debug!("user: {:?}", user);

    // if not valid email or password return 400
    if !valid_email(&user.email) {
        error!("Invalid email");

        return (StatusCode::BAD_REQUEST, "Invalid email".to_string()).into_response();
    }

    if !valid_password(user.password.expose_secret()) {
        error!("Invalid password");

        return (StatusCode::BAD_REQUEST, "Invalid password".to_string()).into_response();
    }

    // get the stored user record
    let record = match storage::find_by_email(&pool, &user.email).await {
        Ok(Some(record)) => record,

        Ok(None) => {
            debug!("User not found");

            return (
                StatusCode::BAD_REQUEST,
                "User with this email does not exist!".to_string(),
            )
                .into_response();
        }

        Err(e) => {
            error!("Error getting user from database: {:?}", e);

            return (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to authenticate user".to_string(),
            )
                .into_response();
        }
    };

    // compare the password against the stored hash
    match password::verify(user.password.expose_secret(), &record.password) {
        Ok(true) => {
            debug!("Login successful");

            (
                StatusCode::OK,
                Json(UserResponse {
                    id: record.id.to_string(),
                    name: record.name,
                    email: record.email,
                }),
            )
                .into_response()
        }

        Ok(false) => {
            debug!("Incorrect password");

            (StatusCode::BAD_REQUEST, "Incorrect password!".to_string()).into_response()
        }

        Err(e) => {
            error!("Error verifying password: {:?}", e);

            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Failed to authenticate user".to_string(),
            )
                .into_response()
        }
    }
}
