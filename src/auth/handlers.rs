use axum::{
    extract::{FromRef, State},
    routing::post,
    Json, Router,
};
use tracing::{error, info, instrument, warn};

use crate::{
    auth::{
        dto::{LoginRequest, LoginResponse, RegisterRequest, RegisterResponse},
        jwt::JwtKeys,
        password::{hash_password, verify_password},
        repo::{is_unique_violation, User},
    },
    errors::{ApiError, AppJson},
    state::AppState,
};

pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/login", post(login))
}

#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<Json<RegisterResponse>, ApiError> {
    // Check before hashing so a duplicate never pays the argon2 cost
    let taken = User::email_exists(&state.db, &payload.email)
        .await
        .map_err(|e| {
            error!(error = %e, "email existence check failed");
            ApiError::Internal(e)
        })?;
    if taken {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::Conflict("Email already exists".into()));
    }

    let hash = hash_password(&payload.password).map_err(|e| {
        error!(error = %e, "hash_password failed");
        ApiError::Internal(e)
    })?;

    let user = match User::create(&state.db, &payload.username, &payload.email, &hash).await {
        Ok(u) => u,
        // Two concurrent signups can both pass the existence check; the
        // UNIQUE constraint decides the race and the loser lands here.
        Err(e) if is_unique_violation(&e) => {
            warn!(email = %payload.email, "email uniqueness race lost");
            return Err(ApiError::Conflict("Email already exists".into()));
        }
        Err(e) => {
            error!(error = %e, "create user failed");
            return Err(ApiError::Internal(e.into()));
        }
    };

    info!(user_id = user.id, "account successfully created");
    Ok(Json(RegisterResponse {
        status: "Account successfully created",
        status_code: 200,
        user_id: user.id.to_string(),
    }))
}

#[instrument(skip(state, payload))]
pub async fn login(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<LoginResponse>, ApiError> {
    let user = match User::find_by_username(&state.db, &payload.username).await {
        Ok(Some(u)) => u,
        Ok(None) => {
            warn!(username = %payload.username, "login unknown username");
            return Err(ApiError::InvalidCredentials);
        }
        Err(e) => {
            error!(error = %e, "find_by_username failed");
            return Err(ApiError::Internal(e));
        }
    };

    if !verify_password(&payload.password, &user.password_hash) {
        warn!(user_id = user.id, "login invalid password");
        return Err(ApiError::InvalidCredentials);
    }

    let keys = JwtKeys::from_ref(&state);
    let access_token = keys.sign(user.id, &user.role).map_err(|e| {
        error!(error = %e, "jwt sign failed");
        ApiError::Internal(e)
    })?;

    info!(user_id = user.id, "login successful");
    Ok(Json(LoginResponse {
        status: "Login successful",
        status_code: 200,
        user_id: user.id.to_string(),
        role: user.role,
        access_token,
    }))
}
