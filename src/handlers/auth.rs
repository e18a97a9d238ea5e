use axum::{
    extract::State,
    response::{Html, Redirect},
    Form,
};
use bcrypt::{hash, verify, DEFAULT_COST};
use tower_sessions::Session;

use crate::{
    error::AppError,
    middleware::auth::SESSION_USER_KEY,
    models::{LoginForm, RegisterForm, User},
    state::AppState,
    templates::{render, LoginTemplate, RegisterTemplate},
};

pub async fn register_form() -> Result<Html<String>, AppError> {
    render(RegisterTemplate {})
}

pub async fn register(
    State(state): State<AppState>,
    Form(form): Form<RegisterForm>,
) -> Result<Redirect, AppError> {
    if form.username.is_empty() {
        return Err(AppError::Validation("must provide username"));
    }
    if form.password.is_empty() || form.confirm.is_empty() {
        return Err(AppError::Validation("must provide and confirm a password"));
    }
    if form.password != form.confirm {
        return Err(AppError::Validation("passwords do not match"));
    }

    // Exact, case-sensitive match.
    let taken = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users WHERE username = $1")
        .bind(&form.username)
        .fetch_one(&state.pool)
        .await?;
    if taken > 0 {
        return Err(AppError::UserExists);
    }

    let password_hash =
        hash(&form.password, DEFAULT_COST).map_err(|e| AppError::Internal(e.to_string()))?;

    sqlx::query("INSERT INTO users (username, password_hash, cash) VALUES ($1, $2, $3)")
        .bind(&form.username)
        .bind(&password_hash)
        .bind(state.config.starting_cash)
        .execute(&state.pool)
        .await
        .map_err(|e| {
            // A registration racing past the COUNT check lands here.
            if let sqlx::Error::Database(db_err) = &e {
                if db_err.constraint().is_some() {
                    return AppError::UserExists;
                }
            }
            AppError::Database(e)
        })?;

    tracing::info!(username = %form.username, "registered new user");

    // No auto-login; the user signs in with the account they just created.
    Ok(Redirect::to("/login"))
}

pub async fn login_form(session: Session) -> Result<Html<String>, AppError> {
    // Arriving at the login form forgets any current user.
    session.clear().await;
    render(LoginTemplate {})
}

pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Redirect, AppError> {
    session.clear().await;

    if form.username.is_empty() {
        return Err(AppError::Validation("must provide username"));
    }
    if form.password.is_empty() {
        return Err(AppError::Validation("must provide password"));
    }

    let user: Option<User> = sqlx::query_as(
        "SELECT id, username, password_hash, cash, created_at FROM users WHERE username = $1",
    )
    .bind(&form.username)
    .fetch_optional(&state.pool)
    .await?;

    let user = user.ok_or(AppError::InvalidCredentials)?;
    let verified = verify(&form.password, &user.password_hash)
        .map_err(|e| AppError::Internal(e.to_string()))?;
    if !verified {
        return Err(AppError::InvalidCredentials);
    }

    // Fresh session id on privilege change, then remember who logged in.
    session.cycle_id().await?;
    session.insert(SESSION_USER_KEY, user.id).await?;

    tracing::info!(username = %user.username, "logged in");

    Ok(Redirect::to("/"))
}

pub async fn logout(session: Session) -> Result<Redirect, AppError> {
    session.flush().await?;
    Ok(Redirect::to("/login"))
}
