//! Client wrappers for the signup and login endpoints. A response that
//! carries a token persists it immediately, together with the email and full
//! name, so the session survives a reload; a token-less success leaves any
//! previously stored token untouched.

use crate::app_lib::{post_json, storage, AppError};
use api_contract::{AuthResponse, LoginRequest, SignupRequest};

pub async fn signup(request: &SignupRequest) -> Result<AuthResponse, AppError> {
    let response: AuthResponse = post_json("/signup", request, "Signup failed").await?;
    persist(&request.email, &response);
    Ok(response)
}

pub async fn login(request: &LoginRequest) -> Result<AuthResponse, AppError> {
    let response: AuthResponse = post_json("/login", request, "Login failed").await?;
    persist(&request.email, &response);
    Ok(response)
}

fn persist(email: &str, response: &AuthResponse) {
    if let Some(token) = &response.token {
        storage::set_token(token);
    }
    if let Some(full_name) = &response.full_name {
        storage::set_full_name(full_name);
    }
    storage::set_logged_in_email(email);
}
