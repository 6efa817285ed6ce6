//! Thin client for the authentication collaborator: a token in local storage
//! plus a backend check. Binary authenticated/not — no sessions, no roles.

use crate::api;

const TOKEN_KEY: &str = "portfolio_admin_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

pub fn stored_token() -> Option<String> {
    local_storage()
        .and_then(|storage| storage.get_item(TOKEN_KEY).ok().flatten())
        .filter(|token| !token.is_empty())
}

pub fn store_token(token: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.set_item(TOKEN_KEY, token);
    }
}

/// Drop the stored token. The next admin navigation lands on the login page.
pub fn sign_out() {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(TOKEN_KEY);
    }
}

/// Verify the stored token against the backend. Any failure (no token,
/// rejected token, unreachable backend) counts as unauthenticated.
pub async fn check_auth() -> bool {
    match stored_token() {
        Some(token) => api::check_auth(&token).await.unwrap_or(false),
        None => false,
    }
}
