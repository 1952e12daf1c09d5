//! Login and registration workflow.

use crate::services::api::AuthApi;
use crate::state::{SessionState, Store};
use crate::types::AuthMode;

/// Submit the auth form held in `store`.
///
/// Returns `false` without touching the network when the form is invalid
/// or another submission is pending. Failures never escape: they end up
/// in the session's ErrorState.
pub async fn submit_credentials<A, S>(api: &A, store: &S) -> bool
where
    A: AuthApi,
    S: Store<SessionState>,
{
    let Some(submission) = store.with_mut(SessionState::begin_submit).flatten() else {
        log::debug!("Credential submission skipped");
        return false;
    };

    match submission.mode {
        AuthMode::Login => {
            log::info!("🔑 Signing in as {}", submission.username);
            let outcome = api.request_token(&submission.username, &submission.password).await;
            match &outcome {
                Ok(_) => log::info!("✅ Signed in as {}", submission.username),
                Err(e) => log::warn!("❌ Sign in failed: {}", e),
            }
            store.with_mut(|session| session.apply_login(outcome));
        }
        AuthMode::Register => {
            log::info!("📝 Registering {}", submission.username);
            let outcome = api.register(&submission.username, &submission.password).await;
            match &outcome {
                Ok(()) => log::info!("✅ Registered {}", submission.username),
                Err(e) => log::warn!("❌ Registration failed: {}", e),
            }
            store.with_mut(|session| session.apply_register(outcome));
        }
    }
    true
}
