//! Session state: auth form, in-flight guard and the credential store.
//!
//! Nothing outside this module writes the credential. Views read it through
//! [`SessionState::credential`] and hand a clone to each upload when the
//! upload is issued.

use crate::config::{AUTH_FALLBACK_MESSAGE, REGISTERED_NOTICE};
use crate::types::{AuthMode, Credential, OperationResult};

/// Observable phase of the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Submitting(AuthMode),
    Authenticated,
}

/// Credentials captured when a submission starts.
#[derive(Clone, PartialEq, Eq)]
pub struct CredentialSubmission {
    pub mode: AuthMode,
    pub username: String,
    pub password: String,
}

impl std::fmt::Debug for CredentialSubmission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialSubmission")
            .field("mode", &self.mode)
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct SessionState {
    mode: AuthMode,
    username: String,
    password: String,
    credential: Option<Credential>,
    in_flight: bool,
    error: Option<String>,
    notice: Option<String>,
}

impl SessionState {
    pub fn mode(&self) -> AuthMode {
        self.mode
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    pub fn credential(&self) -> Option<&Credential> {
        self.credential.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.credential.is_some()
    }

    /// True while a login or registration call is pending.
    pub fn in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Informational message (registration success).
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn phase(&self) -> SessionPhase {
        if self.credential.is_some() {
            SessionPhase::Authenticated
        } else if self.in_flight {
            SessionPhase::Submitting(self.mode)
        } else {
            SessionPhase::Anonymous
        }
    }

    pub fn set_username(&mut self, username: String) {
        self.username = username;
    }

    pub fn set_password(&mut self, password: String) {
        self.password = password;
    }

    /// Both fields must be non-empty after trimming.
    pub fn form_valid(&self) -> bool {
        !self.username.trim().is_empty() && !self.password.trim().is_empty()
    }

    /// Switch between login and register, dropping any message.
    pub fn toggle_mode(&mut self) {
        self.mode = self.mode.toggled();
        self.error = None;
        self.notice = None;
    }

    /// Start a submission.
    ///
    /// Returns `None` (and changes nothing) for an invalid form or while
    /// another submission is pending. Fields are sent as typed.
    pub fn begin_submit(&mut self) -> Option<CredentialSubmission> {
        if self.in_flight || !self.form_valid() {
            return None;
        }
        self.in_flight = true;
        self.error = None;
        self.notice = None;
        Some(CredentialSubmission {
            mode: self.mode,
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    /// Resolve a login call.
    pub fn apply_login(&mut self, outcome: OperationResult<Credential>) {
        self.in_flight = false;
        match outcome {
            Ok(credential) => {
                self.credential = Some(credential);
                self.password.clear();
                self.error = None;
            }
            Err(failure) => {
                self.error = Some(failure.user_message(AUTH_FALLBACK_MESSAGE));
            }
        }
    }

    /// Resolve a registration call. Success returns to an empty login form.
    pub fn apply_register(&mut self, outcome: OperationResult<()>) {
        self.in_flight = false;
        match outcome {
            Ok(()) => {
                self.mode = AuthMode::Login;
                self.username.clear();
                self.password.clear();
                self.error = None;
                self.notice = Some(REGISTERED_NOTICE.to_string());
            }
            Err(failure) => {
                self.error = Some(failure.user_message(AUTH_FALLBACK_MESSAGE));
            }
        }
    }

    /// Drop the credential. Always succeeds.
    pub fn logout(&mut self) {
        self.credential = None;
        self.password.clear();
        self.error = None;
        self.notice = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::OperationFailure;

    fn filled(mode: AuthMode) -> SessionState {
        let mut state = SessionState::default();
        if state.mode() != mode {
            state.toggle_mode();
        }
        state.set_username("alice".into());
        state.set_password("hunter2".into());
        state
    }

    #[test]
    fn test_blank_fields_do_not_submit() {
        let mut state = SessionState::default();
        state.set_username("   ".into());
        state.set_password("pw".into());
        assert!(state.begin_submit().is_none());
        assert_eq!(state.phase(), SessionPhase::Anonymous);

        state.set_username("bob".into());
        state.set_password("\t".into());
        assert!(state.begin_submit().is_none());
        assert!(!state.in_flight());
    }

    #[test]
    fn test_second_submit_while_pending_is_ignored() {
        let mut state = filled(AuthMode::Login);
        let first = state.begin_submit().unwrap();
        assert_eq!(first.mode, AuthMode::Login);
        assert_eq!(state.phase(), SessionPhase::Submitting(AuthMode::Login));
        assert!(state.begin_submit().is_none());
    }

    #[test]
    fn test_login_success_authenticates() {
        let mut state = filled(AuthMode::Login);
        state.begin_submit().unwrap();
        state.apply_login(Ok(Credential::new("tok")));

        assert_eq!(state.phase(), SessionPhase::Authenticated);
        assert_eq!(state.credential().map(Credential::token), Some("tok"));
        assert_eq!(state.password(), "");
    }

    #[test]
    fn test_login_failure_uses_detail_or_fallback() {
        let mut state = filled(AuthMode::Login);
        state.begin_submit().unwrap();
        state.apply_login(Err(OperationFailure::rejected(
            400,
            Some("Incorrect username or password".into()),
        )));
        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert_eq!(state.error(), Some("Incorrect username or password"));

        state.begin_submit().unwrap();
        assert_eq!(state.error(), None);
        state.apply_login(Err(OperationFailure::transport("offline")));
        assert_eq!(state.error(), Some("An error occurred"));
    }

    #[test]
    fn test_register_success_returns_to_login() {
        let mut state = filled(AuthMode::Register);
        state.begin_submit().unwrap();
        state.apply_register(Ok(()));

        assert_eq!(state.mode(), AuthMode::Login);
        assert_eq!(state.phase(), SessionPhase::Anonymous);
        assert_eq!(state.username(), "");
        assert_eq!(state.password(), "");
        assert_eq!(state.notice(), Some(REGISTERED_NOTICE));
    }

    #[test]
    fn test_register_failure_stays_in_register_mode() {
        let mut state = filled(AuthMode::Register);
        state.begin_submit().unwrap();
        state.apply_register(Err(OperationFailure::rejected(
            400,
            Some("Username already exists".into()),
        )));
        assert_eq!(state.mode(), AuthMode::Register);
        assert_eq!(state.error(), Some("Username already exists"));
        assert_eq!(state.username(), "alice");
    }

    #[test]
    fn test_toggle_mode_clears_error() {
        let mut state = filled(AuthMode::Login);
        state.begin_submit().unwrap();
        state.apply_login(Err(OperationFailure::transport("offline")));
        assert!(state.error().is_some());

        state.toggle_mode();
        assert_eq!(state.mode(), AuthMode::Register);
        assert_eq!(state.error(), None);
    }

    #[test]
    fn test_logout_clears_credential() {
        let mut state = filled(AuthMode::Login);
        state.begin_submit().unwrap();
        state.apply_login(Ok(Credential::new("tok")));
        state.logout();

        assert!(state.credential().is_none());
        assert_eq!(state.phase(), SessionPhase::Anonymous);
    }

    #[test]
    fn test_submission_debug_hides_password() {
        let mut state = filled(AuthMode::Login);
        let submission = state.begin_submit().unwrap();
        assert!(!format!("{:?}", submission).contains("hunter2"));
    }
}
