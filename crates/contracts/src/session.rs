//! Mock parent-portal session: one configured credential pair and an
//! in-memory signed-in flag.
//!
//! This is a placeholder, not authentication. The check lives behind
//! [`CredentialVerifier`] so a real credential store can replace
//! [`StaticCredentials`] without touching call sites. Nothing here is
//! persisted and there is no token or expiry.

use serde::{Deserialize, Serialize};

/// Decides whether an identifier/secret pair is accepted.
pub trait CredentialVerifier {
    fn verify(&self, student_id: &str, password: &str) -> bool;
}

/// A single literal credential pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticCredentials {
    pub student_id: String,
    pub password: String,
}

impl StaticCredentials {
    pub fn new(student_id: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            student_id: student_id.into(),
            password: password.into(),
        }
    }

    /// The demo pair the portal ships with.
    pub fn demo() -> Self {
        Self::new("22G149", "password123")
    }
}

impl CredentialVerifier for StaticCredentials {
    fn verify(&self, student_id: &str, password: &str) -> bool {
        self.student_id == student_id && self.password == password
    }
}

/// Sign-in failure. Deliberately carries no detail: an unknown identifier
/// and a wrong password are indistinguishable to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Student ID or Password")]
pub struct SignInError;

/// Checks the pair against the verifier. The caller is expected to move
/// [`SessionState`] to signed-in on success.
pub fn attempt_sign_in(
    verifier: &impl CredentialVerifier,
    student_id: &str,
    password: &str,
) -> Result<(), SignInError> {
    if verifier.verify(student_id, password) {
        Ok(())
    } else {
        Err(SignInError)
    }
}

/// In-memory portal session. Survives nothing: a reload starts signed out.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SessionState {
    pub signed_in: bool,
    pub student_id: Option<String>,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sign_in(&mut self, student_id: &str) {
        self.signed_in = true;
        self.student_id = Some(student_id.to_string());
    }

    pub fn sign_out(&mut self) {
        *self = SessionState::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_pair_is_accepted() {
        let creds = StaticCredentials::demo();
        assert!(attempt_sign_in(&creds, "22G149", "password123").is_ok());
    }

    #[test]
    fn wrong_password_and_unknown_id_fail_identically() {
        let creds = StaticCredentials::demo();
        let wrong_password = attempt_sign_in(&creds, "22G149", "wrong");
        let unknown_id = attempt_sign_in(&creds, "nobody", "password123");
        assert_eq!(wrong_password, Err(SignInError));
        assert_eq!(unknown_id, Err(SignInError));
        // Same rendered message for both failures.
        assert_eq!(
            wrong_password.unwrap_err().to_string(),
            unknown_id.unwrap_err().to_string()
        );
    }

    #[test]
    fn sign_in_records_student_id() {
        let mut session = SessionState::new();
        session.sign_in("22G149");
        assert!(session.signed_in);
        assert_eq!(session.student_id.as_deref(), Some("22G149"));
    }

    #[test]
    fn sign_out_restores_initial_state() {
        let mut session = SessionState::new();
        session.sign_in("22G149");
        session.sign_out();
        assert_eq!(session, SessionState::default());
    }

    #[test]
    fn portal_sign_in_flow_end_to_end() {
        use crate::navigation::{NavigationState, Page};

        let mut nav = NavigationState::new();
        let mut session = SessionState::new();
        assert_eq!(nav.current, Page::Home);

        nav.navigate("parent-portal");
        assert_eq!(nav.current, Page::ParentPortal);

        let creds = StaticCredentials::demo();
        assert!(attempt_sign_in(&creds, "22G149", "password123").is_ok());
        session.sign_in("22G149");
        assert!(session.signed_in);
        assert_eq!(session.student_id.as_deref(), Some("22G149"));

        session.sign_out();
        assert_eq!(session, SessionState::default());
    }
}
