use crate::models::User;

/// Authenticated-session state, held for the duration of a visit.
///
/// Two states: `Anonymous` (no token) and `Authenticated` (token + user).
/// A session exists iff a token is present; no expiry is modeled. The value
/// is owned by the UI's auth context and injected into consumers — it is
/// never an ambient singleton.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Session {
    #[default]
    Anonymous,
    Authenticated {
        token: String,
        user: User,
    },
}

impl Session {
    /// Anonymous → Authenticated.
    pub fn login(&mut self, token: String, user: User) {
        *self = Session::Authenticated { token, user };
    }

    /// → Anonymous. Idempotent: calling while already anonymous is a no-op.
    pub fn logout(&mut self) {
        *self = Session::Anonymous;
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Readable from either state; `None` when anonymous.
    pub fn current_user(&self) -> Option<&User> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { user, .. } => Some(user),
        }
    }

    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Anonymous => None,
            Session::Authenticated { token, .. } => Some(token),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn admin() -> User {
        User {
            id: 1,
            email: "admin@example.com".to_string(),
            name: "John Doe".to_string(),
            role: "admin".to_string(),
        }
    }

    #[test]
    fn test_login_transitions_to_authenticated() {
        let mut session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.current_user().is_none());
        assert!(session.token().is_none());

        session.login("tok".to_string(), admin());
        assert!(session.is_authenticated());
        assert_eq!(session.token(), Some("tok"));
        assert_eq!(session.current_user().map(|u| u.name.as_str()), Some("John Doe"));
    }

    #[test]
    fn test_logout_is_idempotent() {
        let mut session = Session::default();
        session.login("tok".to_string(), admin());

        session.logout();
        assert_eq!(session, Session::Anonymous);

        // Second logout is a no-op, no error.
        session.logout();
        assert_eq!(session, Session::Anonymous);
    }
}
