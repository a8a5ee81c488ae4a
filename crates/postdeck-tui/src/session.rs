//! Session controller state.
//!
//! The session is the single owner of the access token. It starts
//! unauthenticated and moves to authenticated when the login view reports a
//! token; there is no way back (no logout). The token lives only in memory.

/// Which top-level view the session selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Login,
    Posts,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Session {
    #[default]
    Unauthenticated,
    Authenticated {
        token: String,
    },
}

impl Session {
    pub fn token(&self) -> Option<&str> {
        match self {
            Session::Unauthenticated => None,
            Session::Authenticated { token } => Some(token),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Session::Authenticated { .. })
    }

    /// Stores `token`, replacing any previous one.
    ///
    /// An empty token is refused and leaves the session unchanged; returns
    /// whether the token was stored.
    pub fn authenticate(&mut self, token: String) -> bool {
        if token.is_empty() {
            return false;
        }
        *self = Session::Authenticated { token };
        true
    }

    pub fn screen(&self) -> Screen {
        if self.is_authenticated() {
            Screen::Posts
        } else {
            Screen::Login
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_unauthenticated() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert_eq!(session.token(), None);
        assert_eq!(session.screen(), Screen::Login);
    }

    #[test]
    fn test_authenticate_switches_screen() {
        let mut session = Session::default();
        assert!(session.authenticate("abc123".to_string()));
        assert_eq!(session.token(), Some("abc123"));
        assert_eq!(session.screen(), Screen::Posts);
    }

    #[test]
    fn test_empty_token_is_refused() {
        let mut session = Session::default();
        assert!(!session.authenticate(String::new()));
        assert_eq!(session, Session::Unauthenticated);
    }

    #[test]
    fn test_new_token_replaces_old() {
        let mut session = Session::default();
        session.authenticate("first".to_string());
        session.authenticate("second".to_string());
        assert_eq!(session.token(), Some("second"));
    }
}
