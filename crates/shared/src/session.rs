/// Browser storage key holding the login flag.
pub const SESSION_FLAG_KEY: &str = "isLoggedIn";
pub const SESSION_FLAG_VALUE: &str = "true";

pub const MSG_LOGIN_OK: &str = "Login berhasil!";
pub const MSG_LOGIN_REJECTED: &str = "Username atau password salah.";
pub const MSG_LOGIN_REQUIRED: &str = "Username dan password wajib diisi.";
pub const MSG_LOGOUT_OK: &str = "Berhasil logout.";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    LoggedOut,
    LoggedIn,
}

impl SessionState {
    /// Only the exact stored literal counts as logged in.
    pub fn from_flag(stored: Option<&str>) -> Self {
        match stored {
            Some(SESSION_FLAG_VALUE) => SessionState::LoggedIn,
            _ => SessionState::LoggedOut,
        }
    }

    pub fn is_logged_in(self) -> bool {
        self == SessionState::LoggedIn
    }

    /// Next state after a login attempt resolved with `outcome`.
    pub fn after_login(self, outcome: &LoginOutcome) -> Self {
        match outcome {
            LoginOutcome::Accepted => SessionState::LoggedIn,
            _ => self,
        }
    }

    pub fn after_logout(self) -> Self {
        SessionState::LoggedOut
    }

    pub fn visibility(self) -> Visibility {
        let logged_in = self.is_logged_in();
        Visibility {
            login_button: !logged_in,
            profile_area: logged_in,
            gated_menu: logged_in,
        }
    }
}

/// Which header elements are shown. Derived from the session state only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Visibility {
    pub login_button: bool,
    pub profile_area: bool,
    pub gated_menu: bool,
}

impl Visibility {
    pub fn display(shown: bool) -> &'static str {
        if shown {
            "inline-block"
        } else {
            "none"
        }
    }
}

/// Login form input after trimming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    /// `None` when either field is blank.
    pub fn parse(username: &str, password: &str) -> Option<Self> {
        let username = username.trim();
        let password = password.trim();
        if username.is_empty() || password.is_empty() {
            return None;
        }
        Some(Credentials {
            username: username.to_string(),
            password: password.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoginOutcome {
    Accepted,
    Rejected,
    MissingFields,
    /// The authenticator could not be reached.
    Unavailable(String),
}

impl LoginOutcome {
    pub fn message(&self) -> String {
        match self {
            LoginOutcome::Accepted => MSG_LOGIN_OK.to_string(),
            LoginOutcome::Rejected => MSG_LOGIN_REJECTED.to_string(),
            LoginOutcome::MissingFields => MSG_LOGIN_REQUIRED.to_string(),
            LoginOutcome::Unavailable(reason) => format!("Login gagal: {}", reason),
        }
    }

    /// Map a `(ok, message)` pair from the API onto an outcome.
    pub fn from_api(ok: bool, message: &str) -> Self {
        if ok {
            LoginOutcome::Accepted
        } else if message == MSG_LOGIN_REQUIRED {
            LoginOutcome::MissingFields
        } else {
            LoginOutcome::Rejected
        }
    }
}

/// A single configured username/password pair.
#[derive(Debug, Clone)]
pub struct StaticCredentials {
    username: String,
    password: String,
}

impl StaticCredentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        StaticCredentials {
            username: username.into(),
            password: password.into(),
        }
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn verify(&self, username: &str, password: &str) -> LoginOutcome {
        match Credentials::parse(username, password) {
            None => LoginOutcome::MissingFields,
            Some(c) if c.username == self.username && c.password == self.password => {
                LoginOutcome::Accepted
            }
            Some(_) => LoginOutcome::Rejected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn creds() -> StaticCredentials {
        StaticCredentials::new("gaw97094", "97094")
    }

    #[test]
    fn test_from_flag_exact_literal_only() {
        assert_eq!(SessionState::from_flag(Some("true")), SessionState::LoggedIn);
        assert_eq!(SessionState::from_flag(Some("TRUE")), SessionState::LoggedOut);
        assert_eq!(SessionState::from_flag(Some("1")), SessionState::LoggedOut);
        assert_eq!(SessionState::from_flag(Some("")), SessionState::LoggedOut);
        assert_eq!(SessionState::from_flag(None), SessionState::LoggedOut);
    }

    #[test]
    fn test_login_accepted_transitions_to_logged_in() {
        let outcome = creds().verify("gaw97094", "97094");
        assert_eq!(outcome, LoginOutcome::Accepted);
        assert_eq!(
            SessionState::LoggedOut.after_login(&outcome),
            SessionState::LoggedIn
        );
    }

    #[test]
    fn test_login_rejected_is_self_loop() {
        for (u, p) in [("gaw97094", "wrong"), ("admin", "97094"), ("97094", "gaw97094")] {
            let outcome = creds().verify(u, p);
            assert_eq!(outcome, LoginOutcome::Rejected);
            assert_eq!(
                SessionState::LoggedOut.after_login(&outcome),
                SessionState::LoggedOut
            );
        }
    }

    #[test]
    fn test_login_trims_input() {
        assert_eq!(creds().verify("  gaw97094 ", "97094\n"), LoginOutcome::Accepted);
    }

    #[test]
    fn test_login_blank_fields() {
        assert_eq!(creds().verify("", "97094"), LoginOutcome::MissingFields);
        assert_eq!(creds().verify("gaw97094", "   "), LoginOutcome::MissingFields);
        assert_eq!(LoginOutcome::MissingFields.message(), MSG_LOGIN_REQUIRED);
    }

    #[test]
    fn test_unavailable_keeps_state() {
        let outcome = LoginOutcome::Unavailable("network".into());
        assert_eq!(
            SessionState::LoggedOut.after_login(&outcome),
            SessionState::LoggedOut
        );
        assert!(outcome.message().contains("network"));
    }

    #[test]
    fn test_logout_always_logged_out() {
        assert_eq!(SessionState::LoggedIn.after_logout(), SessionState::LoggedOut);
        assert_eq!(SessionState::LoggedOut.after_logout(), SessionState::LoggedOut);
    }

    #[test]
    fn test_visibility_logged_out() {
        let v = SessionState::LoggedOut.visibility();
        assert!(v.login_button);
        assert!(!v.profile_area);
        assert!(!v.gated_menu);
    }

    #[test]
    fn test_visibility_logged_in() {
        let v = SessionState::LoggedIn.visibility();
        assert!(!v.login_button);
        assert!(v.profile_area);
        assert!(v.gated_menu);
        assert_eq!(Visibility::display(v.profile_area), "inline-block");
        assert_eq!(Visibility::display(v.login_button), "none");
    }

    #[test]
    fn test_outcome_from_api() {
        assert_eq!(LoginOutcome::from_api(true, MSG_LOGIN_OK), LoginOutcome::Accepted);
        assert_eq!(
            LoginOutcome::from_api(false, MSG_LOGIN_REJECTED),
            LoginOutcome::Rejected
        );
        assert_eq!(
            LoginOutcome::from_api(false, MSG_LOGIN_REQUIRED),
            LoginOutcome::MissingFields
        );
    }
}
