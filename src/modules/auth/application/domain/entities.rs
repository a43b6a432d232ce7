use serde::Serialize;

/// A successfully validated user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AuthUser {
    pub username: String,
    pub is_valid: bool,
}

/// One username/password pair of the fixed demo list.
#[derive(Debug, Clone)]
pub struct Credential {
    pub username: String,
    pub password: String,
}

impl Credential {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }
}

/// Immutable credential list, built once at startup and injected wherever a
/// check is needed.
///
/// Deliberately demo-grade: exact-match linear scan, no hashing, no
/// timing-attack mitigation. Not a real identity system.
#[derive(Debug, Clone)]
pub struct CredentialRegistry {
    credentials: Vec<Credential>,
}

impl CredentialRegistry {
    pub fn new(credentials: Vec<Credential>) -> Self {
        Self { credentials }
    }

    /// The fixed demo credential set.
    pub fn demo() -> Self {
        Self::new(vec![Credential::new("admin", "admin123")])
    }

    /// Exact match on both fields; `None` on miss.
    pub fn validate(&self, username: &str, password: &str) -> Option<AuthUser> {
        self.credentials
            .iter()
            .find(|cred| cred.username == username && cred.password == password)
            .map(|cred| AuthUser {
                username: cred.username.clone(),
                is_valid: true,
            })
    }

    pub fn is_known_user(&self, username: &str) -> bool {
        self.credentials
            .iter()
            .any(|cred| cred.username == username)
    }
}
