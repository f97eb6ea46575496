/// The authenticated caller, as proven by a verified credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub email: String,
}

/// A signed, time-bounded credential. Never persisted server-side; the
/// client stores it and presents it on each authenticated request.
pub struct AccessToken(pub String);

impl AccessToken {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
