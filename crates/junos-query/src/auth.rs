use secrecy::SecretString;

/// Login credentials for the device REST service.
///
/// The REST service uses HTTP Basic authentication on every request; the
/// password stays wrapped in [`SecretString`] and is exposed only at the
/// request call site.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: SecretString) -> Self {
        Self {
            username: username.into(),
            password,
        }
    }
}
