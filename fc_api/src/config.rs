use serde::Deserialize;

/// Where the backend listens when nothing else is configured.
pub const DEFAULT_API_HOST: &str = "http://127.0.0.1:3333";

/// User the backend assumes when its credential has no `user:` part.
pub const DEFAULT_USER: &str = "fakecast";

/// Backend connection settings, read from `API_HOST` and `API_CREDENTIAL`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_api_host")]
    pub api_host: String,

    /// `user:password`, or a bare password for [`DEFAULT_USER`].
    #[serde(default)]
    pub api_credential: Option<redact::Secret<String>>,
}

fn default_api_host() -> String {
    DEFAULT_API_HOST.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            api_host: default_api_host(),
            api_credential: None,
        }
    }
}

impl ApiConfig {
    #[must_use]
    pub fn credential(&self) -> Option<Credential> {
        self.api_credential
            .as_ref()
            .and_then(|secret| Credential::parse(secret.expose_secret()))
    }
}

/// HTTP basic auth credential.
#[derive(Debug, Clone)]
pub struct Credential {
    pub user: String,
    pub password: redact::Secret<String>,
}

impl Credential {
    /// Splits `user:password` at the first colon. Without a colon the whole
    /// value is the password for [`DEFAULT_USER`]. An empty value means no
    /// authentication.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        if raw.is_empty() {
            return None;
        }

        let (user, password) =
            raw.split_once(':').unwrap_or((DEFAULT_USER, raw));

        Some(Self {
            user: user.to_string(),
            password: redact::Secret::new(password.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_user_and_password() {
        let credential = Credential::parse("admin:hunter2:x").unwrap();

        assert_eq!(credential.user, "admin");
        assert_eq!(credential.password.expose_secret(), "hunter2:x");
    }

    #[test]
    fn test_parse_bare_password() {
        let credential = Credential::parse("secret").unwrap();

        assert_eq!(credential.user, DEFAULT_USER);
        assert_eq!(credential.password.expose_secret(), "secret");
    }

    #[test]
    fn test_parse_empty() {
        assert!(Credential::parse("").is_none());
    }

    #[test]
    fn test_password_is_redacted_in_debug() {
        let credential = Credential::parse("admin:hunter2").unwrap();

        assert!(!format!("{credential:?}").contains("hunter2"));
    }

    #[test]
    fn test_config_from_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("API_HOST", "http://podcasts.local");
            jail.set_env("API_CREDENTIAL", "admin:hunter2");

            let config: ApiConfig = fc_app::load_config()?;

            assert_eq!(config.api_host, "http://podcasts.local");
            let credential = config.credential().unwrap();
            assert_eq!(credential.user, "admin");
            assert_eq!(credential.password.expose_secret(), "hunter2");
            Ok(())
        });
    }

    #[test]
    fn test_config_defaults() {
        figment::Jail::expect_with(|_jail| {
            let config: ApiConfig = fc_app::load_config()?;

            assert_eq!(config.api_host, DEFAULT_API_HOST);
            assert!(config.credential().is_none());
            Ok(())
        });
    }
}
