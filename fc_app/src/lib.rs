use figment::{Figment, providers::Env};
use thiserror::Error;

/// Builds an application context from its extracted configuration.
pub trait ContextProvider<Config>: Sized {
    type Error: std::error::Error + Send + Sync + 'static;

    fn new(config: Config) -> impl Future<Output = Result<Self, Self::Error>>;
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to load configuration: {0}")]
    Config(#[from] Box<figment::Error>),
    #[error("failed to build application context: {0}")]
    Context(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Installs the global tracing subscriber.
///
/// Output is JSON without ANSI colors, filtered by `RUST_LOG`. Calling
/// this more than once is harmless; only the first call installs a
/// subscriber.
pub fn init_tracing() {
    let installed = tracing_subscriber::fmt()
        .json()
        // allow log level to be overridden by RUST_LOG env var
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_current_span(false)
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

/// Extracts `Config` from the process environment. Each field is read
/// from the variable of the same name, matched case-insensitively.
///
/// # Errors
///
/// If a required variable is missing or a value has the wrong type.
pub fn load_config<'a, Config: serde::Deserialize<'a>>()
-> Result<Config, figment::Error> {
    Figment::new().merge(Env::raw()).extract()
}

/// Initialize the application context with configuration from environment
/// variables.
///
/// # Returns
/// The application context built by the [`ContextProvider`] implementation.
///
/// # Errors
/// If the configuration cannot be extracted from the environment variables
/// or the context cannot be built from it.
///
pub async fn create_app_context<'a, A, Config: serde::Deserialize<'a>>()
-> Result<A, AppError>
where
    A: ContextProvider<Config>,
{
    init_tracing();

    let config: Config = load_config().map_err(Box::new)?;

    A::new(config)
        .await
        .map_err(|e| AppError::Context(Box::new(e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct TestConfig {
        api_host: String,
        #[serde(default)]
        retries: u32,
    }

    #[derive(Debug)]
    struct TestContext {
        host: String,
    }

    #[derive(Debug, Error)]
    #[error("empty host")]
    struct EmptyHost;

    impl ContextProvider<TestConfig> for TestContext {
        type Error = EmptyHost;

        async fn new(config: TestConfig) -> Result<Self, EmptyHost> {
            if config.api_host.is_empty() {
                return Err(EmptyHost);
            }

            Ok(Self {
                host: config.api_host,
            })
        }
    }

    #[test]
    fn test_load_config_from_env() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("API_HOST", "http://localhost:3333");
            jail.set_env("RETRIES", "2");

            let config: TestConfig = load_config()?;

            assert_eq!(config.api_host, "http://localhost:3333");
            assert_eq!(config.retries, 2);
            Ok(())
        });
    }

    #[test]
    fn test_missing_variable_is_an_error() {
        figment::Jail::expect_with(|_jail| {
            assert!(load_config::<TestConfig>().is_err());
            Ok(())
        });
    }

    #[test]
    fn test_create_app_context() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("API_HOST", "http://example.test");

            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .expect("runtime");
            let context = runtime
                .block_on(create_app_context::<TestContext, TestConfig>())
                .expect("context");

            assert_eq!(context.host, "http://example.test");
            Ok(())
        });
    }

    #[test]
    fn test_context_failure_is_reported() {
        figment::Jail::expect_with(|jail| {
            jail.set_env("API_HOST", "");

            let runtime = tokio::runtime::Builder::new_current_thread()
                .build()
                .expect("runtime");
            let result = runtime
                .block_on(create_app_context::<TestContext, TestConfig>());

            assert!(matches!(result, Err(AppError::Context(_))));
            Ok(())
        });
    }
}
