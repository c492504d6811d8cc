use console::AppContext;
use fc_api::{ApiConfig, DEFAULT_API_HOST};
use fc_app::AppError;

fn build() -> Result<AppContext, AppError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .expect("runtime");

    runtime.block_on(fc_app::create_app_context::<AppContext, ApiConfig>())
}

#[test]
fn test_context_from_env() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("API_HOST", "http://podcasts.local/");
        jail.set_env("API_CREDENTIAL", "admin:hunter2");

        let context = build().expect("context");

        assert_eq!(context.api.host(), "http://podcasts.local");
        let credential = context.config.credential().expect("credential");
        assert_eq!(credential.user, "admin");
        Ok(())
    });
}

#[test]
fn test_context_defaults() {
    figment::Jail::expect_with(|_jail| {
        let context = build().expect("context");

        assert_eq!(context.api.host(), DEFAULT_API_HOST);
        assert!(context.config.api_credential.is_none());
        Ok(())
    });
}

#[test]
fn test_invalid_host_fails_context() {
    figment::Jail::expect_with(|jail| {
        jail.set_env("API_HOST", "not a url");

        assert!(matches!(build(), Err(AppError::Context(_))));
        Ok(())
    });
}
