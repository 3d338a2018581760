//! Integration tests for TOML configuration loading.
//!
//! Uses figment::Jail for sandboxed cwd and env var manipulation.

use campus_config::CampusConfig;
use campus_core::enums::Dashboard;
use figment::{
    Figment, Jail,
    providers::{Format, Serialized, Toml},
};

#[test]
fn loads_api_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[api]
base_url = "https://chatbot.univ-batna2.dz"
timeout_secs = 30
session_cookie = "eyJfcGVybWFuZW50Ijp0cnVlfQ"
"#,
        )?;

        let config: CampusConfig = Figment::from(Serialized::defaults(CampusConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.api.base_url, "https://chatbot.univ-batna2.dz");
        assert_eq!(config.api.timeout_secs, 30);
        assert!(config.api.has_session());
        assert!(config.api.user_agent.starts_with("campus-console/"));
        Ok(())
    });
}

#[test]
fn loads_console_config_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[console]
dashboard = "university"
login_path = "/auth/login"
concurrent_init = false
"#,
        )?;

        let config: CampusConfig = Figment::from(Serialized::defaults(CampusConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.console.dashboard, Dashboard::University);
        assert_eq!(config.console.login_path, "/auth/login");
        assert!(!config.console.concurrent_init);
        Ok(())
    });
}

#[test]
fn project_file_is_picked_up_by_load() {
    Jail::expect_with(|jail| {
        jail.create_dir(".campus")?;
        jail.create_file(
            ".campus/config.toml",
            r#"
[general]
default_limit = 15
"#,
        )?;

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.general.default_limit, 15);
        Ok(())
    });
}

#[test]
fn rejects_unknown_dashboard() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[console]
dashboard = "faculty"
"#,
        )?;

        let result: Result<CampusConfig, _> =
            Figment::from(Serialized::defaults(CampusConfig::default()))
                .merge(Toml::file("config.toml"))
                .extract();
        assert!(result.is_err());
        Ok(())
    });
}

#[test]
fn load_rejects_invalid_base_url() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_API__BASE_URL", "campus.local");
        let err = CampusConfig::load().expect_err("invalid url must fail");
        assert!(err.to_string().contains("api.base_url"));
        Ok(())
    });
}
