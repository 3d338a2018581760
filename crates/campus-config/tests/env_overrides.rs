use campus_config::CampusConfig;
use campus_core::enums::Dashboard;
use figment::Jail;

#[test]
fn env_vars_override_defaults() {
    Jail::expect_with(|jail| {
        jail.set_env("CAMPUS_API__BASE_URL", "https://admin.campus.dz");
        jail.set_env("CAMPUS_API__SESSION_COOKIE", "sid=42");
        jail.set_env("CAMPUS_CONSOLE__DASHBOARD", "university");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.api.base_url, "https://admin.campus.dz");
        assert_eq!(config.api.cookie_header().as_deref(), Some("sid=42"));
        assert_eq!(config.console.dashboard, Dashboard::University);
        Ok(())
    });
}

#[test]
fn env_beats_project_file() {
    Jail::expect_with(|jail| {
        jail.create_dir(".campus")?;
        jail.create_file(
            ".campus/config.toml",
            r#"
[api]
timeout_secs = 25
"#,
        )?;
        jail.set_env("CAMPUS_API__TIMEOUT_SECS", "5");

        let config = CampusConfig::load().expect("config loads");
        assert_eq!(config.api.timeout_secs, 5);
        Ok(())
    });
}
