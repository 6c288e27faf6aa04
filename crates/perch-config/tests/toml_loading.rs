//! Project-local TOML loading through the figment chain.

use figment::Jail;
use perch_config::PerchConfig;
use pretty_assertions::assert_eq;

#[test]
fn local_toml_fills_database_section() {
    Jail::expect_with(|jail| {
        jail.create_dir(".perch")?;
        jail.create_file(
            ".perch/config.toml",
            r#"
                [database]
                host = "http://localhost:4318"
                path = "/v1/p2group61/"
                auth_path = "/auth"
            "#,
        )?;

        let config: PerchConfig = PerchConfig::figment().extract()?;
        assert!(config.database.is_configured());
        assert_eq!(config.database.base_url(), "http://localhost:4318/v1/p2group61/");
        assert_eq!(config.database.auth_url(), "http://localhost:4318/auth");
        Ok(())
    });
}

#[test]
fn missing_toml_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let config: PerchConfig = PerchConfig::figment().extract()?;
        assert!(!config.database.is_configured());
        Ok(())
    });
}

#[test]
fn partial_toml_leaves_other_fields_default() {
    Jail::expect_with(|jail| {
        jail.create_dir(".perch")?;
        jail.create_file(
            ".perch/config.toml",
            r#"
                [database]
                host = "http://localhost:4318"
            "#,
        )?;

        let config: PerchConfig = PerchConfig::figment().extract()?;
        assert_eq!(config.database.host, "http://localhost:4318");
        assert!(config.database.path.is_empty());
        assert!(!config.database.is_configured());
        Ok(())
    });
}
