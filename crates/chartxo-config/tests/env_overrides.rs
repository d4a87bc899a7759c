use figment::Jail;

use chartxo_config::ChartxoConfig;

#[test]
fn env_vars_map_to_nested_sections() {
    Jail::expect_with(|jail| {
        jail.set_env("CHARTXO_GEMINI__API_KEY", "env-key");
        jail.set_env("CHARTXO_RAZORPAY__KEY_ID", "rzp_test_1");
        jail.set_env("CHARTXO_RAZORPAY__KEY_SECRET", "shh");
        jail.set_env("CHARTXO_GEMINI__TIMEOUT_SECS", "15");

        let config = ChartxoConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.gemini.api_key, "env-key");
        assert_eq!(config.gemini.timeout_secs, 15);
        assert!(config.razorpay.is_configured());
        assert!(config.require_gemini().is_ok());
        Ok(())
    });
}

#[test]
fn env_beats_project_toml() {
    Jail::expect_with(|jail| {
        std::fs::create_dir_all(jail.directory().join(".chartxo"))
            .map_err(|e| e.to_string())?;
        jail.create_file(
            ".chartxo/config.toml",
            r#"
            [gemini]
            api_key = "toml-key"
            "#,
        )?;
        jail.set_env("CHARTXO_GEMINI__API_KEY", "env-key");

        let config = ChartxoConfig::load().map_err(|e| e.to_string())?;
        assert_eq!(config.gemini.api_key, "env-key");
        Ok(())
    });
}

#[test]
fn external_overrides_fill_config_values() {
    Jail::expect_with(|_jail| {
        let overrides = vec![(
            "CHARTXO_STRIPE__SECRET_KEY".to_string(),
            "sk_from_external".to_string(),
        )];

        let config = ChartxoConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.stripe.secret_key, "sk_from_external");
        Ok(())
    });
}

#[test]
fn process_env_beats_external_overrides() {
    Jail::expect_with(|jail| {
        jail.set_env("CHARTXO_STRIPE__SECRET_KEY", "sk_from_env");
        let overrides = vec![(
            "CHARTXO_STRIPE__SECRET_KEY".to_string(),
            "sk_from_external".to_string(),
        )];

        let config = ChartxoConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert_eq!(config.stripe.secret_key, "sk_from_env");
        Ok(())
    });
}

#[test]
fn unrelated_override_keys_are_ignored() {
    Jail::expect_with(|_jail| {
        let overrides = vec![("PATH".to_string(), "/bin".to_string())];
        let config = ChartxoConfig::load_with_env_overrides(&overrides).expect("config loads");
        assert!(!config.stripe.is_configured());
        Ok(())
    });
}
