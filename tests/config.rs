#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::fs;
    use std::path::PathBuf;
    use std::time::Duration;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timetrak::libs::config::{Config, DEFAULT_API_URL, DEFAULT_TAG_NAME};

    /// Gives each test its own directory for a `config.json`.
    struct ConfigTestContext {
        temp_dir: TempDir,
    }

    impl ConfigTestContext {
        fn config_path(&self) -> PathBuf {
            self.temp_dir.path().join("config.json")
        }
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            ConfigTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.tag_name, DEFAULT_TAG_NAME);
        assert_eq!(config.refresh_interval(), Duration::from_secs(1));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_gives_defaults(ctx: &mut ConfigTestContext) {
        let config = Config::from_file(&ctx.config_path()).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_file_keeps_defaults(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), r#"{"tag_name": "Focus"}"#).unwrap();

        let config = Config::from_file(&ctx.config_path()).unwrap();

        assert_eq!(config.tag_name, "Focus");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.api_key, None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_invalid_file_is_an_error(ctx: &mut ConfigTestContext) {
        fs::write(ctx.config_path(), "{ not json").unwrap();

        let err = Config::from_file(&ctx.config_path()).unwrap_err();

        assert!(err.to_string().contains("Failed to parse configuration"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_environment_overrides_file(ctx: &mut ConfigTestContext) {
        fs::write(
            ctx.config_path(),
            r#"{"api_key": "from-file", "api_url": "https://file.example.com/api/v1", "refresh_interval": 250}"#,
        )
        .unwrap();

        let config = Config::from_file(&ctx.config_path()).unwrap().apply_env(env(&[
            ("CLOCKIFY_API_KEY", "from-env"),
            ("TIMETRAK_TAG", "Deep work"),
        ]));

        assert_eq!(config.api_key.as_deref(), Some("from-env"));
        assert_eq!(config.api_url, "https://file.example.com/api/v1");
        assert_eq!(config.tag_name, "Deep work");
        assert_eq!(config.refresh_interval(), Duration::from_millis(250));
    }

    #[test]
    fn test_blank_environment_values_are_ignored() {
        let config = Config::default().apply_env(env(&[("CLOCKIFY_API_KEY", "   "), ("TIMETRAK_REFRESH_MS", "soon")]));

        assert_eq!(config.api_key, None);
        assert_eq!(config.refresh_interval, 1000);
    }

    #[test]
    fn test_api_url_trailing_slash_is_trimmed() {
        let config = Config::default().apply_env(env(&[("CLOCKIFY_API_URL", "http://localhost:8080/api/v1/")]));
        assert_eq!(config.api_url, "http://localhost:8080/api/v1");
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let err = Config::default().api_key().unwrap_err();
        assert!(err.to_string().contains("CLOCKIFY_API_KEY"));
    }

    #[test]
    fn test_api_key_is_trimmed() {
        let config = Config::default().apply_env(env(&[("CLOCKIFY_API_KEY", " abc123 \n")]));
        assert_eq!(config.api_key().unwrap(), "abc123");
    }
}
