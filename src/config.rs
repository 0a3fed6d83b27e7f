use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct Config {
    pub yaml_file: Option<PathBuf>,
    pub json_file: Option<PathBuf>,
    pub db_path: Option<PathBuf>,
    pub service_port: u16,
    pub service_host: String,
}

/// Read an optional variable, treating an empty value as unset
fn optional_path(name: &str) -> Option<PathBuf> {
    env::var(name)
        .ok()
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let yaml_file = optional_path("URLSHORT_YAML_FILE");
        let json_file = optional_path("URLSHORT_JSON_FILE");
        let db_path = optional_path("URLSHORT_DB_PATH");

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        let service_host = env::var("SERVICE_HOST")
            .unwrap_or_else(|_| "0.0.0.0".to_string());

        Ok(Config {
            yaml_file,
            json_file,
            db_path,
            service_port,
            service_host,
        })
    }

    pub fn log_startup(&self) {
        fn show(path: &Option<PathBuf>) -> String {
            path.as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "disabled".to_string())
        }

        tracing::info!("Configuration loaded:");
        tracing::info!("  YAML source: {}", show(&self.yaml_file));
        tracing::info!("  JSON source: {}", show(&self.json_file));
        tracing::info!("  Store: {}", show(&self.db_path));
        tracing::info!("  Service listening on: {}:{}", self.service_host, self.service_port);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;
    use std::sync::{Mutex, MutexGuard};

    static ENV_LOCK: Mutex<()> = Mutex::new(());

    fn lock_env() -> MutexGuard<'static, ()> {
        let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        unsafe {
            env::remove_var("URLSHORT_YAML_FILE");
            env::remove_var("URLSHORT_JSON_FILE");
            env::remove_var("URLSHORT_DB_PATH");
            env::remove_var("SERVICE_PORT");
            env::remove_var("SERVICE_HOST");
        }
        guard
    }

    #[test]
    fn test_config_with_all_vars() {
        let _env = lock_env();
        unsafe {
            env::set_var("URLSHORT_YAML_FILE", "paths.yaml");
            env::set_var("URLSHORT_JSON_FILE", "paths.json");
            env::set_var("URLSHORT_DB_PATH", "/var/lib/urlshort");
            env::set_var("SERVICE_PORT", "3000");
            env::set_var("SERVICE_HOST", "127.0.0.1");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.yaml_file, Some(PathBuf::from("paths.yaml")));
        assert_eq!(config.json_file, Some(PathBuf::from("paths.json")));
        assert_eq!(config.db_path, Some(PathBuf::from("/var/lib/urlshort")));
        assert_eq!(config.service_port, 3000);
        assert_eq!(config.service_host, "127.0.0.1");
    }

    #[test]
    fn test_config_with_defaults() {
        let _env = lock_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.yaml_file, None);
        assert_eq!(config.json_file, None);
        assert_eq!(config.db_path, None);
        assert_eq!(config.service_port, 8080);
        assert_eq!(config.service_host, "0.0.0.0");
    }

    #[test]
    fn test_empty_source_is_unset() {
        let _env = lock_env();
        unsafe {
            env::set_var("URLSHORT_YAML_FILE", "");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.yaml_file, None);
    }

    #[test]
    fn test_invalid_port() {
        let _env = lock_env();
        unsafe {
            env::set_var("SERVICE_PORT", "not-a-number");
        }

        let result = Config::from_env();
        assert!(result.is_err());
        let error = result.unwrap_err();
        assert!(error.to_string().contains("SERVICE_PORT"));
    }

    #[test]
    fn test_port_out_of_range() {
        let _env = lock_env();
        unsafe {
            env::set_var("SERVICE_PORT", "99999");
        }

        let result = Config::from_env();
        assert!(result.is_err());
    }
}
