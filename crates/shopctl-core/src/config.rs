use crate::app_config::AppConfig;
use crate::ConfigError;

/// Load application configuration from environment variables.
///
/// Calls `dotenvy::dotenv().ok()` to load `.env` files before reading env vars.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config() -> Result<AppConfig, ConfigError> {
    dotenvy::dotenv().ok();
    load_app_config_from_env()
}

/// Load application configuration from environment variables already in the process.
///
/// Unlike [`load_app_config`], this does NOT load `.env` files — useful for testing
/// or when the caller manages env setup.
///
/// # Errors
///
/// Returns `ConfigError` if required env vars are missing or values are invalid.
pub fn load_app_config_from_env() -> Result<AppConfig, ConfigError> {
    build_app_config(|key| std::env::var(key))
}

/// Build application configuration using the provided env-var lookup function.
///
/// This is the core parsing/validation logic, decoupled from the actual environment
/// so it can be tested with a pure `HashMap` lookup — no `set_var`/`remove_var` needed.
fn build_app_config<F>(lookup: F) -> Result<AppConfig, ConfigError>
where
    F: Fn(&str) -> Result<String, std::env::VarError>,
{
    let require = |var: &str| -> Result<String, ConfigError> {
        lookup(var).map_err(|_| ConfigError::MissingEnvVar(var.to_string()))
    };

    let or_default = |var: &str, default: &str| -> String {
        lookup(var).unwrap_or_else(|_| default.to_string())
    };

    let parse_u32 = |var: &str, default: &str| -> Result<u32, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u32>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_u64 = |var: &str, default: &str| -> Result<u64, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<u64>().map_err(|e| ConfigError::InvalidEnvVar {
            var: var.to_string(),
            reason: e.to_string(),
        })
    };

    let parse_usize = |var: &str, default: &str| -> Result<usize, ConfigError> {
        let raw = or_default(var, default);
        raw.parse::<usize>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                var: var.to_string(),
                reason: e.to_string(),
            })
    };

    let api_base_url = require("SHOPCTL_API_BASE_URL")?;
    let api_key = require("SHOPCTL_API_KEY")?;
    let logistics_api_key = lookup("SHOPCTL_LOGISTICS_API_KEY").ok();

    let log_level = or_default("SHOPCTL_LOG_LEVEL", "info");
    let lang = lookup("SHOPCTL_LANG").ok();

    let request_timeout_secs = parse_u64("SHOPCTL_REQUEST_TIMEOUT_SECS", "30")?;
    let prefetch_timeout_secs = parse_u64("SHOPCTL_PREFETCH_TIMEOUT_SECS", "15")?;
    let page_size = parse_u32("SHOPCTL_PAGE_SIZE", "500")?;
    let category_fetch_cap = parse_usize("SHOPCTL_CATEGORY_FETCH_CAP", "5000")?;
    let product_scan_cap = parse_usize("SHOPCTL_PRODUCT_SCAN_CAP", "20000")?;

    Ok(AppConfig {
        api_base_url,
        api_key,
        logistics_api_key,
        log_level,
        lang,
        request_timeout_secs,
        prefetch_timeout_secs,
        page_size,
        category_fetch_cap,
        product_scan_cap,
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::env::VarError;

    use super::*;

    fn lookup_from_map<'a>(
        map: &'a HashMap<&'a str, &'a str>,
    ) -> impl Fn(&str) -> Result<String, VarError> + 'a {
        move |key| {
            map.get(key)
                .map(|v| (*v).to_string())
                .ok_or(VarError::NotPresent)
        }
    }

    /// Returns a map with all required env vars populated with valid defaults.
    fn full_env<'a>() -> HashMap<&'a str, &'a str> {
        let mut m = HashMap::new();
        m.insert("SHOPCTL_API_BASE_URL", "https://api.example-shop.test/v1");
        m.insert("SHOPCTL_API_KEY", "test-key");
        m
    }

    #[test]
    fn build_app_config_fails_without_base_url() {
        let map: HashMap<&str, &str> = HashMap::new();
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPCTL_API_BASE_URL"),
            "expected MissingEnvVar(SHOPCTL_API_BASE_URL), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_fails_without_api_key() {
        let mut map: HashMap<&str, &str> = HashMap::new();
        map.insert("SHOPCTL_API_BASE_URL", "https://api.example-shop.test/v1");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::MissingEnvVar(ref v)) if v == "SHOPCTL_API_KEY"),
            "expected MissingEnvVar(SHOPCTL_API_KEY), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_succeeds_with_all_required_vars() {
        let map = full_env();
        let result = build_app_config(lookup_from_map(&map));
        assert!(result.is_ok(), "expected Ok, got: {result:?}");
        let cfg = result.unwrap();
        assert_eq!(cfg.api_base_url, "https://api.example-shop.test/v1");
        assert_eq!(cfg.log_level, "info");
        assert!(cfg.logistics_api_key.is_none());
        assert!(cfg.lang.is_none());
        assert_eq!(cfg.request_timeout_secs, 30);
        assert_eq!(cfg.prefetch_timeout_secs, 15);
        assert_eq!(cfg.page_size, 500);
        assert_eq!(cfg.category_fetch_cap, 5000);
        assert_eq!(cfg.product_scan_cap, 20000);
    }

    #[test]
    fn build_app_config_reads_optional_logistics_key() {
        let mut map = full_env();
        map.insert("SHOPCTL_LOGISTICS_API_KEY", "logistics-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.logistics_api_key.as_deref(), Some("logistics-key"));
    }

    #[test]
    fn build_app_config_page_size_override() {
        let mut map = full_env();
        map.insert("SHOPCTL_PAGE_SIZE", "100");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.page_size, 100);
    }

    #[test]
    fn build_app_config_page_size_invalid() {
        let mut map = full_env();
        map.insert("SHOPCTL_PAGE_SIZE", "not-a-number");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPCTL_PAGE_SIZE"),
            "expected InvalidEnvVar(SHOPCTL_PAGE_SIZE), got: {result:?}"
        );
    }

    #[test]
    fn build_app_config_scan_cap_override() {
        let mut map = full_env();
        map.insert("SHOPCTL_PRODUCT_SCAN_CAP", "1000");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        assert_eq!(cfg.product_scan_cap, 1000);
    }

    #[test]
    fn build_app_config_timeout_invalid() {
        let mut map = full_env();
        map.insert("SHOPCTL_REQUEST_TIMEOUT_SECS", "soon");
        let result = build_app_config(lookup_from_map(&map));
        assert!(
            matches!(result, Err(ConfigError::InvalidEnvVar { ref var, .. }) if var == "SHOPCTL_REQUEST_TIMEOUT_SECS"),
            "expected InvalidEnvVar(SHOPCTL_REQUEST_TIMEOUT_SECS), got: {result:?}"
        );
    }

    #[test]
    fn debug_output_redacts_keys() {
        let mut map = full_env();
        map.insert("SHOPCTL_LOGISTICS_API_KEY", "logistics-key");
        let cfg = build_app_config(lookup_from_map(&map)).unwrap();
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("test-key"), "api key leaked: {rendered}");
        assert!(
            !rendered.contains("logistics-key"),
            "logistics key leaked: {rendered}"
        );
    }
}
