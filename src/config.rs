use std::sync::OnceLock;

use crate::log::LogLevel;

const DEFAULT_EMAILJS_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";
const DEFAULT_LOADING_GATE_MS: u32 = 2_000;
const DEFAULT_STATUS_RESET_MS: u32 = 3_000;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const LOADING_GATE_MS_BOUNDS: (u32, u32) = (0, 10_000);
const STATUS_RESET_MS_BOUNDS: (u32, u32) = (500, 30_000);

static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Credentials and endpoint for the EmailJS relay.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub service_id: Option<String>,
    pub template_id: Option<String>,
    pub public_key: Option<String>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SiteConfig {
    pub relay: RelayConfig,
    pub loading_gate_ms: u32,
    pub status_reset_ms: u32,
    pub log_level: LogLevel,
}

impl SiteConfig {
    /// Reads the values baked in by `trunk build` from the build environment.
    pub fn from_build_env() -> Self {
        Self::from_lookup(build_env)
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let relay = RelayConfig {
            endpoint: parse_non_empty_string(&lookup, "EMAILJS_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_EMAILJS_ENDPOINT.to_string()),
            service_id: parse_non_empty_string(&lookup, "EMAILJS_SERVICE_ID"),
            template_id: parse_non_empty_string(&lookup, "EMAILJS_TEMPLATE_ID"),
            public_key: parse_non_empty_string(&lookup, "EMAILJS_PUBLIC_KEY"),
        };
        let loading_gate_ms = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_LOADING_MS",
            DEFAULT_LOADING_GATE_MS,
            LOADING_GATE_MS_BOUNDS,
        );
        let status_reset_ms = parse_u32_with_bounds(
            &lookup,
            "PORTFOLIO_STATUS_RESET_MS",
            DEFAULT_STATUS_RESET_MS,
            STATUS_RESET_MS_BOUNDS,
        );
        let log_level = parse_log_level(&lookup, "PORTFOLIO_LOG_LEVEL", DEFAULT_LOG_LEVEL);

        Self {
            relay,
            loading_gate_ms,
            status_reset_ms,
            log_level,
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self::from_lookup(|_| None)
    }
}

pub fn site_config() -> &'static SiteConfig {
    SITE_CONFIG.get_or_init(SiteConfig::from_build_env)
}

// `option_env!` needs literal names, so the lookup table is spelled out.
fn build_env(name: &str) -> Option<String> {
    let value = match name {
        "EMAILJS_ENDPOINT" => option_env!("EMAILJS_ENDPOINT"),
        "EMAILJS_SERVICE_ID" => option_env!("EMAILJS_SERVICE_ID"),
        "EMAILJS_TEMPLATE_ID" => option_env!("EMAILJS_TEMPLATE_ID"),
        "EMAILJS_PUBLIC_KEY" => option_env!("EMAILJS_PUBLIC_KEY"),
        "PORTFOLIO_LOADING_MS" => option_env!("PORTFOLIO_LOADING_MS"),
        "PORTFOLIO_STATUS_RESET_MS" => option_env!("PORTFOLIO_STATUS_RESET_MS"),
        "PORTFOLIO_LOG_LEVEL" => option_env!("PORTFOLIO_LOG_LEVEL"),
        _ => None,
    };
    value.map(str::to_string)
}

fn parse_u32_with_bounds(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: u32,
    bounds: (u32, u32),
) -> u32 {
    lookup(name)
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_non_empty_string(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Option<String> {
    lookup(name)
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn parse_log_level(
    lookup: &impl Fn(&str) -> Option<String>,
    name: &str,
    default: LogLevel,
) -> LogLevel {
    parse_non_empty_string(lookup, name)
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> SiteConfig {
        let values: HashMap<String, String> = pairs
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        SiteConfig::from_lookup(move |name| values.get(name).cloned())
    }

    #[test]
    fn empty_environment_uses_defaults() {
        let config = SiteConfig::default();

        assert_eq!(config.loading_gate_ms, 2_000);
        assert_eq!(config.status_reset_ms, 3_000);
        assert_eq!(config.log_level, LogLevel::Info);
        assert_eq!(config.relay.endpoint, DEFAULT_EMAILJS_ENDPOINT);
        assert!(config.relay.service_id.is_none());
    }

    #[test]
    fn relay_credentials_are_trimmed_and_blank_values_dropped() {
        let config = config_from(&[
            ("EMAILJS_SERVICE_ID", "  service_abc "),
            ("EMAILJS_TEMPLATE_ID", "   "),
            ("EMAILJS_PUBLIC_KEY", "pk-123"),
        ]);

        assert_eq!(config.relay.service_id.as_deref(), Some("service_abc"));
        assert_eq!(config.relay.template_id, None);
        assert_eq!(config.relay.public_key.as_deref(), Some("pk-123"));
    }

    #[test]
    fn out_of_bounds_timings_fall_back_to_defaults() {
        let config = config_from(&[
            ("PORTFOLIO_LOADING_MS", "60000"),
            ("PORTFOLIO_STATUS_RESET_MS", "100"),
        ]);

        assert_eq!(config.loading_gate_ms, DEFAULT_LOADING_GATE_MS);
        assert_eq!(config.status_reset_ms, DEFAULT_STATUS_RESET_MS);
    }

    #[test]
    fn valid_overrides_are_applied() {
        let config = config_from(&[
            ("PORTFOLIO_LOADING_MS", "0"),
            ("PORTFOLIO_STATUS_RESET_MS", " 1500 "),
            ("PORTFOLIO_LOG_LEVEL", "DEBUG"),
        ]);

        assert_eq!(config.loading_gate_ms, 0);
        assert_eq!(config.status_reset_ms, 1_500);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn unknown_log_level_keeps_default() {
        let config = config_from(&[("PORTFOLIO_LOG_LEVEL", "verbose")]);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
    }
}
