use std::env;
use std::time::Duration;

use log::LevelFilter;

use crate::entitlement::EntitlementPolicy;
use crate::error::ConfigError;

pub const DEFAULT_CHECKOUT_PATH: &str = "/functions/v1/stripe-checkout";
pub const DEFAULT_CHECKOUT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    pub app_origin: String,
    pub checkout_url: String,
    pub checkout_timeout: Duration,
    pub entitlement_policy: EntitlementPolicy,
    pub log_level: LevelFilter,
}

impl AppConfig {
    pub fn from_env() -> Result<AppConfig, ConfigError> {
        AppConfig::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<AppConfig, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let optional = |name: &str| lookup(name).filter(|value| !value.trim().is_empty());
        let required = |name: &'static str| optional(name).ok_or(ConfigError::Missing(name));

        let host = optional("HOST").unwrap_or_else(|| String::from("0.0.0.0"));

        let port = match optional("PORT") {
            Some(port) => port.trim().parse::<u16>().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                reason: String::from("must be a number"),
            })?,
            None => 3000,
        };

        let supabase_url = required("SUPABASE_URL")?.trim_end_matches('/').to_string();
        let supabase_anon_key = required("SUPABASE_ANON_KEY")?;
        let app_origin = required("APP_ORIGIN")?.trim_end_matches('/').to_string();

        let checkout_url = optional("CHECKOUT_URL")
            .unwrap_or_else(|| format!("{}{}", supabase_url, DEFAULT_CHECKOUT_PATH));

        let checkout_timeout_secs = match optional("CHECKOUT_TIMEOUT_SECS") {
            Some(secs) => match secs.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::Invalid {
                        name: "CHECKOUT_TIMEOUT_SECS",
                        reason: String::from("must be a positive number of seconds"),
                    })
                }
            },
            None => DEFAULT_CHECKOUT_TIMEOUT_SECS,
        };

        let require_unexpired_period = match optional("REQUIRE_UNEXPIRED_PERIOD") {
            Some(flag) => parse_flag(&flag).ok_or(ConfigError::Invalid {
                name: "REQUIRE_UNEXPIRED_PERIOD",
                reason: String::from("must be true or false"),
            })?,
            None => false,
        };

        let log_level = match optional("LOG_LEVEL") {
            Some(level) => level.trim().parse::<LevelFilter>().map_err(|_| ConfigError::Invalid {
                name: "LOG_LEVEL",
                reason: String::from("must be one of off, error, warn, info, debug, trace"),
            })?,
            None => LevelFilter::Info,
        };

        Ok(AppConfig {
            host,
            port,
            supabase_url,
            supabase_anon_key,
            app_origin,
            checkout_url,
            checkout_timeout: Duration::from_secs(checkout_timeout_secs),
            entitlement_policy: EntitlementPolicy {
                require_unexpired_period,
            },
            log_level,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn success_url(&self) -> String {
        format!("{}/success", self.app_origin)
    }

    pub fn cancel_url(&self) -> String {
        format!("{}/pricing", self.app_origin)
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
