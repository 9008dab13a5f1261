use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use contactdesk_contact::DeliverySettings;
use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub delivery: DeliveryConfig,
    #[serde(default)]
    pub smtp: SmtpConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

/// Which collaborator transmits submitted forms.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryBackend {
    EmailJs,
    Smtp,
    #[default]
    Log,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DeliveryConfig {
    #[serde(default)]
    pub backend: DeliveryBackend,
    #[serde(default)]
    pub service_id: String,
    #[serde(default)]
    pub template_id: String,
    /// EmailJS public key, sent as `user_id`.
    #[serde(default)]
    pub auth_id: String,
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
}

impl Default for DeliveryConfig {
    fn default() -> Self {
        Self {
            backend: DeliveryBackend::default(),
            service_id: String::new(),
            template_id: String::new(),
            auth_id: String::new(),
            endpoint: default_endpoint(),
            timeout_seconds: default_timeout_seconds(),
        }
    }
}

impl DeliveryConfig {
    pub fn settings(&self) -> DeliverySettings {
        DeliverySettings {
            service_id: self.service_id.to_owned(),
            template_id: self.template_id.to_owned(),
            auth_id: self.auth_id.to_owned(),
        }
    }
}

fn default_endpoint() -> String {
    "https://api.emailjs.com/api/v1.0/email/send".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct SmtpConfig {
    #[serde(default = "default_smtp_host")]
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    #[serde(default = "default_from_address")]
    pub from_address: String,
    #[serde(default = "default_to_address")]
    pub to_address: String,
    #[serde(default)]
    pub tls: SmtpTls,
}

/// How an authenticated SMTP connection is secured.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum SmtpTls {
    /// Plaintext greeting upgraded with STARTTLS, usually port 587.
    #[default]
    StartTls,
    /// Implicit TLS from the first byte, usually port 465.
    Wrapper,
}

impl Default for SmtpConfig {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
            username: String::new(),
            password: String::new(),
            from_address: default_from_address(),
            to_address: default_to_address(),
            tls: SmtpTls::default(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    587
}

fn default_from_address() -> String {
    "contactdesk <noreply@contactdesk.localhost>".to_string()
}

fn default_to_address() -> String {
    "support@contactdesk.localhost".to_string()
}

#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (CONTACTDESK__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("CONTACTDESK")
                .separator("__")
                .try_parsing(true),
        );

        // Names used by EmailJS dashboards
        if let Ok(service_id) = env::var("EMAILJS_SERVICE_ID") {
            builder = builder.set_override("delivery.service_id", service_id)?;
        }
        if let Ok(template_id) = env::var("EMAILJS_TEMPLATE_ID") {
            builder = builder.set_override("delivery.template_id", template_id)?;
        }
        if let Ok(user_id) = env::var("EMAILJS_USER_ID") {
            builder = builder.set_override("delivery.auth_id", user_id)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }
        if self.delivery.timeout_seconds == 0 {
            return Err("Delivery timeout_seconds must be at least 1".to_string());
        }

        match self.delivery.backend {
            DeliveryBackend::EmailJs => {
                if self.delivery.service_id.is_empty()
                    || self.delivery.template_id.is_empty()
                    || self.delivery.auth_id.is_empty()
                {
                    return Err(
                        "EmailJS delivery requires service_id, template_id and auth_id".to_string(),
                    );
                }
            }
            DeliveryBackend::Smtp => {
                if self.smtp.from_address.parse::<lettre::message::Mailbox>().is_err() {
                    return Err(format!(
                        "Invalid SMTP from_address: {}",
                        self.smtp.from_address
                    ));
                }
                if self.smtp.to_address.parse::<lettre::message::Mailbox>().is_err() {
                    return Err(format!("Invalid SMTP to_address: {}", self.smtp.to_address));
                }
            }
            DeliveryBackend::Log => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn emailjs_config() -> Config {
        Config {
            delivery: DeliveryConfig {
                backend: DeliveryBackend::EmailJs,
                service_id: "service_contact".to_string(),
                template_id: "template_contact".to_string(),
                auth_id: "public_key".to_string(),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_validation_valid_config() {
        assert!(Config::default().validate().is_ok());
        assert!(emailjs_config().validate().is_ok());
    }

    #[test]
    fn test_validation_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_zero_timeout() {
        let mut config = emailjs_config();
        config.delivery.timeout_seconds = 0;

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_emailjs_requires_identifiers() {
        let mut config = emailjs_config();
        config.delivery.auth_id = String::new();

        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validation_smtp_addresses() {
        let mut config = Config::default();
        config.delivery.backend = DeliveryBackend::Smtp;
        assert!(config.validate().is_ok());

        config.smtp.to_address = "not an address".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_delivery_settings_from_config() {
        let settings = emailjs_config().delivery.settings();

        assert_eq!(settings.service_id, "service_contact");
        assert_eq!(settings.template_id, "template_contact");
        assert_eq!(settings.auth_id, "public_key");
    }
}
