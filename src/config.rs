use serde::{Deserialize, Serialize};

/// Configuración del cliente, resuelta en tiempo de compilación.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base_development: String,
    pub api_base_production: String,
    pub environment: String,
    pub enable_logging: bool,
    pub network_timeout_seconds: u32,
    pub retry_attempts: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_development: "http://localhost:8787/api".to_string(),
            api_base_production: "https://script.google.com/macros/s/CDL/exec".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            network_timeout_seconds: 30,
            retry_attempts: 3,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de
    /// compilación (inyectadas por build.rs desde .env).
    pub fn from_env() -> Self {
        let defecto = AppConfig::default();
        Self {
            api_base_development: option_env!("CDL_API_BASE_DEVELOPMENT")
                .map(str::to_string)
                .unwrap_or(defecto.api_base_development),
            api_base_production: option_env!("CDL_API_BASE_PRODUCTION")
                .map(str::to_string)
                .unwrap_or(defecto.api_base_production),
            environment: option_env!("ENVIRONMENT")
                .unwrap_or("development")
                .to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            network_timeout_seconds: option_env!("NETWORK_TIMEOUT_SECONDS")
                .unwrap_or("30")
                .parse()
                .unwrap_or(30),
            retry_attempts: option_env!("RETRY_ATTEMPTS")
                .unwrap_or("3")
                .parse()
                .unwrap_or(3),
        }
    }

    /// URL base del endpoint GET/POST según el entorno actual.
    pub fn api_base(&self) -> &str {
        match self.environment.as_str() {
            "production" => &self.api_base_production,
            _ => &self.api_base_development,
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_base_segun_entorno() {
        let mut cfg = AppConfig::default();
        assert_eq!(cfg.api_base(), cfg.api_base_development.as_str());
        cfg.environment = "production".into();
        assert_eq!(cfg.api_base(), cfg.api_base_production.as_str());
    }
}
