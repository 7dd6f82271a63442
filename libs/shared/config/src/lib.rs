use std::env;
use tracing::warn;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_host: String,
    pub bind_port: u16,
    pub seed_demo: bool,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            bind_host: env::var("BIND_HOST").unwrap_or_else(|_| {
                warn!("BIND_HOST not set, using 0.0.0.0");
                "0.0.0.0".to_string()
            }),
            bind_port: env::var("BIND_PORT")
                .ok()
                .and_then(|raw| raw.parse().ok())
                .unwrap_or_else(|| {
                    warn!("BIND_PORT not set or invalid, using 3000");
                    3000
                }),
            seed_demo: env::var("SEED_DEMO_DATA")
                .map(|raw| raw == "true" || raw == "1")
                .unwrap_or(true),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.bind_host, self.bind_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_addr_joins_host_and_port() {
        let config = AppConfig {
            bind_host: "127.0.0.1".to_string(),
            bind_port: 8080,
            seed_demo: false,
        };
        assert_eq!(config.bind_addr(), "127.0.0.1:8080");
    }
}
