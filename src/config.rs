use secrecy::SecretString;
use std::env;

#[derive(Clone, Debug)]
pub struct Config {
    pub mongo_conn_string: String,
    pub mongo_db_name: String,
    pub openai_api_key: SecretString,
    pub completion_model: String,
    pub web_server_host: String,
    pub web_server_port: u16,
    pub session_ttl_minutes: i64,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            mongo_conn_string: env::var("MONGO_CONN_STRING")
                .unwrap_or_else(|_| "mongodb://localhost:27017".to_string()),
            mongo_db_name: env::var("MONGO_DB_NAME")
                .unwrap_or_else(|_| "mentor-local".to_string()),
            openai_api_key: SecretString::from(
                env::var("OPENAI_API_KEY")
                    .unwrap_or_else(|_| "dev_api_key_change_in_production".to_string()),
            ),
            completion_model: env::var("COMPLETION_MODEL")
                .unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            web_server_host: env::var("WEB_SERVER_HOST")
                .unwrap_or_else(|_| "localhost".to_string()),
            web_server_port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            session_ttl_minutes: env::var("SESSION_TTL_MINUTES")
                .ok()
                .and_then(|m| m.parse().ok())
                .unwrap_or(120),
        }
    }

    /// Validate that production-critical configuration is set.
    /// Panics if required secrets are using default values.
    pub fn validate_for_production(&self) {
        use secrecy::ExposeSecret;

        if self.openai_api_key.expose_secret() == "dev_api_key_change_in_production" {
            panic!(
                "FATAL: OPENAI_API_KEY is using default value! Set OPENAI_API_KEY environment variable."
            );
        }
    }

    #[cfg(test)]
    pub fn test_config() -> Self {
        Self {
            mongo_conn_string: "mongodb://localhost:27017".to_string(),
            mongo_db_name: "mentor-test".to_string(),
            openai_api_key: SecretString::from("test_api_key".to_string()),
            completion_model: "gpt-4o-mini".to_string(),
            web_server_host: "127.0.0.1".to_string(),
            web_server_port: 8080,
            session_ttl_minutes: 5,
        }
    }
}
