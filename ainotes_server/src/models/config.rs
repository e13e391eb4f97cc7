use tracing::warn;

use crate::{models::client::HttpClientConfig, utils};

pub const DEFAULT_AI_BASE_URL: &str = "https://api.groq.com/openai/v1";

/// `DATABASE_URL` value that selects the in-memory note store.
pub const MEMORY_DATABASE_URL: &str = "memory";

#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
}

#[derive(Clone, Debug)]
pub struct AiNotesConfig {
    pub database_url: String,
    pub server: ServerConfig,
    pub generation: HttpClientConfig,
}

impl AiNotesConfig {
    /// All configuration comes from environment variables, optionally
    /// loaded from a `.env` file.
    pub fn from_env() -> Result<Self, utils::BoxError> {
        let database_url = dotenvy::var("DATABASE_URL")?;

        let port = match dotenvy::var("PORT") {
            Ok(port) => port
                .parse::<u16>()
                .map_err(|err| format!("invalid PORT {port:?}: {err}"))?,
            Err(_) => utils::default_port(),
        };
        let server = ServerConfig {
            bind_addr: format!("0.0.0.0:{port}"),
        };

        let base_url =
            dotenvy::var("AI_BASE_URL").unwrap_or_else(|_| DEFAULT_AI_BASE_URL.to_string());
        let mut generation = HttpClientConfig::new(base_url);
        match dotenvy::var("GROQ_API_KEY") {
            Ok(api_key) => generation = generation.with_bearer_token(&api_key),
            Err(_) => warn!("GROQ_API_KEY is not set; model API requests will be unauthenticated"),
        }

        Ok(Self {
            database_url,
            server,
            generation,
        })
    }
}
