use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,
    pub ai_api_key: String,
    pub ai_base_url: String,
    pub ai_model: String,
    /// Optional. When absent the image enricher serves deterministic
    /// placeholder URLs instead of querying Unsplash.
    pub unsplash_access_key: Option<String>,
    pub unsplash_base_url: String,
    pub placeholder_image_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let config = Self {
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number between 1-65535"))?,
            ai_api_key: std::env::var("AI_API_KEY")
                .map_err(|_| anyhow::anyhow!("AI_API_KEY environment variable required"))
                .and_then(|key| {
                    if key.trim().is_empty() {
                        anyhow::bail!("AI_API_KEY cannot be empty");
                    }
                    Ok(key)
                })?,
            ai_base_url: std::env::var("AI_BASE_URL")
                .unwrap_or_else(|_| "https://api.openai.com".to_string()),
            ai_model: std::env::var("AI_MODEL").unwrap_or_else(|_| "gpt-4o-mini".to_string()),
            unsplash_access_key: std::env::var("UNSPLASH_ACCESS_KEY")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            unsplash_base_url: std::env::var("UNSPLASH_BASE_URL")
                .unwrap_or_else(|_| "https://api.unsplash.com".to_string()),
            placeholder_image_base_url: std::env::var("PLACEHOLDER_IMAGE_BASE_URL")
                .unwrap_or_else(|_| "https://picsum.photos".to_string()),
        };

        if !config.ai_base_url.starts_with("http://")
            && !config.ai_base_url.starts_with("https://")
        {
            anyhow::bail!("AI_BASE_URL must start with http:// or https://");
        }

        // Log successful configuration load (without sensitive values)
        tracing::info!("Configuration loaded successfully");
        tracing::debug!("AI Base URL: {}", config.ai_base_url);
        tracing::debug!("AI Model: {}", config.ai_model);
        tracing::debug!(
            "Image search: {}",
            if config.unsplash_access_key.is_some() {
                "Unsplash"
            } else {
                "placeholder fallback only"
            }
        );
        tracing::debug!("Server Port: {}", config.port);

        Ok(config)
    }
}
