use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        if secret.is_empty() {
            anyhow::bail!("JWT_SECRET must be set and non-empty");
        }
        Ok(Self {
            database_url,
            jwt: JwtConfig { secret },
        })
    }
}
