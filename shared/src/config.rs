use anyhow::Result;

pub struct AppConfig {
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub server: ServerConfig,
}

impl AppConfig {
    pub fn new() -> Result<Self> {
        let database = DatabaseConfig {
            host: std::env::var("DATABASE_HOST")?,
            port: std::env::var("DATABASE_PORT")?.parse()?,
            username: std::env::var("DATABASE_USERNAME")?,
            password: std::env::var("DATABASE_PASSWORD")?,
            database: std::env::var("DATABASE_NAME")?,
        };
        let auth = AuthConfig {
            token_secret: std::env::var("ACCESS_TOKEN_SECRET")?,
            token_ttl: std::env::var("ACCESS_TOKEN_TTL")
                .ok()
                .and_then(|ttl| ttl.parse().ok())
                .unwrap_or(3600),
        };
        let server = ServerConfig {
            port: std::env::var("PORT")
                .ok()
                .and_then(|port| port.parse().ok())
                .unwrap_or(5000),
        };
        Ok(Self {
            database,
            auth,
            server,
        })
    }
}

pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

pub struct AuthConfig {
    pub token_secret: String,
    /// Validity window of an issued credential, in seconds.
    pub token_ttl: i64,
}

pub struct ServerConfig {
    pub port: u16,
}
