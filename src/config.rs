#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub media_root: String,
    pub media_base_url: String,
}

impl Config {
    pub fn init() -> Config {
        let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let port = std::env::var("PORT")
            .ok()
            .and_then(|port| port.parse::<u16>().ok())
            .unwrap_or(8000);

        let media_root = std::env::var("MEDIA_ROOT").unwrap_or_else(|_| "media".to_string());
        let media_base_url = std::env::var("MEDIA_BASE_URL")
            .unwrap_or_else(|_| format!("http://localhost:{}/media", port));

        Config {
            database_url,
            port,
            media_root,
            media_base_url,
        }
    }
}
