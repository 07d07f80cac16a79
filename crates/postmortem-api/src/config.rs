use std::env;

/// Environment-derived configuration, resolved once at startup and handed to
/// the gateway constructors. Core logic never reads the process environment.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub ffbridge_base_url: String,
    pub acbl_api_base_url: String,
    pub acbl_club_base_url: String,
    pub acbl_api_key: Option<String>,
}

impl ApiConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8000);

        Self {
            port,
            ffbridge_base_url: env::var("FFBRIDGE_BASE_URL")
                .unwrap_or_else(|_| "https://api-lancelot.ffbridge.fr".to_string()),
            acbl_api_base_url: env::var("ACBL_API_BASE_URL")
                .unwrap_or_else(|_| "https://api.acbl.org".to_string()),
            acbl_club_base_url: env::var("ACBL_CLUB_BASE_URL")
                .unwrap_or_else(|_| "https://my.acbl.org".to_string()),
            acbl_api_key: env::var("ACBL_API_KEY").ok(),
        }
    }
}
