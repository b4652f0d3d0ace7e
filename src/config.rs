use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// CHZZK service API base URL
    #[serde(default = "default_chzzk_api_url")]
    pub chzzk_api_url: String,

    /// Naver game (lounge) API base URL, used for auto-complete
    #[serde(default = "default_chzzk_game_api_url")]
    pub chzzk_game_api_url: String,

    /// Naver `NID_AUT` session cookie
    #[serde(default)]
    pub chzzk_nid_aut: Option<String>,

    /// Naver `NID_SES` session cookie
    #[serde(default)]
    pub chzzk_nid_ses: Option<String>,

    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

pub(crate) fn default_chzzk_api_url() -> String {
    "https://api.chzzk.naver.com".to_string()
}

pub(crate) fn default_chzzk_game_api_url() -> String {
    "https://comm-api.game.naver.com/nng_main".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        envy::from_env::<Config>().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))
    }

    /// Both auth cookies, if both are set
    pub fn auth(&self) -> Option<(String, String)> {
        match (&self.chzzk_nid_aut, &self.chzzk_nid_ses) {
            (Some(aut), Some(ses)) => Some((aut.clone(), ses.clone())),
            _ => None,
        }
    }
}
