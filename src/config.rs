use std::env;
use dotenvy::dotenv;

#[derive(Clone)]
pub struct Config {
    pub server_addr: String,

    // Rate limiting
    pub rate_api_per_min: u32,
    pub rate_chat_per_min: u32,

    // Simulated assistant latency
    pub chat_reply_delay_ms: u64,
    pub analysis_delay_ms: u64,

    pub api_prefix: String,
}

impl Config {
    pub fn from_env() -> Self {
        dotenv().ok();

        Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or_else(|_| "127.0.0.1:8080".to_string()),

            rate_api_per_min: env::var("RATE_API_PER_MIN")
                .unwrap_or_else(|_| "1000".to_string())
                .parse()
                .unwrap(),
            rate_chat_per_min: env::var("RATE_CHAT_PER_MIN")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .unwrap(),

            chat_reply_delay_ms: env::var("CHAT_REPLY_DELAY_MS")
                .unwrap_or_else(|_| "1500".to_string()) // matches the typing indicator
                .parse()
                .unwrap(),
            analysis_delay_ms: env::var("ANALYSIS_DELAY_MS")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .unwrap(),

            api_prefix: env::var("API_PREFIX").unwrap_or_else(|_| "/api".to_string()),
        }
    }
}
