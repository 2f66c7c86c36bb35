#[derive(Clone)]
pub struct AppConfig {
    pub serpapi_api_key: String,
    pub serpapi_base_url: String,
    pub serpapi_engine: String,
    pub log_level: String,
    /// `None` leaves the HTTP client's own timeout behaviour untouched.
    pub request_timeout_secs: Option<u64>,
    pub user_agent: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("serpapi_api_key", &"[redacted]")
            .field("serpapi_base_url", &self.serpapi_base_url)
            .field("serpapi_engine", &self.serpapi_engine)
            .field("log_level", &self.log_level)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("user_agent", &self.user_agent)
            .finish()
    }
}
