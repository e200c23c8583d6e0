/// Registry endpoint that renders valuation result pages.
pub const DEFAULT_BASE_URL: &str = "http://www.vurdering.skat.dk/borger/ejendomsvurdering/Vis.do";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScraperConfig {
    pub base_url: String,
    pub request_timeout_secs: u64,
    pub connect_timeout_secs: u64,
    pub user_agent: String,
    /// Additional attempts after the first failure on transient transport errors.
    pub max_retries: u32,
    pub retry_backoff_base_ms: u64,
    /// Upper bound on pages followed by one driver.
    pub max_pages: usize,
}

impl Default for ScraperConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_owned(),
            request_timeout_secs: 30,
            connect_timeout_secs: 10,
            user_agent: "vurdering/0.1 (property-valuation)".to_owned(),
            max_retries: 2,
            retry_backoff_base_ms: 1_000,
            max_pages: 1_000,
        }
    }
}
