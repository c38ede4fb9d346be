#[derive(Clone)]
pub struct AppConfig {
    pub api_base_url: String,
    pub api_key: String,
    pub logistics_api_key: Option<String>,
    pub log_level: String,
    pub lang: Option<String>,
    pub request_timeout_secs: u64,
    pub prefetch_timeout_secs: u64,
    pub page_size: u32,
    pub category_fetch_cap: usize,
    pub product_scan_cap: usize,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &"[redacted]")
            .field(
                "logistics_api_key",
                &self.logistics_api_key.as_ref().map(|_| "[redacted]"),
            )
            .field("log_level", &self.log_level)
            .field("lang", &self.lang)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("prefetch_timeout_secs", &self.prefetch_timeout_secs)
            .field("page_size", &self.page_size)
            .field("category_fetch_cap", &self.category_fetch_cap)
            .field("product_scan_cap", &self.product_scan_cap)
            .finish()
    }
}
