pub mod retry {
    use std::time::Duration;
    pub const RETRY_COUNT: u32 = 3;
    pub const RETRY_BASE_DELAY: Duration = Duration::from_millis(500);
}
pub mod client {
    pub const BASE_URL: &str = "https://codeforces.com";
    pub const FIREFOX_UA: &str =
        "Mozilla/5.0 (X11; Linux x86_64; rv:78.0) Gecko/20100101 Firefox/78.0";
}
