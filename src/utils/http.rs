use once_cell::sync::Lazy;
use reqwest::Client;
use std::time::Duration;

const USER_AGENT: &str = concat!("SoulMate/", env!("CARGO_PKG_VERSION"));

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(8)
        .tcp_keepalive(Duration::from_secs(60))
        .connect_timeout(Duration::from_secs(10))
        .timeout(Duration::from_secs(30)) // 30 second timeout for API requests
        .build()
        .unwrap_or_else(|e| {
            log::error!("[Http] Failed to build API client, using defaults: {}", e);
            Client::new()
        })
});

// Client for downloading audio - long total timeout, per-read timeout
static STREAMING_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent(USER_AGENT)
        .pool_max_idle_per_host(2)
        .tcp_keepalive(Duration::from_secs(60))
        .timeout(Duration::from_secs(600)) // 10 minute total timeout (for long tracks)
        .read_timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|e| {
            log::error!("[Http] Failed to build streaming client, using defaults: {}", e);
            Client::new()
        })
});

/// Shared API client. `reqwest::Client` is reference counted, so clones share the pool.
pub fn client() -> Client {
    CLIENT.clone()
}

pub fn streaming_client() -> &'static Client {
    &STREAMING_CLIENT
}
