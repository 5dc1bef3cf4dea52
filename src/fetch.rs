use std::time::Duration;

use reqwest::blocking::Client;

use crate::error::Result;

pub const USER_AGENT: &str = "komootgpx";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Downloads tour pages. One request per call, never retried.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// `None` disables the request timeout.
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Fetcher { client })
    }

    pub fn fetch(&self, url: &str) -> Result<String> {
        debug!("GET {url}");
        let response = self.client.get(url).send()?;
        info!("{url} responded with {}", response.status());
        let body = response.error_for_status()?.text()?;
        debug!("received {} bytes", body.len());
        Ok(body)
    }
}

pub fn fetch(url: &str, timeout: Option<Duration>) -> Result<String> {
    Fetcher::new(timeout)?.fetch(url)
}
