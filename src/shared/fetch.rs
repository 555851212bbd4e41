use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::OnceLock;
use std::time::Duration;
use url::Url;
use crate::shared::error::FetchError;

/// Retrieves a reference page. Collectors only use the result for logging.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError>;
}

pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &Url) -> Result<String, FetchError> {
        let body = self
            .client
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        Ok(body)
    }
}

/// Used when network access is switched off; every fetch fails.
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineFetcher;

#[async_trait]
impl PageFetcher for OfflineFetcher {
    async fn fetch(&self, _url: &Url) -> Result<String, FetchError> {
        Err(FetchError::Offline)
    }
}

pub fn page_title(html: &str) -> Option<String> {
    static TITLE_RE: OnceLock<Regex> = OnceLock::new();
    let re = TITLE_RE.get_or_init(|| Regex::new(r"(?is)<title[^>]*>(.*?)</title>").unwrap());

    let raw = re.captures(html)?.get(1)?.as_str();
    let title = raw.split_whitespace().collect::<Vec<_>>().join(" ");
    if title.is_empty() {
        None
    } else {
        Some(title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_and_collapses_title() {
        let html = "<html><head><TITLE lang=\"en\">\n  HIV and\n  Incarceration </TITLE></head></html>";
        assert_eq!(page_title(html).as_deref(), Some("HIV and Incarceration"));
    }

    #[test]
    fn missing_or_blank_title() {
        assert_eq!(page_title("<html><body>no head</body></html>"), None);
        assert_eq!(page_title("<title>   </title>"), None);
    }

    #[tokio::test]
    async fn offline_fetcher_always_fails() {
        let url = Url::parse("https://www.cdc.gov/hiv/").unwrap();
        let err = OfflineFetcher.fetch(&url).await.unwrap_err();
        assert!(matches!(err, FetchError::Offline));
    }
}
