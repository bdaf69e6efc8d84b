/// Client configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the entry service, always ending in `/`
    /// (default: `http://localhost:4000/`).
    pub base_url: String,
    /// Entries requested per page (default: `10`).
    pub page_size: u32,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:4000/".into(),
            page_size: 10,
        }
    }
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: normalize_base_url(base_url.into()),
            ..Self::default()
        }
    }

    /// Load from `API_BASE_URL` and `PAGE_SIZE`, falling back to defaults
    /// for unset or unparsable values.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = std::env::var("API_BASE_URL")
            .map(normalize_base_url)
            .unwrap_or(defaults.base_url);
        let page_size = std::env::var("PAGE_SIZE")
            .ok()
            .and_then(|v| v.trim().parse().ok())
            .filter(|n| *n > 0)
            .unwrap_or(defaults.page_size);
        Self {
            base_url,
            page_size,
        }
    }
}

fn normalize_base_url(mut url: String) -> String {
    if !url.ends_with('/') {
        url.push('/');
    }
    url
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gets_trailing_slash() {
        assert_eq!(
            ClientConfig::new("http://api.test").base_url,
            "http://api.test/"
        );
        assert_eq!(
            ClientConfig::new("http://api.test/v/").base_url,
            "http://api.test/v/"
        );
    }
}
