use tracing::debug;

use crate::config::ApiConfig;
use crate::error::Result;

/// Blocking HTTP client shared by the upstream APIs.
#[derive(Clone)]
pub struct HttpClient {
    agent: ureq::Agent,
    user_agent: String,
}

impl HttpClient {
    pub fn new(config: &ApiConfig) -> Self {
        let agent_config = ureq::Agent::config_builder()
            .timeout_global(Some(config.timeout()))
            .build();
        let agent: ureq::Agent = agent_config.into();

        Self {
            agent,
            user_agent: config.user_agent.clone(),
        }
    }

    /// GET `url` and return the body. Non-2xx statuses are errors.
    pub fn get(&self, url: &str) -> Result<String> {
        debug!("GET {}", url);

        let mut response = self
            .agent
            .get(url)
            .header("User-Agent", &self.user_agent)
            .header("Accept", "application/json")
            .call()?;

        debug!("GET {} -> {}", url, response.status());
        let text = response.body_mut().read_to_string()?;
        Ok(text)
    }
}

/// Join `base` and `path`, then append query pairs in order.
///
/// Keys may repeat (`status=2&status=3`); values are percent-encoded.
pub fn build_url(base: &str, path: &str, params: &[(&str, String)]) -> String {
    let mut url = format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    );

    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(&urlencoding::encode(value));
    }

    url
}
