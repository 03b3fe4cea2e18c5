use super::*;

#[derive(Clone)]
pub(crate) struct Client {
  client: reqwest::Client,
  endpoint: String,
}

impl Default for Client {
  fn default() -> Self {
    Self::new(Self::DEFAULT_ENDPOINT)
  }
}

impl Client {
  pub(crate) const DEFAULT_ENDPOINT: &str =
    "https://hn.algolia.com/api/v1/search";

  pub(crate) fn endpoint(&self) -> &str {
    &self.endpoint
  }

  pub(crate) fn new(endpoint: impl Into<String>) -> Self {
    Self {
      client: reqwest::Client::new(),
      endpoint: endpoint.into(),
    }
  }

  pub(crate) async fn search_stories(&self, query: &str) -> Result<Vec<Story>> {
    debug!(endpoint = %self.endpoint, query, "searching stories");

    let response = self
      .client
      .get(&self.endpoint)
      .query(&[("query", query)])
      .send()
      .await
      .with_context(|| format!("could not reach {}", self.endpoint))?
      .error_for_status()?;

    let stories = response
      .json::<SearchResponse>()
      .await
      .context("could not decode search response")?
      .hits;

    debug!(count = stories.len(), query, "received stories");

    Ok(stories)
  }
}
