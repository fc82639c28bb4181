use {super::*, anyhow::Context};

#[derive(Clone)]
pub(crate) struct Client {
  base_url: String,
  client: reqwest::Client,
}

impl Client {
  const BASE_URL_VAR: &str = "GUESTBOOK_URL";

  const DEFAULT_BASE_URL: &str = "http://localhost:8080";

  pub(crate) fn absolute_url(&self, link: &str) -> String {
    if link.starts_with("http://") || link.starts_with("https://") {
      link.to_string()
    } else {
      format!("{}{link}", self.base_url)
    }
  }

  pub(crate) async fn delete(&self, target: DeleteTarget) -> Result {
    self
      .client
      .post(format!("{}/delete-data", self.base_url))
      .query(&[("whichData", target.query_value())])
      .send()
      .await?
      .error_for_status()
      .context("comment deletion was rejected")?;

    Ok(())
  }

  pub(crate) async fn fetch_auth(&self) -> Result<AuthStatus> {
    Ok(
      self
        .client
        .get(format!("{}/authenticate", self.base_url))
        .send()
        .await?
        .error_for_status()?
        .json::<AuthStatus>()
        .await
        .context("could not read authentication status")?,
    )
  }

  pub(crate) async fn fetch_page(
    &self,
    request: &PageRequest,
  ) -> Result<CommentPage> {
    Ok(
      self
        .client
        .get(format!("{}/data", self.base_url))
        .query(&request.query())
        .send()
        .await?
        .error_for_status()?
        .json::<CommentPage>()
        .await
        .context("could not read comment listing")?,
    )
  }

  pub(crate) fn from_env() -> Self {
    let base_url = env::var(Self::BASE_URL_VAR)
      .ok()
      .map(|value| value.trim().trim_end_matches('/').to_string())
      .filter(|value| !value.is_empty())
      .unwrap_or_else(|| Self::DEFAULT_BASE_URL.to_string());

    Self {
      base_url,
      client: reqwest::Client::new(),
    }
  }

  pub(crate) async fn post_comment(&self, author: &str, text: &str) -> Result {
    self
      .client
      .post(format!("{}/data", self.base_url))
      .form(&[("author", author), ("text-input", text)])
      .send()
      .await?
      .error_for_status()
      .context("comment submission was rejected")?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_client() -> Client {
    Client {
      base_url: "http://localhost:8080".to_string(),
      client: reqwest::Client::new(),
    }
  }

  #[test]
  fn absolute_url_resolves_relative_links() {
    assert_eq!(
      sample_client().absolute_url("/login"),
      "http://localhost:8080/login"
    );
  }

  #[test]
  fn absolute_url_keeps_absolute_links() {
    assert_eq!(
      sample_client().absolute_url("https://example.com/login"),
      "https://example.com/login"
    );
  }
}
