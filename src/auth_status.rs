use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct AuthStatus {
  pub(crate) is_logged_in: bool,
  pub(crate) log_in_link: Option<String>,
  pub(crate) log_out_link: Option<String>,
  pub(crate) username: String,
}

impl AuthStatus {
  pub(crate) fn auth_link(&self) -> Option<&str> {
    if self.is_logged_in {
      self.log_out_link.as_deref()
    } else {
      self.log_in_link.as_deref()
    }
  }

  pub(crate) fn display_name(&self) -> &str {
    let trimmed = self.username.trim();

    if trimmed.is_empty() { "anonymous" } else { trimmed }
  }
}
