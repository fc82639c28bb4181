use super::*;

#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct PageRequest {
  pub(crate) language: Option<&'static str>,
  pub(crate) number_to_display: usize,
  pub(crate) page_action: PageAction,
  pub(crate) page_token: u64,
  pub(crate) search: String,
}

impl PageRequest {
  pub(crate) fn query(&self) -> Vec<(&'static str, String)> {
    let mut pairs = vec![
      ("numberToDisplay", self.number_to_display.to_string()),
      ("pageAction", self.page_action.as_str().to_string()),
      ("pageToken", self.page_token.to_string()),
    ];

    let search = self.search.trim();

    if !search.is_empty() {
      pairs.push(("search", search.to_string()));
    }

    if let Some(code) = self.language {
      pairs.push(("language", code.to_string()));
    }

    pairs
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_request() -> PageRequest {
    PageRequest {
      language: None,
      number_to_display: 5,
      page_action: PageAction::None,
      page_token: 0,
      search: String::new(),
    }
  }

  #[test]
  fn query_always_carries_pagination_parameters() {
    let pairs = sample_request().query();

    assert_eq!(
      pairs,
      vec![
        ("numberToDisplay", "5".to_string()),
        ("pageAction", "none".to_string()),
        ("pageToken", "0".to_string()),
      ]
    );
  }

  #[test]
  fn query_includes_search_and_language_when_set() {
    let request = PageRequest {
      language: Some("FR"),
      number_to_display: 10,
      page_action: PageAction::Next,
      page_token: 20,
      search: "hello".to_string(),
    };

    let pairs = request.query();

    assert!(pairs.contains(&("pageAction", "next".to_string())));
    assert!(pairs.contains(&("pageToken", "20".to_string())));
    assert!(pairs.contains(&("search", "hello".to_string())));
    assert!(pairs.contains(&("language", "FR".to_string())));
  }

  #[test]
  fn query_omits_whitespace_only_search() {
    let request = PageRequest {
      search: "   ".to_string(),
      ..sample_request()
    };

    assert!(request.query().iter().all(|(name, _)| *name != "search"));
  }
}
