use super::*;

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub(crate) struct CommentPage {
  pub(crate) comment_data: Vec<Comment>,
  pub(crate) current_user_id: String,
  pub(crate) page_token: u64,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_listing_response() {
    let page = serde_json::from_str::<CommentPage>(
      r#"{
        "pageToken": 10,
        "currentUserId": "ADMIN",
        "commentData": [
          {"id": 1, "userId": "1", "username": "a", "email": "a@example.com",
           "text": "first", "topic": "", "sentiment": "NEUTRAL", "time": 0}
        ]
      }"#,
    )
    .unwrap();

    assert_eq!(page.page_token, 10);
    assert_eq!(page.current_user_id, "ADMIN");
    assert_eq!(page.comment_data.len(), 1);
  }

  #[test]
  fn tolerates_empty_response() {
    let page = serde_json::from_str::<CommentPage>("{}").unwrap();

    assert_eq!(page.page_token, 0);
    assert!(page.current_user_id.is_empty());
    assert!(page.comment_data.is_empty());
  }
}
