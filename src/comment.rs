use super::*;

#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Comment {
  #[serde(default)]
  pub(crate) email: String,
  pub(crate) id: u64,
  #[serde(default)]
  pub(crate) sentiment: Sentiment,
  pub(crate) text: String,
  pub(crate) time: i64,
  #[serde(default)]
  pub(crate) topic: String,
  #[serde(default)]
  pub(crate) user_id: String,
  #[serde(default)]
  pub(crate) username: String,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn deserializes_server_fields() {
    let comment = serde_json::from_str::<Comment>(
      r#"{
        "id": 3,
        "userId": "1",
        "username": "maya",
        "email": "maya@example.com",
        "text": "Lovely site!",
        "topic": "design",
        "sentiment": "POSITIVE",
        "time": 1592401704803
      }"#,
    )
    .unwrap();

    assert_eq!(comment.id, 3);
    assert_eq!(comment.user_id, "1");
    assert_eq!(comment.sentiment, Sentiment::Positive);
    assert_eq!(comment.topic, "design");
    assert_eq!(comment.time, 1_592_401_704_803);
  }

  #[test]
  fn tolerates_missing_optional_fields() {
    let comment =
      serde_json::from_str::<Comment>(r#"{"id": 1, "text": "hi", "time": 0}"#)
        .unwrap();

    assert_eq!(comment.sentiment, Sentiment::Neutral);
    assert!(comment.topic.is_empty());
    assert!(comment.user_id.is_empty());
  }
}
