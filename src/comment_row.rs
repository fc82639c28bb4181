use super::*;

pub(crate) struct CommentRow {
  pub(crate) body: String,
  pub(crate) can_delete: bool,
  pub(crate) email: String,
  pub(crate) id: u64,
  pub(crate) posted: String,
  pub(crate) sentiment: Sentiment,
  pub(crate) topic: Option<String>,
  pub(crate) username: String,
}

impl CommentRow {
  pub(crate) fn header(&self) -> String {
    format!("{} <{}> {}", self.username, self.email, self.sentiment.glyph())
  }

  pub(crate) fn new(current_user_id: &str, comment: &Comment) -> Self {
    let can_delete =
      current_user_id == comment.user_id || current_user_id == ADMIN_USER_ID;

    let topic = {
      let cleaned = clean_text(&comment.topic);

      (!cleaned.is_empty()).then_some(cleaned)
    };

    let username = {
      let cleaned = clean_text(&comment.username);

      if cleaned.is_empty() {
        "Anonymous".to_string()
      } else {
        cleaned
      }
    };

    Self {
      body: clean_text(&comment.text),
      can_delete,
      email: clean_text(&comment.email),
      id: comment.id,
      posted: format_timestamp(comment.time),
      sentiment: comment.sentiment,
      topic,
      username,
    }
  }

  pub(crate) fn topic_line(&self) -> Option<String> {
    self.topic.as_ref().map(|topic| format!("Topic: {topic}"))
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_comment(sentiment: Sentiment) -> Comment {
    Comment {
      email: "maya@example.com".to_string(),
      id: 7,
      sentiment,
      text: "Lovely site!".to_string(),
      time: 0,
      topic: String::new(),
      user_id: "1".to_string(),
      username: "maya".to_string(),
    }
  }

  #[test]
  fn header_carries_the_sentiment_glyph() {
    let positive = CommentRow::new("", &sample_comment(Sentiment::Positive));
    assert!(positive.header().contains("😊"));

    let negative = CommentRow::new("", &sample_comment(Sentiment::Negative));
    assert!(negative.header().contains("☹"));

    let neutral = CommentRow::new("", &sample_comment(Sentiment::Neutral));
    assert!(neutral.header().contains("😐"));
  }

  #[test]
  fn header_shows_username_over_email() {
    let row = CommentRow::new("", &sample_comment(Sentiment::Neutral));

    assert!(row.header().starts_with("maya <maya@example.com>"));
  }

  #[test]
  fn owner_may_delete() {
    let row = CommentRow::new("1", &sample_comment(Sentiment::Neutral));

    assert!(row.can_delete);
  }

  #[test]
  fn admin_may_always_delete() {
    let row = CommentRow::new("ADMIN", &sample_comment(Sentiment::Neutral));

    assert!(row.can_delete);
  }

  #[test]
  fn other_viewers_may_not_delete() {
    let row = CommentRow::new("2", &sample_comment(Sentiment::Neutral));

    assert!(!row.can_delete);
  }

  #[test]
  fn topic_line_appears_only_for_nonempty_topics() {
    let mut comment = sample_comment(Sentiment::Neutral);
    let bare = CommentRow::new("", &comment);
    assert_eq!(bare.topic_line(), None);

    comment.topic = "design".to_string();
    let tagged = CommentRow::new("", &comment);
    assert_eq!(tagged.topic_line(), Some("Topic: design".to_string()));
  }

  #[test]
  fn markup_in_user_fields_is_neutralized() {
    let mut comment = sample_comment(Sentiment::Neutral);
    comment.username = "<script>evil</script>maya".to_string();
    comment.text = "nice &amp; tidy".to_string();

    let row = CommentRow::new("", &comment);

    assert_eq!(row.username, "evil maya");
    assert_eq!(row.body, "nice & tidy");
  }

  #[test]
  fn blank_usernames_fall_back_to_anonymous() {
    let mut comment = sample_comment(Sentiment::Neutral);
    comment.username = "   ".to_string();

    let row = CommentRow::new("", &comment);

    assert_eq!(row.username, "Anonymous");
  }
}
