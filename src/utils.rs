use {
  super::*,
  chrono::{Local, LocalResult, TimeZone, Utc},
};

pub(crate) fn clean_text(text: &str) -> String {
  let mut cleaned = String::with_capacity(text.len());
  let mut inside_tag = false;

  for ch in text.chars() {
    match ch {
      '<' => {
        inside_tag = true;
        cleaned.push(' ');
      }
      '>' => {
        inside_tag = false;
      }
      _ if inside_tag => {}
      _ if ch.is_control() => cleaned.push(' '),
      _ => cleaned.push(ch),
    }
  }

  let decoded = html_escape::decode_html_entities(&cleaned);

  decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub(crate) fn format_timestamp(ms: i64) -> String {
  format_timestamp_in(ms, &Local)
}

pub(crate) fn format_timestamp_in<Tz>(ms: i64, zone: &Tz) -> String
where
  Tz: TimeZone,
  Tz::Offset: std::fmt::Display,
{
  match Utc.timestamp_millis_opt(ms) {
    LocalResult::Single(instant) => instant
      .with_timezone(zone)
      .format("%b %-d, %-I:%M %p")
      .to_string(),
    _ => "unknown time".to_string(),
  }
}

pub(crate) fn truncate(text: &str, max_chars: usize) -> String {
  if text.chars().count() <= max_chars {
    return text.to_string();
  }

  let mut result = String::new();

  for (idx, ch) in text.chars().enumerate() {
    if idx >= max_chars {
      result.push_str("...");
      break;
    }

    result.push(ch);
  }

  result.trim_end().to_string()
}

pub(crate) fn wrap_text(text: &str, width: usize) -> Vec<String> {
  if text.is_empty() {
    return Vec::new();
  }

  let mut lines = Vec::new();
  let mut current = String::new();
  let mut current_width = 0;

  for word in text.split_whitespace() {
    let word_width = word.chars().count();

    if current.is_empty() {
      current.push_str(word);
      current_width = word_width;
    } else if current_width + 1 + word_width <= width {
      current.push(' ');
      current.push_str(word);
      current_width += 1 + word_width;
    } else {
      lines.push(current);
      current = word.to_string();
      current_width = word_width;
    }
  }

  if !current.is_empty() {
    lines.push(current);
  }

  if lines.is_empty() {
    vec![text.to_string()]
  } else {
    lines
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn clean_text_strips_markup_and_decodes_entities() {
    assert_eq!(
      clean_text("<b>Hello</b> &amp; <i>goodbye</i>"),
      "Hello & goodbye"
    );
  }

  #[test]
  fn clean_text_replaces_control_characters() {
    assert_eq!(clean_text("line one\nline two\x1b[31m"), "line one line two [31m");
  }

  #[test]
  fn clean_text_collapses_whitespace() {
    assert_eq!(clean_text("  spaced \t out  "), "spaced out");
  }

  #[test]
  fn format_timestamp_in_renders_the_epoch() {
    assert_eq!(format_timestamp_in(0, &Utc), "Jan 1, 12:00 AM");
  }

  #[test]
  fn format_timestamp_in_renders_an_afternoon_instant() {
    assert_eq!(
      format_timestamp_in(1_592_401_704_803, &Utc),
      "Jun 17, 1:48 PM"
    );
  }

  #[test]
  fn format_timestamp_in_rejects_out_of_range_input() {
    assert_eq!(format_timestamp_in(i64::MAX, &Utc), "unknown time");
  }

  #[test]
  fn truncate_returns_original_when_within_limit() {
    assert_eq!(truncate("short", 10), "short");
  }

  #[test]
  fn truncate_appends_ellipsis_when_exceeding_limit() {
    assert_eq!(truncate("This is a longer line", 4), "This...");
  }

  #[test]
  fn wrap_text_returns_empty_for_empty_input() {
    assert_eq!(wrap_text("", 10), Vec::<String>::new());
  }

  #[test]
  fn wrap_text_wraps_longer_text() {
    assert_eq!(
      wrap_text("hello brave new world", 11),
      vec!["hello brave".to_string(), "new world".to_string()]
    );
  }
}
