use super::*;

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub(crate) enum Sentiment {
  Negative,
  #[default]
  Neutral,
  Positive,
}

impl<'de> Deserialize<'de> for Sentiment {
  fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
  where
    D: Deserializer<'de>,
  {
    let label = String::deserialize(deserializer)?;

    Ok(Self::from_label(&label))
  }
}

impl Sentiment {
  pub(crate) fn from_label(label: &str) -> Self {
    match label {
      "NEGATIVE" => Self::Negative,
      "POSITIVE" => Self::Positive,
      _ => Self::Neutral,
    }
  }

  pub(crate) fn glyph(self) -> &'static str {
    match self {
      Self::Negative => "☹",
      Self::Neutral => "😐",
      Self::Positive => "😊",
    }
  }
}
