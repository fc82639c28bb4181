#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum DeleteTarget {
  All,
  One(u64),
}

impl DeleteTarget {
  pub(crate) fn query_value(self) -> String {
    match self {
      Self::All => "all".to_string(),
      Self::One(id) => id.to_string(),
    }
  }
}
