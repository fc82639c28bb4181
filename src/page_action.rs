#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum PageAction {
  Next,
  None,
  Previous,
}

impl PageAction {
  pub(crate) fn as_str(self) -> &'static str {
    match self {
      Self::Next => "next",
      Self::None => "none",
      Self::Previous => "previous",
    }
  }
}
