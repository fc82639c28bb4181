use super::*;

pub(crate) enum Event {
  Auth {
    result: Result<AuthStatus>,
  },
  Deleted {
    result: Result<()>,
  },
  Page {
    request_id: u64,
    result: Result<CommentPage>,
  },
  Posted {
    result: Result<()>,
  },
}
