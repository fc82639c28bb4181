use super::*;

#[derive(Clone, Debug)]
pub(crate) enum Effect {
  Delete {
    target: DeleteTarget,
  },
  FetchAuth,
  FetchPage {
    request: PageRequest,
    request_id: u64,
  },
  OpenUrl {
    url: String,
  },
  PostComment {
    author: String,
    text: String,
  },
}
