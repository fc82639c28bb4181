#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
  CancelCompose,
  CancelSearch,
  ClearSearch,
  CycleLanguage,
  CycleLanguageBack,
  CyclePageSize,
  DeleteAll,
  DeleteSelected,
  HideHelp,
  NextPage,
  None,
  OpenAuthLink,
  PreviousPage,
  Quit,
  Refresh,
  ShowHelp,
  StartCompose,
  StartSearch,
  SubmitCompose,
  SubmitSearch,
}
