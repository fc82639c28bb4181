use super::*;

#[derive(Default)]
pub(crate) struct CommentView {
  offset: usize,
  rows: Vec<CommentRow>,
  search_active: bool,
  selected: usize,
}

impl CommentView {
  pub(crate) fn empty_message(&self) -> &'static str {
    if self.search_active {
      NO_RESULTS_MESSAGE
    } else {
      NO_COMMENTS_MESSAGE
    }
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent, page: usize) -> Command {
    let modifiers = key.modifiers;

    match key.code {
      KeyCode::Char('q' | 'Q') | KeyCode::Esc => Command::Quit,
      KeyCode::Char('?') => Command::ShowHelp,
      KeyCode::Down | KeyCode::Char('j') => {
        self.select_next();
        Command::None
      }
      KeyCode::Up | KeyCode::Char('k') => {
        self.select_previous();
        Command::None
      }
      KeyCode::PageDown => {
        self.page_down(page);
        Command::None
      }
      KeyCode::PageUp => {
        self.page_up(page);
        Command::None
      }
      KeyCode::Char('d') if modifiers.contains(KeyModifiers::CONTROL) => {
        self.page_down(page);
        Command::None
      }
      KeyCode::Char('u') if modifiers.contains(KeyModifiers::CONTROL) => {
        self.page_up(page);
        Command::None
      }
      KeyCode::Home => {
        self.set_selected(0);
        Command::None
      }
      KeyCode::End => {
        if !self.rows.is_empty() {
          self.set_selected(self.rows.len().saturating_sub(1));
        }

        Command::None
      }
      KeyCode::Right | KeyCode::Char('n') => Command::NextPage,
      KeyCode::Left | KeyCode::Char('p') => Command::PreviousPage,
      KeyCode::Char('/') => Command::StartSearch,
      KeyCode::Char('x') => Command::ClearSearch,
      KeyCode::Char('c') => Command::StartCompose,
      KeyCode::Char('d') => Command::DeleteSelected,
      KeyCode::Char('D') => Command::DeleteAll,
      KeyCode::Char('s') => Command::CyclePageSize,
      KeyCode::Char('l') => Command::CycleLanguage,
      KeyCode::Char('L') => Command::CycleLanguageBack,
      KeyCode::Char('r') => Command::Refresh,
      KeyCode::Char('o') => Command::OpenAuthLink,
      _ => Command::None,
    }
  }

  pub(crate) fn is_empty(&self) -> bool {
    self.rows.is_empty()
  }

  pub(crate) fn new(page: &CommentPage, search_active: bool) -> Self {
    let rows = page
      .comment_data
      .iter()
      .map(|comment| CommentRow::new(&page.current_user_id, comment))
      .collect();

    Self {
      offset: 0,
      rows,
      search_active,
      selected: 0,
    }
  }

  pub(crate) fn offset(&self) -> usize {
    let selected = self.selected_index().unwrap_or(0);

    if self.rows.is_empty() {
      0
    } else {
      self.offset.min(selected)
    }
  }

  pub(crate) fn page_down(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);

    self.set_selected(self.selected.saturating_add(step));
  }

  pub(crate) fn page_up(&mut self, amount: usize) {
    let step = amount.saturating_sub(1).max(1);

    self.set_selected(self.selected.saturating_sub(step));
  }

  pub(crate) fn rows(&self) -> &[CommentRow] {
    &self.rows
  }

  fn select_next(&mut self) {
    self.set_selected(self.selected.saturating_add(1));
  }

  fn select_previous(&mut self) {
    self.set_selected(self.selected.saturating_sub(1));
  }

  pub(crate) fn selected_index(&self) -> Option<usize> {
    if self.rows.is_empty() {
      None
    } else {
      Some(self.selected.min(self.rows.len().saturating_sub(1)))
    }
  }

  pub(crate) fn selected_row(&self) -> Option<&CommentRow> {
    self.selected_index().and_then(|index| self.rows.get(index))
  }

  pub(crate) fn set_offset(&mut self, offset: usize) {
    if self.rows.is_empty() {
      self.offset = 0;
    } else {
      self.offset = offset.min(self.rows.len().saturating_sub(1));
    }
  }

  pub(crate) fn set_selected(&mut self, index: usize) {
    if self.rows.is_empty() {
      self.selected = 0;
    } else {
      self.selected = index.min(self.rows.len().saturating_sub(1));
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn sample_page(count: u64) -> CommentPage {
    let comment_data = (0..count)
      .map(|id| Comment {
        email: format!("user{id}@example.com"),
        id,
        sentiment: Sentiment::Neutral,
        text: format!("comment {id}"),
        time: 0,
        topic: String::new(),
        user_id: id.to_string(),
        username: format!("user{id}"),
      })
      .collect();

    CommentPage {
      comment_data,
      current_user_id: "0".to_string(),
      page_token: 0,
    }
  }

  #[test]
  fn empty_message_depends_on_search_activity() {
    let unsearched = CommentView::new(&sample_page(0), false);
    assert_eq!(unsearched.empty_message(), "Be the first to leave a comment!");

    let searched = CommentView::new(&sample_page(0), true);
    assert_eq!(searched.empty_message(), "Sorry, we couldn't find anything!");
  }

  #[test]
  fn selection_is_clamped_to_row_count() {
    let mut view = CommentView::new(&sample_page(3), false);

    view.set_selected(10);
    assert_eq!(view.selected_index(), Some(2));

    view.set_offset(10);
    assert_eq!(view.offset(), 2);
  }

  #[test]
  fn selected_index_is_none_when_empty() {
    let view = CommentView::new(&sample_page(0), false);

    assert_eq!(view.selected_index(), None);
    assert!(view.selected_row().is_none());
  }

  #[test]
  fn paging_moves_selection_by_page_height() {
    let mut view = CommentView::new(&sample_page(10), false);

    view.page_down(5);
    assert_eq!(view.selected_index(), Some(4));

    view.page_up(3);
    assert_eq!(view.selected_index(), Some(2));
  }
}
