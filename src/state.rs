use super::*;

pub(crate) struct State {
  auth: AuthStatus,
  compose: Option<ComposeInput>,
  help: HelpView,
  language_index: usize,
  list_height: usize,
  message: String,
  next_request_id: u64,
  page_size_index: usize,
  page_token: u64,
  pending_effects: Vec<Effect>,
  pending_request: Option<u64>,
  search: String,
  search_input: Option<SearchInput>,
  transient_message: Option<TransientMessage>,
  view: CommentView,
}

impl State {
  fn cancel_compose(&mut self) {
    if self.compose.take().is_some() && !self.help.is_visible() {
      self.message = BROWSE_STATUS.into();
    }
  }

  fn cancel_search(&mut self) {
    if let Some(input) = self.search_input.take() {
      self.message = input.message_backup;
    }
  }

  fn clear_search(&mut self) {
    if self.search.is_empty() {
      return;
    }

    self.search.clear();
    self.page_token = 0;

    self.refresh(PageAction::None);
  }

  pub(crate) fn compose(&self) -> Option<&ComposeInput> {
    self.compose.as_ref()
  }

  pub(crate) fn compose_command(&mut self, key: KeyEvent) -> Option<Command> {
    self.compose.as_mut().map(|compose| compose.handle_key(key))
  }

  fn cycle_language(&mut self, step: isize) {
    let count = Language::all().len();

    self.language_index = if step >= 0 {
      (self.language_index + 1) % count
    } else {
      (self.language_index + count - 1) % count
    };

    self.refresh(PageAction::None);
  }

  fn cycle_page_size(&mut self) {
    self.page_size_index = (self.page_size_index + 1) % PAGE_SIZES.len();

    self.refresh(PageAction::None);
  }

  fn delete_all(&mut self) {
    if !self.auth.is_logged_in {
      self.set_transient_message(
        "Please sign in to manage comments (press o).".to_string(),
      );

      return;
    }

    self.pending_effects.push(Effect::Delete {
      target: DeleteTarget::All,
    });
  }

  fn delete_selected(&mut self) {
    let Some((can_delete, id)) = self
      .view
      .selected_row()
      .map(|row| (row.can_delete, row.id))
    else {
      return;
    };

    if !can_delete {
      self.set_transient_message(
        "You can only delete your own comments.".to_string(),
      );

      return;
    }

    self.pending_effects.push(Effect::Delete {
      target: DeleteTarget::One(id),
    });
  }

  pub(crate) fn dispatch_command(
    &mut self,
    command: Command,
  ) -> Result<CommandDispatch> {
    debug_assert!(
      self.pending_effects.is_empty(),
      "command dispatch should start without pending effects"
    );

    let mut should_exit = false;

    match command {
      Command::Quit => {
        should_exit = true;
      }
      Command::ShowHelp => self.help.show(&mut self.message),
      Command::HideHelp => self.help.hide(&mut self.message),
      Command::StartSearch => self.start_search(),
      Command::CancelSearch => self.cancel_search(),
      Command::SubmitSearch => self.submit_search(),
      Command::ClearSearch => self.clear_search(),
      Command::StartCompose => self.start_compose(),
      Command::CancelCompose => self.cancel_compose(),
      Command::SubmitCompose => self.submit_compose(),
      Command::NextPage => self.refresh(PageAction::Next),
      Command::PreviousPage => self.refresh(PageAction::Previous),
      Command::Refresh => self.refresh(PageAction::None),
      Command::CyclePageSize => self.cycle_page_size(),
      Command::CycleLanguage => self.cycle_language(1),
      Command::CycleLanguageBack => self.cycle_language(-1),
      Command::DeleteSelected => self.delete_selected(),
      Command::DeleteAll => self.delete_all(),
      Command::OpenAuthLink => self.open_auth_link(),
      Command::None => {}
    }

    Ok(CommandDispatch {
      effects: std::mem::take(&mut self.pending_effects),
      should_exit,
    })
  }

  pub(crate) fn filters_line(&self) -> String {
    let account = if self.auth.is_logged_in {
      format!("signed in as {}", self.auth.display_name())
    } else {
      "signed out".to_string()
    };

    let search = if self.search.is_empty() {
      "no search".to_string()
    } else {
      format!("search \"{}\"", truncate(&self.search, 24))
    };

    format!(
      "{} per page • language {} • {search} • {account}",
      self.page_size(),
      self.language().label,
    )
  }

  pub(crate) fn handle_event(&mut self, event: Event) {
    match event {
      Event::Auth { result } => match result {
        Ok(auth) => self.auth = auth,
        Err(error) => {
          self.set_transient_message(format!(
            "Could not check sign-in status: {error}"
          ));
        }
      },
      Event::Deleted { result } => match result {
        Ok(()) => self.refresh(PageAction::None),
        Err(error) => {
          self.set_transient_message(format!("Could not delete: {error}"));
        }
      },
      Event::Page { request_id, result } => {
        if self.pending_request != Some(request_id) {
          return;
        }

        self.pending_request = None;

        match result {
          Ok(page) => {
            self.page_token = page.page_token;

            let search_active = !self.search.trim().is_empty();

            self.view = CommentView::new(&page, search_active);

            if !self.help.is_visible() {
              self.message = BROWSE_STATUS.into();
            }
          }
          Err(error) => {
            if !self.help.is_visible() {
              self.message = BROWSE_STATUS.into();
              self.set_transient_message(format!(
                "Could not load comments: {error}"
              ));
            }
          }
        }
      }
      Event::Posted { result } => match result {
        Ok(()) => {
          self.set_transient_message("Comment posted.".to_string());
          self.pending_effects.push(Effect::FetchAuth);
          self.refresh(PageAction::None);
        }
        Err(error) => {
          self
            .set_transient_message(format!("Could not post comment: {error}"));
        }
      },
    }
  }

  fn handle_search_key(&mut self, key: KeyEvent) -> Command {
    if self.search_input.is_none() {
      return Command::None;
    }

    match key.code {
      KeyCode::Esc => Command::CancelSearch,
      KeyCode::Enter => Command::SubmitSearch,
      KeyCode::Backspace => {
        if let Some(input) = self.search_input.as_mut() {
          input.buffer.pop();
        }

        self.update_search_message();

        Command::None
      }
      KeyCode::Char(ch) => {
        let modifiers = key.modifiers;

        if modifiers.contains(KeyModifiers::CONTROL)
          || modifiers.contains(KeyModifiers::ALT)
          || modifiers.contains(KeyModifiers::SUPER)
        {
          return Command::None;
        }

        if let Some(input) = self.search_input.as_mut() {
          input.buffer.push(ch);
        }

        self.update_search_message();

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn help(&self) -> &HelpView {
    &self.help
  }

  pub(crate) fn help_is_visible(&self) -> bool {
    self.help.is_visible()
  }

  pub(crate) fn language(&self) -> &'static Language {
    let languages = Language::all();

    languages
      .get(self.language_index)
      .unwrap_or_else(|| &languages[0])
  }

  pub(crate) fn list_height(&self) -> usize {
    self.list_height
  }

  pub(crate) fn message(&self) -> &str {
    &self.message
  }

  pub(crate) fn new(auth: AuthStatus, page: CommentPage) -> Self {
    let page_token = page.page_token;
    let view = CommentView::new(&page, false);

    Self {
      auth,
      compose: None,
      help: HelpView::new(),
      language_index: 0,
      list_height: 0,
      message: BROWSE_STATUS.into(),
      next_request_id: 0,
      page_size_index: 0,
      page_token,
      pending_effects: Vec::new(),
      pending_request: None,
      search: String::new(),
      search_input: None,
      transient_message: None,
      view,
    }
  }

  fn open_auth_link(&mut self) {
    let link = self.auth.auth_link().map(str::to_string);

    let Some(url) = link else {
      self.set_transient_message("No sign-in link is available.".to_string());

      return;
    };

    self.pending_effects.push(Effect::OpenUrl { url });
  }

  pub(crate) fn page_size(&self) -> usize {
    PAGE_SIZES
      .get(self.page_size_index)
      .copied()
      .unwrap_or(DEFAULT_PAGE_SIZE)
  }

  fn refresh(&mut self, page_action: PageAction) {
    let request = PageRequest {
      language: self.language().request_code(),
      number_to_display: self.page_size(),
      page_action,
      page_token: self.page_token,
      search: self.search.clone(),
    };

    let request_id = self.next_request_id;

    self.next_request_id = self.next_request_id.wrapping_add(1);

    self.pending_request = Some(request_id);

    if !self.help.is_visible() {
      self.message = LOADING_STATUS.into();
    }

    self.pending_effects.push(Effect::FetchPage {
      request,
      request_id,
    });
  }

  pub(crate) fn search_input_command(
    &mut self,
    key: KeyEvent,
  ) -> Option<Command> {
    if self.search_input.is_some() {
      Some(self.handle_search_key(key))
    } else {
      None
    }
  }

  pub(crate) fn set_list_height(&mut self, height: usize) {
    self.list_height = height;
  }

  pub(crate) fn set_transient_message(&mut self, message: String) {
    let original = self.transient_message.as_ref().map_or_else(
      || self.message.clone(),
      |transient| transient.original().to_string(),
    );

    self.transient_message =
      Some(TransientMessage::new(message.clone(), original));

    self.message = message;
  }

  fn start_compose(&mut self) {
    if self.compose.is_some() {
      return;
    }

    if !self.auth.is_logged_in {
      self.set_transient_message(
        "Please sign in to leave a comment (press o).".to_string(),
      );

      return;
    }

    self.compose = Some(ComposeInput::new(self.auth.username.clone()));

    if !self.help.is_visible() {
      self.message = COMPOSE_STATUS.into();
    }
  }

  fn start_search(&mut self) {
    if self.search_input.is_some() {
      return;
    }

    let backup = self.message.clone();

    self.search_input = Some(SearchInput::new(backup));

    self.update_search_message();
  }

  fn submit_compose(&mut self) {
    let Some(compose) = self.compose.take() else {
      return;
    };

    let author = compose.author.trim().to_string();
    let text = compose.text.trim().to_string();

    if text.is_empty() {
      self.compose = Some(compose);
      self.set_transient_message("Comment text is empty.".to_string());

      return;
    }

    if !self.help.is_visible() {
      self.message = "Posting comment...".to_string();
    }

    self.pending_effects.push(Effect::PostComment { author, text });
  }

  fn submit_search(&mut self) {
    let Some(input) = self.search_input.take() else {
      return;
    };

    self.search = input.buffer.trim().to_string();
    self.page_token = 0;

    self.refresh(PageAction::None);
  }

  pub(crate) fn take_pending_effects(&mut self) -> Vec<Effect> {
    std::mem::take(&mut self.pending_effects)
  }

  fn update_search_message(&mut self) {
    if let Some(input) = &self.search_input {
      let prompt = input.prompt();
      self.message = truncate(&prompt, 80);
    }
  }

  pub(crate) fn update_transient_message(&mut self) {
    if let Some(transient) = self.transient_message.clone() {
      if self.message != transient.current() {
        self.transient_message = None;
      } else if transient.is_expired() {
        self.message = transient.original().to_string();
        self.transient_message = None;
      }
    }
  }

  pub(crate) fn view(&self) -> &CommentView {
    &self.view
  }

  pub(crate) fn view_mut(&mut self) -> &mut CommentView {
    &mut self.view
  }
}
