use super::*;

pub(crate) struct App {
  client: Client,
  event_rx: UnboundedReceiver<Event>,
  event_tx: UnboundedSender<Event>,
  handle: Handle,
  state: State,
}

impl App {
  fn comment_list_item(row: &CommentRow, available_width: u16) -> ListItem {
    let mut header = vec![Span::raw(BASE_INDENT)];

    if row.can_delete {
      header.push(Span::styled("[x] ", Style::default().fg(Color::Red)));
    }

    header.push(Span::styled(
      row.header(),
      Style::default().fg(Color::White),
    ));

    let mut lines = vec![Line::from(header)];

    lines.push(Line::from(vec![
      Span::raw(BASE_INDENT),
      Span::styled(row.posted.clone(), Style::default().fg(Color::DarkGray)),
    ]));

    let wrap_width = (available_width as usize)
      .saturating_sub(BASE_INDENT.chars().count())
      .max(1);

    for line in wrap_text(&row.body, wrap_width) {
      lines.push(Line::from(vec![Span::raw(BASE_INDENT), Span::raw(line)]));
    }

    if let Some(topic) = row.topic_line() {
      lines.push(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::styled(
          topic,
          Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::ITALIC),
        ),
      ]));
    }

    lines.push(Line::from(Span::raw(BASE_INDENT)));

    ListItem::new(lines)
  }

  fn draw(&mut self, frame: &mut Frame) {
    let layout = Layout::default()
      .direction(Direction::Vertical)
      .margin(1)
      .constraints([
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
      ])
      .split(frame.area());

    self.state.set_list_height(layout[1].height as usize);

    let title = Line::from(Span::styled(
      "guestbook",
      Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    ));

    let filters = Line::from(Span::styled(
      self.state.filters_line(),
      Style::default().fg(Color::DarkGray),
    ));

    frame.render_widget(Paragraph::new(vec![title, filters]), layout[0]);

    let view = self.state.view();

    let (list_items, selected_index, offset) = if view.is_empty() {
      let items = vec![ListItem::new(Line::from(vec![
        Span::raw(BASE_INDENT),
        Span::raw(view.empty_message()),
      ]))];

      (items, None, 0)
    } else {
      let items = view
        .rows()
        .iter()
        .map(|row| Self::comment_list_item(row, layout[1].width))
        .collect();

      (items, view.selected_index(), view.offset())
    };

    let mut list_state = ListState::default()
      .with_selected(selected_index)
      .with_offset(offset);

    let list = List::new(list_items)
      .highlight_style(
        Style::default()
          .fg(Color::Cyan)
          .add_modifier(Modifier::BOLD),
      )
      .highlight_symbol("");

    frame.render_stateful_widget(list, layout[1], &mut list_state);

    self.state.view_mut().set_offset(list_state.offset());

    let status = Paragraph::new(self.state.message().to_string())
      .style(Style::default().fg(Color::DarkGray));

    frame.render_widget(status, layout[2]);

    if let Some(compose) = self.state.compose() {
      compose.draw(frame);
    }

    self.state.help().draw(frame);
  }

  fn execute_effect(&mut self, effect: Effect) {
    match effect {
      Effect::Delete { target } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Deleted {
            result: client.delete(target).await,
          });
        });
      }
      Effect::FetchAuth => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Auth {
            result: client.fetch_auth().await,
          });
        });
      }
      Effect::FetchPage {
        request,
        request_id,
      } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Page {
            request_id,
            result: client.fetch_page(&request).await,
          });
        });
      }
      Effect::OpenUrl { url } => {
        let url = self.client.absolute_url(&url);

        match webbrowser::open(&url) {
          Ok(()) => {
            self.state.set_transient_message(format!(
              "Opened in browser: {}",
              truncate(&url, 80)
            ));
          }
          Err(error) => {
            self
              .state
              .set_transient_message(format!("Could not open link: {error}"));
          }
        }
      }
      Effect::PostComment { author, text } => {
        let (client, sender) = (self.client.clone(), self.event_tx.clone());

        self.handle.spawn(async move {
          let _ = sender.send(Event::Posted {
            result: client.post_comment(&author, &text).await,
          });
        });
      }
    }
  }

  pub(crate) fn new(
    client: Client,
    auth: AuthStatus,
    page: CommentPage,
  ) -> Self {
    let (event_tx, event_rx) = mpsc::unbounded_channel();

    Self {
      client,
      event_rx,
      event_tx,
      handle: Handle::current(),
      state: State::new(auth, page),
    }
  }

  fn process_pending_events(&mut self) {
    self.state.update_transient_message();

    while let Ok(event) = self.event_rx.try_recv() {
      self.state.handle_event(event);

      for effect in self.state.take_pending_effects() {
        self.execute_effect(effect);
      }
    }
  }

  pub(crate) fn run(
    &mut self,
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
  ) -> Result {
    loop {
      self.process_pending_events();

      terminal.draw(|frame| self.draw(frame))?;

      if !crossterm_event::poll(Duration::from_millis(200))? {
        self.process_pending_events();
        continue;
      }

      let CrosstermEvent::Key(key) = crossterm_event::read()? else {
        self.process_pending_events();
        continue;
      };

      if key.kind != KeyEventKind::Press {
        self.process_pending_events();
        continue;
      }

      let command = if self.state.help_is_visible() {
        HelpView::handle_key(key)
      } else if let Some(command) = self.state.search_input_command(key) {
        command
      } else if let Some(command) = self.state.compose_command(key) {
        command
      } else {
        let page = self.state.list_height().max(1);
        self.state.view_mut().handle_key(key, page)
      };

      match self.state.dispatch_command(command) {
        Ok(dispatch) => {
          for effect in dispatch.effects {
            self.execute_effect(effect);
          }

          if dispatch.should_exit {
            break;
          }

          self.process_pending_events();
        }
        Err(error) => {
          self.state.take_pending_effects();
          self.state.set_transient_message(format!("error: {error}"));
          self.process_pending_events();
        }
      }
    }

    Ok(())
  }
}
