use super::*;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum ComposeField {
  Author,
  Text,
}

pub(crate) struct ComposeInput {
  pub(crate) author: String,
  pub(crate) field: ComposeField,
  pub(crate) text: String,
}

impl ComposeInput {
  fn active_mut(&mut self) -> &mut String {
    match self.field {
      ComposeField::Author => &mut self.author,
      ComposeField::Text => &mut self.text,
    }
  }

  pub(crate) fn draw(&self, frame: &mut Frame) {
    let area = Self::popup_area(frame.area());

    frame.render_widget(Clear, area);

    let cursor = "▏";

    let author_cursor = if self.field == ComposeField::Author {
      cursor
    } else {
      ""
    };

    let text_cursor = if self.field == ComposeField::Text {
      cursor
    } else {
      ""
    };

    let mut lines = vec![
      Line::from(vec![
        Span::styled("Author: ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}{author_cursor}", self.author)),
      ]),
      Line::from(""),
    ];

    let wrap_width = (area.width as usize).saturating_sub(2).max(1);
    let body = format!("{}{text_cursor}", self.text);

    if body.is_empty() {
      lines.push(Line::from(Span::styled(
        "Type your comment...",
        Style::default().fg(Color::DarkGray),
      )));
    } else {
      for line in wrap_text(&body, wrap_width) {
        lines.push(Line::from(Span::raw(line)));
      }
    }

    let form = Paragraph::new(lines)
      .block(
        Block::default()
          .title("Leave a comment")
          .borders(Borders::ALL),
      )
      .wrap(Wrap { trim: true });

    frame.render_widget(form, area);
  }

  pub(crate) fn handle_key(&mut self, key: KeyEvent) -> Command {
    match key.code {
      KeyCode::Esc => Command::CancelCompose,
      KeyCode::Enter => Command::SubmitCompose,
      KeyCode::Tab | KeyCode::BackTab => {
        self.field = match self.field {
          ComposeField::Author => ComposeField::Text,
          ComposeField::Text => ComposeField::Author,
        };

        Command::None
      }
      KeyCode::Backspace => {
        self.active_mut().pop();

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

        self.active_mut().push(ch);

        Command::None
      }
      _ => Command::None,
    }
  }

  pub(crate) fn new(author: String) -> Self {
    let field = if author.trim().is_empty() {
      ComposeField::Author
    } else {
      ComposeField::Text
    };

    Self {
      author,
      field,
      text: String::new(),
    }
  }

  fn popup_area(area: Rect) -> Rect {
    let width = area.width.saturating_sub(4).clamp(1, 62);
    let height = area.height.saturating_sub(4).clamp(1, 10);

    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;

    Rect::new(x, y, width, height)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::from(code)
  }

  #[test]
  fn new_starts_on_the_empty_author_field() {
    let blank = ComposeInput::new(String::new());
    assert_eq!(blank.field, ComposeField::Author);

    let prefilled = ComposeInput::new("maya".to_string());
    assert_eq!(prefilled.field, ComposeField::Text);
  }

  #[test]
  fn typing_edits_the_active_field() {
    let mut input = ComposeInput::new("maya".to_string());

    input.handle_key(press(KeyCode::Char('h')));
    input.handle_key(press(KeyCode::Char('i')));
    assert_eq!(input.text, "hi");

    input.handle_key(press(KeyCode::Tab));
    input.handle_key(press(KeyCode::Backspace));
    assert_eq!(input.author, "may");
    assert_eq!(input.text, "hi");
  }

  #[test]
  fn enter_submits_and_escape_cancels() {
    let mut input = ComposeInput::new("maya".to_string());

    assert_eq!(
      input.handle_key(press(KeyCode::Enter)),
      Command::SubmitCompose
    );

    assert_eq!(input.handle_key(press(KeyCode::Esc)), Command::CancelCompose);
  }
}
