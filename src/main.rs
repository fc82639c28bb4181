use {
  anyhow::Context,
  app::App,
  auth_status::AuthStatus,
  client::Client,
  command::Command,
  command_dispatch::CommandDispatch,
  comment::Comment,
  comment_page::CommentPage,
  comment_row::CommentRow,
  comment_view::CommentView,
  compose_input::ComposeInput,
  crossterm::{
    event as crossterm_event,
    event::{
      Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers,
    },
    execute,
    style::Stylize,
    terminal::{
      EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode,
      enable_raw_mode,
    },
  },
  delete_target::DeleteTarget,
  effect::Effect,
  event::Event,
  futures::future::try_join,
  help_view::HelpView,
  language::Language,
  page_action::PageAction,
  page_request::PageRequest,
  ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{
      Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap,
    },
  },
  search_input::SearchInput,
  sentiment::Sentiment,
  serde::{Deserialize, Deserializer},
  state::State,
  std::{
    backtrace::BacktraceStatus,
    env,
    io::{self, IsTerminal, Stdout},
    process,
    time::{Duration, Instant},
  },
  tokio::{
    runtime::Handle,
    sync::mpsc::{self, UnboundedReceiver, UnboundedSender},
  },
  transient_message::TransientMessage,
  utils::{clean_text, format_timestamp, truncate, wrap_text},
};

mod app;
mod auth_status;
mod client;
mod command;
mod command_dispatch;
mod comment;
mod comment_page;
mod comment_row;
mod comment_view;
mod compose_input;
mod delete_target;
mod effect;
mod event;
mod help_view;
mod language;
mod page_action;
mod page_request;
mod search_input;
mod sentiment;
mod state;
mod transient_message;
mod utils;

const ADMIN_USER_ID: &str = "ADMIN";

const BASE_INDENT: &str = " ";

const DEFAULT_PAGE_SIZE: usize = 5;

const PAGE_SIZES: &[usize] = &[5, 10, 25, 50];

const BROWSE_STATUS: &str = "↑/k up • ↓/j down • n/p page • / search • c comment • d delete • o sign in/out • q quit • ? help";

const COMPOSE_STATUS: &str = "tab switch field • enter post • esc cancel";

const LOADING_STATUS: &str = "Loading comments...";

const NO_COMMENTS_MESSAGE: &str = "Be the first to leave a comment!";
const NO_RESULTS_MESSAGE: &str = "Sorry, we couldn't find anything!";

const HELP_TITLE: &str = "Help";
const HELP_STATUS: &str = "Press ? or esc to close help";

const HELP_TEXT: &str = "\
Navigation:
  ↑ / k   move selection up
  ↓ / j   move selection down
  pg↓     page down within the list
  pg↑     page up within the list
  ctrl+d  page down within the list
  ctrl+u  page up within the list
  home    jump to the first comment
  end     jump to the last comment
  n / →   fetch the next page of comments
  p / ←   fetch the previous page of comments

Filters:
  /       search comments (type to edit, enter to submit)
  x       clear the active search
  s       cycle the page size (5, 10, 25, 50)
  l / L   cycle the display language forward / back

Actions:
  c       leave a comment (tab switches fields, enter posts)
  d       delete the selected comment (yours only)
  D       ask the server to delete every comment you may delete
  r       reload the current page of comments
  o       open the sign-in or sign-out page in your browser
  q       quit guestbook
  esc     close help, cancel input, or quit
  ?       toggle this help
";

type Result<T = (), E = anyhow::Error> = std::result::Result<T, E>;

fn initialize_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
  enable_raw_mode()?;

  let mut stdout = io::stdout();
  execute!(stdout, EnterAlternateScreen)?;

  Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

fn restore_terminal(
  terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result {
  disable_raw_mode()?;

  execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

  terminal.show_cursor()?;

  Ok(())
}

async fn run() -> Result {
  let client = Client::from_env();

  let request = PageRequest {
    language: None,
    number_to_display: DEFAULT_PAGE_SIZE,
    page_action: PageAction::None,
    page_token: 0,
    search: String::new(),
  };

  let (auth, page) = try_join(client.fetch_auth(), client.fetch_page(&request))
    .await
    .context("could not reach the comment server")?;

  let mut terminal = initialize_terminal()?;

  let mut app = App::new(client, auth, page);

  app.run(&mut terminal)?;

  restore_terminal(&mut terminal)
}

#[tokio::main]
async fn main() {
  if let Err(error) = run().await {
    let use_color = io::stderr().is_terminal();

    if use_color {
      eprintln!("{} {error}", "error:".bold().red());
    } else {
      eprintln!("error: {error}");
    }

    for (i, error) in error.chain().skip(1).enumerate() {
      if i == 0 {
        eprintln!();

        if use_color {
          eprintln!("{}", "because:".bold().red());
        } else {
          eprintln!("because:");
        }
      }

      if use_color {
        eprintln!("{} {error}", "-".bold().red());
      } else {
        eprintln!("- {error}");
      }
    }

    let backtrace = error.backtrace();

    if backtrace.status() == BacktraceStatus::Captured {
      if use_color {
        eprintln!("{}", "backtrace:".bold().red());
      } else {
        eprintln!("backtrace:");
      }

      eprintln!("{backtrace}");
    }

    process::exit(1);
  }
}
