use std::io;

use anyhow::Result;
use crossterm::cursor;
use crossterm::event::DisableMouseCapture;
use crossterm::event::EnableMouseCapture;
use crossterm::terminal::disable_raw_mode;
use crossterm::terminal::enable_raw_mode;
use crossterm::terminal::EnterAlternateScreen;
use crossterm::terminal::LeaveAlternateScreen;
use ratatui::backend::CrosstermBackend;
use ratatui::prelude::*;
use ratatui::widgets::Block;
use ratatui::widgets::BorderType;
use ratatui::widgets::Borders;
use ratatui::widgets::Padding;
use ratatui::widgets::Paragraph;
use ratatui::widgets::Scrollbar;
use ratatui::widgets::ScrollbarOrientation;
use ratatui::widgets::ScrollbarState;
use ratatui::Terminal;
use strum::IntoEnumIterator;
use tokio::sync::mpsc;
use tui_textarea::Input;
use tui_textarea::Key;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::Action;
use crate::domain::models::Event;
use crate::domain::models::Language;
use crate::domain::services::events::EventsService;
use crate::domain::services::AssistantSession;
use crate::domain::services::ChatWidget;
use crate::domain::services::ContentStore;
use crate::domain::services::PortfolioView;
use crate::domain::services::ASSISTANT_TITLE;
use crate::domain::services::INPUT_PLACEHOLDER;

const ACCENT: Color = Color::Rgb(37, 99, 235);
const CHAT_PANEL_WIDTH: u16 = 42;

#[derive(Default)]
struct Scroll {
    list_length: u16,
    viewport_length: u16,
    position: u16,
    scrollbar_state: ScrollbarState,
}

impl Scroll {
    fn up(&mut self) {
        self.position = self.position.saturating_sub(1);
        self.scrollbar_state.prev();
    }

    fn up_page(&mut self) {
        for _ in 0..10 {
            self.up();
        }
    }

    fn down(&mut self) {
        let mut clamp: u16 = 0;
        if self.list_length > self.viewport_length {
            clamp = self.list_length - self.viewport_length;
        }

        self.position = self.position.saturating_add(1).clamp(0, clamp);
        self.scrollbar_state.next();
    }

    fn down_page(&mut self) {
        for _ in 0..10 {
            self.down();
        }
    }

    fn last(&mut self) {
        self.position = 0;
        if self.list_length > self.viewport_length {
            self.position = self.list_length - self.viewport_length;
        }

        self.scrollbar_state.last();
    }

    fn set_state(&mut self, list_length: u16, viewport_length: u16) {
        self.list_length = list_length;
        self.viewport_length = viewport_length;
        self.scrollbar_state = self
            .scrollbar_state
            .content_length(list_length)
            .viewport_content_length(viewport_length);
    }
}

fn input_textarea<'a>() -> tui_textarea::TextArea<'a> {
    let mut textarea = tui_textarea::TextArea::default();
    textarea.set_placeholder_text(INPUT_PLACEHOLDER);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .padding(Padding::new(1, 1, 0, 0)),
    );

    return textarea;
}

struct AppState<'a> {
    session: AssistantSession,
    language: Language,
    chat_open: bool,
    chat_follow: bool,
    backend_online: bool,
    tick: usize,
    textarea: tui_textarea::TextArea<'a>,
    portfolio_scroll: Scroll,
    chat_scroll: Scroll,
}

impl<'a> AppState<'a> {
    fn new() -> AppState<'a> {
        return AppState {
            session: AssistantSession::new(),
            language: Language::parse(&Config::get(ConfigKey::Language)).unwrap_or_default(),
            chat_open: false,
            chat_follow: false,
            backend_online: true,
            tick: 0,
            textarea: input_textarea(),
            portfolio_scroll: Scroll::default(),
            chat_scroll: Scroll::default(),
        };
    }

    fn active_scroll(&mut self) -> &mut Scroll {
        if self.chat_open {
            return &mut self.chat_scroll;
        }
        return &mut self.portfolio_scroll;
    }
}

fn render_header<B: Backend>(frame: &mut Frame<'_, B>, state: &AppState<'_>, rect: Rect) {
    let document = ContentStore::get(state.language);

    let brand = Line::from(vec![
        Span::styled(
            "Shuo Pang",
            Style {
                add_modifier: Modifier::BOLD,
                ..Style::default()
            },
        ),
        Span::from("  "),
        Span::styled(
            document.nav.tag.clone(),
            Style {
                fg: Some(ACCENT),
                ..Style::default()
            },
        ),
    ]);

    let mut links = vec![Span::styled(
        format!(
            "{}  {}  {}  {}  ",
            document.nav.about, document.nav.research, document.nav.honors, document.nav.contact
        ),
        Style {
            fg: Some(Color::DarkGray),
            ..Style::default()
        },
    )];
    for language in Language::iter() {
        let mut style = Style {
            fg: Some(Color::DarkGray),
            ..Style::default()
        };
        if language == state.language {
            style = Style {
                fg: Some(ACCENT),
                add_modifier: Modifier::BOLD,
                ..Style::default()
            };
        }

        links.push(Span::styled(format!(" {}", language.label()), style));
    }

    frame.render_widget(Paragraph::new(brand), rect);
    frame.render_widget(
        Paragraph::new(Line::from(links)).alignment(Alignment::Right),
        rect,
    );
}

fn render_portfolio<B: Backend>(frame: &mut Frame<'_, B>, state: &mut AppState<'_>, rect: Rect) {
    // One column stays clear of the scrollbar, two go to the block padding.
    let width = rect.width.saturating_sub(3).max(10);
    let lines = PortfolioView::lines(state.language, width);
    state
        .portfolio_scroll
        .set_state(lines.len() as u16, rect.height);

    frame.render_widget(
        Paragraph::new(lines)
            .block(Block::default().padding(Padding::new(1, 1, 0, 0)))
            .scroll((state.portfolio_scroll.position, 0)),
        rect,
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        rect.inner(&Margin {
            vertical: 1,
            horizontal: 0,
        }),
        &mut state.portfolio_scroll.scrollbar_state,
    );
}

fn render_chat<B: Backend>(frame: &mut Frame<'_, B>, state: &mut AppState<'_>, rect: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .title(ASSISTANT_TITLE);
    let inner = block.inner(rect);
    frame.render_widget(block, rect);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Max(1),
            Constraint::Min(1),
            Constraint::Max(1),
            Constraint::Max(3),
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(ChatWidget::status_line(state.backend_online)),
        layout[0],
    );

    let width = layout[1].width.saturating_sub(1).max(8);
    let lines = ChatWidget::transcript_lines(state.session.transcript(), width);
    state
        .chat_scroll
        .set_state(lines.len() as u16, layout[1].height);
    if state.session.is_pending() || state.chat_follow {
        state.chat_scroll.last();
        state.chat_follow = false;
    }

    frame.render_widget(
        Paragraph::new(lines).scroll((state.chat_scroll.position, 0)),
        layout[1],
    );
    frame.render_stateful_widget(
        Scrollbar::new(ScrollbarOrientation::VerticalRight),
        layout[1],
        &mut state.chat_scroll.scrollbar_state,
    );

    if state.session.is_pending() {
        frame.render_widget(
            Paragraph::new(ChatWidget::loading_line(state.tick)),
            layout[2],
        );
    }

    frame.render_widget(state.textarea.widget(), layout[3]);
}

fn render_footer<B: Backend>(frame: &mut Frame<'_, B>, state: &AppState<'_>, rect: Rect) {
    let mut hints = "q quit · c/Tab chat · 1/2/3 language · l cycle · ↑/↓ scroll";
    if state.chat_open {
        hints = "Esc/Tab close · Enter send · CTRL+L language · CTRL+C quit";
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            hints,
            Style {
                fg: Some(Color::DarkGray),
                ..Style::default()
            },
        ))
        .alignment(Alignment::Center),
        rect,
    );
}

fn render<B: Backend>(frame: &mut Frame<'_, B>, state: &mut AppState<'_>) {
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![
            Constraint::Max(1),
            Constraint::Min(1),
            Constraint::Max(1),
        ])
        .split(frame.size());

    render_header(frame, state, outer[0]);

    if state.chat_open {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Min(1), Constraint::Max(CHAT_PANEL_WIDTH)])
            .split(outer[1]);
        render_portfolio(frame, state, columns[0]);
        render_chat(frame, state, columns[1]);
    } else {
        render_portfolio(frame, state, outer[1]);
    }

    render_footer(frame, state, outer[2]);
}

async fn start_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: &mut AppState<'_>,
    tx: mpsc::UnboundedSender<Action>,
    events: &mut EventsService,
) -> Result<()> {
    #[cfg(feature = "dev")]
    {
        let test_str = "What did Shuo work on at Huawei Canada?";
        for char in test_str.chars() {
            state.textarea.input(Input {
                key: Key::Char(char),
                ctrl: false,
                alt: false,
            });
        }
    }

    loop {
        terminal.draw(|frame| {
            render(frame, state);
        })?;

        match events.next().await? {
            Event::BackendHealth(online) => {
                state.backend_online = online;
            }
            Event::CompletionSettled(outcome) => {
                state.session.settle(outcome);
                state.chat_follow = true;
            }
            Event::KeyboardCTRLC() => {
                break;
            }
            Event::KeyboardEnter() => {
                if !state.chat_open {
                    continue;
                }

                let input_str = &state.textarea.lines().join("\n");
                if let Some(request) = state.session.stage(input_str, state.language) {
                    state.textarea = input_textarea();
                    state.chat_follow = true;
                    tx.send(Action::CompletionRequest(request))?;
                }
            }
            Event::KeyboardPaste(text) => {
                if state.chat_open {
                    state.textarea.insert_str(&text);
                }
            }
            Event::KeyboardCharInput(input) => {
                if state.chat_open {
                    match input {
                        Input { key: Key::Esc, .. } | Input { key: Key::Tab, .. } => {
                            state.chat_open = false;
                        }
                        Input {
                            key: Key::Char('l'),
                            ctrl: true,
                            ..
                        } => {
                            state.language = state.language.cycle();
                        }
                        input => {
                            state.textarea.input(input);
                        }
                    }

                    continue;
                }

                match input {
                    Input {
                        key: Key::Char('q'),
                        ..
                    } => {
                        break;
                    }
                    Input {
                        key: Key::Char('c'),
                        ..
                    }
                    | Input { key: Key::Tab, .. } => {
                        state.chat_open = true;
                    }
                    Input {
                        key: Key::Char('1'),
                        ..
                    } => {
                        state.language = Language::En;
                    }
                    Input {
                        key: Key::Char('2'),
                        ..
                    } => {
                        state.language = Language::Zh;
                    }
                    Input {
                        key: Key::Char('3'),
                        ..
                    } => {
                        state.language = Language::Fr;
                    }
                    Input {
                        key: Key::Char('l'),
                        ..
                    } => {
                        state.language = state.language.cycle();
                    }
                    _ => (),
                }
            }
            Event::UIResize() => (),
            Event::UIScrollDown() => {
                state.active_scroll().down();
            }
            Event::UIScrollUp() => {
                state.active_scroll().up();
            }
            Event::UIScrollPageDown() => {
                state.active_scroll().down_page();
            }
            Event::UIScrollPageUp() => {
                state.active_scroll().up_page();
            }
            Event::UITick() => {
                state.tick = state.tick.wrapping_add(1);
            }
        }
    }

    return Ok(());
}

pub fn destruct_terminal_for_panic() {
    disable_raw_mode().unwrap();
    crossterm::execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture).unwrap();
    crossterm::execute!(io::stdout(), cursor::Show).unwrap();
}

pub async fn start(
    tx: mpsc::UnboundedSender<Action>,
    rx: mpsc::UnboundedReceiver<Event>,
) -> Result<()> {
    let mut events = EventsService::new(rx);

    let stdout = io::stdout();
    let mut stdout = stdout.lock();

    enable_raw_mode()?;
    crossterm::execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let term_backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(term_backend)?;
    let mut state = AppState::new();

    start_loop(&mut terminal, &mut state, tx, &mut events).await?;

    disable_raw_mode()?;
    crossterm::execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    return Ok(());
}
