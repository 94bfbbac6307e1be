use std::sync::mpsc;
use std::time::Duration;

use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::DefaultTerminal;
use stacktable_core::{update, AppState, Msg};
use stacktable_logging::table_info;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::persistence;
use super::ui;

const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Which component currently receives keystrokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Normal,
    Filter,
}

enum KeyOutcome {
    Continue,
    Redraw,
    Quit,
}

pub fn run_app() -> Result<()> {
    logging::initialize(LogDestination::File);

    let terminal = ratatui::init();
    let result = run_event_loop(terminal);
    ratatui::restore();
    result
}

fn run_event_loop(mut terminal: DefaultTerminal) -> Result<()> {
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(stacktable_engine::EngineConfig::default(), msg_tx.clone());

    let mut state = AppState::new();
    let mut input_mode = InputMode::Normal;
    let mut last_refresh: Option<DateTime<Local>> = None;

    if let Some((sort_field, sort_direction)) = persistence::load_sort_prefs(&persistence::prefs_path())
    {
        let _ = msg_tx.send(Msg::RestorePreferences {
            sort_field,
            sort_direction,
        });
    }
    let _ = msg_tx.send(Msg::Ready);

    loop {
        let mut should_render = false;

        if event::poll(EVENT_POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    match handle_key(key.code, &mut input_mode, &state, &msg_tx) {
                        KeyOutcome::Quit => break,
                        KeyOutcome::Redraw => should_render = true,
                        KeyOutcome::Continue => {}
                    }
                }
                Event::Resize(_, _) => should_render = true,
                _ => {}
            }
        }

        // Drain everything the key handler and the engine pumped in.
        while let Ok(msg) = msg_rx.try_recv() {
            if matches!(msg, Msg::FetchCompleted { .. }) {
                last_refresh = Some(Local::now());
            }
            let (next, effects) = update(std::mem::take(&mut state), msg);
            state = next;
            runner.enqueue(effects);
            if state.consume_dirty() {
                should_render = true;
            }
        }

        if should_render {
            let view = state.view();
            let filter_active = input_mode == InputMode::Filter;
            terminal.draw(|frame| ui::render::draw(frame, &view, filter_active, last_refresh))?;
        }
    }

    table_info!(
        "exiting after request seq {}",
        stacktable_logging::get_request_seq()
    );
    let view = state.view();
    persistence::save_sort_prefs(
        &persistence::prefs_path(),
        view.sort_field,
        view.sort_direction,
    );
    Ok(())
}

fn handle_key(
    code: KeyCode,
    input_mode: &mut InputMode,
    state: &AppState,
    msg_tx: &mpsc::Sender<Msg>,
) -> KeyOutcome {
    let view = state.view();

    match input_mode {
        InputMode::Filter => match code {
            KeyCode::Esc => {
                *input_mode = InputMode::Normal;
                let _ = msg_tx.send(Msg::FilterChanged(String::new()));
                return KeyOutcome::Redraw;
            }
            KeyCode::Enter => {
                *input_mode = InputMode::Normal;
                return KeyOutcome::Redraw;
            }
            KeyCode::Backspace => {
                let mut filter = view.filter;
                filter.pop();
                let _ = msg_tx.send(Msg::FilterChanged(filter));
            }
            KeyCode::Char(c) => {
                let mut filter = view.filter;
                filter.push(c);
                let _ = msg_tx.send(Msg::FilterChanged(filter));
            }
            _ => {}
        },
        InputMode::Normal => match code {
            KeyCode::Char('q') | KeyCode::Esc => return KeyOutcome::Quit,
            KeyCode::Char('s') => {
                let _ = msg_tx.send(Msg::SortFieldChanged(view.sort_field.next()));
            }
            KeyCode::Char('o') => {
                let _ = msg_tx.send(Msg::SortDirectionChanged(view.sort_direction.next()));
            }
            KeyCode::Char('n') | KeyCode::Right => {
                let _ = msg_tx.send(Msg::PageChanged(view.page_index + 1));
            }
            KeyCode::Char('p') | KeyCode::Left => {
                if view.page_index > 0 {
                    let _ = msg_tx.send(Msg::PageChanged(view.page_index - 1));
                }
            }
            KeyCode::Char('r') => {
                let _ = msg_tx.send(Msg::RefreshRequested);
            }
            KeyCode::Char('/') => {
                *input_mode = InputMode::Filter;
                return KeyOutcome::Redraw;
            }
            _ => {}
        },
    }

    KeyOutcome::Continue
}
