//! Interactive browser
//!
//! Input is read on a spawned task and forwarded over a channel; the
//! main loop redraws after every event or 50ms timeout. All state
//! mutation happens on the loop task.

use std::time::Duration;

use ratatui::{
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    DefaultTerminal,
};
use tokio::time;
use tui_input::backend::crossterm::EventHandler;

use crate::catalog::{Catalog, SlideDirection};
use crate::error::Result;
use crate::tui::render::render;
use crate::tui::state::BrowserState;
use crate::tui::theme::Theme;

pub enum AppEvent {
    Key(KeyEvent),
    Resize,
}

pub struct App {
    state: BrowserState,
    theme: Theme,
    should_quit: bool,
}

impl App {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            state: BrowserState::new(catalog),
            theme: Theme::default(),
            should_quit: false,
        }
    }

    /// Run the browser until the user quits.
    pub async fn run(mut self) -> Result<()> {
        let mut terminal = ratatui::init();
        terminal.clear()?;

        let (event_tx, mut event_rx) = tokio::sync::mpsc::unbounded_channel();

        let input_tx = event_tx.clone();
        tokio::spawn(async move {
            loop {
                if let Ok(event) = event::read() {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            if input_tx.send(AppEvent::Key(key)).is_err() {
                                break;
                            }
                        }
                        Event::Resize(_, _) => {
                            let _ = input_tx.send(AppEvent::Resize);
                        }
                        _ => {}
                    }
                }
            }
        });

        let result = self.main_loop(&mut terminal, &mut event_rx).await;

        ratatui::restore();
        result
    }

    async fn main_loop(
        &mut self,
        terminal: &mut DefaultTerminal,
        event_rx: &mut tokio::sync::mpsc::UnboundedReceiver<AppEvent>,
    ) -> Result<()> {
        loop {
            terminal.draw(|frame| render(frame, &self.state, &self.theme))?;

            match time::timeout(Duration::from_millis(50), event_rx.recv()).await {
                Ok(Some(AppEvent::Key(key))) => self.handle_key(key),
                Ok(Some(AppEvent::Resize)) => {} // Redrawn on the next pass
                Ok(None) => break,               // Channel closed
                Err(_) => {}                     // Timeout, redraw
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Esc => {
                // First Esc clears an active search, second quits.
                if self.state.query().is_empty() {
                    self.should_quit = true;
                } else {
                    self.state.clear_query();
                }
            }
            KeyCode::Up => self.state.select_previous(),
            KeyCode::Down => self.state.select_next(),
            KeyCode::Enter => self.state.toggle_expanded(),
            KeyCode::Left => self.state.slide(SlideDirection::Backward),
            KeyCode::Right => self.state.slide(SlideDirection::Forward),
            _ => {
                let before = self.state.query().to_string();
                self.state.search_input.handle_event(&Event::Key(key));
                if self.state.query() != before {
                    self.state.apply_search();
                }
            }
        }
    }
}
