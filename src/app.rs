use crate::command::{execute_command, Command};
use crate::storage::{save_all, SaveError};
use crate::todo::{Todo, TodoList};
use crate::ui;

use color_eyre::Result;
use log::{debug, info};
use ratatui::{
    crossterm::event::{self, Event, KeyEvent},
    DefaultTerminal,
};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    TextInput,
}

/// How the event loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Exit {
    Quit,
    SaveAndQuit,
    Interrupted,
}

pub struct App {
    pub(crate) list: TodoList,
    pub(crate) mode: InputMode,
    pub(crate) input: String,
}

impl App {
    pub fn new(todos: Vec<Todo>) -> Self {
        Self { list: TodoList::new(todos), mode: InputMode::Normal, input: String::new() }
    }

    pub fn todos(&self) -> &[Todo] {
        self.list.items()
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Option<Exit> {
        let command = Command::from_key(self.mode, key);
        if command != Command::Ignore {
            debug!("{:?} in {:?} mode", command, self.mode);
        }
        execute_command(self, command)
    }

    /// Redraw, wait for the next event, repeat. Every event triggers a full
    /// redraw, resizes included.
    pub fn run(&mut self, term: &mut DefaultTerminal) -> Result<Exit> {
        info!("starting with {} todos", self.list.len());
        loop {
            term.draw(|f| ui::draw(f, self))?;

            if let Event::Key(key) = event::read()? {
                if let Some(exit) = self.handle_key(key) {
                    info!("leaving event loop: {:?}", exit);
                    return Ok(exit);
                }
            }
        }
    }
}

/// Persist `todos` if the loop ended with save-and-quit. `None` means no
/// save was attempted; a failed save is handed back, never raised.
pub fn finish(exit: Exit, path: &Path, todos: &[Todo]) -> Option<Result<(), SaveError>> {
    match exit {
        Exit::SaveAndQuit => Some(save_all(path, todos)),
        Exit::Quit | Exit::Interrupted => None,
    }
}
