use crate::app::{App, Exit, InputMode};

use log::{debug, info};
use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// What a single keypress asks the app to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Navigate(isize),
    BeginInput,
    ToggleComplete,
    Delete,
    SaveAndQuit,
    Quit,
    Interrupt,
    Commit,
    Backspace,
    Cancel,
    Insert(char),
    Ignore,
}

impl Command {
    pub fn from_key(mode: InputMode, key: KeyEvent) -> Self {
        if key.kind != KeyEventKind::Press {
            return Command::Ignore;
        }
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return Command::Interrupt;
        }
        let ctrl_alt = KeyModifiers::CONTROL | KeyModifiers::ALT;
        let plain = !key.modifiers.intersects(ctrl_alt);
        // Windows reports AltGr characters as Ctrl+Alt.
        let text = plain || key.modifiers.contains(ctrl_alt);

        match mode {
            InputMode::Normal => match key.code {
                KeyCode::Up => Command::Navigate(-1),
                KeyCode::Down => Command::Navigate(1),
                KeyCode::Char(c) if plain => match c {
                    'n' => Command::BeginInput,
                    ' ' => Command::ToggleComplete,
                    'd' => Command::Delete,
                    's' => Command::SaveAndQuit,
                    'q' => Command::Quit,
                    _ => Command::Ignore,
                },
                _ => Command::Ignore,
            },
            InputMode::TextInput => match key.code {
                KeyCode::Enter => Command::Commit,
                KeyCode::Backspace => Command::Backspace,
                KeyCode::Esc => Command::Cancel,
                KeyCode::Char(c) if text => Command::Insert(c),
                _ => Command::Ignore,
            },
        }
    }
}

/// Apply `command` to the app. Returns `Some` when the loop should stop.
pub fn execute_command(app: &mut App, command: Command) -> Option<Exit> {
    match command {
        Command::Ignore => {}
        Command::Navigate(delta) => app.list.navigate(delta),
        Command::BeginInput => {
            app.mode = InputMode::TextInput;
            app.input.clear();
        }
        Command::ToggleComplete => {
            let index = app.list.selected();
            app.list.toggle_complete(index);
        }
        Command::Delete => {
            let index = app.list.selected();
            if let Some(removed) = app.list.delete(index) {
                debug!("deleted todo {index}: {:?}", removed.text);
            }
        }
        Command::Commit => {
            if app.list.create(&app.input) {
                debug!("created todo, {} in list", app.list.len());
            }
            app.mode = InputMode::Normal;
            app.input.clear();
        }
        Command::Backspace => {
            app.input.pop();
        }
        Command::Cancel => {
            app.mode = InputMode::Normal;
            app.input.clear();
        }
        Command::Insert(c) => app.input.push(c),
        Command::SaveAndQuit => return Some(Exit::SaveAndQuit),
        Command::Quit => return Some(Exit::Quit),
        Command::Interrupt => {
            info!("interrupted");
            return Some(Exit::Interrupted);
        }
    }
    None
}
