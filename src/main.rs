mod app;
mod command;
mod config;
mod storage;
mod todo;
mod ui;

use app::App;
use color_eyre::Result;
use config::Config;
use log::{error, info};
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    color_eyre::install()?;
    let config = Config::resolve();
    init_logging(&config);

    let todos = storage::load_all(&config.save_path).unwrap_or_else(|e| {
        error!("Error loading todos: {e}");
        Vec::new()
    });

    let mut app = App::new(todos);
    let mut terminal = ratatui::init();
    let res = app.run(&mut terminal);
    ratatui::restore();

    match app::finish(res?, &config.save_path, app.todos()) {
        Some(Ok(())) => {
            info!("saved {} todos to {}", app.todos().len(), config.save_path.display());
            println!("Todos saved successfully.");
        }
        Some(Err(e)) => {
            error!("Error saving todos: {e}");
            eprintln!("Error saving todos: {e}");
        }
        None => {}
    }

    println!("Exiting...");
    Ok(())
}

/// Log to a file beside the save file; stdout belongs to the UI.
fn init_logging(config: &Config) {
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&config.log_path) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}
