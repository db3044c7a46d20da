use crate::todo::Todo;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("could not read {path}: {source}")]
    Read { path: PathBuf, source: io::Error },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum SaveError {
    #[error("could not serialize todos: {0}")]
    Serialize(#[from] serde_json::Error),
    #[error("could not write {path}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Load *all* todos from the save file. A missing file is an empty list.
pub fn load_all(path: &Path) -> Result<Vec<Todo>, LoadError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(LoadError::Read { path: path.to_path_buf(), source });
        }
    };
    serde_json::from_str(&content).map_err(|source| LoadError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Overwrite the save file with the given list of todos, pretty-printed.
pub fn save_all(path: &Path, todos: &[Todo]) -> Result<(), SaveError> {
    let content = serde_json::to_string_pretty(todos)?;
    fs::write(path, content).map_err(|source| SaveError::Write {
        path: path.to_path_buf(),
        source,
    })
}
