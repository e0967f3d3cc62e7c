use std::path::{Path, PathBuf};

const DOTENV_FILE: &str = ".env";

/// Result of looking for a `.env` file at startup.
#[derive(Debug)]
pub enum DotenvOutcome {
    Loaded(PathBuf),
    NotFound,
    /// The file exists but could not be parsed; nothing was applied from it.
    Invalid(dotenvy::Error),
}

/// Load `.env` from the working directory or one of its ancestors.
///
/// Variables already set in the process environment are left untouched.
pub fn load_dotenv() -> DotenvOutcome {
    let cwd = match std::env::current_dir() {
        Ok(cwd) => cwd,
        Err(error) => return DotenvOutcome::Invalid(dotenvy::Error::Io(error)),
    };
    match find_dotenv(&cwd) {
        Some(path) => load_dotenv_from(&path),
        None => DotenvOutcome::NotFound,
    }
}

fn find_dotenv(start: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(DOTENV_FILE))
        .find(|candidate| candidate.is_file())
}

/// Load a specific dotenv file, with the same precedence rules as [`load_dotenv`].
///
/// The whole file is parsed before anything is applied, so a malformed file
/// leaves the environment unchanged.
pub(crate) fn load_dotenv_from(path: &Path) -> DotenvOutcome {
    let entries = match dotenvy::from_path_iter(path) {
        Ok(entries) => entries,
        Err(error) => return classify(error),
    };
    if let Err(error) = entries.collect::<Result<Vec<(String, String)>, _>>() {
        return DotenvOutcome::Invalid(error);
    }
    match dotenvy::from_path(path) {
        Ok(()) => DotenvOutcome::Loaded(path.to_path_buf()),
        Err(error) => classify(error),
    }
}

fn classify(error: dotenvy::Error) -> DotenvOutcome {
    if error.not_found() {
        DotenvOutcome::NotFound
    } else {
        DotenvOutcome::Invalid(error)
    }
}
