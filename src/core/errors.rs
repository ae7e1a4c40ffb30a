use std::path::PathBuf;

#[derive(Debug, Clone, thiserror::Error)]
pub enum CompileError {
    #[error("error while compiling:\n{msg}")]
    CompilationFailed { msg: String },
    #[error("failed to launch compiler: {msg}")]
    Internal { msg: String },
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RunError {
    #[error("solution exited with {status}\n{stderr}")]
    Crash { status: String, stderr: String },
    #[error("failed to launch solution: {msg}")]
    Internal { msg: String },
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("network error: {msg}")]
    Network { msg: String },

    #[error("invalid contest number or problem number: {url} responded with status {status}")]
    InvalidContest { url: String, status: u16 },

    #[error(transparent)]
    Compile(#[from] CompileError),

    #[error("error while running test #{test}: {source}")]
    Runtime { test: u32, source: RunError },

    #[error("test file name {name:?} is not a number")]
    Parse { name: String },

    #[error("{context}: {source}")]
    Io {
        context: String,
        source: std::io::Error,
    },

    #[error("directory {} already exists", .0.display())]
    DirectoryExists(PathBuf),

    #[error("clipboard is unavailable: {msg}")]
    ClipboardUnavailable { msg: String },
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            context: context.into(),
            source,
        }
    }
}
