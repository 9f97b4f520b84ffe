use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Missing {}", .0.display())]
    MissingInput(PathBuf),

    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type RenderResult<T> = Result<T, RenderError>;
