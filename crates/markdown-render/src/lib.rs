mod classify;
mod config;
mod error;
mod inline;
mod line;
mod state;

pub use classify::{ClassifiedLine, Classifier, LineKind};
pub use config::{ConfigError, Dialect, LoadOptions, UnorderedMarker};
pub use error::{RenderError, RenderResult};

use line::read_lines;
use state::Assembler;
use std::{
    fs::File,
    io::{BufReader, Read},
    path::PathBuf,
};

pub fn render_from_path(path: &PathBuf, dialect: &Dialect) -> RenderResult<Vec<String>> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    render_from_reader(&mut reader, dialect)
}

pub fn render_from_reader<R: Read>(
    reader: &mut BufReader<R>,
    dialect: &Dialect,
) -> RenderResult<Vec<String>> {
    let lines = read_lines(reader)?;
    let classifier = Classifier::new(dialect);
    let mut assembler = Assembler::new();

    for line in &lines {
        assembler.append(classifier.classify(line));
    }

    Ok(assembler.finalize())
}
