use anyhow::{Context, Result};
use clap::Parser;
use markdown_render::{
    render_from_path, render_from_reader, Dialect, LoadOptions, RenderError,
};
use std::{
    fs::File,
    io::{self, BufReader, BufWriter, Write},
    path::PathBuf,
    process,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to markdown input, or `-` for stdin
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Path to HTML output, or `-` for stdout
    #[arg(value_name = "OUTPUT")]
    output: PathBuf,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { 1 } else { 0 };
            let _ = err.print();
            process::exit(code);
        }
    };

    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let dialect = Dialect::load(LoadOptions::default())?;
    let html = render_input(&cli.input, &dialect)?;
    write_output(&cli.output, &html)
}

fn render_input(path: &PathBuf, dialect: &Dialect) -> Result<Vec<String>> {
    if path == &PathBuf::from("-") {
        let stdin = io::stdin();
        let mut reader = BufReader::new(stdin.lock());
        return Ok(render_from_reader(&mut reader, dialect)?);
    }

    if !path.is_file() {
        return Err(RenderError::MissingInput(path.clone()).into());
    }

    render_from_path(path, dialect)
        .with_context(|| format!("Unable to render {}", path.display()))
}

fn write_output(path: &PathBuf, lines: &[String]) -> Result<()> {
    if path == &PathBuf::from("-") {
        return write_stdout(lines);
    }

    let file =
        File::create(path).with_context(|| format!("Unable to create {}", path.display()))?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    writer
        .flush()
        .with_context(|| format!("Failed to write {}", path.display()))
}

fn write_stdout(lines: &[String]) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();

    for line in lines {
        match writeln!(handle, "{}", line) {
            Ok(_) => {}
            Err(err) if should_ignore_pipe_error(&err) => return Ok(()),
            Err(err) => {
                return Err(err).context(format!("Failed to print line: {}", line));
            }
        }
    }

    match handle.flush() {
        Ok(_) => Ok(()),
        Err(err) if should_ignore_pipe_error(&err) => Ok(()),
        Err(err) => Err(err).context("Failed to flush stdout"),
    }
}

fn should_ignore_pipe_error(err: &io::Error) -> bool {
    matches!(
        err.kind(),
        io::ErrorKind::BrokenPipe | io::ErrorKind::WouldBlock
    )
}
