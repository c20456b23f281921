use std::{
    io::{self, Write},
    path::PathBuf,
};

use clap::Parser;
use rayon::prelude::*;
use rtf2txt::{
    DEFAULT_WIDTH, MIN_WIDTH, WriterSink, convert_file, convert_file_to_vec, convert_opts,
};

#[derive(Parser)]
#[command(version, about = "Extract plain text from RTF documents")]
struct Cli {
    /// Maximum width of an output line
    #[arg(short, long, default_value_t = DEFAULT_WIDTH, value_parser = parse_width)]
    width: usize,
    /// RTF files to convert; standard input is read when none are given
    files: Vec<PathBuf>,
}

fn parse_width(s: &str) -> Result<usize, String> {
    let width: usize = s.parse().map_err(|e| format!("{e}"))?;
    if width < MIN_WIDTH {
        return Err(format!("must be at least {MIN_WIDTH}"));
    }
    Ok(width)
}

/// Entry point for the command-line converter.
///
/// With no file arguments the document is read from standard input. A single
/// file is streamed straight to standard output. Several files are converted
/// in parallel and printed in argument order; the first failure stops the
/// output and is reported on standard error.
///
/// # Examples
///
/// ```sh
/// # Print the text of a document
/// rtf2txt letter.rtf
///
/// # Narrower output from standard input
/// rtf2txt --width 60 < letter.rtf
/// ```
fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .target(env_logger::Target::Stderr)
        .init();

    let cli = Cli::parse();
    let stdout = io::stdout();

    match cli.files.as_slice() {
        [] => {
            let sink = convert_opts(io::stdin().lock(), WriterSink::new(stdout.lock()), cli.width)?;
            sink.into_inner()?;
        }
        [path] => {
            let sink = convert_file(path, WriterSink::new(stdout.lock()), cli.width)?;
            sink.into_inner()?;
        }
        paths => {
            log::debug!("converting {} files", paths.len());
            let results: Vec<_> = paths
                .par_iter()
                .map(|path| convert_file_to_vec(path, cli.width))
                .collect();
            let mut out = stdout.lock();
            for result in results {
                match result {
                    Ok(text) => out.write_all(&text)?,
                    Err(e) => {
                        out.flush()?;
                        return Err(e.into());
                    }
                }
            }
            out.flush()?;
        }
    }

    Ok(())
}
