//! `log` backend for the CLI.
//!
//! Normal output goes through `log::info!` so `--quiet` can silence it.
//! Warnings and errors get a coloured prefix; `--verbose` switches to
//! timestamped, level-tagged lines.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use log::{Level, LevelFilter};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::error::CliError;

/// Copies log output to stdout and to a file with ANSI escapes removed.
struct TeeWriter {
    stdout: io::Stdout,
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.stdout.write_all(buf)?;
        self.file.write_all(&strip_ansi_escapes::strip(buf))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.stdout.flush()?;
        self.file.flush()
    }
}

pub(crate) fn level_filter(quiet: bool, verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    }
}

/// Install the global logger. Call once, before any command runs.
pub(crate) fn init(quiet: bool, verbose: bool, logfile: Option<&Path>) -> Result<(), CliError> {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_filter(quiet, verbose));

    builder.format(move |buf, record| {
        if verbose {
            return writeln!(
                buf,
                "{} {:<5} {}",
                buf.timestamp_millis(),
                record.level(),
                record.args()
            );
        }
        match record.level() {
            Level::Error => writeln!(
                buf,
                "{} {}",
                "error:".if_supports_color(Stdout, |t| t.red()),
                record.args()
            ),
            Level::Warn => writeln!(
                buf,
                "{} {}",
                "warning:".if_supports_color(Stdout, |t| t.yellow()),
                record.args()
            ),
            _ => writeln!(buf, "{}", record.args()),
        }
    });

    match logfile {
        Some(path) => {
            let file = File::create(path)?;
            builder.target(env_logger::Target::Pipe(Box::new(TeeWriter {
                stdout: io::stdout(),
                file,
            })));
        }
        None => {
            builder.target(env_logger::Target::Stdout);
        }
    }

    builder
        .try_init()
        .map_err(|e| CliError::logger(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbose_wins_over_quiet() {
        assert_eq!(level_filter(true, true), LevelFilter::Debug);
        assert_eq!(level_filter(true, false), LevelFilter::Warn);
        assert_eq!(level_filter(false, false), LevelFilter::Info);
    }

    #[test]
    fn tee_strips_ansi_from_file_copy() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("run.log");
        let mut tee = TeeWriter {
            stdout: io::stdout(),
            file: File::create(&path).unwrap(),
        };

        tee.write_all(b"\x1b[31merror:\x1b[0m x\n").unwrap();
        tee.write_all(b"plain line\n").unwrap();
        tee.flush().unwrap();
        drop(tee);

        let logged = std::fs::read_to_string(&path).unwrap();
        assert_eq!(logged, "error: x\nplain line\n");
    }
}
