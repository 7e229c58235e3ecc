use std::fmt;

use clap::Parser;
use registrations_fixer::{
    error::FixError,
    types::{self, FixPaths},
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Путь до исходной выгрузки регистраций
    #[arg(long, default_value = types::DEFAULT_INPUT_PATH)]
    input_file: String,

    /// Путь, по которому будет записан исправленный CSV
    #[arg(long, default_value = types::DEFAULT_OUTPUT_PATH)]
    output_file: String,
}

#[derive(Debug)]
enum Error {
    Empty(String),
    Read(String),
    Write(String),
}

impl Error {
    fn code(&self) -> i32 {
        match self {
            Self::Empty(_) => 1,
            Self::Read(_) => 2,
            Self::Write(_) => 3,
        }
    }

    fn from_fix(err: FixError, paths: &FixPaths) -> Self {
        match err {
            FixError::EmptyInput => {
                Error::Empty(format!("файл {} пуст", paths.input.display()))
            }
            err @ FixError::Read { .. } => Error::Read(err.to_string()),
            err @ FixError::Write { .. } => Error::Write(err.to_string()),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty(msg) => write!(f, "{}", msg),
            Self::Read(msg) | Self::Write(msg) => write!(f, "IO error: {}", msg),
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<(), Error> {
    let args = Args::parse();
    let paths = FixPaths::new(args.input_file, args.output_file);

    let report =
        registrations_fixer::fix_file(&paths).map_err(|err| Error::from_fix(err, &paths))?;

    println!("Wrote {}", report.output.display());
    Ok(())
}

fn main() {
    init_logging();
    match run() {
        Ok(_) => {}
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.code());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn paths() -> FixPaths {
        FixPaths::new("public/in.csv", "public/out.csv")
    }

    #[test]
    fn test_empty_input_error() {
        let err = Error::from_fix(FixError::EmptyInput, &paths());

        assert_eq!(err.code(), 1);
        assert!(matches!(err, Error::Empty(_)));
        assert!(err.to_string().contains("public/in.csv"));
    }

    #[test]
    fn test_read_error() {
        let fix_err = FixError::Read {
            path: "public/in.csv".into(),
            source: io::Error::new(io::ErrorKind::NotFound, "not found"),
        };

        let err = Error::from_fix(fix_err, &paths());

        assert_eq!(err.code(), 2);
        let msg = err.to_string();
        assert!(msg.starts_with("IO error: "));
        assert!(msg.contains("public/in.csv"));
    }

    #[test]
    fn test_write_error() {
        let fix_err = FixError::Write {
            path: "public/out.csv".into(),
            source: io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        };

        let err = Error::from_fix(fix_err, &paths());

        assert_eq!(err.code(), 3);
        let msg = err.to_string();
        assert!(msg.starts_with("IO error: "));
        assert!(msg.contains("public/out.csv"));
    }

    #[test]
    fn test_default_paths() {
        let args = Args::parse_from(["registrations_fixer"]);

        assert_eq!(args.input_file, types::DEFAULT_INPUT_PATH);
        assert_eq!(args.output_file, types::DEFAULT_OUTPUT_PATH);
    }
}
