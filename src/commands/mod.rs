//! # CLI Commands
//!
//! Contains modules that run the various modes of the command line tool.
//! Everything here is glue: the engine in `img` does the work, these print the results
//! and write the files.

pub mod info;
pub mod extract;

use colored::Colorize;
use crate::img;

#[derive(thiserror::Error,Debug)]
pub enum CommandError {
    #[error("Command could not be interpreted")]
    InvalidCommand,
    #[error("File not found")]
    FileNotFound,
    #[error("Automatic track extraction failed at track {0}")]
    EmptyExtraction(usize)
}

/// Exit codes of the command line tool, one per fatal condition.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
    /// clap uses this for argument errors
    pub const USAGE: i32 = 2;
    pub const UNKNOWN_FORMAT: i32 = 3;
    pub const NON_SEQUENTIAL: i32 = 4;
    pub const MISALIGNED: i32 = 5;
    pub const EMPTY_EXTRACTION: i32 = 6;
    pub const SIGNATURE_NOT_FOUND: i32 = 7;
}

/// Map an error that reached the top level to the process exit code.
pub fn exit_code_for(e: &(dyn std::error::Error + 'static)) -> i32 {
    if let Some(img_err) = e.downcast_ref::<img::Error>() {
        return match img_err {
            img::Error::UnknownFormat => exit_code::UNKNOWN_FORMAT,
            img::Error::NonSequentialBoundaries { .. } => exit_code::NON_SEQUENTIAL,
            img::Error::MisalignedBoundary { .. } => exit_code::MISALIGNED,
            img::Error::SignatureNotFound(_) => exit_code::SIGNATURE_NOT_FOUND
        };
    }
    if let Some(cmd_err) = e.downcast_ref::<CommandError>() {
        return match cmd_err {
            CommandError::EmptyExtraction(_) => exit_code::EMPTY_EXTRACTION,
            CommandError::InvalidCommand => exit_code::USAGE,
            CommandError::FileNotFound => exit_code::FAILURE
        };
    }
    exit_code::FAILURE
}

/// Highlight a status word if stdout is a terminal.
fn status(word: &str,ok: bool) -> String {
    if !atty::is(atty::Stream::Stdout) {
        return word.to_string();
    }
    match ok {
        true => word.green().to_string(),
        false => word.red().bold().to_string()
    }
}

#[test]
fn test_exit_codes() {
    let e: Box<dyn std::error::Error> = Box::new(img::Error::UnknownFormat);
    assert_eq!(exit_code_for(e.as_ref()),3);
    let e: Box<dyn std::error::Error> = Box::new(CommandError::EmptyExtraction(2));
    assert_eq!(exit_code_for(e.as_ref()),6);
    let e: Box<dyn std::error::Error> = Box::new(std::io::Error::from(std::io::ErrorKind::NotFound));
    assert_eq!(exit_code_for(e.as_ref()),1);
}
