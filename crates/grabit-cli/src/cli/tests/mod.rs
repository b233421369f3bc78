//! CLI parse tests.

use super::{argv, Cli};
use clap::Parser;
use std::ffi::OsString;

pub(super) fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(argv::normalize(args.iter().map(OsString::from))).unwrap()
}

pub(super) fn parse_err(args: &[&str]) -> clap::Error {
    Cli::try_parse_from(argv::normalize(args.iter().map(OsString::from))).unwrap_err()
}
