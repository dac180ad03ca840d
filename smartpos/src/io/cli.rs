use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
    #[arg(short, long, value_enum, default_value = "session")]
    pub mode: Mode,
}

#[derive(ValueEnum, Clone, Debug, Copy, PartialEq)]
pub enum Mode {
    /// Input is a design session: a starting design or booth request and a list of actions
    #[value(alias = "ses")]
    Session,
    /// Input is a single placement request
    #[value(alias = "plc")]
    Place,
}
