//! CNLang CLI - Command line interface
//!
//! Drives the value runtime from the shell; all settings come from cnlang.json

use clap::{Parser, Subcommand};
use cnlang_config::LogLevel;
use cnlang_core::runtime::{Builtin, Console, Value};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::process;
use tracing::info;

mod config;
mod demo;
mod eval;
mod logging;

use crate::config::CliError;
use crate::logging::LogFormat;

#[derive(Parser)]
#[command(
    name = "cnlang",
    about = "CNLang value runtime - demo program, line input and operator evaluation",
    version = "0.1.0"
)]
struct Cli {
    /// Configuration file path (default: ./cnlang.json)
    #[arg(long, global = true, value_name = "PATH", default_value = "cnlang.json")]
    config: PathBuf,

    /// Log output format
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Compact)]
    log_format: LogFormat,

    /// Log level: silent, error, warn, info, debug, trace (overrides config)
    #[arg(long, global = true, value_name = "LEVEL", value_parser = config::parse_log_level)]
    log_level: Option<LogLevel>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the bundled sample program
    Demo,
    /// Read stdin lines into an array, then print it and its length
    Lines,
    /// Evaluate `<LEFT> <OP> <RIGHT>` or `<OP> <OPERAND>` on literals
    Eval {
        #[arg(required = true, num_args = 2..=3, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let mut config = config::load(&cli.config)?;
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }

    logging::init(&config.logging, cli.log_format);
    info!(target: "cnlang::cli", config = %cli.config.display(), "configuration loaded");

    let mut console = Console::stdio(&config.format, config.console.clone());

    match cli.command {
        Command::Demo => demo::run(&mut console)?,
        Command::Lines => handle_lines(&mut console)?,
        Command::Eval { args } => {
            let value = eval::eval(&args)?;
            console.print(&value)?;
        }
    }
    Ok(())
}

/// 逐行读取直到输入结束，打印数组与长度
fn handle_lines<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), CliError> {
    let mut args = [Builtin::CreateArray.call(console, &mut []), Value::Null];
    loop {
        let line = console.read_line();
        if line.is_null() {
            break;
        }
        args[1] = line;
        Builtin::ArrayPush.call(console, &mut args);
    }

    let length = Builtin::ArrayLength.call(console, &mut args[..1]);
    console.print(&args[0])?;
    console.print(&length)?;
    Ok(())
}
