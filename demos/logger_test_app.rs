//! Interactive logging demo
//!
//! Reads messages and levels from stdin and hands them to a worker thread
//! through a bounded queue; the worker writes them to the log file.
//!
//! Run with: cargo run --example logger_test_app -- app.log 0

use clap::Parser;
use crossbeam_channel::bounded;
use loggerlib::prelude::*;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process;
use std::thread;

/// Entries waiting for the worker before the prompt blocks
const QUEUE_CAPACITY: usize = 64;

#[derive(Parser)]
#[command(name = "logger_test_app")]
#[command(about = "Write interactively entered messages to a log file", long_about = None)]
struct Args {
    /// Log file to append to
    logfile: PathBuf,

    /// Level used when none is entered (0=DEBUG, 1=INFO, 2=ERROR or a name)
    #[arg(default_value = "1")]
    default_level: LogLevel,
}

struct QueuedEntry {
    message: String,
    level: LogLevel,
}

fn prompt(text: &str) -> io::Result<()> {
    print!("{}", text);
    io::stdout().flush()
}

fn main() {
    let args = Args::parse();

    let logger = match Logger::file(&args.logfile, args.default_level) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(logger, args.default_level) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(logger: Logger, default_level: LogLevel) -> io::Result<()> {
    let (sender, receiver) = bounded::<QueuedEntry>(QUEUE_CAPACITY);

    // The worker drains the queue until every sender is gone
    let worker = thread::spawn(move || {
        for entry in receiver {
            logger.log(entry.level, &entry.message);
        }
    });

    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        prompt("Enter message ('exit'): ")?;
        let message = match lines.next() {
            Some(line) => line?,
            None => break,
        };
        if message == "exit" {
            break;
        }

        prompt(&format!(
            "Level (0=DEBUG,1=INFO,2=ERROR) [default {}]: ",
            default_level as u8
        ))?;
        let level = match lines.next() {
            Some(line) => parse_level(&line?, default_level),
            None => default_level,
        };

        if sender.send(QueuedEntry { message, level }).is_err() {
            eprintln!("[LOGGER ERROR] worker stopped, message discarded");
            break;
        }
    }

    drop(sender);
    if worker.join().is_err() {
        eprintln!("[LOGGER ERROR] worker thread panicked");
    }

    Ok(())
}

fn parse_level(input: &str, default_level: LogLevel) -> LogLevel {
    if input.trim().is_empty() {
        return default_level;
    }

    match input.parse() {
        Ok(level) => level,
        Err(e) => {
            eprintln!("{}, using {}", e, default_level);
            default_level
        }
    }
}
