//! Log collecting server
//!
//! Accepts TCP connections from socket loggers, echoes every received line
//! and keeps running statistics: totals per level, line lengths and the
//! number of lines received during the last hour.
//!
//! Run with: cargo run --example logger_stats_app -- 127.0.0.1 0 10 5

use clap::Parser;
use loggerlib::LogLevel;
use parking_lot::Mutex;
use std::io::{self, BufRead, BufReader};
use std::net::{TcpListener, TcpStream};
use std::process;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

const HOUR: Duration = Duration::from_secs(60 * 60);

#[derive(Parser)]
#[command(name = "logger_stats_app")]
#[command(about = "Collect log lines over TCP and print statistics", long_about = None)]
struct Args {
    /// Address to listen on
    host: String,

    /// Port to listen on (0 picks a free port)
    port: u16,

    /// Print statistics after every N received lines
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    every_n: u64,

    /// Print statistics every T seconds if new lines arrived
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    interval_secs: u64,
}

#[derive(Default)]
struct Stats {
    total: AtomicUsize,
    per_level: [AtomicUsize; 3],
    lengths: Mutex<Vec<usize>>,
    received_at: Mutex<Vec<Instant>>,
}

impl Stats {
    fn record(&self, line: &str) -> usize {
        let level = LogLevel::from_line(line);
        self.per_level[level as usize].fetch_add(1, Ordering::Relaxed);
        self.lengths.lock().push(line.len());
        self.received_at.lock().push(Instant::now());
        self.total.fetch_add(1, Ordering::Relaxed) + 1
    }

    fn print(&self) {
        let total = self.total.load(Ordering::Relaxed);

        let lengths = self.lengths.lock().clone();
        let min_len = lengths.iter().min().copied().unwrap_or(0);
        let max_len = lengths.iter().max().copied().unwrap_or(0);
        let avg_len = if lengths.is_empty() {
            0.0
        } else {
            lengths.iter().sum::<usize>() as f64 / lengths.len() as f64
        };

        let last_hour = self
            .received_at
            .lock()
            .iter()
            .filter(|at| at.elapsed() < HOUR)
            .count();

        println!("\n============ Statistics ============");
        println!("Total messages: {}", total);
        let per_level: Vec<String> = LogLevel::ALL
            .iter()
            .map(|level| {
                let count = self.per_level[*level as usize].load(Ordering::Relaxed);
                format!("{}: {}", level, count)
            })
            .collect();
        println!("{}", per_level.join(", "));
        println!("Last hour: {}", last_hour);
        println!(
            "Length - min: {}, max: {}, avg: {:.2}",
            min_len, max_len, avg_len
        );
        println!("====================================");
    }
}

fn main() {
    let args = Args::parse();

    let listener = match TcpListener::bind((args.host.as_str(), args.port)) {
        Ok(listener) => listener,
        Err(e) => {
            eprintln!("Error: failed to bind on {}:{}: {}", args.host, args.port, e);
            process::exit(1);
        }
    };

    match listener.local_addr() {
        Ok(addr) => println!("Listening on {}", addr),
        Err(e) => eprintln!("[LOGGER ERROR] cannot read local address: {}", e),
    }

    let stats = Arc::new(Stats::default());
    let running = Arc::new(AtomicBool::new(true));
    let timer = spawn_timer(
        Arc::clone(&stats),
        Arc::clone(&running),
        Duration::from_secs(args.interval_secs),
    );

    for conn in listener.incoming() {
        match conn {
            Ok(stream) => {
                let stats = Arc::clone(&stats);
                let every_n = args.every_n as usize;
                thread::spawn(move || handle_client(stream, &stats, every_n));
            }
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                eprintln!("[LOGGER ERROR] accept failed: {}", e);
                break;
            }
        }
    }

    running.store(false, Ordering::Relaxed);
    let _ = timer.join();
}

/// Print statistics periodically whenever the total has moved
fn spawn_timer(
    stats: Arc<Stats>,
    running: Arc<AtomicBool>,
    interval: Duration,
) -> thread::JoinHandle<()> {
    thread::spawn(move || {
        let mut last_total = 0;
        while running.load(Ordering::Relaxed) {
            thread::sleep(interval);
            let current = stats.total.load(Ordering::Relaxed);
            if current != last_total {
                stats.print();
                last_total = current;
            }
        }
    })
}

/// Lines may arrive split across reads; BufReader reassembles them
fn handle_client(stream: TcpStream, stats: &Stats, every_n: usize) {
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();

    loop {
        let line = match next_line(&mut reader, &mut buf) {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("[LOGGER ERROR] connection read failed: {}", e);
                break;
            }
        };

        println!("{}", line);
        if stats.record(&line) % every_n == 0 {
            stats.print();
        }
    }
}

/// Next line without its terminator, or `None` at end of stream.
///
/// Bytes that are not UTF-8 are replaced rather than ending the connection.
fn next_line(reader: &mut impl BufRead, buf: &mut Vec<u8>) -> io::Result<Option<String>> {
    buf.clear();
    if reader.read_until(b'\n', buf)? == 0 {
        return Ok(None);
    }

    if buf.ends_with(b"\n") {
        buf.pop();
        if buf.ends_with(b"\r") {
            buf.pop();
        }
    }

    Ok(Some(String::from_utf8_lossy(buf).into_owned()))
}
