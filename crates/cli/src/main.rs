//! # CLI - silt interactive shell
//!
//! A REPL-style command-line interface for the silt storage tree. Reads
//! commands from stdin, executes them against the tree, and prints results to
//! stdout. Designed for both interactive use and scripted testing (pipe
//! commands via stdin).
//!
//! ## Commands
//!
//! ```text
//! SET key value      Insert or update a key-value pair
//! GET key            Look up a key (prints value or "(nil)")
//! FLUSH              Seal the memtable as a new segment
//! MERGE a b          Merge segment a with newer segment b
//! SEGMENTS           Print the known segment ids, newest first
//! STATS              Print tree debug info
//! EXIT / QUIT        Shut down gracefully
//! ```
//!
//! Keys and values are stored as byte strings.
//!
//! ## Configuration
//!
//! All settings are controlled via environment variables:
//!
//! ```text
//! SILT_DIR           Tree directory              (default: "data/silt")
//! SILT_FLUSH_BYTES   Flush threshold in bytes    (default: 1000000)
//! ```
//!
//! ## Example
//!
//! ```text
//! $ cargo run -p cli
//! silt started (dir=data/silt, flush=1000000B, segments=0)
//! > SET name Alice
//! OK
//! > GET name
//! Alice
//! > EXIT
//! bye
//! ```
use anyhow::Result;
use std::io::{self, BufRead, Write};
use tree::{Options, Tree, Value};

/// Reads a configuration value from the environment, falling back to `default`.
fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Renders a fetched value for the terminal.
fn render(value: &Value) -> String {
    match value {
        Value::Int(i) => i.to_string(),
        Value::Float(f) => f.to_string(),
        Value::Symbol(name) => name.clone(),
        Value::Bytes(bytes) => String::from_utf8_lossy(bytes).into_owned(),
    }
}

fn main() -> Result<()> {
    let dir = env_or("SILT_DIR", "data/silt");
    let default_threshold = config::DEFAULT_THRESHOLD.to_string();
    let flush_bytes: usize = env_or("SILT_FLUSH_BYTES", &default_threshold)
        .parse()
        .unwrap_or(config::DEFAULT_THRESHOLD);

    let mut tree = Tree::open(&dir, Options::new().threshold(flush_bytes))?;

    println!(
        "silt started (dir={}, flush={}B, segments={})",
        dir,
        flush_bytes,
        tree.segments().len()
    );
    println!("Commands: SET key value | GET key | FLUSH | MERGE a b");
    println!("          SEGMENTS | STATS | EXIT");
    print!("> ");
    io::stdout().flush().ok();

    let stdin = io::stdin();

    for line in stdin.lock().lines() {
        let line = line?;
        let mut parts = line.split_whitespace();
        if let Some(cmd) = parts.next() {
            match cmd.to_uppercase().as_str() {
                "SET" => {
                    if let Some(k) = parts.next() {
                        let v: String = parts.collect::<Vec<&str>>().join(" ");
                        if v.is_empty() {
                            println!("ERR usage: SET key value");
                        } else {
                            match tree.put(k, v.as_str()) {
                                Ok(()) => println!("OK"),
                                Err(e) => println!("ERR set failed: {}", e),
                            }
                        }
                    } else {
                        println!("ERR usage: SET key value");
                    }
                }
                "GET" => {
                    if let Some(k) = parts.next() {
                        match tree.fetch(k) {
                            Ok(Some(v)) => println!("{}", render(&v)),
                            Ok(None) => println!("(nil)"),
                            Err(e) => println!("ERR read failed: {}", e),
                        }
                    } else {
                        println!("ERR usage: GET key");
                    }
                }
                "FLUSH" => match tree.flush() {
                    Ok(()) => println!("OK (segments={})", tree.segments().len()),
                    Err(e) => println!("ERR flush failed: {}", e),
                },
                "MERGE" => {
                    let ids = (parts.next(), parts.next());
                    match ids {
                        (Some(a), Some(b)) => match (a.parse::<u64>(), b.parse::<u64>()) {
                            (Ok(a), Ok(b)) => match tree.merge(a, b) {
                                Ok(()) => println!("OK (segments={})", tree.segments().len()),
                                Err(e) => println!("ERR merge failed: {}", e),
                            },
                            _ => println!("ERR merge ids must be integers"),
                        },
                        _ => println!("ERR usage: MERGE older_id newer_id"),
                    }
                }
                "SEGMENTS" => {
                    if tree.segments().is_empty() {
                        println!("(none)");
                    } else {
                        let ids: Vec<String> =
                            tree.segments().iter().map(|id| id.to_string()).collect();
                        println!("{}", ids.join(" "));
                    }
                }
                "STATS" => {
                    println!("{:?}", tree);
                }
                "EXIT" | "QUIT" => {
                    println!("bye");
                    break;
                }
                other => {
                    println!("unknown command: {}", other);
                }
            }
        }

        print!("> ");
        io::stdout().flush().ok();
    }

    Ok(())
}
