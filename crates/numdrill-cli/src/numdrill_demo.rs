//! Demo runner for the numdrill exercises
//!
//! Usage: numdrill_demo [TOPIC...]
//!
//! Topics:
//!   collatz, digits, classify, evens, difference, missing,
//!   palindrome, reverse, second-largest, unique, all (default)
//!
//! Example: numdrill_demo collatz palindrome
//!
//! Set RUST_LOG (e.g. RUST_LOG=debug) to see library logs on stderr.

mod demos;

use demos::Topic;
use std::env;
use tracing::debug;
use tracing_subscriber::EnvFilter;

struct Args {
    topics: Vec<Topic>,
}

fn print_usage(program: &str) {
    eprintln!("Usage: {} [TOPIC...]", program);
    eprintln!();
    eprintln!("Topics:");
    for topic in Topic::ALL {
        eprintln!("  {:16} {}", topic.name(), topic.description());
    }
    eprintln!("  {:16} Run every demo (default)", "all");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --help, -h       Show this help message");
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().collect();

    let mut topics: Vec<Topic> = Vec::new();

    for arg in args.iter().skip(1) {
        match arg.as_str() {
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            "all" => topics.extend(Topic::ALL),
            name if !name.starts_with('-') => {
                let topic =
                    Topic::from_name(name).ok_or_else(|| format!("Unknown topic: {}", name))?;
                topics.push(topic);
            }
            other => return Err(format!("Unknown option: {}", other)),
        }
    }

    if topics.is_empty() {
        topics.extend(Topic::ALL);
    }

    Ok(Args { topics })
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let args = match parse_args() {
        Ok(a) => a,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_usage(&env::args().next().unwrap_or_default());
            std::process::exit(1);
        }
    };

    debug!(topics = args.topics.len(), "running demos");

    for (i, topic) in args.topics.iter().enumerate() {
        if i > 0 {
            println!();
        }
        topic.run();
    }
}
