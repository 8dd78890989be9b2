//! Interactive driver: reads command lines from stdin, prints replies.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use tabletop_robot::CommandProcessor;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the command protocol.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut processor = CommandProcessor::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "{}", processor.startup_message())?;

    for line in io::stdin().lock().lines() {
        let reply = processor.process_line(&line?);
        if !reply.is_empty() {
            writeln!(out, "{reply}")?;
        }
    }
    Ok(())
}
