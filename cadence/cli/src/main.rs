use std::io::{self, Read};

use cadence_lib::{SofteningLevel, format_with_level};
use clap::Parser;

/// Rewrite assistant text for natural-sounding speech output.
///
/// Strips markdown, flattens parentheticals and newlines, and softens
/// sentence-final periods so a TTS engine does not pause unnaturally.
#[derive(Parser)]
#[command(name = "cadence")]
#[command(about = "Rewrite text for natural-sounding speech output", long_about = None)]
#[command(version)]
struct Cli {
    /// Text to format (reads from stdin if not provided)
    text: Vec<String>,

    /// Softening level: off, low, med, or high
    #[arg(short, long, default_value_t = SofteningLevel::default())]
    level: SofteningLevel,
}

/// Reads text from stdin with a 10,000 character limit.
///
/// Exits with an error message if the input is empty.
fn read_from_stdin() -> io::Result<String> {
    let mut buffer = String::new();
    let mut handle = io::stdin().take(10_000);
    handle.read_to_string(&mut buffer)?;
    let text = buffer.trim().to_string();

    if text.is_empty() {
        eprintln!("Error: No input provided");
        eprintln!("Usage: cadence <text> or echo \"text\" | cadence");
        std::process::exit(1);
    }

    Ok(text)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let message = if cli.text.is_empty() {
        read_from_stdin()?
    } else {
        cli.text.join(" ")
    };

    println!("{}", format_with_level(&message, cli.level));

    Ok(())
}
