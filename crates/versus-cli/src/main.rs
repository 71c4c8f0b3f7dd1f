//! Command-line scanner for Latin verse.
//!
//! Reads a poem from a file or standard input, scans it, and prints each
//! verse with syllable bars and a rhythm row underneath, or the whole
//! result as JSON.

use std::io::Read;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use versus_core::{scan, Poem, Verse};

/// CLI arguments
#[derive(Parser)]
#[command(name = "versus")]
#[command(about = "Scan Latin verse and report its meter")]
#[command(version)]
struct Cli {
    /// Input file; reads standard input when absent or "-"
    input: Option<PathBuf>,

    /// Print the scanned poem as JSON
    #[arg(short, long)]
    json: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let text = read_input(cli.input.as_deref())?;
    debug!(bytes = text.len(), "input read");

    let poem = scan(&text);

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&poem)?);
    } else {
        print!("{}", render(&poem));
    }

    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read standard input")?;
            Ok(text)
        }
    }
}

fn render(poem: &Poem) -> String {
    let mut out = String::new();
    for verse in &poem.verses {
        out.push_str(&render_verse(verse));
        out.push('\n');
    }
    out.push_str(&format!("meter: {}\n", poem.kind));
    out
}

// Prints the verse line with a bar after every syllable but the last, and
// a second row carrying each syllable's quantity glyph under its middle.
// Bars shift the line right, so a syllable's display span is its char span
// offset by the number of bars already printed.
fn render_verse(verse: &Verse) -> String {
    let chars: Vec<char> = verse.line.chars().collect();
    let bars: Vec<usize> = verse
        .syllables
        .iter()
        .take(verse.syllables.len().saturating_sub(1))
        .map(|s| s.end)
        .collect();

    let mut line = String::with_capacity(chars.len() + bars.len());
    for (i, &c) in chars.iter().enumerate() {
        line.push(c);
        if bars.contains(&(i + 1)) {
            line.push('|');
        }
    }

    let mut rhythm = vec![' '; chars.len() + bars.len()];
    for (k, syllable) in verse.syllables.iter().enumerate() {
        let begin = syllable.begin + k;
        let end = syllable.end + k;
        let mid = (begin + end - 1) / 2;
        if let Some(cell) = rhythm.get_mut(mid) {
            *cell = syllable.quantity.glyph();
        }
    }
    let rhythm: String = rhythm.into_iter().collect();

    format!("{line}\n{}\n", rhythm.trim_end())
}
