use std::io::{self, BufRead};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use pt_canon_lib::output::{display_form, text_to_plain, to_plain, trace_line};
use pt_canon_lib::sentence::strip_punctuation;
use pt_canon_lib::{canonicalize_text, reduce, Dictionary};
use serde::Serialize;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "pt-canon", about = "Reduce Portuguese word forms to their dictionary form")]
struct Cli {
    /// Word or line of text. If omitted, reads lines from stdin.
    input: Option<String>,

    /// Word list, one form per line. Defaults to the bundled sample list.
    #[arg(long, env = "PT_CANON_DICT")]
    dict: Option<PathBuf>,

    /// Print only the canonical forms ("?" for unknown words).
    #[arg(long)]
    plain: bool,

    /// Like --plain, with the first letter capitalized.
    #[arg(long, conflicts_with = "plain")]
    display: bool,

    /// Print the chain of rewrites for each word.
    #[arg(long, conflicts_with_all = ["plain", "display"])]
    trace: bool,

    /// Pretty-print JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();
    let dict = match cli.dict {
        Some(ref path) => Dictionary::load_or_empty(path),
        None => Dictionary::bundled(),
    };
    tracing::debug!(entries = dict.len(), "dictionary ready");

    match cli.input {
        Some(ref text) => process_line(text, &dict, &cli)?,
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("failed to read stdin")?;
                if !line.trim().is_empty() {
                    process_line(&line, &dict, &cli)?;
                }
            }
        }
    }
    Ok(())
}

fn process_line(line: &str, dict: &Dictionary, cli: &Cli) -> Result<()> {
    // A single token (amá-lo, Nuvens) is reduced as typed; anything with
    // spaces is split into words first.
    let has_spaces = line.trim().contains(char::is_whitespace);

    if has_spaces {
        let text = canonicalize_text(line, dict);
        if cli.trace {
            for word in &text.words {
                println!("{}", trace_line(&word.reduction));
            }
        } else if cli.plain {
            println!("{}", text_to_plain(&text));
        } else if cli.display {
            let words: Vec<String> = text
                .words
                .iter()
                .map(|w| display_form(to_plain(&w.reduction.outcome)))
                .collect();
            println!("{}", words.join(" "));
        } else {
            print_json(&text, cli.pretty)?;
        }
    } else {
        let reduction = reduce(strip_punctuation(line.trim()), dict);
        if cli.trace {
            println!("{}", trace_line(&reduction));
        } else if cli.plain {
            println!("{}", to_plain(&reduction.outcome));
        } else if cli.display {
            println!("{}", display_form(to_plain(&reduction.outcome)));
        } else {
            print_json(&reduction, cli.pretty)?;
        }
    }
    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)
    } else {
        serde_json::to_string(value)
    };
    println!("{}", json.context("JSON serialization failed")?);
    Ok(())
}
