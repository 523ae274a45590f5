use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hanzi_spell::{loader, Config, Lookup};

/// Correct pinyin syllables and list matching characters.
#[derive(Parser, Debug)]
#[command(name = "hanzi-spell", version, about)]
struct Args {
    /// Syllable frequency table (`syllable,count`).
    #[arg(long, value_name = "CSV")]
    syllables: PathBuf,

    /// Character ranking table (`frequency_rank,character,pinyin`).
    #[arg(long, value_name = "CSV")]
    characters: PathBuf,

    /// Engine configuration.
    #[arg(long, value_name = "TOML")]
    config: Option<PathBuf>,

    /// Show at most this many characters per syllable.
    #[arg(long)]
    page: Option<usize>,

    /// Syllables to look up. Reads standard input when empty.
    inputs: Vec<String>,
}

fn print_suggestion(lookup: &Lookup<'_>, raw: &str, out: &mut impl Write) -> io::Result<()> {
    let suggestion = match lookup.resolve(raw) {
        Ok(s) => s,
        Err(err) => return writeln!(out, "{}: {err}", raw.trim()),
    };

    let page = lookup.config().page_size.unwrap_or(usize::MAX);
    let listed = suggestion
        .characters
        .iter()
        .take(page)
        .enumerate()
        .map(|(i, c)| format!("{}.{c}", i + 1))
        .collect::<Vec<_>>()
        .join(" ");

    if suggestion.input == suggestion.corrected {
        writeln!(out, "{}: {listed}", suggestion.corrected)
    } else {
        writeln!(out, "{} -> {}: {listed}", suggestion.input, suggestion.corrected)
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => Config::load_toml(path)?,
        None => Config::default(),
    };
    if args.page.is_some() {
        config.page_size = args.page;
    }

    let table = loader::load_frequencies(&args.syllables, config.duplicates)
        .with_context(|| format!("loading {}", args.syllables.display()))?;
    let index = loader::load_characters(&args.characters)
        .with_context(|| format!("loading {}", args.characters.display()))?;
    let lookup = Lookup::with_config(&table, &index, config);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !args.inputs.is_empty() {
        for raw in &args.inputs {
            print_suggestion(&lookup, raw, &mut out)?;
        }
        return Ok(());
    }

    for line in io::stdin().lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        print_suggestion(&lookup, &line, &mut out)?;
        out.flush()?;
    }
    Ok(())
}
