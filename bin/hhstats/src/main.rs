//! Hand-History Statistics Binary
//!
//! Normalizes one or more session files of canonical hand text, tabulates
//! per-player statistics, and prints the rolled-up standings.
//!
//! Options: --aliases, --ledger, --player, --by-size, --json
use anyhow::Context;
use clap::Parser;
use hhs_core::Chips;
use hhs_records::Aliases;
use hhs_records::Normalizer;
use hhs_stats::Accumulator;
use hhs_stats::Corpus;
use hhs_stats::Rates;
use hhs_stats::Standings;
use hhs_stats::Summary;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about = "Per-player VPIP, PFR, 3-bet, c-bet and showdown statistics", long_about = None)]
struct Args {
    /// Session files; hands are separated by blank lines
    #[arg(required = true)]
    files: Vec<PathBuf>,
    /// Player registry JSON mapping names and aliases to canonical ids
    #[arg(long)]
    aliases: Option<PathBuf>,
    /// JSON object of net chips per player, credited after tabulation
    #[arg(long)]
    ledger: Option<PathBuf>,
    /// Only report these players (repeatable)
    #[arg(long = "player")]
    players: Vec<String>,
    /// One table per seat count instead of one overall table
    #[arg(long)]
    by_size: bool,
    /// Emit JSON rows instead of a plain table
    #[arg(long)]
    json: bool,
}

#[derive(serde::Serialize)]
struct Row<'a> {
    player: &'a str,
    #[serde(flatten)]
    counters: &'a Accumulator,
    #[serde(flatten)]
    rates: Rates,
}

impl<'a> From<(&'a str, &'a Accumulator)> for Row<'a> {
    fn from((player, counters): (&'a str, &'a Accumulator)) -> Self {
        Self {
            player,
            counters,
            rates: counters.rates(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    hhs_core::log();
    let args = Args::parse();
    let aliases = match args.aliases {
        Some(ref path) => read_json::<Aliases>(path)?,
        None => Aliases::default(),
    };
    log::info!("loaded {} aliases", aliases.len());
    let normalizer = Normalizer::from(&aliases);
    let mut summary = Summary::default();
    let mut overall = Standings::default();
    let mut sizes = BTreeMap::<usize, Standings>::new();
    for path in args.files.iter() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading session {}", path.display()))?;
        let corpus = Corpus::normalize(&hands(&text), normalizer);
        log::info!("{}: {}", path.display(), corpus.summary());
        summary = summary + corpus.summary();
        overall += corpus.table();
        if args.by_size {
            for (size, table) in corpus.tables_by_size() {
                *sizes.entry(size).or_default() += table;
            }
        }
    }
    if let Some(ref path) = args.ledger {
        for (player, chips) in read_json::<BTreeMap<String, Chips>>(path)? {
            overall.credit(aliases.resolve(&player), chips);
        }
    }
    if !args.players.is_empty() {
        let players = args
            .players
            .iter()
            .map(|p| aliases.resolve(p).to_string())
            .collect::<Vec<_>>();
        overall.retain(&players);
        sizes.values_mut().for_each(|table| table.retain(&players));
    }
    match (args.by_size, args.json) {
        (false, false) => print!("{}", overall),
        (false, true) => println!("{}", serde_json::to_string_pretty(&rows(&overall))?),
        (true, false) => sizes.iter().for_each(|(size, table)| {
            println!("{}-max", size);
            print!("{}", table);
        }),
        (true, true) => {
            let tables = sizes
                .iter()
                .map(|(size, table)| (*size, rows(table)))
                .collect::<BTreeMap<_, _>>();
            println!("{}", serde_json::to_string_pretty(&tables)?);
        }
    }
    log::info!("{}", summary);
    Ok(())
}

/// Hand texts of a session, split on blank lines.
fn hands(text: &str) -> Vec<String> {
    text.lines()
        .collect::<Vec<&str>>()
        .split(|line| line.trim().is_empty())
        .filter(|block| !block.is_empty())
        .map(|block| block.join("\n"))
        .collect()
}

fn rows(table: &Standings) -> Vec<Row<'_>> {
    table.ranked().into_iter().map(Row::from).collect()
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let file = std::fs::File::open(path).with_context(|| format!("opening {}", path.display()))?;
    serde_json::from_reader(std::io::BufReader::new(file))
        .with_context(|| format!("parsing {}", path.display()))
}
