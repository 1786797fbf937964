//! Core type aliases, traits, and constants for hand-history statistics.
//!
//! This crate provides the foundational types and table parameters shared
//! by the normalizer and the statistics engine.

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Stack sizes, bet amounts, and net results in table chips.
pub type Chips = i64;
/// Canonical player identifier as it appears in seat lines after aliasing.
pub type PlayerId = String;
/// Sequential hand identifier within a session.
pub type HandId = u64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TABLE PARAMETERS
// Position vocabularies exist for 2 through 9 seats.
// ============================================================================
/// Fewest seats a hand can be dealt to.
pub const MIN_SEATS: usize = 2;
/// Most seats a position vocabulary is defined for.
pub const MAX_SEATS: usize = 9;
/// Decimal places kept in derived percentages.
pub const RATE_DECIMALS: i32 = 2;

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "server")]
pub fn log() {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Stderr,
        simplelog::ColorChoice::Auto,
    );
    let mut loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![term];
    match logfile() {
        Ok(file) => loggers.push(simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            config,
            file,
        )),
        Err(e) => eprintln!("file logging disabled: {}", e),
    }
    if let Err(e) = simplelog::CombinedLogger::init(loggers) {
        eprintln!("logger already initialized: {}", e);
    }
}

/// Opens `logs/<unix-seconds>.log`, creating the directory if needed.
#[cfg(feature = "server")]
fn logfile() -> std::io::Result<std::fs::File> {
    std::fs::create_dir_all("logs")?;
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    std::fs::File::create(format!("logs/{}.log", time))
}

/// Rounds a ratio to a percentage with [`RATE_DECIMALS`] places.
/// Empty denominators yield zero.
pub fn percent(count: u64, hands: u64) -> f64 {
    if hands == 0 {
        0.0
    } else {
        let scale = 10f64.powi(RATE_DECIMALS);
        (count as f64 / hands as f64 * 100.0 * scale).round() / scale
    }
}
