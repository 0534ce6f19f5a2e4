// Only compile UI module when TUI feature is enabled
#[cfg(feature = "tui")]
mod ui;

use anyhow::{bail, Result};
use std::env;
use tracing::info;

// Use library instead of local modules
use symbol_search::{init_tracing, load_catalog, search_scored, AppConfig, Catalog, LogOutput};

/// What the user asked for on the command line
#[derive(Debug, PartialEq, Eq)]
enum Command {
    Search(String),
    Lookup(String),
    Interactive,
}

impl Command {
    fn parse(args: &[String]) -> Result<Self> {
        match args.first().map(String::as_str) {
            Some("search") => Ok(Command::Search(args[1..].join(" "))),
            Some("lookup") => match args.get(1) {
                Some(symbol) => Ok(Command::Lookup(symbol.clone())),
                None => bail!("usage: symbol-search lookup <SYMBOL>"),
            },
            Some(other) => bail!("unknown command: {} (expected search, lookup)", other),
            None => Ok(Command::Interactive),
        }
    }

    /// The TUI draws on the alternate screen, so log lines must stay off the terminal
    fn log_output(&self) -> LogOutput {
        match self {
            Command::Interactive => LogOutput::Discard,
            _ => LogOutput::Stderr,
        }
    }
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().skip(1).collect();
    let command = Command::parse(&args)?;

    let config = AppConfig::load()?;
    init_tracing(&config.log_level, command.log_output());

    // The catalog is built once here and only borrowed afterwards
    let catalog = load_catalog(&config.catalog_path)?;
    info!(entities = catalog.len(), "catalog ready");

    match command {
        Command::Search(query) => run_search(&catalog, &query),
        Command::Lookup(symbol) => run_lookup(&catalog, &symbol),
        Command::Interactive => run_ui_mode(&catalog),
    }
}

fn run_search(catalog: &Catalog, query: &str) -> Result<()> {
    println!("🔍 Searching {} companies for {:?}", catalog.len(), query);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    let matches = search_scored(catalog, query);
    if matches.is_empty() {
        println!("(catalog is empty)");
    }

    for (rank, m) in matches.iter().enumerate() {
        println!(
            "{}. {:<12} {:<40} {} ({})",
            rank + 1,
            m.entity.symbol,
            m.entity.name,
            m.tier.as_str(),
            m.score()
        );
    }

    Ok(())
}

fn run_lookup(catalog: &Catalog, symbol: &str) -> Result<()> {
    match catalog.find_by_symbol(symbol) {
        Some(entity) => {
            println!("✓ {} → {} (id {})", entity.symbol, entity.name, entity.id);
            Ok(())
        }
        None => bail!("symbol not listed: {}", symbol),
    }
}

#[cfg(feature = "tui")]
fn run_ui_mode(catalog: &Catalog) -> Result<()> {
    let mut app = ui::App::new(catalog);
    ui::run_ui(&mut app)?;

    println!("\n✅ Search closed");

    Ok(())
}

#[cfg(not(feature = "tui"))]
fn run_ui_mode(_catalog: &Catalog) -> Result<()> {
    eprintln!("❌ TUI mode not available!");
    eprintln!("   Rebuild with: cargo build --features tui");
    eprintln!("   Or search directly: symbol-search search <query>");
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_search_joins_words() {
        let command = Command::parse(&args(&["search", "john", "keells"])).unwrap();
        assert_eq!(command, Command::Search("john keells".to_string()));
    }

    #[test]
    fn test_parse_lookup() {
        let command = Command::parse(&args(&["lookup", "JKH.N0000"])).unwrap();
        assert_eq!(command, Command::Lookup("JKH.N0000".to_string()));
    }

    #[test]
    fn test_usage_errors_come_before_catalog_load() {
        // parse never touches the filesystem, so these fail on arguments alone
        let err = Command::parse(&args(&["lookup"])).unwrap_err();
        assert!(err.to_string().contains("usage"));

        let err = Command::parse(&args(&["frobnicate"])).unwrap_err();
        assert!(err.to_string().contains("unknown command"));
    }

    #[test]
    fn test_interactive_mode_keeps_logs_off_screen() {
        let command = Command::parse(&args(&[])).unwrap();

        assert_eq!(command, Command::Interactive);
        assert_eq!(command.log_output(), LogOutput::Discard);
        assert_eq!(
            Command::Search(String::new()).log_output(),
            LogOutput::Stderr
        );
    }
}
