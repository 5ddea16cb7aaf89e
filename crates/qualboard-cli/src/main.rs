//! qualboard - console view of the member-recognition roster.
//!
//! Loads the qualification sheet once at startup (falling back to the
//! embedded seed data on any failure), applies the filter selection
//! given on the command line, and renders the result as text or JSON.

mod render;

use std::io;

use anyhow::{bail, Context, Result};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use qualboard_core::{
    query, seed_roster, FilterSpec, RosterLoader, SheetClient, SortKey, SHEET_CSV_URL,
};

/// Environment variable overriding the built-in sheet URL.
const SHEET_URL_ENV: &str = "QUALBOARD_SHEET_URL";

const USAGE: &str = "\
qualboard - member recognition roster

USAGE:
    qualboard [OPTIONS]

OPTIONS:
    --search <text>        Free-text search (name, city, rank, reward, promo, id)
    --promo <name>         Show only one promo (default: All)
    --month <YYYY-MM>      Show only one qualification month (default: All)
    --sort <recent|name>   Display order (default: recent)
    --url <url>            Sheet CSV URL (overrides QUALBOARD_SHEET_URL)
    --seed                 Skip the fetch and use the embedded seed data
    --json                 Emit the roster and query result as JSON
    --help                 Show this help
";

/// Parsed command-line options.
#[derive(Debug, Clone, Default, PartialEq)]
struct CliOptions {
    spec: FilterSpec,
    url: Option<String>,
    use_seed: bool,
    json: bool,
    help: bool,
}

impl CliOptions {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Self> {
        let mut opts = Self::default();
        let mut args = args.into_iter();

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--search" => opts.spec.search_text = expect_value(&arg, args.next())?,
                "--promo" => opts.spec.promo_key = expect_value(&arg, args.next())?,
                "--month" => opts.spec.month_key = expect_value(&arg, args.next())?,
                "--sort" => {
                    opts.spec.sort_key = match expect_value(&arg, args.next())?.as_str() {
                        "recent" => SortKey::Recent,
                        "name" => SortKey::Name,
                        other => bail!("unknown sort key '{}' (expected recent|name)", other),
                    }
                }
                "--url" => opts.url = Some(expect_value(&arg, args.next())?),
                "--seed" => opts.use_seed = true,
                "--json" => opts.json = true,
                "--help" | "-h" => opts.help = true,
                other => bail!("unknown option '{}'\n\n{}", other, USAGE),
            }
        }
        Ok(opts)
    }
}

fn expect_value(flag: &str, value: Option<String>) -> Result<String> {
    value.with_context(|| format!("option '{}' requires a value", flag))
}

/// Initialize the tracing subscriber for logging
fn init_tracing() {
    // Use RUST_LOG env var to control log level (e.g., RUST_LOG=debug)
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    init_tracing();

    let opts = CliOptions::parse(std::env::args().skip(1))?;
    if opts.help {
        print!("{}", USAGE);
        return Ok(());
    }

    let roster = if opts.use_seed {
        info!("Using embedded seed roster");
        seed_roster()
    } else {
        let url = opts
            .url
            .clone()
            .or_else(|| std::env::var(SHEET_URL_ENV).ok())
            .unwrap_or_else(|| SHEET_CSV_URL.to_string());

        let client = SheetClient::new().context("Failed to build HTTP client")?;
        let loader = RosterLoader::new(client, url);
        loader.load(None).await
    };

    let output = query(&roster, &opts.spec);

    if opts.json {
        let doc = serde_json::json!({
            "source": roster.source,
            "syncedAt": roster.synced_at,
            "lastError": roster.last_error,
            "members": output.members,
            "facets": output.facets,
        });
        println!("{}", serde_json::to_string_pretty(&doc)?);
    } else {
        print!("{}", render::render(&roster, &output, &opts.spec));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions> {
        CliOptions::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_defaults() {
        let opts = parse(&[]).unwrap();
        assert_eq!(opts.spec, FilterSpec::default());
        assert!(!opts.use_seed);
        assert!(!opts.json);
    }

    #[test]
    fn test_parse_full_filter_spec() {
        let opts = parse(&[
            "--search", "bantul", "--promo", "Promo Pribadi", "--month", "2025-10", "--sort",
            "name", "--seed", "--json",
        ])
        .unwrap();
        assert_eq!(opts.spec.search_text, "bantul");
        assert_eq!(opts.spec.promo_key, "Promo Pribadi");
        assert_eq!(opts.spec.month_key, "2025-10");
        assert_eq!(opts.spec.sort_key, SortKey::Name);
        assert!(opts.use_seed);
        assert!(opts.json);
    }

    #[test]
    fn test_parse_rejects_unknown_sort() {
        assert!(parse(&["--sort", "oldest"]).is_err());
    }

    #[test]
    fn test_parse_rejects_missing_value() {
        assert!(parse(&["--search"]).is_err());
    }

    #[test]
    fn test_parse_rejects_unknown_flag() {
        assert!(parse(&["--frobnicate"]).is_err());
    }
}
