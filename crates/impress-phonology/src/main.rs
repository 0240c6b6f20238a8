//! impress-phonology CLI
//!
//! Natural class lookup, common features, and set comparison from the
//! command line.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use impress_phonology::{
    common_features, compare, natural_class, parse_constraints, render_common_features,
    render_comparison, render_natural_class, render_unrecognised, split_segment_input,
    FeatureTable, PhonologyConfig, SegmentSet,
};

#[derive(Parser)]
#[command(author, version, about = "Distinctive feature queries", long_about = None)]
struct Cli {
    /// Config file (TOML or JSON)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List every segment in the feature table
    Segments,
    /// Segments matching all constraints, e.g. `+nasal -voice`
    Class {
        #[arg(required = true, allow_hyphen_values = true)]
        constraints: Vec<String>,
    },
    /// Features shared by every segment in a list, e.g. `m, n, ŋ`
    Common {
        segments: String,
    },
    /// Features distinguishing set A from set B
    Compare {
        set_a: String,
        set_b: String,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => PhonologyConfig::default(),
    };
    let table = FeatureTable::standard();

    match cli.command {
        Command::Segments => {
            let all = table.all_segments();
            emit(cli.json, &all, Some(all.to_string()))?;
        }
        Command::Class { constraints } => {
            let constraints = parse_constraints(&constraints.join(" "))?;
            let class = natural_class(table, &constraints);
            let text = render_natural_class(&constraints, &class);
            emit(cli.json, &class, Some(text))?;
        }
        Command::Common { segments } => {
            let segments = read_segments(table, &segments, &config);
            let profile = common_features(table, &segments);
            let text = render_common_features(&segments, &profile);
            emit(cli.json, &profile, text)?;
        }
        Command::Compare { set_a, set_b } => {
            let a = read_segments(table, &set_a, &config);
            let b = read_segments(table, &set_b, &config);
            let result = compare(table, &a, &b);
            let text = render_comparison(&result);
            emit(cli.json, &result, text)?;
        }
    }

    Ok(())
}

fn load_config(path: &Path) -> Result<PhonologyConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let config = match path.extension().and_then(|e| e.to_str()) {
        Some("toml") => PhonologyConfig::from_toml(&content)?,
        _ => PhonologyConfig::from_json(&content)?,
    };
    tracing::info!("Loaded config from {:?}", path);
    Ok(config)
}

/// Split and validate a segment list, warning about unknown symbols.
fn read_segments(table: &FeatureTable, input: &str, config: &PhonologyConfig) -> SegmentSet {
    let tokens = split_segment_input(input, &config.input);
    if let Some(warning) = render_unrecognised(&table.unrecognised(&tokens)) {
        eprintln!("{}", warning);
    }
    table.validate(&tokens)
}

fn emit<T: Serialize>(json: bool, value: &T, text: Option<String>) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else if let Some(text) = text {
        println!("{}", text);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_accepts_negative_constraints() {
        let cli = Cli::try_parse_from(["impress-phonology", "class", "+nasal", "-voice"]).unwrap();
        match cli.command {
            Command::Class { constraints } => {
                assert_eq!(constraints, vec!["+nasal", "-voice"])
            }
            _ => panic!("Expected class command"),
        }
    }

    #[test]
    fn class_with_only_negative_constraints() {
        let cli = Cli::try_parse_from(["impress-phonology", "class", "-voice", "-nasal"]).unwrap();
        let Command::Class { constraints } = cli.command else {
            panic!("Expected class command");
        };
        let parsed = parse_constraints(&constraints.join(" ")).unwrap();
        assert_eq!(parsed.to_string(), "-nasal -voice");
    }

    #[test]
    fn class_requires_constraints() {
        assert!(Cli::try_parse_from(["impress-phonology", "class"]).is_err());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["impress-phonology", "compare", "m", "n", "--json"]).unwrap();
        assert!(cli.json);
    }
}
