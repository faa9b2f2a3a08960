// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;

use anyhow::{bail, Context, Result};
use the_conveyor::config::{load_and_validate_config, PipelineBuilder};
use the_conveyor::engine::Seed;
use the_conveyor::ports::Value;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: {} <pipeline.yaml|pipeline.toml> [key=value ...]", args[0]);
        eprintln!("Example: {} configs/text-pipeline.yaml \"text=HelLo WorLD\"", args[0]);
        eprintln!("Example: {} configs/threshold.yaml text=short threshold=10", args[0]);
        std::process::exit(1);
    }

    let config_file = &args[1];
    let config = load_and_validate_config(config_file)
        .with_context(|| format!("Failed to load {}", config_file))?;

    let mut seed: Seed = config.seed.clone();
    for pair in &args[2..] {
        let (key, value) = parse_seed_pair(pair)?;
        seed.insert(key, value);
    }

    let mut pipeline = PipelineBuilder::from_config(&config)
        .with_context(|| format!("Failed to build pipeline from {}", config_file))?;
    let outputs = pipeline.run(seed).context("Pipeline run failed")?;

    println!("{}", serde_json::to_string_pretty(&outputs)?);

    Ok(())
}

/// `key=value`; values that read as integers become [`Value::Integer`].
fn parse_seed_pair(pair: &str) -> Result<(String, Value)> {
    let Some((key, value)) = pair.split_once('=') else {
        bail!("Seed argument '{}' is not of the form key=value", pair);
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("Seed argument '{}' has an empty key", pair);
    }
    Ok((key.to_string(), Value::parse(value)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_seed_pair() {
        assert_eq!(
            parse_seed_pair("text=HelLo WorLD").unwrap(),
            ("text".to_string(), Value::from("HelLo WorLD"))
        );
        assert_eq!(
            parse_seed_pair("threshold=10").unwrap(),
            ("threshold".to_string(), Value::Integer(10))
        );
        assert_eq!(
            parse_seed_pair("text=a=b").unwrap(),
            ("text".to_string(), Value::from("a=b"))
        );
        assert!(parse_seed_pair("no-separator").is_err());
        assert!(parse_seed_pair("=value").is_err());
    }
}
