use anyhow::Context;
use coin_registry_core::{init_registry, CoinRegistry, OutputFormat, PathIndex, RegistryCore};
use serde_json::json;

fn main() -> anyhow::Result<()> {
    let RegistryCore {
        registry,
        config,
        audit: report,
    } = init_registry().context("failed to initialize coin registry")?;
    let coin = config.default_coin;
    let record = coin.record();
    let path = coin
        .parsed_derivation_path()
        .with_context(|| format!("bad derivation path for {}", coin))?;

    match config.output {
        OutputFormat::Json => {
            let out = json!({
                "selected": record,
                "audit": report,
                "coins": registry.iter().collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Text => {
            println!("Coin Registry ({} coins):\n", registry.len());
            println!("  Selected Coin: {} ({})", record.display_name, record.short_id);
            println!("  Identifier: {}", record.identifier);
            println!("  Symbol: {}", record.symbol);
            println!("  Decimals: {}", record.decimals);
            println!("  SLIP-44: {}", record.slip44);
            println!("  Derivation Path: {}", path);
            println!(
                "  Path Segments: purpose={} coin={} account={}",
                describe(path.purpose()),
                describe(path.coin()),
                describe(path.account())
            );
            println!(
                "\n  Audit: {} issue(s), review needed for: {}",
                report.issues.len(),
                flagged(&report.flagged_short_ids())
            );
            print_table(registry);
        }
    }

    Ok(())
}

fn describe(segment: Option<PathIndex>) -> String {
    segment.map_or_else(|| "(none)".to_string(), |s| s.to_string())
}

fn flagged(short_ids: &[&str]) -> String {
    if short_ids.is_empty() {
        "(none)".to_string()
    } else {
        short_ids.join(", ")
    }
}

fn print_table(registry: &CoinRegistry) {
    println!();
    println!(
        "  {:>10}  {:<14} {:<20} {:<6} {:>3} {:>9}  {}",
        "ID", "SHORT ID", "NAME", "SYMBOL", "DEC", "SLIP-44", "PATH"
    );
    for record in registry.iter() {
        println!(
            "  {:>10}  {:<14} {:<20} {:<6} {:>3} {:>9}  {}",
            record.identifier,
            record.short_id,
            record.display_name,
            record.symbol,
            record.decimals,
            record.slip44,
            record.derivation_path
        );
    }
}
