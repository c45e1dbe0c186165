//! Export the species pool with derived roles as CSV.
//! Run: cargo run --bin export_roles [-- output.csv] [--limit N]
//! Without an output path the CSV goes to stdout.

use std::fs::File;
use std::io::{self, Write};

use pokecoach::analysis::Entity;
use pokecoach::config::Config;
use pokecoach::pokeapi::{load_pool, PokeApiClient};
use pokecoach::telemetry::init_tracing;

const HEADER: [&str; 10] = [
    "id",
    "name",
    "types",
    "hp",
    "attack",
    "defense",
    "special_attack",
    "special_defense",
    "speed",
    "role",
];

fn parse_args(config: &Config) -> Result<(Option<String>, u32), String> {
    let mut output = None;
    let mut limit = config.pool_limit;
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--limit" {
            let raw = args.next().ok_or("--limit needs a value")?;
            limit = raw.parse().map_err(|_| format!("invalid --limit '{raw}'"))?;
        } else {
            output = Some(arg);
        }
    }
    Ok((output, limit))
}

fn write_csv<W: Write>(mut out: W, pool: &[Entity]) -> Result<(), Box<dyn std::error::Error>> {
    writeln!(
        out,
        "# pokecoach role export, generated {}",
        chrono::Utc::now().format("%Y-%m-%d")
    )?;
    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(HEADER)?;
    for member in pool {
        let types: Vec<&str> = member.type_tags.iter().map(|t| t.as_str()).collect();
        let s = &member.base_stats;
        writer.write_record([
            member.id.to_string(),
            member.display_name.clone(),
            types.join("/"),
            s.hp.to_string(),
            s.attack.to_string(),
            s.defense.to_string(),
            s.special_attack.to_string(),
            s.special_defense.to_string(),
            s.speed.to_string(),
            member.role().to_string(),
        ])?;
    }
    writer.flush()?;
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing("info");
    let config = Config::from_env();
    let (output, limit) = parse_args(&config)?;

    let client = PokeApiClient::new(&config.api_base);
    let pool = load_pool(&client, limit, config.fetch_concurrency).await?;

    match output {
        Some(path) => {
            write_csv(File::create(&path)?, &pool)?;
            eprintln!("wrote {} species to {path}", pool.len());
        }
        None => write_csv(io::stdout().lock(), &pool)?,
    }
    Ok(())
}
