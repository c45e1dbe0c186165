use std::fs;
use std::future::Future;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

use crate::analysis::{analyze_team, classify, BaseStats, Entity, SynergyMode, TeamReport};
use crate::coach::{analyze_trainer, build_team};
use crate::config::Config;
use crate::data::{PokemonType, RegionCatalog};
use crate::dex::{load_details, load_page, CatalogQuery, SortOrder};
use crate::pokeapi::{team_members, PokeApiClient};
use crate::server;
use crate::telemetry::init_tracing;

#[derive(Parser, Debug)]
#[command(name = "pokecoach", version, about = "Pokédex client and competitive team analyser")]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the JSON HTTP API
    Serve {
        /// Listen address (overrides POKECOACH_BIND)
        #[arg(long)]
        bind: Option<String>,
    },
    /// Classify a role from six base stats
    Classify {
        #[arg(long, default_value_t = 0)]
        hp: u32,
        #[arg(long, default_value_t = 0)]
        atk: u32,
        #[arg(long, default_value_t = 0)]
        def: u32,
        #[arg(long, default_value_t = 0)]
        spa: u32,
        #[arg(long, default_value_t = 0)]
        spd: u32,
        #[arg(long, default_value_t = 0)]
        spe: u32,
    },
    /// Fetch up to six species by id or name and analyse them as a team
    Analyze {
        #[arg(required = true, num_args = 1..=6)]
        pokemon: Vec<String>,
        /// Reproducible synergy bonuses
        #[arg(long)]
        seed: Option<u64>,
        /// Tab-separated output instead of JSON
        #[arg(long)]
        table: bool,
    },
    /// Analyse a team stored as JSON (a member list or {"members": [...]})
    AnalyzeFile {
        path: PathBuf,
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long)]
        table: bool,
    },
    /// Species detail: description, weaknesses, varieties and evolution line
    Pokemon { id_or_name: String },
    /// One catalog page
    Dex {
        #[arg(long)]
        search: Option<String>,
        #[arg(long = "type")]
        type_filter: Option<PokemonType>,
        #[arg(long, default_value_t = SortOrder::IdAsc)]
        sort: SortOrder,
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Region lore; lists every region without an id
    Regions { id: Option<String> },
    /// League roster for a region, or one trainer's team analysis
    League {
        region: String,
        #[arg(long)]
        trainer: Option<String>,
    },
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum TeamFile {
    Members(Vec<Entity>),
    Wrapped { members: Vec<Entity> },
}

impl TeamFile {
    fn into_members(self) -> Vec<Entity> {
        match self {
            Self::Members(members) | Self::Wrapped { members } => members,
        }
    }
}

/// Exit codes: 0 success, 1 runtime failure, 2 usage error.
pub fn run_with_args(args: &[String]) -> i32 {
    let parsed = match CliArgs::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() { 2 } else { 0 };
        }
    };

    let default_level = match parsed.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    init_tracing(default_level);
    let config = Config::from_env();

    match parsed.command {
        Command::Serve { bind } => handle_serve(config, bind),
        Command::Classify { hp, atk, def, spa, spd, spe } => handle_classify(BaseStats {
            hp,
            attack: atk,
            defense: def,
            special_attack: spa,
            special_defense: spd,
            speed: spe,
        }),
        Command::Analyze { pokemon, seed, table } => handle_analyze(&config, &pokemon, seed, table),
        Command::AnalyzeFile { path, seed, table } => handle_analyze_file(&config, &path, seed, table),
        Command::Pokemon { id_or_name } => handle_pokemon(&config, &id_or_name),
        Command::Dex { search, type_filter, sort, page } => handle_dex(
            &config,
            CatalogQuery {
                search,
                type_filter,
                sort,
                page,
            },
        ),
        Command::Regions { id } => handle_regions(id.as_deref()),
        Command::League { region, trainer } => handle_league(&config, &region, trainer.as_deref()),
    }
}

fn block_on<F: Future<Output = i32>>(fut: F) -> i32 {
    match tokio::runtime::Builder::new_multi_thread().enable_all().build() {
        Ok(runtime) => runtime.block_on(fut),
        Err(err) => {
            eprintln!("failed to start async runtime: {err}");
            1
        }
    }
}

fn print_json<T: Serialize>(value: &T, what: &str) -> i32 {
    match serde_json::to_string_pretty(value) {
        Ok(payload) => {
            println!("{payload}");
            0
        }
        Err(err) => {
            eprintln!("failed to serialize {what}: {err}");
            1
        }
    }
}

fn synergy_mode(config: &Config, seed: Option<u64>) -> SynergyMode {
    seed.map(SynergyMode::Seeded).unwrap_or(config.synergy)
}

fn handle_serve(mut config: Config, bind: Option<String>) -> i32 {
    if let Some(bind) = bind {
        config.bind = bind;
    }
    block_on(async move {
        match server::run_server(config).await {
            Ok(()) => 0,
            Err(err) => {
                eprintln!("server error: {err}");
                1
            }
        }
    })
}

fn handle_classify(stats: BaseStats) -> i32 {
    let role = classify(&stats);
    println!("{role}");
    0
}

fn print_report_table(members: &[Entity], report: &TeamReport) {
    println!("name\trole\ttypes");
    for member in members {
        let types: Vec<&str> = member.type_tags.iter().map(PokemonType::as_str).collect();
        println!("{}\t{}\t{}", member.display_name, member.role(), types.join("/"));
    }
    println!();
    println!("team_score\tdiversity\tsize\trole\tweaknesses\tsynergies");
    let breakdown = &report.score_breakdown;
    println!(
        "{}\t{}\t{}\t{}\t{}\t{}",
        report.team_score,
        breakdown.diversity,
        breakdown.size,
        breakdown.role,
        report.weaknesses.len(),
        report.synergies.len()
    );
}

fn handle_analyze(config: &Config, pokemon: &[String], seed: Option<u64>, table: bool) -> i32 {
    let client = PokeApiClient::new(&config.api_base);
    let mode = synergy_mode(config, seed);
    block_on(async {
        let build = build_team(&client, pokemon, mode, config.fetch_concurrency).await;
        for row in build.rows.iter().filter(|r| r.member.is_none()) {
            eprintln!("could not load '{}': {}", row.query, row.error.as_deref().unwrap_or("unknown error"));
        }
        let Some(report) = build.report.as_ref() else {
            eprintln!("analysis failed: no team member could be loaded");
            return 1;
        };
        if table {
            let members = team_members(&build.rows);
            print_report_table(&members, report);
            0
        } else {
            print_json(&build, "team analysis")
        }
    })
}

fn handle_analyze_file(config: &Config, path: &Path, seed: Option<u64>, table: bool) -> i32 {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(err) => {
            eprintln!("failed to read {}: {err}", path.display());
            return 1;
        }
    };
    let members = match serde_json::from_str::<TeamFile>(&raw) {
        Ok(file) => file.into_members(),
        Err(err) => {
            eprintln!("invalid team file {}: {err}", path.display());
            return 1;
        }
    };

    match analyze_team(&members, synergy_mode(config, seed)) {
        Ok(report) if table => {
            print_report_table(&members, &report);
            0
        }
        Ok(report) => print_json(&report, "team report"),
        Err(err) => {
            eprintln!("analysis failed: {err}");
            1
        }
    }
}

fn handle_pokemon(config: &Config, id_or_name: &str) -> i32 {
    let client = PokeApiClient::new(&config.api_base);
    block_on(async {
        match load_details(&client, id_or_name, &config.languages).await {
            Ok(details) => print_json(&details, "pokemon details"),
            Err(err) => {
                eprintln!("lookup failed: {err}");
                1
            }
        }
    })
}

fn handle_dex(config: &Config, query: CatalogQuery) -> i32 {
    let client = PokeApiClient::new(&config.api_base);
    block_on(async {
        match load_page(&client, &query, config.pool_limit, config.fetch_concurrency).await {
            Ok(page) => print_json(&page, "catalog page"),
            Err(err) => {
                eprintln!("failed to load the Pokédex: {err}");
                1
            }
        }
    })
}

fn load_regions() -> Option<RegionCatalog> {
    match RegionCatalog::embedded() {
        Ok(catalog) => Some(catalog),
        Err(err) => {
            eprintln!("{err}");
            None
        }
    }
}

fn handle_regions(id: Option<&str>) -> i32 {
    let Some(catalog) = load_regions() else {
        return 1;
    };
    match id {
        None => print_json(&server::api::regions_payload(&catalog), "regions"),
        Some(id) => match catalog.region(id) {
            Some(region) => print_json(region, "region"),
            None => {
                eprintln!("unknown region '{id}'");
                1
            }
        },
    }
}

fn handle_league(config: &Config, region: &str, trainer: Option<&str>) -> i32 {
    let Some(catalog) = load_regions() else {
        return 1;
    };
    let Some(league) = catalog.league(region) else {
        eprintln!("no league data for region '{region}'");
        return 1;
    };
    let Some(trainer) = trainer else {
        return print_json(league, "league");
    };

    let client = PokeApiClient::new(&config.api_base);
    block_on(async {
        match analyze_trainer(&client, league, trainer, config.synergy, config.fetch_concurrency).await {
            Ok(analysis) => print_json(&analysis, "trainer analysis"),
            Err(err) => {
                eprintln!("{err}");
                1
            }
        }
    })
}
