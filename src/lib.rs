pub mod analysis;
pub mod cli;
pub mod coach;
pub mod config;
pub mod data;
pub mod dex;
pub mod pokeapi;
pub mod server;
pub mod telemetry;
