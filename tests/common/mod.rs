#![allow(dead_code)]

use std::collections::HashMap;

use async_trait::async_trait;
use pokecoach::pokeapi::schema::{
    EvolutionChainPayload, NamedResource, PokemonPayload, ResourceList, SpeciesPayload,
    TypePayload,
};
use pokecoach::pokeapi::{SourceError, SpeciesSource};
use serde_json::{json, Value};

pub const API: &str = "https://pokeapi.co/api/v2";

/// Species used across the integration tests: `(id, name, types, [hp, atk, def, spa, spd, spe])`.
pub const ROSTER: &[(u32, &str, &[&str], [u32; 6])] = &[
    (1, "bulbasaur", &["grass", "poison"], [45, 49, 49, 65, 65, 45]),
    (4, "charmander", &["fire"], [39, 52, 43, 60, 50, 65]),
    (7, "squirtle", &["water"], [44, 48, 65, 50, 64, 43]),
    (9, "blastoise", &["water"], [79, 83, 100, 85, 105, 78]),
    (25, "pikachu", &["electric"], [35, 55, 40, 50, 50, 90]),
    (74, "geodude", &["rock", "ground"], [40, 80, 100, 30, 30, 20]),
    (94, "gengar", &["ghost", "poison"], [60, 65, 60, 130, 75, 110]),
    (95, "onix", &["rock", "ground"], [35, 45, 160, 30, 45, 70]),
];

/// Keys that answer with an upstream 500 instead of data. missingno is listed
/// last in the species list under id 0.
pub const BROKEN: &[&str] = &["missingno", "0"];

fn pokemon_json(id: u32, name: &str, types: &[&str], stats: [u32; 6]) -> Value {
    let stat_names = ["hp", "attack", "defense", "special-attack", "special-defense", "speed"];
    let artwork = if name == "pikachu" {
        Value::Null
    } else {
        json!(format!("https://img.example/{id}.png"))
    };
    json!({
        "id": id,
        "name": name,
        "height": 7,
        "weight": 69,
        "types": types.iter().enumerate().map(|(i, t)| json!({
            "slot": i + 1,
            "type": {"name": t, "url": format!("{API}/type/{t}/")}
        })).collect::<Vec<_>>(),
        "stats": stat_names.iter().zip(stats).map(|(n, v)| json!({
            "base_stat": v,
            "stat": {"name": n, "url": ""}
        })).collect::<Vec<_>>(),
        "species": {"name": name, "url": format!("{API}/pokemon-species/{id}/")},
        "sprites": {"front_default": null, "other": {"official-artwork": {"front_default": artwork}}}
    })
}

fn species_json(id: u32, name: &str) -> Value {
    let chain = match name {
        "bulbasaur" => json!({"url": format!("{API}/evolution-chain/1/")}),
        // points at a chain the fixture does not have
        "charmander" => json!({"url": format!("{API}/evolution-chain/2/")}),
        _ => Value::Null,
    };
    let mut varieties = vec![json!({
        "is_default": true,
        "pokemon": {"name": name, "url": format!("{API}/pokemon/{id}/")}
    })];
    if name == "pikachu" {
        varieties.push(json!({
            "is_default": false,
            "pokemon": {"name": "pikachu-rock-star", "url": format!("{API}/pokemon/10080/")}
        }));
    }
    json!({
        "id": id,
        "name": name,
        "flavor_text_entries": [
            {"flavor_text": format!("{name} entry in\u{c}Japanese."), "language": {"name": "ja", "url": ""}},
            {"flavor_text": format!("A wild\n{name}\u{c}appeared."), "language": {"name": "en", "url": ""}}
        ],
        "evolution_chain": chain,
        "varieties": varieties
    })
}

fn named_list(names: &[&str]) -> Vec<Value> {
    names
        .iter()
        .map(|n| json!({"name": n, "url": format!("{API}/type/{n}/")}))
        .collect()
}

fn type_json(name: &str, double: &[&str], none: &[&str]) -> Value {
    let members: Vec<Value> = ROSTER
        .iter()
        .filter(|(_, _, types, _)| types.contains(&name))
        .map(|(id, n, _, _)| json!({
            "slot": 1,
            "pokemon": {"name": n, "url": format!("{API}/pokemon/{id}/")}
        }))
        .collect();
    json!({
        "name": name,
        "damage_relations": {
            "double_damage_from": named_list(double),
            "half_damage_from": [],
            "no_damage_from": named_list(none)
        },
        "pokemon": members
    })
}

fn decode<T: serde::de::DeserializeOwned>(value: Value) -> T {
    serde_json::from_value(value).expect("fixture payload should decode")
}

#[derive(Debug, Default)]
pub struct FixtureSource {
    pokemon: HashMap<String, PokemonPayload>,
    species: HashMap<String, SpeciesPayload>,
    types: HashMap<String, TypePayload>,
    chains: HashMap<u32, EvolutionChainPayload>,
    list: Vec<NamedResource>,
}

impl FixtureSource {
    pub fn new() -> Self {
        let mut source = Self::default();
        for (id, name, types, stats) in ROSTER {
            let pokemon: PokemonPayload = decode(pokemon_json(*id, name, types, *stats));
            let species: SpeciesPayload = decode(species_json(*id, name));
            for key in [id.to_string(), name.to_string()] {
                source.pokemon.insert(key.clone(), pokemon.clone());
                source.species.insert(key, species.clone());
            }
            source.list.push(NamedResource {
                name: name.to_string(),
                url: format!("{API}/pokemon/{id}/"),
            });
        }
        source.list.push(NamedResource {
            name: "missingno".to_string(),
            url: format!("{API}/pokemon/0/"),
        });

        // electric is left out on purpose so its relations fail to load
        for (name, double, none) in [
            ("grass", &["fire", "ice", "poison", "flying", "bug"][..], &[][..]),
            ("poison", &["ground", "psychic"][..], &[][..]),
            ("fire", &["water", "ground", "rock"][..], &[][..]),
            ("water", &["electric", "grass"][..], &[][..]),
            ("rock", &["water", "grass", "fighting", "ground", "steel"][..], &[][..]),
            ("ground", &["water", "grass", "ice"][..], &["electric"][..]),
            ("ghost", &["ghost", "dark"][..], &["normal", "fighting"][..]),
        ] {
            source.types.insert(name.to_string(), decode(type_json(name, double, none)));
        }

        source.chains.insert(
            1,
            decode(json!({
                "id": 1,
                "chain": {
                    "species": {"name": "bulbasaur", "url": format!("{API}/pokemon-species/1/")},
                    "evolves_to": [{
                        "species": {"name": "ivysaur", "url": format!("{API}/pokemon-species/2/")},
                        "evolves_to": [{
                            "species": {"name": "venusaur", "url": format!("{API}/pokemon-species/3/")},
                            "evolves_to": []
                        }]
                    }]
                }
            })),
        );
        source
    }

    fn check_broken(key: &str) -> Result<(), SourceError> {
        if BROKEN.contains(&key) {
            return Err(SourceError::Status {
                status: 500,
                url: format!("{API}/pokemon/{key}"),
            });
        }
        Ok(())
    }
}

fn normalize(key: &str) -> String {
    key.trim().to_lowercase()
}

#[async_trait]
impl SpeciesSource for FixtureSource {
    async fn list_pokemon(&self, limit: u32, offset: u32) -> Result<ResourceList, SourceError> {
        let results: Vec<NamedResource> = self
            .list
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect();
        Ok(ResourceList {
            count: self.list.len() as u32,
            results,
        })
    }

    async fn pokemon(&self, id_or_name: &str) -> Result<PokemonPayload, SourceError> {
        let key = normalize(id_or_name);
        Self::check_broken(&key)?;
        self.pokemon.get(&key).cloned().ok_or(SourceError::NotFound(key))
    }

    async fn species(&self, id_or_name: &str) -> Result<SpeciesPayload, SourceError> {
        let key = normalize(id_or_name);
        self.species.get(&key).cloned().ok_or(SourceError::NotFound(key))
    }

    async fn pokemon_type(&self, name: &str) -> Result<TypePayload, SourceError> {
        let key = normalize(name);
        self.types.get(&key).cloned().ok_or(SourceError::NotFound(key))
    }

    async fn evolution_chain(&self, id: u32) -> Result<EvolutionChainPayload, SourceError> {
        self.chains
            .get(&id)
            .cloned()
            .ok_or_else(|| SourceError::NotFound(format!("evolution chain {id}")))
    }
}
