//! Display helpers for PokéAPI names, ids and flavor text.

use crate::pokeapi::schema::FlavorTextEntry;

pub const ARTWORK_BASE: &str =
    "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork";

pub const DESCRIPTION_FALLBACK: &str = "Description not available for this species at the moment.";

/// Upper-cases the first character only: `mr-mime` → `Mr-mime`.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Hyphens become spaces and every word is capitalised: `mr-mime` → `Mr Mime`.
pub fn format_name(name: &str) -> String {
    name.replace('-', " ")
        .split(' ')
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Form feeds and runs of whitespace collapse to single spaces.
pub fn clean_flavor_text(text: &str) -> String {
    text.replace('\u{c}', " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trailing numeric segment of a resource URL: `.../pokemon/25/` → 25.
pub fn id_from_url(url: &str) -> Option<u32> {
    url.split('/')
        .filter(|part| !part.is_empty())
        .last()
        .and_then(|last| last.parse().ok())
}

pub fn artwork_url(id: u32) -> String {
    format!("{ARTWORK_BASE}/{id}.png")
}

/// First entry in the most preferred language, else the first entry at all,
/// else a fixed fallback. The result is cleaned.
pub fn pick_description(entries: &[FlavorTextEntry], languages: &[String]) -> String {
    let preferred = languages
        .iter()
        .find_map(|lang| entries.iter().find(|e| e.language.name.eq_ignore_ascii_case(lang)));
    match preferred.or_else(|| entries.first()) {
        Some(entry) => clean_flavor_text(&entry.flavor_text),
        None => DESCRIPTION_FALLBACK.to_string(),
    }
}
