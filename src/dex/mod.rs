//! Pokédex views: catalog pages, species detail and display helpers.

pub mod catalog;
pub mod detail;
pub mod format;
pub mod weakness;

pub use catalog::{
    load_page, CatalogCard, CatalogEntry, CatalogPage, CatalogQuery, PageWindow, ShowingRange,
    SortOrder, UnknownSortOrder, PAGE_SIZE,
};
pub use detail::{load_details, PokemonDetails, SpeciesLink, StatLine};
pub use weakness::{naive_weaknesses, weaknesses_for};
