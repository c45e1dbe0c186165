//! Browsable species catalog: in-memory search, sort and fixed-size pages over the
//! full reference list, with details fetched only for the visible page.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::data::PokemonType;
use crate::dex::format::{artwork_url, id_from_url};
use crate::pokeapi::schema::NamedResource;
use crate::pokeapi::{load_cards, SourceError, SpeciesSource};

pub const PAGE_SIZE: usize = 15;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    IdAsc,
    IdDesc,
    NameAsc,
    NameDesc,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown sort order '{0}' (expected id-asc, id-desc, name-asc or name-desc)")]
pub struct UnknownSortOrder(pub String);

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::IdAsc => "id-asc",
            Self::IdDesc => "id-desc",
            Self::NameAsc => "name-asc",
            Self::NameDesc => "name-desc",
        }
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id-asc" => Ok(Self::IdAsc),
            "id-desc" => Ok(Self::IdDesc),
            "name-asc" => Ok(Self::NameAsc),
            "name-desc" => Ok(Self::NameDesc),
            _ => Err(UnknownSortOrder(s.to_string())),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub id: u32,
    pub name: String,
}

impl CatalogEntry {
    /// Entries whose URL carries no id are skipped.
    pub fn from_resource(resource: &NamedResource) -> Option<Self> {
        id_from_url(&resource.url).map(|id| Self {
            id,
            name: resource.name.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogQuery {
    pub search: Option<String>,
    pub type_filter: Option<PokemonType>,
    pub sort: SortOrder,
    /// 1-based; 0 is treated as 1 and values past the end are clamped.
    pub page: usize,
}

/// Case-insensitive name substring, or exact id. A blank query keeps everything.
pub fn matches_search(entry: &CatalogEntry, query: &str) -> bool {
    let query = query.trim().to_lowercase();
    query.is_empty() || entry.name.to_lowercase().contains(&query) || entry.id.to_string() == query
}

/// Name orders compare the lowercase API names bytewise.
pub fn sort_entries(entries: &mut [CatalogEntry], order: SortOrder) {
    match order {
        SortOrder::IdAsc => entries.sort_by_key(|e| e.id),
        SortOrder::IdDesc => entries.sort_by(|a, b| b.id.cmp(&a.id)),
        SortOrder::NameAsc => entries.sort_by(|a, b| a.name.cmp(&b.name)),
        SortOrder::NameDesc => entries.sort_by(|a, b| b.name.cmp(&a.name)),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShowingRange {
    pub start: usize,
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PageWindow {
    pub page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    /// 1-based inclusive range; absent when nothing matched.
    pub showing: Option<ShowingRange>,
}

impl PageWindow {
    pub fn new(total_count: usize, requested: usize) -> Self {
        let total_pages = total_count.div_ceil(PAGE_SIZE).max(1);
        let page = requested.clamp(1, total_pages);
        let showing = (total_count > 0).then(|| ShowingRange {
            start: (page - 1) * PAGE_SIZE + 1,
            end: (page * PAGE_SIZE).min(total_count),
        });
        Self {
            page,
            total_pages,
            total_count,
            showing,
        }
    }

    pub fn slice<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        match self.showing {
            Some(range) => &items[range.start - 1..range.end],
            None => &[],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogCard {
    pub id: u32,
    pub name: String,
    pub image: String,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogPage {
    #[serde(flatten)]
    pub window: PageWindow,
    pub sort: SortOrder,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_filter: Option<PokemonType>,
    pub cards: Vec<CatalogCard>,
}

/// Filter and sort the reference list, then cut the requested page.
pub fn select_page(mut entries: Vec<CatalogEntry>, query: &CatalogQuery) -> (PageWindow, Vec<CatalogEntry>) {
    if let Some(search) = query.search.as_deref() {
        entries.retain(|e| matches_search(e, search));
    }
    sort_entries(&mut entries, query.sort);
    let window = PageWindow::new(entries.len(), query.page);
    let visible = window.slice(&entries).to_vec();
    (window, visible)
}

/// The reference list comes from the species list, or from the type endpoint when
/// filtering by type. Failing to get it fails the page; failing card rows are omitted.
pub async fn load_page(
    source: &dyn SpeciesSource,
    query: &CatalogQuery,
    pool_limit: u32,
    concurrency: usize,
) -> Result<CatalogPage, SourceError> {
    let resources: Vec<NamedResource> = match query.type_filter {
        Some(tag) => source
            .pokemon_type(tag.as_str())
            .await?
            .pokemon
            .into_iter()
            .map(|m| m.pokemon)
            .collect(),
        None => source.list_pokemon(pool_limit, 0).await?.results,
    };
    let entries: Vec<CatalogEntry> = resources.iter().filter_map(CatalogEntry::from_resource).collect();

    let (window, visible) = select_page(entries, query);
    let keys: Vec<String> = visible.iter().map(|e| e.id.to_string()).collect();
    let cards = load_cards(source, &keys, concurrency)
        .await
        .into_iter()
        .map(|member| CatalogCard {
            image: artwork_url(member.id),
            id: member.id,
            name: member.display_name,
            types: member.type_tags,
        })
        .collect();

    Ok(CatalogPage {
        window,
        sort: query.sort,
        type_filter: query.type_filter,
        cards,
    })
}
