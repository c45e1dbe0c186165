mod common;

use pokecoach::analysis::{Role, SynergyMode};
use pokecoach::coach::{analyze_trainer, build_team};
use pokecoach::data::{PokemonType, RegionCatalog};
use pokecoach::dex::{load_details, load_page, weaknesses_for, CatalogQuery, SortOrder};
use pokecoach::pokeapi::{load_pool, SourceError};

use common::FixtureSource;

fn english() -> Vec<String> {
    vec!["en".to_string()]
}

fn names(list: &[String]) -> Vec<&str> {
    list.iter().map(String::as_str).collect()
}

#[tokio::test]
async fn immunities_are_removed_from_weaknesses() {
    let source = FixtureSource::new();
    let rock_ground = weaknesses_for(&source, &["rock".to_string(), "ground".to_string()]).await;
    assert_eq!(names(&rock_ground), vec!["fighting", "grass", "ground", "ice", "steel", "water"]);

    let ghost_poison = weaknesses_for(&source, &["ghost".to_string(), "poison".to_string()]).await;
    assert_eq!(names(&ghost_poison), vec!["dark", "ghost", "ground", "psychic"]);
}

#[tokio::test]
async fn one_missing_type_table_empties_the_list() {
    let source = FixtureSource::new();
    let mixed = weaknesses_for(&source, &["water".to_string(), "electric".to_string()]).await;
    assert!(mixed.is_empty());
}

#[tokio::test]
async fn details_prefer_configured_language() {
    let source = FixtureSource::new();
    let japanese = load_details(&source, "squirtle", &["ja".to_string(), "en".to_string()])
        .await
        .expect("squirtle should load");
    assert_eq!(japanese.description, "squirtle entry in Japanese.");

    let fallback = load_details(&source, "squirtle", &["fr".to_string()])
        .await
        .expect("squirtle should load");
    assert_eq!(fallback.description, "squirtle entry in Japanese.");
}

#[tokio::test]
async fn details_report_role_stats_and_measurements() {
    let source = FixtureSource::new();
    let gengar = load_details(&source, "94", &english()).await.expect("gengar should load");
    assert_eq!(gengar.name, "gengar");
    assert_eq!(gengar.role, Role::Speedster);
    assert_eq!(gengar.stats.len(), 6);
    assert_eq!(gengar.stats[3].name, "special-attack");
    assert_eq!(gengar.stats[3].base, 130);
    assert_eq!(gengar.weight_kg, 6.9);
    assert!(gengar.varieties.is_empty());
}

#[tokio::test]
async fn broken_evolution_chain_is_not_fatal() {
    let source = FixtureSource::new();
    let charmander = load_details(&source, "charmander", &english())
        .await
        .expect("charmander should load");
    assert!(charmander.evolutions.is_empty());
    assert_eq!(names(&charmander.weaknesses), vec!["ground", "rock", "water"]);
}

#[tokio::test]
async fn details_propagate_missing_species() {
    let source = FixtureSource::new();
    let err = load_details(&source, "agumon", &english()).await.expect_err("unknown species");
    assert!(err.is_not_found());

    let err = load_details(&source, "missingno", &english()).await.expect_err("broken species");
    assert!(matches!(err, SourceError::Status { status: 500, .. }));
}

#[tokio::test]
async fn catalog_pages_respect_pool_limit_and_clamp() {
    let source = FixtureSource::new();
    let query = CatalogQuery {
        sort: SortOrder::IdDesc,
        page: 9,
        ..Default::default()
    };
    let page = load_page(&source, &query, 5, 2).await.expect("page should load");
    assert_eq!(page.window.total_count, 5);
    assert_eq!(page.window.page, 1);
    let ids: Vec<u32> = page.cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![25, 9, 7, 4, 1]);
}

#[tokio::test]
async fn pool_load_fails_when_any_species_fails() {
    let source = FixtureSource::new();
    let healthy = load_pool(&source, 8, 4).await.expect("first eight species load");
    assert_eq!(healthy.len(), 8);
    assert_eq!(healthy[7].display_name, "Onix");

    let err = load_pool(&source, 100, 4).await.expect_err("missingno breaks the pool");
    assert!(matches!(err, SourceError::Status { status: 500, .. }));
}

#[tokio::test]
async fn catalog_omits_cards_that_fail_to_load() {
    let source = FixtureSource::new();
    let page = load_page(&source, &CatalogQuery::default(), 100, 4)
        .await
        .expect("page should load");
    assert_eq!(page.window.total_count, 9);
    let ids: Vec<u32> = page.cards.iter().map(|c| c.id).collect();
    assert_eq!(ids, vec![1, 4, 7, 9, 25, 74, 94, 95]);
}

#[tokio::test]
async fn catalog_name_sort_orders_api_names_bytewise() {
    let source = FixtureSource::new();
    let query = CatalogQuery {
        sort: SortOrder::NameDesc,
        ..Default::default()
    };
    let page = load_page(&source, &query, 8, 4).await.expect("page should load");
    let names: Vec<&str> = page.cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec!["Squirtle", "Pikachu", "Onix", "Geodude", "Gengar", "Charmander", "Bulbasaur", "Blastoise"]
    );
}

#[tokio::test]
async fn catalog_search_matches_exact_id() {
    let source = FixtureSource::new();
    let query = CatalogQuery {
        search: Some("95".to_string()),
        ..Default::default()
    };
    let page = load_page(&source, &query, 100, 4).await.expect("page should load");
    assert_eq!(page.cards.len(), 1);
    assert_eq!(page.cards[0].name, "Onix");
    assert_eq!(page.cards[0].types, vec![PokemonType::Rock, PokemonType::Ground]);
}

#[tokio::test]
async fn catalog_type_filter_fails_when_type_table_is_missing() {
    let source = FixtureSource::new();
    let query = CatalogQuery {
        type_filter: Some(PokemonType::Electric),
        ..Default::default()
    };
    let err = load_page(&source, &query, 100, 4).await.expect_err("no electric table");
    assert!(err.is_not_found());
}

#[tokio::test]
async fn build_team_without_resolved_members_has_no_report() {
    let source = FixtureSource::new();
    let queries = vec!["missingno".to_string(), "agumon".to_string()];
    let build = build_team(&source, &queries, SynergyMode::PerPair, 2).await;
    assert_eq!(build.rows.len(), 2);
    assert!(build.report.is_none());
}

#[tokio::test]
async fn trainer_lookup_resolves_by_leader_name() {
    let source = FixtureSource::new();
    let catalog = RegionCatalog::embedded().expect("embedded regions parse");
    let kanto = catalog.league("kanto").expect("kanto league");

    let brock = analyze_trainer(&source, kanto, "Brock", SynergyMode::Seeded(1), 2)
        .await
        .expect("brock is a gym leader");
    assert_eq!(brock.trainer.team, vec![74, 95]);
    let report = brock.build.report.expect("both members resolve");
    assert_eq!(report.team_score, 45);
    assert_eq!(report.synergies.len(), 1);

    let err = analyze_trainer(&source, kanto, "gary", SynergyMode::PerPair, 2)
        .await
        .expect_err("unknown trainer");
    assert_eq!(err.trainer, "gary");
}
