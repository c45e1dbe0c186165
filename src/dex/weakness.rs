use std::collections::BTreeSet;

use futures_util::future::try_join_all;

use crate::pokeapi::schema::DamageRelations;
use crate::pokeapi::SpeciesSource;

/// Types that deal double damage to any of the given type tables, minus those
/// any table is immune to. Sorted by name. Not a full effectiveness calculation:
/// dual-type multipliers are not combined.
pub fn naive_weaknesses<'a>(relations: impl IntoIterator<Item = &'a DamageRelations>) -> Vec<String> {
    let relations: Vec<&DamageRelations> = relations.into_iter().collect();
    let mut weak: BTreeSet<String> = relations
        .iter()
        .flat_map(|r| r.double_damage_from.iter().map(|t| t.name.clone()))
        .collect();
    for r in &relations {
        for immune in &r.no_damage_from {
            weak.remove(&immune.name);
        }
    }
    weak.into_iter().collect()
}

/// Fetches every type table; if any fetch fails the result is empty.
pub async fn weaknesses_for(source: &dyn SpeciesSource, type_names: &[String]) -> Vec<String> {
    match try_join_all(type_names.iter().map(|t| source.pokemon_type(t))).await {
        Ok(tables) => naive_weaknesses(tables.iter().map(|t| &t.damage_relations)),
        Err(err) => {
            tracing::warn!("type relations unavailable, skipping weaknesses: {err}");
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pokeapi::schema::NamedResource;

    fn named(names: &[&str]) -> Vec<NamedResource> {
        names
            .iter()
            .map(|n| NamedResource { name: n.to_string(), url: String::new() })
            .collect()
    }

    #[test]
    fn unions_double_damage_and_removes_immunities() {
        // ground/flying style pairing
        let ground = DamageRelations {
            double_damage_from: named(&["water", "grass", "ice"]),
            half_damage_from: named(&["poison", "rock"]),
            no_damage_from: named(&["electric"]),
        };
        let flying = DamageRelations {
            double_damage_from: named(&["electric", "ice", "rock"]),
            half_damage_from: named(&["grass", "fighting", "bug"]),
            no_damage_from: named(&["ground"]),
        };
        assert_eq!(
            naive_weaknesses([&ground, &flying]),
            vec!["grass", "ice", "rock", "water"]
        );
    }

    #[test]
    fn no_tables_means_no_weaknesses() {
        assert!(naive_weaknesses(std::iter::empty()).is_empty());
    }
}
