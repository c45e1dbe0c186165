//! Six-slot team under construction, with an optional selected slot.

use serde::Serialize;

use crate::analysis::aggregate::MAX_TEAM_SIZE;
use crate::analysis::entity::Entity;
use crate::analysis::report::{analyze_team, TeamReport};
use crate::analysis::synergy::SynergyMode;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Team {
    slots: [Option<Entity>; MAX_TEAM_SIZE],
    selected: Option<usize>,
}

impl Team {
    /// An empty team with the first slot selected, ready for the first pick.
    pub fn new() -> Self {
        Self {
            selected: Some(0),
            ..Self::default()
        }
    }

    /// Fills slots in order from a list of members; extras beyond six are ignored.
    /// Nothing is selected afterwards.
    pub fn from_members(members: impl IntoIterator<Item = Entity>) -> Self {
        let mut team = Self::default();
        for (slot, member) in team.slots.iter_mut().zip(members) {
            *slot = Some(member);
        }
        team
    }

    pub fn slots(&self) -> &[Option<Entity>; MAX_TEAM_SIZE] {
        &self.slots
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Selecting the already selected slot clears the selection. Out of range is ignored.
    pub fn select(&mut self, index: usize) {
        if index >= MAX_TEAM_SIZE {
            return;
        }
        self.selected = if self.selected == Some(index) { None } else { Some(index) };
    }

    /// Writes into the selected slot (overwriting) or else the first empty one.
    /// Returns the slot used, or `None` when the team is full and nothing is selected.
    pub fn place(&mut self, entity: Entity) -> Option<usize> {
        let index = match self.selected {
            Some(i) => i,
            None => self.slots.iter().position(Option::is_none)?,
        };
        self.slots[index] = Some(entity);
        Some(index)
    }

    pub fn clear(&mut self, index: usize) -> Option<Entity> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// Filled members in slot order.
    pub fn members(&self) -> Vec<Entity> {
        self.slots.iter().flatten().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn analyze(&self, mode: SynergyMode) -> Option<TeamReport> {
        analyze_team(&self.members(), mode).ok()
    }
}
