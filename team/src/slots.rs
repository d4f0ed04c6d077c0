//! The six fixed team slots

use std::sync::Arc;

use pokedeck_catalog::PokemonRecord;

use crate::error::TeamError;
use crate::stored::StoredPokemon;

/// Number of slots in a team
pub const TEAM_SIZE: usize = 6;

/// Six ordered slots, each empty or holding a catalog record.
///
/// The length never changes. Removing a Pokemon empties its slot and leaves
/// the others where they are; new Pokemon go to the first empty slot.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TeamSlots {
    slots: [Option<Arc<PokemonRecord>>; TEAM_SIZE],
}

impl TeamSlots {
    /// Six empty slots
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill slots in order from a saved team (extra entries are ignored)
    pub fn from_stored(pokemon: &[StoredPokemon]) -> Self {
        let mut team = Self::new();
        for (slot, stored) in team.slots.iter_mut().zip(pokemon) {
            *slot = Some(Arc::new(stored.clone().into_record()));
        }
        team
    }

    /// Rebuild from a positional list (missing trailing entries are empty)
    pub fn from_positions(positions: Vec<Option<PokemonRecord>>) -> Self {
        let mut team = Self::new();
        for (slot, record) in team.slots.iter_mut().zip(positions) {
            *slot = record.map(Arc::new);
        }
        team
    }

    /// Get the Pokemon in a slot
    pub fn get(&self, index: usize) -> Option<&Arc<PokemonRecord>> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Iterate over all six slots
    pub fn iter(&self) -> impl Iterator<Item = Option<&Arc<PokemonRecord>>> {
        self.slots.iter().map(|slot| slot.as_ref())
    }

    /// Iterate over filled slots only, in slot order
    pub fn pokemon(&self) -> impl Iterator<Item = &Arc<PokemonRecord>> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }

    /// Number of filled slots
    pub fn count(&self) -> usize {
        self.pokemon().count()
    }

    pub fn is_full(&self) -> bool {
        self.count() == TEAM_SIZE
    }

    pub fn is_empty(&self) -> bool {
        self.count() == 0
    }

    /// Index of the first empty slot
    pub fn first_empty(&self) -> Option<usize> {
        self.slots.iter().position(|slot| slot.is_none())
    }

    /// Slot index holding the Pokemon with this id
    pub fn position(&self, pokemon_id: u32) -> Option<usize> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref().is_some_and(|p| p.id == pokemon_id))
    }

    pub fn contains(&self, pokemon_id: u32) -> bool {
        self.position(pokemon_id).is_some()
    }

    /// Put a Pokemon in the first empty slot, returning the slot index
    pub fn insert(&mut self, pokemon: Arc<PokemonRecord>) -> Result<usize, TeamError> {
        if self.contains(pokemon.id) {
            return Err(TeamError::DuplicatePokemon(pokemon.display_name()));
        }

        let index = self.first_empty().ok_or(TeamError::TeamFull)?;
        self.slots[index] = Some(pokemon);
        Ok(index)
    }

    /// Empty a slot, returning what was in it
    pub fn remove(&mut self, index: usize) -> Result<Option<Arc<PokemonRecord>>, TeamError> {
        let slot = self
            .slots
            .get_mut(index)
            .ok_or(TeamError::InvalidSlot(index))?;
        Ok(slot.take())
    }

    /// Empty every slot
    pub fn clear(&mut self) {
        self.slots = Default::default();
    }

    /// Filled slots reduced to the stored shape, in slot order
    pub fn to_stored(&self) -> Vec<StoredPokemon> {
        self.pokemon()
            .map(|p| StoredPokemon::from_record(p))
            .collect()
    }

    /// All six slots as owned records, keeping gaps
    pub fn positions(&self) -> Vec<Option<PokemonRecord>> {
        self.slots
            .iter()
            .map(|slot| slot.as_deref().cloned())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn poke(id: u32, name: &str) -> Arc<PokemonRecord> {
        Arc::new(PokemonRecord::new(id, name))
    }

    fn create_test_team() -> TeamSlots {
        let mut team = TeamSlots::new();
        team.insert(poke(25, "pikachu")).unwrap();
        team.insert(poke(1, "bulbasaur")).unwrap();
        team.insert(poke(4, "charmander")).unwrap();
        team
    }

    #[test]
    fn test_new_team() {
        let team = TeamSlots::new();
        assert_eq!(team.iter().count(), TEAM_SIZE);
        assert!(team.is_empty());
        assert_eq!(team.first_empty(), Some(0));
    }

    #[test]
    fn test_insert_fills_first_empty() {
        let team = create_test_team();
        assert_eq!(team.count(), 3);
        assert_eq!(team.get(0).unwrap().name, "pikachu");
        assert_eq!(team.get(2).unwrap().name, "charmander");
        assert_eq!(team.first_empty(), Some(3));
    }

    #[test]
    fn test_insert_duplicate() {
        let mut team = create_test_team();
        let result = team.insert(poke(25, "pikachu"));

        assert_eq!(result, Err(TeamError::DuplicatePokemon("Pikachu".to_string())));
        assert_eq!(team.count(), 3);
    }

    #[test]
    fn test_insert_full() {
        let mut team = TeamSlots::new();
        for id in 1..=6 {
            team.insert(poke(id, "filler")).unwrap();
        }
        assert!(team.is_full());
        assert_eq!(team.insert(poke(7, "squirtle")), Err(TeamError::TeamFull));
    }

    #[test]
    fn test_remove_keeps_positions() {
        let mut team = create_test_team();
        let removed = team.remove(1).unwrap();

        assert_eq!(removed.unwrap().name, "bulbasaur");
        assert!(team.get(1).is_none());
        assert_eq!(team.get(2).unwrap().name, "charmander");
        assert_eq!(team.iter().count(), TEAM_SIZE);
    }

    #[test]
    fn test_remove_then_add_uses_first_empty() {
        let mut team = create_test_team();
        team.remove(0).unwrap();
        team.remove(2).unwrap();

        let index = team.insert(poke(4, "charmander")).unwrap();
        assert_eq!(index, 0);
    }

    #[test]
    fn test_remove_invalid_slot() {
        let mut team = create_test_team();
        assert_eq!(team.remove(6), Err(TeamError::InvalidSlot(6)));
        assert_eq!(team.count(), 3);
    }

    #[test]
    fn test_remove_empty_slot() {
        let mut team = create_test_team();
        assert_eq!(team.remove(5), Ok(None));
    }

    #[test]
    fn test_stored_round_trip_compacts() {
        let mut team = create_test_team();
        team.remove(0).unwrap();

        let stored = team.to_stored();
        assert_eq!(stored.len(), 2);

        let loaded = TeamSlots::from_stored(&stored);
        assert_eq!(loaded.get(0).unwrap().name, "bulbasaur");
        assert_eq!(loaded.get(1).unwrap().name, "charmander");
    }

    #[test]
    fn test_positions_keep_gaps() {
        let mut team = create_test_team();
        team.remove(1).unwrap();

        let rebuilt = TeamSlots::from_positions(team.positions());
        assert_eq!(rebuilt, team);
    }

    #[test]
    fn test_random_inserts_stay_bounded_and_unique() {
        let mut rng = StdRng::seed_from_u64(0x5eed);

        for _ in 0..200 {
            let mut team = TeamSlots::new();
            for _ in 0..rng.gen_range(0..30) {
                if rng.gen_bool(0.2) {
                    let _ = team.remove(rng.gen_range(0..TEAM_SIZE));
                } else {
                    let _ = team.insert(poke(rng.gen_range(1..=10), "random"));
                }

                assert!(team.count() <= TEAM_SIZE);
                let mut ids: Vec<u32> = team.pokemon().map(|p| p.id).collect();
                let before = ids.len();
                ids.sort_unstable();
                ids.dedup();
                assert_eq!(ids.len(), before);
            }
        }
    }
}
