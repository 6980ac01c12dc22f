//! In-process stand-in for a game room with a single spawn.
//!
use creep_spawner::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::collections::BTreeSet;

/// Ticks it takes to build a single body part
pub const CREEP_SPAWN_TIME: u32 = 3;

pub struct SimulatedRoom {
    prices: PriceTable,
    energy: u32,
    energy_capacity: u32,
    energy_income: u32,
    /// Remaining ticks of the creep currently spawning
    spawning: u32,
    creeps: BTreeSet<String>,
    rng: SmallRng,
}

impl SimulatedRoom {
    pub fn new(prices: PriceTable, energy_capacity: u32, energy_income: u32, seed: u64) -> Self {
        Self {
            prices,
            energy: 0,
            energy_capacity,
            energy_income,
            spawning: 0,
            creeps: BTreeSet::new(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn with_energy(mut self, energy: u32) -> Self {
        self.energy = energy.min(self.energy_capacity);
        self
    }

    pub fn energy_available(&self) -> u32 {
        self.energy
    }

    pub fn is_spawning(&self) -> bool {
        self.spawning > 0
    }

    pub fn creeps(&self) -> impl Iterator<Item = &str> {
        self.creeps.iter().map(|name| name.as_str())
    }

    /// Regenerate energy and advance the spawn by one tick
    pub fn tick(&mut self) {
        if self.energy_income > 0 {
            let income = self.rng.gen_range(0, self.energy_income.saturating_add(1));
            self.energy = self.energy.saturating_add(income).min(self.energy_capacity);
        }
        self.spawning = self.spawning.saturating_sub(1);
    }
}

impl SpawnHost for SimulatedRoom {
    fn spawn_creep(&mut self, body: &[BodyPart], name: &str) -> Result<(), SpawnError> {
        if self.is_spawning() {
            return Err(SpawnError::Busy);
        }
        if body.is_empty() || body.len() > MAX_CREEP_SIZE {
            return Err(SpawnError::InvalidBody);
        }
        if self.creeps.contains(name) {
            return Err(SpawnError::NameExists);
        }
        let cost = match self.prices.checked_cost_of(body) {
            Some(cost) if cost <= self.energy => cost,
            _ => return Err(SpawnError::NotEnoughEnergy),
        };
        self.energy -= cost;
        self.spawning = body.len() as u32 * CREEP_SPAWN_TIME;
        self.creeps.insert(name.to_owned());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use creep_spawner::parts::BodyPart::*;

    fn room(energy: u32) -> SimulatedRoom {
        SimulatedRoom::new(PriceTable::DEFAULT, 800, 0, 1).with_energy(energy)
    }

    #[test]
    fn test_spawn_spends_energy() {
        let mut room = room(300);
        room.spawn_creep(&[Work, Carry, Move], "Worker1").expect("spawn");
        assert_eq!(room.energy_available(), 100);
        assert!(room.is_spawning());
        assert_eq!(room.creeps().collect::<Vec<_>>(), vec!["Worker1"]);
    }

    #[test]
    fn test_spawn_rules() {
        let mut room = room(100);
        assert_eq!(
            room.spawn_creep(&[Work, Carry, Move], "Worker1"),
            Err(SpawnError::NotEnoughEnergy)
        );
        assert_eq!(room.spawn_creep(&[], "Worker1"), Err(SpawnError::InvalidBody));

        room.spawn_creep(&[Move], "Scout1").expect("spawn");
        assert_eq!(room.spawn_creep(&[Move], "Scout2"), Err(SpawnError::Busy));

        for _ in 0..CREEP_SPAWN_TIME {
            room.tick();
        }
        assert!(!room.is_spawning());
        assert_eq!(room.spawn_creep(&[Move], "Scout1"), Err(SpawnError::NameExists));
    }

    #[test]
    fn test_energy_is_capped() {
        let mut room = SimulatedRoom::new(PriceTable::DEFAULT, 300, 50, 7).with_energy(1000);
        assert_eq!(room.energy_available(), 300);
        for _ in 0..10 {
            room.tick();
            assert!(room.energy_available() <= 300);
        }
    }

    #[test]
    fn test_spawner_drives_room() {
        let logger = slog::Logger::root(slog::Discard, slog::o!());
        let spawner = Spawner::new(logger, &SpawnerConfig::default()).expect("spawner");
        let mut room = room(450);

        let budget = room.energy_available() as i64;
        let res = spawner.run(&mut room, budget, Time(10));
        assert_eq!(
            res,
            DispatchOutcome::Spawned {
                name: "Worker10".to_owned(),
                size: "medium".to_owned(),
                cost: 400,
            }
        );
        assert_eq!(room.energy_available(), 50);

        let budget = room.energy_available() as i64;
        let res = spawner.run(&mut room, budget, Time(11));
        assert_eq!(res, DispatchOutcome::NothingAffordable { budget: 50 });
    }

    #[test]
    fn test_extreme_income_does_not_overflow() {
        let mut room = SimulatedRoom::new(PriceTable::DEFAULT, u32::MAX, u32::MAX, 3)
            .with_energy(u32::MAX - 1);
        for _ in 0..10 {
            room.tick();
        }
        assert!(room.energy_available() >= u32::MAX - 1);
    }
}
