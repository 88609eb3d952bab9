/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

//! Simulation parameters.

use crate::CleaningError;

/// Everything needed to build a [`crate::Simulation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of rooms in the level.
    pub rooms: usize,

    /// Number of items in every room.
    pub items_per_room: usize,

    /// Upper bound (inclusive) for each room's usage multiplier.
    pub max_usage: u32,

    /// Degrade strikes applied after every agent tick.
    pub strikes_per_tick: u32,

    /// Seed of the single random number generator.
    pub seed: u64,
}

impl SimulationConfig {
    /// Create a config.
    pub fn new(
        rooms: usize,
        items_per_room: usize,
        max_usage: u32,
        strikes_per_tick: u32,
        seed: u64,
    ) -> Self {
        Self {
            rooms,
            items_per_room,
            max_usage,
            strikes_per_tick,
            seed,
        }
    }

    /// Reject configs that cannot build a level or a usage profile.
    pub fn validate(&self) -> Result<(), CleaningError> {
        if self.rooms == 0 {
            return Err(CleaningError::NoRooms);
        }
        if self.items_per_room == 0 {
            return Err(CleaningError::NoItems);
        }
        if self.max_usage == 0 {
            return Err(CleaningError::InvalidMaxUsage(self.max_usage));
        }
        Ok(())
    }
}

// six rooms with floor, windows, trash and desk each.
impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(6, 4, 3, 1, 123)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SimulationConfig::default();
        assert_eq!(config.rooms, 6);
        assert_eq!(config.items_per_room, 4);
        assert_eq!(config.max_usage, 3);
        assert_eq!(config.strikes_per_tick, 1);
        assert_eq!(config.seed, 123);
        assert_eq!(config.validate(), Ok(()));
    }

    #[test]
    fn test_validate_rejects_each_bad_field() {
        assert_eq!(
            SimulationConfig::new(0, 4, 3, 1, 0).validate(),
            Err(CleaningError::NoRooms)
        );
        assert_eq!(
            SimulationConfig::new(6, 0, 3, 1, 0).validate(),
            Err(CleaningError::NoItems)
        );
        assert_eq!(
            SimulationConfig::new(6, 4, 0, 1, 0).validate(),
            Err(CleaningError::InvalidMaxUsage(0))
        );
    }

    #[test]
    fn test_zero_strikes_is_valid() {
        assert_eq!(SimulationConfig::new(1, 1, 1, 0, 9).validate(), Ok(()));
    }
}
