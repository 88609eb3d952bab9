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

//! The level (all rooms) and the per-room usage profile that drives how fast rooms get dirty.

use rand::Rng as _;
use serde::Deserialize;
use tracing::trace;

use crate::agent::{Intention, Perception};
use crate::room::RoomState;
use crate::{CleaningError, Dirt, Environment, Float, Rng};

/// How much one degrade strike dirties an item, per room. Every multiplier is at least 1.
///
/// Deserializes from a plain list of multipliers, checked the same way as
/// [`UsageProfile::from_multipliers`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<Dirt>")]
pub struct UsageProfile {
    multipliers: Vec<Dirt>,
}

impl UsageProfile {
    /// Draw a multiplier in `1..=max_usage` for each room.
    pub fn new(rooms: usize, max_usage: u32, rng: &mut Rng) -> Result<Self, CleaningError> {
        if rooms == 0 {
            return Err(CleaningError::NoRooms);
        }
        if max_usage == 0 {
            return Err(CleaningError::InvalidMaxUsage(max_usage));
        }
        let multipliers = (0..rooms)
            .map(|_| rng.gen_range(1..=Dirt::from(max_usage)))
            .collect();
        Ok(Self { multipliers })
    }

    /// Same as [`UsageProfile::new`] with a fresh generator seeded from `seed`.
    pub fn from_seed(seed: u64, rooms: usize, max_usage: u32) -> Result<Self, CleaningError> {
        use rand::SeedableRng;
        Self::new(rooms, max_usage, &mut Rng::seed_from_u64(seed))
    }

    /// A profile with explicit multipliers.
    pub fn from_multipliers(multipliers: Vec<Dirt>) -> Result<Self, CleaningError> {
        if multipliers.is_empty() {
            return Err(CleaningError::NoRooms);
        }
        if let Some((room, &multiplier)) = multipliers.iter().enumerate().find(|(_, m)| **m == 0) {
            return Err(CleaningError::InvalidMultiplier { room, multiplier });
        }
        Ok(Self { multipliers })
    }

    /// Multiplier of one room.
    pub fn multiplier(&self, room: usize) -> Dirt {
        self.multipliers[room]
    }

    /// All multipliers in room order.
    pub fn multipliers(&self) -> &[Dirt] {
        &self.multipliers
    }

    /// Number of rooms covered.
    pub fn len(&self) -> usize {
        self.multipliers.len()
    }

    /// Never true for a constructed profile.
    pub fn is_empty(&self) -> bool {
        self.multipliers.is_empty()
    }
}

/// A fixed set of rooms, each with the same number of items. Never resized after construction.
///
/// Deserializes from a list of rooms, each a list of item values, checked the same way as
/// [`Level::from_rooms`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "Vec<RoomState>")]
pub struct Level {
    rooms: Vec<RoomState>,
    items_per_room: usize,
}

impl Level {
    /// A level whose items are each drawn uniformly from {0, 1}.
    pub fn new(rooms: usize, items_per_room: usize, rng: &mut Rng) -> Result<Self, CleaningError> {
        check_dimensions(rooms, items_per_room)?;
        let rooms = (0..rooms)
            .map(|_| RoomState::random(items_per_room, rng))
            .collect();
        Ok(Self {
            rooms,
            items_per_room,
        })
    }

    /// Same as [`Level::new`] with a fresh generator seeded from `seed`.
    pub fn from_seed(seed: u64, rooms: usize, items_per_room: usize) -> Result<Self, CleaningError> {
        use rand::SeedableRng;
        Self::new(rooms, items_per_room, &mut Rng::seed_from_u64(seed))
    }

    /// A level with explicit rooms. All rooms must have the same, non-zero, number of items.
    pub fn from_rooms(rooms: Vec<RoomState>) -> Result<Self, CleaningError> {
        let expected = rooms.first().map(RoomState::len).ok_or(CleaningError::NoRooms)?;
        check_dimensions(rooms.len(), expected)?;
        if let Some((room, state)) = rooms.iter().enumerate().find(|(_, r)| r.len() != expected) {
            return Err(CleaningError::RaggedRooms {
                room,
                items: state.len(),
                expected,
            });
        }
        Ok(Self {
            rooms,
            items_per_room: expected,
        })
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Items in every room.
    pub fn items_per_room(&self) -> usize {
        self.items_per_room
    }

    /// One room.
    pub fn room(&self, room: usize) -> &RoomState {
        &self.rooms[room]
    }

    /// All rooms in order.
    pub fn rooms(&self) -> &[RoomState] {
        &self.rooms
    }

    /// Sum of every item of every room.
    pub fn total_dirt(&self) -> Dirt {
        self.rooms.iter().map(RoomState::dirtiness).sum()
    }

    /// Total dirt divided by the number of rooms.
    pub fn average_dirtiness(&self) -> Float {
        self.total_dirt() as Float / self.rooms.len() as Float
    }

    /// Strike `strikes` times: each strike picks a random room and a random item and adds that
    /// room's usage multiplier to it. Strikes may land on the same item. Returns the dirt added.
    pub fn degrade(
        &mut self,
        strikes: u32,
        usage: &UsageProfile,
        rng: &mut Rng,
    ) -> Result<Dirt, CleaningError> {
        if usage.len() != self.rooms.len() {
            return Err(CleaningError::RoomCountMismatch {
                level: self.rooms.len(),
                usage: usage.len(),
            });
        }
        let mut added = 0;
        for _ in 0..strikes {
            let room = rng.gen_range(0..self.rooms.len());
            let item = rng.gen_range(0..self.items_per_room);
            let amount = usage.multiplier(room);
            self.rooms[room].soil(item, amount);
            trace!(room, item, amount, "Strike");
            added += amount;
        }
        Ok(added)
    }
}

impl TryFrom<Vec<Dirt>> for UsageProfile {
    type Error = CleaningError;

    fn try_from(multipliers: Vec<Dirt>) -> Result<Self, Self::Error> {
        Self::from_multipliers(multipliers)
    }
}

impl TryFrom<Vec<RoomState>> for Level {
    type Error = CleaningError;

    fn try_from(rooms: Vec<RoomState>) -> Result<Self, Self::Error> {
        Self::from_rooms(rooms)
    }
}

fn check_dimensions(rooms: usize, items_per_room: usize) -> Result<(), CleaningError> {
    if rooms == 0 {
        return Err(CleaningError::NoRooms);
    }
    if items_per_room == 0 {
        return Err(CleaningError::NoItems);
    }
    Ok(())
}

impl Environment for Level {
    type Action = Intention;
    type Percept = Perception;
    type Location = usize;
    type Score = Float;

    // Locations wrap around the level.
    fn percept(&self, location: &usize) -> Perception {
        let room = *location % self.rooms.len();
        let items = self.rooms[room].clone();
        Perception {
            room,
            rooms: self.rooms.len(),
            dirtiness: items.dirtiness(),
            items,
        }
    }

    fn execute_action(&mut self, location: &usize, action: &Intention) {
        match action {
            Intention::CleanItem(item) => {
                let room = *location % self.rooms.len();
                self.rooms[room].clean(*item)
            }
            Intention::ChangeRoom => {}
        }
    }

    fn score(&self) -> Float {
        self.average_dirtiness()
    }
}
