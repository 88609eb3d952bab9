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

//! Dirt levels of the items in a single room.

use rand::Rng as _;
use serde::{Deserialize, Serialize};

use crate::{Dirt, Rng};

/// The kinds of items found in a standard room, in slot order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Item {
    /// Slot 0.
    Floor,

    /// Slot 1.
    Windows,

    /// Slot 2.
    Trash,

    /// Slot 3.
    Desk,
}

impl Item {
    /// All standard items in slot order.
    pub const ALL: [Item; 4] = [Item::Floor, Item::Windows, Item::Trash, Item::Desk];

    /// The item kind for a slot, if the slot is one of the standard four.
    pub fn from_index(index: usize) -> Option<Item> {
        Item::ALL.get(index).copied()
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Item::Floor => write!(f, "floor"),
            Item::Windows => write!(f, "windows"),
            Item::Trash => write!(f, "trash"),
            Item::Desk => write!(f, "desk"),
        }
    }
}

/// Per-item dirt of one room. A value of 0 is clean, anything above is the degree of dirtiness.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomState {
    items: Vec<Dirt>,
}

impl From<Vec<Dirt>> for RoomState {
    fn from(items: Vec<Dirt>) -> Self {
        Self { items }
    }
}

impl RoomState {
    /// A room with every item clean.
    pub fn clean_room(items: usize) -> Self {
        Self {
            items: vec![0; items],
        }
    }

    /// A room with every item drawn uniformly from {0, 1}.
    pub fn random(items: usize, rng: &mut Rng) -> Self {
        Self {
            items: (0..items).map(|_| rng.gen_range(0..2)).collect(),
        }
    }

    /// Number of item slots.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the room has no item slots.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Dirt of one item.
    pub fn get(&self, item: usize) -> Dirt {
        self.items[item]
    }

    /// All item values in slot order.
    pub fn items(&self) -> &[Dirt] {
        &self.items
    }

    /// Sum of all item values.
    pub fn dirtiness(&self) -> Dirt {
        self.items.iter().sum()
    }

    /// The item with the strictly greatest dirt, lowest index on ties. `None` when every item is
    /// clean.
    pub fn dirtiest_item(&self) -> Option<usize> {
        let mut dirtiest = None;
        let mut max_dirt = 0;
        for (index, &dirt) in self.items.iter().enumerate() {
            if dirt > max_dirt {
                max_dirt = dirt;
                dirtiest = Some(index);
            }
        }
        dirtiest
    }

    /// Reset one item to clean.
    pub fn clean(&mut self, item: usize) {
        self.items[item] = 0;
    }

    /// Add dirt to one item.
    pub fn soil(&mut self, item: usize, amount: Dirt) {
        self.items[item] += amount;
    }
}
