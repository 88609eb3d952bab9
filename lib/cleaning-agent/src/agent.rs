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

//! McClean, a belief-desire-intention cleaning agent.
//!
//! Every tick the agent runs the same phases in the same order:
//!
//! 1. perceive the room it is in (it cannot see any other room),
//! 2. revise its running average of observed dirtiness,
//! 3. generate an option: clean this room if it is dirtier than the running average, otherwise
//!    change room,
//! 4. filter the option to an intention: the dirtiest item of the room, or changing room,
//! 5. act on the intention.

use serde::Serialize;
use tracing::debug;

use crate::level::Level;
use crate::room::{Item, RoomState};
use crate::{Agent, Dirt, Environment, Float};

/// Weight of a new observation in the running average is `1 / SMOOTHING`.
const SMOOTHING: Float = 10.0;

/// What the agent senses about the room it is in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Perception {
    /// Index of the perceived room.
    pub room: usize,

    /// Number of rooms in the level.
    pub rooms: usize,

    /// Sum of all item values of the room.
    pub dirtiness: Dirt,

    /// Item values of the room.
    pub items: RoomState,
}

/// The option generated from a perception.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Desire {
    /// The room is dirtier than usual.
    CleanThisRoom,

    /// The room is no dirtier than usual.
    ChangeRoom,
}

/// The action the agent commits to for a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Intention {
    /// Reset one item of the current room to clean.
    CleanItem(usize),

    /// Move on to the next room.
    ChangeRoom,
}

impl Intention {
    /// Numeric code for CSV output. Cleaning item `k` is `k`, changing room is
    /// `items_per_room + 1`, which no item index can reach.
    pub fn code(&self, items_per_room: usize) -> usize {
        match self {
            Intention::CleanItem(item) => *item,
            Intention::ChangeRoom => items_per_room + 1,
        }
    }
}

impl std::fmt::Display for Intention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Intention::CleanItem(item) => match Item::from_index(*item) {
                Some(kind) => write!(f, "clean {}", kind),
                None => write!(f, "clean item {}", item),
            },
            Intention::ChangeRoom => write!(f, "change room"),
        }
    }
}

/// The agent's beliefs. Mutated in place every tick, never reset.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Beliefs {
    /// The room the agent is in.
    pub current_room: usize,

    /// Exponentially smoothed dirtiness the agent has observed. Never negative.
    pub running_average: Float,

    /// Dirtiness of the last perceived room.
    pub last_perceived: Dirt,

    /// The intention of the last tick, `None` before the first tick.
    pub last_intention: Option<Intention>,
}

/// The cleaning agent.
#[derive(Debug, Clone, Default)]
pub struct McClean {
    beliefs: Beliefs,
}

impl McClean {
    /// An agent starting in room 0.
    pub fn new() -> Self {
        Self::starting_in(0)
    }

    /// An agent starting in the given room. A room past the end of the level wraps around on the
    /// first tick, so `starting_in(6)` in a six room level starts in room 0.
    pub fn starting_in(room: usize) -> Self {
        Self {
            beliefs: Beliefs {
                current_room: room,
                ..Beliefs::default()
            },
        }
    }

    /// Current beliefs.
    pub fn beliefs(&self) -> &Beliefs {
        &self.beliefs
    }

    /// Run one full cognitive cycle against the level and return the resulting beliefs.
    pub fn tick(&mut self, level: &mut Level) -> Beliefs {
        let percept = self.perceive(level);
        let intention = self.act(&percept);
        level.execute_action(&percept.room, &intention);
        self.beliefs
    }

    /// Sense the current room.
    pub fn perceive(&self, level: &Level) -> Perception {
        level.percept(&self.beliefs.current_room)
    }

    /// Fold the observed dirtiness into the running average, clamped at zero.
    pub fn revise_beliefs(&mut self, percept: &Perception) {
        let observed = percept.dirtiness as Float;
        let beliefs = &mut self.beliefs;
        beliefs.last_perceived = percept.dirtiness;
        beliefs.running_average += (observed - beliefs.running_average) / SMOOTHING;
        if beliefs.running_average < 0.0 {
            beliefs.running_average = 0.0;
        }
    }

    /// Clean only when the room is strictly dirtier than the running average.
    pub fn options(&self, percept: &Perception) -> Desire {
        if percept.dirtiness as Float > self.beliefs.running_average {
            Desire::CleanThisRoom
        } else {
            Desire::ChangeRoom
        }
    }

    /// Turn the desire into an intention. Cleaning targets the dirtiest item, lowest index on
    /// ties. A room with nothing dirty has nothing to clean, so the agent changes room instead.
    pub fn filter(&self, desire: Desire, percept: &Perception) -> Intention {
        match desire {
            Desire::CleanThisRoom => match percept.items.dirtiest_item() {
                Some(item) => Intention::CleanItem(item),
                None => Intention::ChangeRoom,
            },
            Desire::ChangeRoom => Intention::ChangeRoom,
        }
    }
}

impl Agent for McClean {
    type Action = Intention;
    type Percept = Perception;
    type Location = usize;

    fn location(&self) -> usize {
        self.beliefs.current_room
    }

    fn act(&mut self, percept: &Perception) -> Intention {
        self.beliefs.current_room = percept.room;
        self.revise_beliefs(percept);
        let desire = self.options(percept);
        let intention = self.filter(desire, percept);
        debug!(
            room = percept.room,
            observed = percept.dirtiness,
            running_average = self.beliefs.running_average,
            ?desire,
            %intention,
            "Decided"
        );
        if intention == Intention::ChangeRoom {
            self.beliefs.current_room = (self.beliefs.current_room + 1) % percept.rooms;
        }
        self.beliefs.last_intention = Some(intention);
        intention
    }
}
