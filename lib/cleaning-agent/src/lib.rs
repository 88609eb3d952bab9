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

#![warn(missing_docs)]

//! A cleaning agent that keeps a set of rooms tidy while the rooms get dirty again.
//!
//! The agent runs a perceive, revise beliefs, generate options, filter to an intention, act
//! cycle every tick. Independently of the agent, the [`Level`] is degraded by random strikes
//! whose strength depends on each room's [`UsageProfile`] multiplier.
//!
//! All randomness comes from a single seedable [`Rng`] so that a seed reproduces a run exactly.

// PEAS - Performance, Environment, Action, Sensing
//
// See:
// -  Chapter 2: Intelligent Agents, page 40

use rand::SeedableRng;
use tracing::{debug, info};

pub mod agent;
pub mod config;
pub mod level;
pub mod render;
pub mod room;

pub use agent::{Beliefs, Desire, Intention, McClean, Perception};
pub use config::SimulationConfig;
pub use level::{Level, UsageProfile};
pub use render::{Frame, OutputFormat};
pub use room::{Item, RoomState};

/// Amount of dirt on a single item. Zero means clean.
pub type Dirt = u64;

/// Floating point type used for averages.
pub type Float = f64;

/// The one random number generator shared by level initialization, usage profile and degrading.
pub type Rng = rand_pcg::Pcg64;

/// Errors raised when constructing the level, the usage profile or a simulation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CleaningError {
    /// A level needs at least one room.
    #[error("room count must be at least 1")]
    NoRooms,

    /// A room needs at least one item.
    #[error("items per room must be at least 1")]
    NoItems,

    /// The maximum usage multiplier must be at least 1.
    #[error("max usage must be at least 1, got {0}")]
    InvalidMaxUsage(u32),

    /// A usage multiplier of zero would make degrading a no-op.
    #[error("usage multiplier for room {room} must be at least 1, got {multiplier}")]
    InvalidMultiplier {
        /// Room index.
        room: usize,
        /// Offending multiplier.
        multiplier: Dirt,
    },

    /// Rooms passed to a level must all have the same number of items.
    #[error("room {room} has {items} items, expected {expected}")]
    RaggedRooms {
        /// Room index.
        room: usize,
        /// Items in that room.
        items: usize,
        /// Items in the first room.
        expected: usize,
    },

    /// The usage profile must have one multiplier per room of the level.
    #[error("usage profile covers {usage} rooms but the level has {level}")]
    RoomCountMismatch {
        /// Rooms in the level.
        level: usize,
        /// Rooms in the usage profile.
        usage: usize,
    },

    /// Unknown output format name.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),
}

/// An Agent acts in a Performance, Environment, Action, Sensing (PEAS) cycle.
/// For a given Perception, the Agent will return an Action.
///
/// The Agent knows where it is, but it only ever sees the Environment through the Percept the
/// Environment hands it for that location.
pub trait Agent {
    /// What the agent decides to do.
    type Action;
    /// What the agent senses.
    type Percept;
    /// Where the agent is.
    type Location;

    /// The location the agent currently believes it is in.
    fn location(&self) -> Self::Location;

    /// Run the agent's decision making on a percept and return the chosen action.
    fn act(&mut self, percept: &Self::Percept) -> Self::Action;
}

/// An Environment hands out percepts for a location and executes actions taken there.
///
/// Notice that the Environment is not aware of an Agent.
pub trait Environment {
    /// Actions the environment can execute.
    type Action;
    /// Percepts the environment produces.
    type Percept;
    /// Locations within the environment.
    type Location;
    /// Performance measure.
    type Score: num_traits::NumAssign + Copy;

    /// Sense the environment at a location.
    fn percept(&self, location: &Self::Location) -> Self::Percept;

    /// Apply an action taken at a location.
    fn execute_action(&mut self, location: &Self::Location, action: &Self::Action);

    /// Returns the score of the Environment. This is not cumulative or stateful. This is the score
    /// of the Environment at the current state.
    fn score(&self) -> Self::Score;
}

/// What happened during one [`Simulation::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    /// Number of ticks completed, starting at 1.
    pub tick: u64,
    /// The agent's beliefs after its cycle.
    pub beliefs: Beliefs,
    /// Dirt added by degrading after the agent acted.
    pub dirt_added: Dirt,
    /// Average dirtiness of the level at the end of the tick.
    pub average_dirtiness: Float,
}

/// A Simulation runs the agent and the degrading level in alternation.
///
/// Each step the agent runs one full cognitive cycle against the level, then the level is
/// degraded. The performance measure is the sum of the level's average dirtiness after every
/// step, so lower is better.
pub struct Simulation {
    config: SimulationConfig,
    level: Level,
    usage: UsageProfile,
    agent: McClean,
    rng: Rng,
    ticks: u64,
    score: Float,
}

impl Simulation {
    /// Build a simulation from a config.
    ///
    /// The level is drawn first, then the usage profile, then every degrade strike, all from one
    /// generator seeded with `config.seed`.
    pub fn new(config: SimulationConfig) -> Result<Self, CleaningError> {
        config.validate()?;
        let mut rng = Rng::seed_from_u64(config.seed);
        let level = Level::new(config.rooms, config.items_per_room, &mut rng)?;
        let usage = UsageProfile::new(config.rooms, config.max_usage, &mut rng)?;
        info!(
            seed = config.seed,
            rooms = config.rooms,
            items_per_room = config.items_per_room,
            usage = ?usage.multipliers(),
            "Room usage"
        );
        Ok(Self {
            config,
            level,
            usage,
            agent: McClean::new(),
            rng,
            ticks: 0,
            score: 0.0,
        })
    }

    /// Run one agent cycle followed by one degrade.
    pub fn step(&mut self) -> Result<TickReport, CleaningError> {
        let beliefs = self.agent.tick(&mut self.level);
        let dirt_added =
            self.level
                .degrade(self.config.strikes_per_tick, &self.usage, &mut self.rng)?;
        self.ticks += 1;
        self.score += self.level.score();
        let average_dirtiness = self.level.average_dirtiness();
        debug!(
            tick = self.ticks,
            room = beliefs.current_room,
            dirt_added,
            average_dirtiness,
            "Tick finished"
        );
        Ok(TickReport {
            tick: self.ticks,
            beliefs,
            dirt_added,
            average_dirtiness,
        })
    }

    /// Run a fixed number of steps and return the last report, if any step ran.
    pub fn run(&mut self, ticks: u64) -> Result<Option<TickReport>, CleaningError> {
        let mut last = None;
        for _ in 0..ticks {
            last = Some(self.step()?);
        }
        Ok(last)
    }

    /// Current level.
    pub fn level(&self) -> &Level {
        &self.level
    }

    /// The usage profile drawn at construction.
    pub fn usage(&self) -> &UsageProfile {
        &self.usage
    }

    /// The agent.
    pub fn agent(&self) -> &McClean {
        &self.agent
    }

    /// The config this simulation was built from.
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Ticks completed so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Cumulative performance measure. Lower is better.
    pub fn score(&self) -> Float {
        self.score
    }

    /// A renderable view of the current state.
    pub fn frame(&self) -> Frame<'_> {
        Frame::new(&self.level, self.agent.beliefs())
    }
}
