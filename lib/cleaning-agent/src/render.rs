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

//! Per-tick renderings of the level and the agent's beliefs.
//!
//! The CSV record is the one stable output format. Its field order is: every item value, room
//! major then item minor, then the agent's room, the intention code, the agent's running average
//! and the level's average dirtiness.

use std::fmt::Write as _;
use std::str::FromStr;

use serde::Serialize;

use crate::agent::{Beliefs, Intention};
use crate::level::Level;
use crate::room::RoomState;
use crate::{CleaningError, Float};

/// How each tick is printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// One human readable line.
    #[default]
    Human,

    /// One comma separated record.
    Csv,

    /// One JSON object.
    Json,
}

impl FromStr for OutputFormat {
    type Err = CleaningError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "human" => Ok(OutputFormat::Human),
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(CleaningError::UnknownFormat(s.to_string())),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Human => write!(f, "human"),
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Serialize)]
struct FrameRecord<'a> {
    rooms: &'a [RoomState],
    current_room: usize,
    intention: Option<Intention>,
    running_average: Float,
    average_dirtiness: Float,
}

/// A snapshot view of the level and the agent's beliefs, ready to print.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    level: &'a Level,
    beliefs: &'a Beliefs,
}

impl<'a> Frame<'a> {
    /// View a level together with the beliefs of the agent cleaning it.
    pub fn new(level: &'a Level, beliefs: &'a Beliefs) -> Self {
        Self { level, beliefs }
    }

    /// Render in the given format, without a trailing newline.
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Human => Ok(self.human()),
            OutputFormat::Csv => Ok(self.csv()),
            OutputFormat::Json => self.json(),
        }
    }

    /// `Room 0:  1  0 ... McClean: currentRoom = ...` on one line.
    pub fn human(&self) -> String {
        let mut s = String::new();
        for (index, room) in self.level.rooms().iter().enumerate() {
            let _ = write!(s, "Room {}: ", index);
            for dirt in room.items() {
                let _ = write!(s, "{:2} ", dirt);
            }
        }
        let intention = match self.beliefs.last_intention {
            Some(intention) => intention.to_string(),
            None => "none".to_string(),
        };
        let _ = write!(
            s,
            "McClean: currentRoom = {}, intention = {}, avgDirtiness = {:.2} Average Dirtiness: {:.2}",
            self.beliefs.current_room,
            intention,
            self.beliefs.running_average,
            self.level.average_dirtiness()
        );
        s
    }

    /// The CSV record. The intention code is empty before the agent's first tick.
    pub fn csv(&self) -> String {
        let mut s = String::new();
        for room in self.level.rooms() {
            for dirt in room.items() {
                let _ = write!(s, "{},", dirt);
            }
        }
        let code = self
            .beliefs
            .last_intention
            .map(|intention| intention.code(self.level.items_per_room()).to_string())
            .unwrap_or_default();
        let _ = write!(
            s,
            "{},{},{:.6},{:.6}",
            self.beliefs.current_room,
            code,
            self.beliefs.running_average,
            self.level.average_dirtiness()
        );
        s
    }

    /// One JSON object.
    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&FrameRecord {
            rooms: self.level.rooms(),
            current_room: self.beliefs.current_room,
            intention: self.beliefs.last_intention,
            running_average: self.beliefs.running_average,
            average_dirtiness: self.level.average_dirtiness(),
        })
    }
}
