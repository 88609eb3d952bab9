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

//! Run the McClean cleaning agent against a level that keeps getting dirty.
//!
//! Every iteration prints the state, lets the agent run one cycle, degrades the level and then
//! pauses. Runs until interrupted unless `--ticks` is given.
//!
//! ```bash
//! cleaning-agent --messup 2 --speed 0 --seed 7 --csv --ticks 1000 > run.csv
//! ```

use std::io::Write;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use cleaning_agent::{OutputFormat, Simulation, SimulationConfig};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// McClean cleaning agent simulation
#[derive(Parser, Debug)]
#[command(name = "cleaning-agent")]
#[command(about = "Simulate a cleaning agent in rooms that keep getting dirty")]
struct Args {
    /// How many items to mess up in every iteration
    #[arg(long, default_value = "1")]
    messup: u32,

    /// Pause in each iteration in milliseconds (0 = no pause)
    #[arg(long, default_value = "1000")]
    speed: u64,

    /// Random number generator seed
    #[arg(long, default_value = "123")]
    seed: u64,

    /// Maximal room usage. Each room's usage is drawn from 1..=usage
    #[arg(long, default_value = "3")]
    usage: u32,

    /// Number of rooms
    #[arg(long, default_value = "6")]
    rooms: usize,

    /// Number of items per room
    #[arg(long, default_value = "4")]
    items: usize,

    /// Output state in csv format, same as `--format csv`
    #[arg(long, conflicts_with = "format")]
    csv: bool,

    /// Output format: human, csv or json
    #[arg(long, default_value = "human")]
    format: OutputFormat,

    /// Stop after this many iterations instead of running forever
    #[arg(long)]
    ticks: Option<u64>,
}

impl Args {
    fn simulation_config(&self) -> SimulationConfig {
        SimulationConfig::new(self.rooms, self.items, self.usage, self.messup, self.seed)
    }

    fn output_format(&self) -> OutputFormat {
        if self.csv {
            OutputFormat::Csv
        } else {
            self.format
        }
    }
}

fn main() -> anyhow::Result<()> {
    // logs go to stderr so csv and json on stdout stay clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let args = Args::parse();
    let format = args.output_format();
    let mut simulation =
        Simulation::new(args.simulation_config()).context("invalid simulation parameters")?;
    let pause = Duration::from_millis(args.speed);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let mut remaining = args.ticks;
    while remaining != Some(0) {
        writeln!(out, "{}", simulation.frame().render(format)?)?;
        out.flush()?;

        simulation.step()?;

        if let Some(left) = remaining.as_mut() {
            *left -= 1;
        }
        if !pause.is_zero() {
            std::thread::sleep(pause);
        }
    }

    writeln!(out, "{}", simulation.frame().render(format)?)?;
    info!(
        ticks = simulation.ticks(),
        score = simulation.score(),
        average_dirtiness = simulation.level().average_dirtiness(),
        "Simulation finished"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_canonical_run() {
        let args = Args::try_parse_from(["cleaning-agent"]).expect("defaults parse");
        assert_eq!(args.simulation_config(), SimulationConfig::default());
        assert_eq!(args.output_format(), OutputFormat::Human);
        assert_eq!(args.speed, 1000);
        assert_eq!(args.ticks, None);
    }

    #[test]
    fn test_csv_flag_selects_csv() {
        let args = Args::try_parse_from(["cleaning-agent", "--csv", "--messup", "3", "--seed", "9"])
            .expect("args parse");
        assert_eq!(args.output_format(), OutputFormat::Csv);
        assert_eq!(args.simulation_config().strikes_per_tick, 3);
        assert_eq!(args.simulation_config().seed, 9);
    }

    #[test]
    fn test_format_option() {
        let args = Args::try_parse_from(["cleaning-agent", "--format", "json", "--ticks", "10"])
            .expect("args parse");
        assert_eq!(args.output_format(), OutputFormat::Json);
        assert_eq!(args.ticks, Some(10));
    }

    #[test]
    fn test_csv_conflicts_with_format() {
        assert!(Args::try_parse_from(["cleaning-agent", "--csv", "--format", "json"]).is_err());
        assert!(Args::try_parse_from(["cleaning-agent", "--format", "yaml"]).is_err());
    }

    #[test]
    fn test_zero_usage_is_rejected_by_simulation() {
        let args = Args::try_parse_from(["cleaning-agent", "--usage", "0"]).expect("args parse");
        assert!(Simulation::new(args.simulation_config()).is_err());
    }
}
