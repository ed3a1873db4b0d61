// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

use std::process::exit;

use anyhow::{Context, Result};
use clap::Parser;
use log::{info, warn};

use transport_flow::cli::Cli;
use transport_flow::{io, runner, Outcome, RunConfig};

// The scenarios in data/:
//
// data_0.json   base case
// data_1.json   one unit of supply moved from Gou to Arn
// data_2.json   one more unit demanded in Lon, supplied by Gou
// data_3.json   one more unit demanded in Ber, supplied by Gou, Arn -> Ber
//               capacity raised by one
// data_4.json   Gou -> Ams closed, so Ams is served from Arn only
fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match &args.config_file {
        None => RunConfig::default(),
        Some(config_file) => io::read_config(config_file)?,
    };
    info!("Solver configuration: {:?}", config);

    let mut last_report = None;
    for (i, data_file) in args.data_files.iter().enumerate() {
        if i > 0 {
            println!();
        }
        let outcome = runner::solve(data_file, &config)
            .with_context(|| format!("could not solve {}", data_file.display()))?;
        let code = outcome.exit_code();
        match outcome {
            Outcome::Solved(report) => {
                print!("{}", report);
                last_report = Some(report);
            }
            Outcome::NotOptimal(state) => {
                println!("There was an issue with the min cost flow input.");
                println!("Status: {}", state);
                exit(code);
            }
        }
    }

    if let Some(output) = &args.output {
        match &last_report {
            Some(report) => io::write_json(report, output)?,
            None => warn!("No report to write to {}", output.display()),
        }
    }

    Ok(())
}
