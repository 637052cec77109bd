// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

//! Command line front end: top queries and distinct query counts over a TSV query log.

use std::fs::File;
use std::io::BufReader;
use std::io::BufWriter;
use std::io::IsTerminal;
use std::io::Write;
use std::path::Path;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use clap::Subcommand;
use clap::error::ErrorKind as ClapErrorKind;
use querystats::aggregate::TimestampRange;
use querystats::aggregate::distinct_queries;
use querystats::aggregate::top_queries;
use querystats::timestamp::Timestamp;
use tracing_subscriber::EnvFilter;

const BIN_NAME: &str = "hnstat";

#[derive(Parser)]
#[command(name = BIN_NAME, version, about, long_about = None)]
struct Command {
    /// Ignore queries logged before this timestamp.
    #[arg(
        long,
        global = true,
        value_name = "TIMESTAMP",
        allow_hyphen_values = true,
        value_parser = parse_timestamp
    )]
    from: Option<Timestamp<'static>>,

    /// Ignore queries logged after this timestamp.
    #[arg(
        long,
        global = true,
        value_name = "TIMESTAMP",
        allow_hyphen_values = true,
        value_parser = parse_timestamp
    )]
    to: Option<Timestamp<'static>>,

    #[command(subcommand)]
    sub: SubCommand,
}

#[derive(Subcommand)]
enum SubCommand {
    /// Print the most frequent queries with their counts.
    Top {
        /// Number of queries to print.
        #[arg(value_parser = parse_count)]
        count: usize,
        /// Tab-separated query log.
        input: PathBuf,
    },
    /// Print the number of distinct queries.
    Distinct {
        /// Tab-separated query log.
        input: PathBuf,
    },
}

impl Command {
    fn range(&self) -> Result<TimestampRange, String> {
        let start = self.from.clone().unwrap_or(Timestamp::MIN);
        let end = self.to.clone().unwrap_or(Timestamp::MAX);
        TimestampRange::new(start, end).map_err(|err| err.to_string())
    }

    fn run(self) -> Result<(), String> {
        let range = self.range()?;
        let stdout = std::io::stdout();
        let mut out = BufWriter::new(stdout.lock());

        match self.sub {
            SubCommand::Top { count, input } => {
                let file = open(&input)?;
                let (top, _) = top_queries(file, &range, count).map_err(|err| err.to_string())?;
                for (query, count) in top {
                    out.write_all(&query).map_err(write_error)?;
                    writeln!(out, " {count}").map_err(write_error)?;
                }
            }
            SubCommand::Distinct { input } => {
                let file = open(&input)?;
                let (distinct, _) =
                    distinct_queries(file, &range).map_err(|err| err.to_string())?;
                writeln!(out, "{distinct}").map_err(write_error)?;
            }
        }

        out.flush().map_err(write_error)
    }
}

fn parse_count(text: &str) -> Result<usize, String> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(format!("\"{text}\" is not an integer"));
    }
    text.parse().map_err(|_| format!("\"{text}\" is too large"))
}

fn parse_timestamp(text: &str) -> Result<Timestamp<'static>, querystats::error::Error> {
    text.parse()
}

fn open(path: &Path) -> Result<BufReader<File>, String> {
    File::open(path)
        .map(BufReader::new)
        .map_err(|err| format!("file \"{}\" not readable: {err}", path.display()))
}

fn write_error(err: std::io::Error) -> String {
    format!("failed to write output: {err}")
}

/// Folds a rendered clap error into a single line, dropping usage and hints.
fn one_line(rendered: &str) -> String {
    let message = rendered
        .lines()
        .take_while(|line| !line.trim().is_empty())
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(" ");
    message
        .strip_prefix("error: ")
        .map(str::to_string)
        .unwrap_or(message)
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();
}

fn main() -> ExitCode {
    let command = match Command::try_parse() {
        Ok(command) => command,
        Err(err) => match err.kind() {
            ClapErrorKind::DisplayHelp | ClapErrorKind::DisplayVersion => err.exit(),
            ClapErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ClapErrorKind::MissingSubcommand => {
                eprintln!("{BIN_NAME}: missing command");
                return ExitCode::FAILURE;
            }
            _ => {
                eprintln!("{BIN_NAME}: {}", one_line(&err.to_string()));
                return ExitCode::FAILURE;
            }
        },
    };

    init_logging();

    match command.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            tracing::debug!(%message, "aborting");
            eprintln!("{BIN_NAME}: {message}");
            ExitCode::FAILURE
        }
    }
}
