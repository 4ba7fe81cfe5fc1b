//! Command line front end for the `intcodes` library: encodes lists of
//! integers and decodes bit strings with a selected code family.

mod error;
mod input;
mod logging;
mod output;
mod settings;

use std::process::ExitCode;

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use intcodes::Coding;
use intcodes::IntegerCode;

use crate::error::Error;
use crate::output::EncodeReport;
use crate::output::EncodedValue;
use crate::settings::CodingArgs;

/// Encode and decode integers with variable-length codes.
#[derive(Debug, Parser)]
#[command(name = "intcodes", version)]
struct CliArgs {
    #[command(flatten)]
    coding: CodingArgs,

    /// Print results as JSON.
    #[arg(long, global = true)]
    json: bool,

    /// Write log lines as JSON.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: CliCommand,
}

#[derive(Debug, Subcommand)]
enum CliCommand {
    /// Encode a comma separated list of unsigned integers
    Encode(EncodeArgs),
    /// Decode a string of bits into integers
    Decode(DecodeArgs),
    /// List the available code families
    Codings,
}

#[derive(Debug, Args)]
struct EncodeArgs {
    /// The integers, e.g. "1, 2, 3".
    numbers: String,
}

#[derive(Debug, Args)]
struct DecodeArgs {
    /// The bits, e.g. "00101"; whitespace is ignored.
    bits: String,
}

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::setup_logging(args.log_json);

    match run(args) {
        Ok(text) => {
            println!("{text}");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("{}", error_message(&error));
            ExitCode::FAILURE
        }
    }
}

/// The single line shown on stderr when a command fails.
fn error_message(error: &Error) -> String {
    format!("error: {error}")
}

/// Runs the selected command and returns what to print.
fn run(args: CliArgs) -> Result<String, Error> {
    match &args.command {
        CliCommand::Encode(encode_args) => {
            encode(&args.coding.load()?, &encode_args.numbers, args.json)
        }
        CliCommand::Decode(decode_args) => {
            decode(&args.coding.load()?, &decode_args.bits, args.json)
        }
        CliCommand::Codings => Ok(output::codings_to_text()),
    }
}

fn encode(coding: &Coding, numbers: &str, json: bool) -> Result<String, Error> {
    let values = input::parse_numbers(numbers)?;

    let codes = values
        .into_iter()
        .map(|integer| -> Result<EncodedValue, Error> {
            let code = coding.encode(integer)?;
            Ok(EncodedValue { integer, code })
        })
        .collect::<Result<Vec<_>, Error>>()?;

    let report = EncodeReport::new(codes);
    tracing::info!(
        coding = %coding.kind(),
        values = report.codes.len(),
        bits = report.bits.len(),
        "encoded sequence"
    );

    match json {
        true => Ok(serde_json::to_string_pretty(&report)?),
        false => Ok(report.to_text()),
    }
}

fn decode(coding: &Coding, bits: &str, json: bool) -> Result<String, Error> {
    let bits = input::parse_bits(bits)?;
    let entries = coding.decode_sequence(&bits);

    match entries.last().filter(|entry| entry.is_remainder()) {
        Some(remainder) => tracing::warn!(
            coding = %coding.kind(),
            remainder_bits = remainder.code.len(),
            "input ends with bits that could not be decoded"
        ),
        None => tracing::info!(
            coding = %coding.kind(),
            values = entries.len(),
            "decoded sequence"
        ),
    }

    match json {
        true => Ok(serde_json::to_string_pretty(&entries)?),
        false => Ok(output::entries_to_text(&entries)),
    }
}
