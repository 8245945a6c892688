use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;

use base58check::{Codec, Error, CHECKSUM_LEN};

#[derive(Parser, Debug)]
#[command(name = "base58check", version, about = "Base58Check encoder and decoder")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, PartialEq)]
enum Command {
    /// Encode a hex payload.
    Encode {
        /// Hex payload; read from stdin when omitted.
        payload: Option<String>,
        /// Skip the checksum.
        #[arg(long)]
        plain: bool,
        #[arg(long)]
        json: bool,
    },
    /// Decode a base58 string to hex.
    Decode {
        /// Encoded string; read from stdin when omitted.
        text: Option<String>,
        /// The input carries no checksum.
        #[arg(long)]
        plain: bool,
        /// Print nothing on failure instead of the reason.
        #[arg(long = "unsafe")]
        unchecked: bool,
        #[arg(long)]
        json: bool,
    },
    /// Print the 4-byte checksum tag of a hex payload.
    Checksum {
        payload: Option<String>,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Codec(#[from] Error),
    #[error("invalid hex payload: {0}")]
    Hex(#[from] hex::FromHexError),
    #[error("failed to read stdin: {0}")]
    Io(#[from] io::Error),
    #[error("failed to serialize output: {0}")]
    Json(#[from] serde_json::Error),
    #[error("input did not decode")]
    Absent,
}

#[derive(Serialize, Debug)]
struct Output<'a> {
    payload: String,
    encoded: &'a str,
}

fn render(payload: &[u8], encoded: &str, json: bool) -> Result<String, CliError> {
    if json {
        let out = Output {
            payload: hex::encode(payload),
            encoded,
        };
        Ok(serde_json::to_string(&out)?)
    } else {
        Ok(hex::encode(payload))
    }
}

fn input(arg: &Option<String>) -> Result<String, CliError> {
    match arg {
        Some(s) => Ok(s.clone()),
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf.trim().to_string())
        }
    }
}

fn run(codec: &Codec, command: &Command) -> Result<String, CliError> {
    match command {
        Command::Encode {
            payload,
            plain,
            json,
        } => {
            let bytes = hex::decode(input(payload)?)?;
            let encoded = if *plain {
                codec.encode_plain(&bytes)
            } else {
                codec.encode(&bytes)
            };
            if *json {
                render(&bytes, &encoded, true)
            } else {
                Ok(encoded)
            }
        }
        Command::Decode {
            text,
            plain,
            unchecked,
            json,
        } => {
            let text = input(text)?;
            let decoded = match (*plain, *unchecked) {
                (true, true) => codec.decode_plain_unsafe(&text).ok_or(CliError::Absent)?,
                (true, false) => codec.decode_plain(&text)?,
                (false, true) => codec.decode_unsafe(&text).ok_or(CliError::Absent)?,
                (false, false) => codec.decode(&text)?,
            };
            render(&decoded, &text, *json)
        }
        Command::Checksum { payload } => {
            let bytes = hex::decode(input(payload)?)?;
            let digest = codec.checksum(&bytes);
            Ok(hex::encode(&digest[..CHECKSUM_LEN]))
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let cli = Cli::parse();
    debug!("running {:?}", cli.command);

    match run(&Codec::new(), &cli.command) {
        Ok(out) => {
            println!("{}", out);
            ExitCode::SUCCESS
        }
        Err(CliError::Absent) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
