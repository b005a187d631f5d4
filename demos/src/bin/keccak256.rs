use std::process::ExitCode;

use clap::Parser;
use p3_baby_bear::BabyBear;
use p3_field::Field;
use p3_goldilocks::Goldilocks;
use tiny_keccak::{Hasher, Keccak};
use tracing::info;
use zkc_demos::parsers::{FieldOptions, parse_hex};
use zkc_demos::reports::{init_tracing, report_result};
use zkc_keccak_circuit::Keccak256Circuit;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Check a Keccak-256 digest with the gate-level circuit",
    long_about = None
)]
struct Args {
    /// The field the circuit is built over.
    #[arg(short, long, ignore_case = true, value_enum, default_value_t = FieldOptions::BabyBear)]
    field: FieldOptions,

    /// The message to hash, as UTF-8 text.
    #[arg(short, long, conflicts_with = "hex", default_value = "")]
    message: String,

    /// The message to hash, hex encoded.
    #[arg(long)]
    hex: Option<String>,

    /// The claimed digest, hex encoded. Defaults to the digest computed natively.
    #[arg(short, long)]
    digest: Option<String>,

    /// Flip the lowest bit of the claimed digest; the circuit is then expected to reject it.
    #[arg(short, long)]
    tamper: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    let message = match &args.hex {
        Some(encoded) => match parse_hex(encoded) {
            Ok(bytes) => bytes,
            Err(e) => {
                eprintln!("invalid hex message: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => args.message.clone().into_bytes(),
    };
    let mut digest = match args.digest.as_deref().map(parse_hex) {
        Some(Ok(claimed)) => match <[u8; 32]>::try_from(claimed.as_slice()) {
            Ok(digest) => digest,
            Err(_) => {
                eprintln!("a Keccak-256 digest is 32 bytes, got {}", claimed.len());
                return ExitCode::FAILURE;
            }
        },
        Some(Err(e)) => {
            eprintln!("invalid hex digest: {e}");
            return ExitCode::FAILURE;
        }
        None => {
            let mut hasher = Keccak::v256();
            hasher.update(&message);
            let mut output = [0u8; 32];
            hasher.finalize(&mut output);
            output
        }
    };
    if args.tamper {
        digest[0] ^= 1;
    }

    println!(
        "Checking Keccak-256 of {} bytes against {}",
        message.len(),
        hex::encode(digest)
    );

    match args.field {
        FieldOptions::BabyBear => run::<BabyBear>(&message, &digest, args.tamper),
        FieldOptions::Goldilocks => run::<Goldilocks>(&message, &digest, args.tamper),
    }
}

fn run<F: Field>(message: &[u8], digest: &[u8; 32], tamper: bool) -> ExitCode {
    let instance = match Keccak256Circuit::for_message(message.len()).build::<F>() {
        Ok(instance) => instance,
        Err(e) => return report_result(Err(e), false),
    };
    let stats = instance.circuit().stats();
    info!(%stats, "circuit statistics");
    println!("{stats}");
    report_result(instance.verify_bytes(message, digest), tamper)
}
