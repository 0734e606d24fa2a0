//! `quiver` — inspect and transform canonical vector text.
//!
//! A debugging companion for the text codec: validate serialized values,
//! describe their components and norms, convert between scalar backends,
//! and apply quaternion rotations, all from the command line.

use clap::{Parser, Subcommand};

use quiver_codec::{decode_any, Decode};
use quiver_core::status::format_error;
use quiver_core::{QuiverResult, Scalar, ScalarValue};
use quiver_vectors::{Quaternion, Vector, Vector3, VectorN};

#[derive(Parser)]
#[command(
    name = "quiver",
    version,
    about = "Inspect and transform quiver vector text"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check that a value parses as canonical text
    Validate {
        /// Serialized value, e.g. `Vector3{x=1, y=2, z=3}`
        text: String,
    },
    /// Decode a value and print its dimension, components, and norms
    Describe {
        text: String,
    },
    /// Re-encode a value under another scalar backend
    Convert {
        text: String,
        /// Target backend: d (double), f (float), i (int), b (big integer),
        /// m (big decimal), n (variable-dimension int)
        #[arg(long)]
        to: String,
    },
    /// Normalize a value in the 64-bit float backend
    Normalize {
        text: String,
    },
    /// Rotate a 3-vector by a quaternion (64-bit float backend)
    Rotate {
        /// Serialized 3-vector, e.g. `Vector3{x=1, y=0, z=0}`
        vector: String,
        /// Serialized unit quaternion, e.g. `Quaternion{w=1, x=0, y=0, z=0}`
        quaternion: String,
    },
}

fn main() {
    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run(command: Command) -> QuiverResult<()> {
    match command {
        Command::Validate { text } => {
            let value = decode_any(&text)?;
            println!("ok: {} components", value.dim());
        }
        Command::Describe { text } => {
            let value = decode_any(&text)?;
            let approx = approximate(&value.values());
            println!("value: {}", value);
            println!("dim: {}", value.dim());
            println!("norm: {}", norm(&approx));
            println!("norm2: {}", approx.iter().map(|c| c * c).sum::<f64>());
            println!(
                "manhattan: {}",
                approx.iter().map(|c| c.abs()).sum::<f64>()
            );
        }
        Command::Convert { text, to } => {
            let value = decode_any(&text)?;
            println!("{}", convert(&value.values(), &to)?);
        }
        Command::Normalize { text } => {
            let value = decode_any(&text)?;
            println!("{}", normalize(&value.values())?);
        }
        Command::Rotate { vector, quaternion } => {
            let vector = Vector3::decode(&vector)?;
            let rotation = Quaternion::decode(&quaternion)?;
            println!("{}", vector.rotate(&rotation));
        }
    }
    Ok(())
}

fn approximate(values: &[ScalarValue]) -> Vec<f64> {
    values.iter().map(f64::from_value).collect()
}

fn norm(components: &[f64]) -> f64 {
    components.iter().map(|c| c * c).sum::<f64>().sqrt()
}

/// Re-encodes a sequence of values under the backend named by `target`.
fn convert(values: &[ScalarValue], target: &str) -> QuiverResult<String> {
    match target {
        "d" => convert_fixed::<f64>(values),
        "f" => convert_fixed::<f32>(values),
        "i" => convert_fixed::<i32>(values),
        "b" => convert_fixed::<quiver_core::BigInt>(values),
        "m" => convert_fixed::<quiver_core::BigDecimal>(values),
        "n" => Ok(VectorN::from_seq(&values[..]).to_string()),
        other => Err(format_error(format!(
            "unknown target backend `{}` (expected d, f, i, b, m, or n)",
            other
        ))),
    }
}

fn convert_fixed<T: Scalar>(values: &[ScalarValue]) -> QuiverResult<String> {
    match values.len() {
        2 => Ok(Vector::<T, 2>::from_seq(&values[..])?.to_string()),
        3 => Ok(Vector::<T, 3>::from_seq(&values[..])?.to_string()),
        4 => Ok(Vector::<T, 4>::from_seq(&values[..])?.to_string()),
        5 => Ok(Vector::<T, 5>::from_seq(&values[..])?.to_string()),
        n => Err(format_error(format!(
            "no fixed-dimension type with {} components; use `--to n`",
            n
        ))),
    }
}

fn normalize(values: &[ScalarValue]) -> QuiverResult<String> {
    match values.len() {
        2 => Ok(Vector::<f64, 2>::from_seq(&values[..])?.normalize()?.to_string()),
        3 => Ok(Vector::<f64, 3>::from_seq(&values[..])?.normalize()?.to_string()),
        4 => Ok(Vector::<f64, 4>::from_seq(&values[..])?.normalize()?.to_string()),
        5 => Ok(Vector::<f64, 5>::from_seq(&values[..])?.normalize()?.to_string()),
        n => Err(format_error(format!(
            "no fixed-dimension type with {} components",
            n
        ))),
    }
}
