//! CLI argument definitions for memclass.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use memclass_core::GeneratorKind;

#[derive(Parser)]
#[command(name = "memclass")]
#[command(about = "Decode raw memory through typed class layouts", version)]
pub struct Args {
    /// Config file (TOML)
    #[arg(long, value_name = "FILE", env = "MEMCLASS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Pointer width of the target process in bytes (4 or 8)
    #[arg(long, env = "MEMCLASS_POINTER_WIDTH")]
    pub pointer_width: Option<usize>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Decode a hex byte string as one field kind
    Decode {
        /// Bytes in memory order, e.g. "39 05 00 00"
        bytes: String,
        /// Field kind (Unk8..Unk64, I8..I64, U8..U64, Ptr, StrPtr)
        #[arg(long, short)]
        kind: String,
    },
    /// Decode a class layout against a captured memory dump
    Inspect {
        /// Raw dump file
        dump: PathBuf,
        /// Address the first byte of the dump was captured from (hex)
        #[arg(long)]
        base: String,
        /// Class address (hex, defaults to the dump base)
        #[arg(long)]
        address: Option<String>,
        /// Class name (defaults to "Dump", or the configured seed name
        /// when no --field is given)
        #[arg(long)]
        name: Option<String>,
        /// Field as OFFSET:KIND[:NAME]; repeat for more fields
        #[arg(long = "field", value_name = "OFFSET:KIND[:NAME]")]
        fields: Vec<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print a struct declaration for a layout
    Generate {
        /// Struct name
        #[arg(long, default_value = "Generated")]
        name: String,
        /// Output language
        #[arg(long, value_enum, default_value = "rust")]
        lang: Lang,
        /// Field as OFFSET:KIND[:NAME]; repeat for more fields
        #[arg(long = "field", value_name = "OFFSET:KIND[:NAME]", required = true)]
        fields: Vec<String>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Lang {
    Rust,
    Cpp,
}

impl From<Lang> for GeneratorKind {
    fn from(lang: Lang) -> Self {
        match lang {
            Lang::Rust => GeneratorKind::Rust,
            Lang::Cpp => GeneratorKind::Cpp,
        }
    }
}
