//! ase-dump - Print Adobe Swatch Exchange files as JSON
//!
//! Decodes each input file, optionally converts every color to one color
//! space, and writes the group tree to stdout. A single file prints its
//! document; several files print an object keyed by path, with repeated
//! paths decoded once.
//!
//! Log output is controlled with `RUST_LOG` (default `warn`).

use std::collections::HashSet;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::{debug, info};
use oxase_core::{ColorSpace, ConversionOptions, DecodeOptions, Document};
use rayon::prelude::*;
use serde_json::{Map, Value};

#[derive(Parser, Debug)]
#[command(name = "ase-dump")]
#[command(author, version, about = "Print Adobe Swatch Exchange files as JSON", long_about = None)]
struct Args {
    /// ASE files to decode
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Convert every color to this space (rgb, cmyk, lab, gray)
    #[arg(short = 'c', long)]
    convert: Option<ColorSpace>,

    /// Use the legacy XYZ to RGB matrix when converting Lab colors
    #[arg(long = "reference-matrix", action = ArgAction::SetTrue)]
    reference_matrix: bool,

    /// Reject overlong blocks and unclosed groups instead of warning
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,

    /// Print color values as 8-bit integers
    #[arg(short = 'q', long, action = ArgAction::SetTrue)]
    quantize: bool,

    /// Print JSON on a single line
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
}

impl Args {
    fn decode_options(&self) -> DecodeOptions {
        DecodeOptions {
            strict: self.strict,
            ..DecodeOptions::default()
        }
    }

    fn conversion_options(&self) -> ConversionOptions {
        if self.reference_matrix {
            ConversionOptions::reference()
        } else {
            ConversionOptions::default()
        }
    }
}

fn dump(path: &Path, args: &Args) -> Result<Value> {
    let doc = oxase_core::decode_file_with_options(path, &args.decode_options())
        .with_context(|| format!("failed to decode {}", path.display()))?;
    info!(
        "{}: {} groups, {} colors",
        path.display(),
        doc.groups().len(),
        doc.color_count()
    );

    let doc = match args.convert {
        Some(space) => {
            debug!("Converting {} to {}", path.display(), space);
            doc.convert(space, &args.conversion_options())
        }
        None => doc,
    };

    to_value(&doc, args.quantize)
        .with_context(|| format!("failed to serialize {}", path.display()))
}

/// Input paths in argument order, each listed once
fn unique_files(files: &[PathBuf]) -> Vec<&Path> {
    let mut seen = HashSet::new();
    files
        .iter()
        .map(PathBuf::as_path)
        .filter(|path| seen.insert(*path))
        .collect()
}

fn to_value(doc: &Document, quantize: bool) -> serde_json::Result<Value> {
    if quantize {
        serde_json::to_value(doc.quantized())
    } else {
        serde_json::to_value(doc)
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let files = unique_files(&args.files);
    if files.len() < args.files.len() {
        debug!("Ignoring {} repeated path(s)", args.files.len() - files.len());
    }

    let results: Vec<Result<Value>> = files.par_iter().map(|path| dump(path, &args)).collect();
    let mut values = results.into_iter().collect::<Result<Vec<_>>>()?;

    let output = if values.len() == 1 {
        values.swap_remove(0)
    } else {
        let keyed: Map<String, Value> = files
            .iter()
            .map(|path| path.display().to_string())
            .zip(values)
            .collect();
        Value::Object(keyed)
    };

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    if args.compact {
        serde_json::to_writer(&mut out, &output)?;
    } else {
        serde_json::to_writer_pretty(&mut out, &output)?;
    }
    writeln!(out)?;
    out.flush()?;

    Ok(())
}
