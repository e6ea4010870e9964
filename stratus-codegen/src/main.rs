//! CloudFormation Resource Specification to Rust Code Generator
//!
//! Generates serde structs for CloudFormation property types.
//!
//! Usage:
//!   # Generate from a downloaded specification
//!   curl -sL https://d1uauaxba7bl26.cloudfront.net/latest/gzip/CloudFormationResourceSpecification.json \
//!     | gunzip | stratus-codegen --prefix AWS::S3:: --output-dir stratus-aws/src/generated
//!
//!   # Generate from file and print to stdout
//!   stratus-codegen --file schemas/CloudFormationResourceSpecification.json

use std::io::{self, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use stratus_core::Specification;

#[derive(Parser, Debug)]
#[command(name = "stratus-codegen")]
#[command(about = "Generate Rust property types from the CloudFormation resource specification")]
struct Args {
    /// Resource specification file (reads from stdin if not specified)
    #[arg(long)]
    file: Option<PathBuf>,

    /// Directory to write modules into (writes to stdout if not specified)
    #[arg(long, short)]
    output_dir: Option<PathBuf>,

    /// Only generate types whose name starts with this prefix (e.g., AWS::S3::)
    #[arg(long)]
    prefix: Vec<String>,

    /// Enable debug logging
    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    // Read specification JSON
    let spec_json = if let Some(file_path) = &args.file {
        std::fs::read_to_string(file_path)
            .with_context(|| format!("Failed to read file: {}", file_path.display()))?
    } else {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .context("Failed to read from stdin")?;
        buffer
    };

    let spec = Specification::from_json_str(&spec_json)
        .context("Failed to parse CloudFormation resource specification")?;
    let spec = if args.prefix.is_empty() {
        spec
    } else {
        spec.filter_prefixes(&args.prefix)
    };

    log::info!(
        "Loaded specification {} with {} property types",
        spec.resource_specification_version,
        spec.property_types.len()
    );

    let modules = stratus_codegen::generate(&spec).context("Failed to generate code")?;

    if let Some(output_dir) = &args.output_dir {
        let written = stratus_codegen::write_modules(output_dir, &modules)?;
        log::info!(
            "Generated {} files in {}",
            written.len(),
            output_dir.display()
        );
    } else {
        for module in &modules {
            println!("// ---- {} ----", module.file_name());
            println!("{}", module.code);
        }
    }

    Ok(())
}
