//! Minimal CLI: package snapshot → example program
use std::path::PathBuf;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand, Args};

use crate::options::GenerateOptions;

// ————————————————————————————————————————————————————————————————————————————
// TYPES
// ————————————————————————————————————————————————————————————————————————————

/// generate example constructor syntax for the resources and functions of a package
#[derive(Parser, Debug)]
#[command(version)]
pub struct CommandLineInterface {
    /// log filter (e.g. `debug`, `constructor_syntax=trace`); RUST_LOG wins when set
    #[arg(long, global = true, env = "CONSTRUCTOR_SYNTAX_LOG", default_value = "warn")]
    pub log_level: String,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// emit example declarations for a whole package or a single token
    Generate(GenerateOut),
}

#[derive(Args, Debug, Clone)]
struct SelectionSettings {
    /// only render required properties, at every nesting level
    #[arg(long, default_value_t = false)]
    required_properties_only: bool,

    /// leave resources out of whole-package output
    #[arg(long, default_value_t = false)]
    skip_resources: bool,

    /// leave functions out of whole-package output
    #[arg(long, default_value_t = false)]
    skip_functions: bool,
}

#[derive(clap::Parser, Debug)]
struct GenerateOut {
    /// package snapshot (.json, .yaml or .yml)
    schema: PathBuf,

    /// resource or function token (`pkg:module:member`); omit to cover the whole package
    #[arg(value_parser = parse_token)]
    token: Option<String>,

    #[command(flatten)]
    selection: SelectionSettings,

    /// directory to write main.pp into
    #[arg(long, conflicts_with = "out")]
    out_dir: Option<PathBuf>,

    /// output file (stdout if neither this nor --out-dir is given)
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// debugging
    #[arg(long)]
    no_op: bool,
}

// ————————————————————————————————————————————————————————————————————————————
// IMPLEMENTATION
// ————————————————————————————————————————————————————————————————————————————

impl SelectionSettings {
    fn to_options(&self, token: Option<String>) -> GenerateOptions {
        GenerateOptions {
            required_properties_only: self.required_properties_only,
            include_resources: !self.skip_resources,
            include_functions: !self.skip_functions,
            token,
        }
    }
}

impl CommandLineInterface {
    pub fn load() -> Self {
        Self::parse()
    }
    pub fn run(&self) -> Result<()> {
        match &self.cmd {
            Command::Generate(target) => {
                // debug path
                if target.no_op {
                    eprintln!("{self:#?}");
                    return Ok(())
                }

                let package = crate::storage::load_package(&target.schema)
                    .context("loading schema")?;
                let options = target.selection.to_options(target.token.clone());
                let code = crate::generate::generate(&package, &options)?;

                if let Some(dir) = target.out_dir.as_ref() {
                    let path = crate::storage::write_program(dir, &code)
                        .context("writing generated code")?;
                    tracing::info!(path = %path.display(), "wrote examples");
                } else if let Some(out) = target.out.as_ref() {
                    crate::storage::write_file(out, &code)
                        .context("writing generated code")?;
                    tracing::info!(path = %out.display(), "wrote examples");
                } else {
                    println!("{code}");
                }
                Ok(())
            }
        }
    }
}

// ————————————————————————————————————————————————————————————————————————————
// INTERNAL HELPERS
// ————————————————————————————————————————————————————————————————————————————

/// Tokens are recognized by their `:` separators.
fn parse_token(raw: &str) -> Result<String, String> {
    if raw.contains(':') {
        Ok(raw.to_string())
    } else {
        Err(format!("expected a `pkg:module:member` token, got {raw:?}"))
    }
}
