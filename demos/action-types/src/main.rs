//! action-types - Print the actions complete-action builds for a name
//!
//! Without `--variant`, prints the three type strings. With it, prints the
//! built action as JSON.
//!
//! ```text
//! action-types Products --prefix FETCH --fail-suffix REJECTED
//! action-types Items --namespace PRODUCTS --variant success --payload '{"ids":[1,2]}'
//! ```
//!
//! Set `RUST_LOG=complete_action_core=trace` to see the library's logging.

use std::process::ExitCode;

use clap::Parser;
use complete_action::{make_action, ActionConfig, ActionError, Variant};
use serde_json::Value;
use thiserror::Error;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "action-types")]
#[command(about = "Print request / success / failure actions for an operation name")]
struct Args {
    /// Operation name (e.g. Products)
    name: String,

    /// Namespace prepended as `<namespace>/`
    #[arg(long)]
    namespace: Option<String>,

    /// Verb used instead of GET
    #[arg(long)]
    prefix: Option<String>,

    /// Suffix used instead of SUCCESSFUL
    #[arg(long)]
    success_suffix: Option<String>,

    /// Suffix used instead of FAILURE
    #[arg(long)]
    fail_suffix: Option<String>,

    /// Build one action: request, success or fail
    #[arg(long, short)]
    variant: Option<String>,

    /// Payload as JSON
    #[arg(long, short)]
    payload: Option<String>,
}

#[derive(Error, Debug)]
enum DemoError {
    #[error(transparent)]
    Action(#[from] ActionError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn config_from_args(args: &Args) -> ActionConfig {
    ActionConfig {
        namespace: args.namespace.clone(),
        prefix: args.prefix.clone(),
        success_suffix: args.success_suffix.clone(),
        fail_suffix: args.fail_suffix.clone(),
        ..Default::default()
    }
}

fn run(args: Args) -> Result<String, DemoError> {
    let creator = make_action(&args.name, config_from_args(&args))?;

    let Some(variant) = args.variant.as_deref() else {
        let types = creator.types();
        return Ok(Variant::ALL
            .into_iter()
            .map(|variant| format!("{:<8} {}", variant.as_str(), types.get(variant)))
            .collect::<Vec<_>>()
            .join("\n"));
    };

    let payload = args
        .payload
        .as_deref()
        .map(serde_json::from_str::<Value>)
        .transpose()?;
    let action = creator.create(variant, payload)?;

    Ok(serde_json::to_string_pretty(&action)?)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    tracing::debug!(?args, "Parsed arguments");

    match run(args) {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
