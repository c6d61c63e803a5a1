#![deny(missing_docs)]

//! # directus-typegen
//!
//! Command line tool that turns a headless-CMS OpenAPI spec into a TypeScript
//! definition module: one declaration per component schema, an aggregate type
//! mapping collection names to their record types and a PascalCase alias per
//! collection.
//!
//! The spec comes from a local file (`--spec-file`) or from a live backend
//! (`--host` plus credentials, fetched after a login handshake).

use clap::Parser;
use std::fs;
use std::path::PathBuf;
use typegen_core::{generate_typescript, AppResult, ComponentTranslator, GenerateOptions};

use crate::acquire::{acquire_spec, AcquireOptions};

mod acquire;

#[derive(Parser, Debug)]
#[clap(author, version, about = "Generate TypeScript types from a Directus OpenAPI spec")]
struct Cli {
    /// Input spec file; takes precedence over remote retrieval.
    #[clap(short = 'i', long)]
    spec_file: Option<PathBuf>,

    /// Remote host, e.g. https://cms.example.com.
    #[clap(short = 'H', long)]
    host: Option<String>,

    /// Email address for the login handshake.
    #[clap(short, long, env = "DIRECTUS_EMAIL")]
    email: Option<String>,

    /// Password for the login handshake.
    #[clap(short, long, env = "DIRECTUS_PASSWORD")]
    password: Option<String>,

    /// Include system collections advertised via the `x-collection` extension.
    #[clap(short = 's', long)]
    include_system_collections: bool,

    /// Also scan `/relations/<name>` endpoints for collections.
    #[clap(long)]
    include_relations: bool,

    /// Name of the generated aggregate type.
    #[clap(short, long, default_value = "Schema")]
    type_name: String,

    /// Output file; prints to stdout when absent.
    #[clap(short, long)]
    out_file: Option<PathBuf>,
}

fn main() -> AppResult<()> {
    env_logger::init();
    let cli = Cli::parse();

    let spec = acquire_spec(&AcquireOptions {
        spec_file: cli.spec_file.clone(),
        host: cli.host.clone(),
        email: cli.email.clone(),
        password: cli.password.clone(),
    })?;

    let options = GenerateOptions {
        type_name: cli.type_name.clone(),
        include_system_collections: cli.include_system_collections,
        include_relations: cli.include_relations,
    };
    let source = generate_typescript(&spec, &options, &ComponentTranslator)?;

    if let Some(out_path) = &cli.out_file {
        fs::write(out_path, &source)?;
    } else {
        println!("{}", source);
    }

    Ok(())
}
