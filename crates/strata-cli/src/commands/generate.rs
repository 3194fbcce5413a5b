//! Generate command - renders a schema snapshot to TypeScript and persists
//! the artifacts.

use clap::Args;
use std::path::PathBuf;
use strata_typegen::{generate_typescript_types, parse_schema, schema_to_json};

/// Generate command arguments
#[derive(Args)]
pub struct GenerateArgs {
    /// Schema snapshot (JSON)
    pub schema: PathBuf,

    /// Artifact directory; `index.ts` and `schema.json` inside it are
    /// overwritten. Prints the module to stdout when omitted.
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Skip persisting the schema.json side artifact
    #[arg(long)]
    pub no_schema_artifact: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> i32 {
    let content = match std::fs::read_to_string(&args.schema) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.schema.display(), e);
            return 1;
        }
    };

    let schema = match parse_schema(&content) {
        Ok(s) => s,
        Err(e) => {
            eprintln!("Failed to parse {}: {}", args.schema.display(), e);
            return 1;
        }
    };

    tracing::debug!(
        documents = schema.documents.len(),
        objects = schema.objects.len(),
        "loaded schema"
    );

    let module = generate_typescript_types(&schema);

    let Some(dir) = args.out_dir else {
        print!("{}", module);
        return 0;
    };

    if let Err(e) = std::fs::create_dir_all(&dir) {
        eprintln!("Failed to create {}: {}", dir.display(), e);
        return 1;
    }

    let index = dir.join("index.ts");
    if let Err(e) = std::fs::write(&index, &module) {
        eprintln!("Failed to write {}: {}", index.display(), e);
        return 1;
    }

    if !args.no_schema_artifact {
        // Diagnostic side artifact: the schema exactly as generation saw it.
        let json = match schema_to_json(&schema) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Failed to serialize schema: {}", e);
                return 1;
            }
        };
        let artifact = dir.join("schema.json");
        if let Err(e) = std::fs::write(&artifact, json) {
            eprintln!("Failed to write {}: {}", artifact.display(), e);
            return 1;
        }
    }

    eprintln!("Generated {}", index.display());
    0
}
