use std::path::PathBuf;

use typesift_lib::tokenize;

use super::schema_loader::{collection, load_registry};

pub struct TokensArgs {
    pub schema_path: PathBuf,
    pub collection: String,
    pub filter: String,
}

pub fn run(args: TokensArgs) {
    let registry = load_registry(&args.schema_path).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });
    let schema = collection(&registry, &args.collection).unwrap_or_else(|e| {
        eprintln!("error: {}", e);
        std::process::exit(1);
    });

    match tokenize(&args.filter, schema) {
        Ok(tokens) => {
            for token in tokens {
                println!("{token}");
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    }
}
