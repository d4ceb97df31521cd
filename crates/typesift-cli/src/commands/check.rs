use std::path::PathBuf;

use typesift_lib::Validator;

use super::schema_loader::{collection, load_registry};

pub struct CheckArgs {
    pub schema_path: PathBuf,
    pub collection: String,
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub max_depth: Option<u32>,
}

pub fn run(args: CheckArgs) {
    if args.filter.is_none() && args.sort.is_none() {
        eprintln!("error: nothing to check: use -f/--filter and/or -s/--sort");
        std::process::exit(1);
    }

    let registry = match load_registry(&args.schema_path) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let schema = match collection(&registry, &args.collection) {
        Ok(schema) => schema,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    let mut validator = Validator::new(&registry);
    if let Some(limit) = args.max_depth {
        validator = validator.with_recursion_limit(limit);
    }

    if let Some(filter) = &args.filter
        && let Err(e) = validator.filter(filter, schema)
    {
        eprintln!("error: invalid filter: {}", e);
        std::process::exit(1);
    }

    if let Some(sort) = &args.sort
        && let Err(e) = validator.sort(sort, schema)
    {
        eprintln!("error: invalid sort: {}", e);
        std::process::exit(1);
    }

    // Silent on success (like cargo check)
}
