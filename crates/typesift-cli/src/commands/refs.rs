use std::path::PathBuf;

use serde_json::{Map, Value};
use typesift_core::Registry;

use super::schema_loader::load_registry;

pub struct RefsArgs {
    pub schema_path: PathBuf,
    pub json: bool,
}

pub fn run(args: RefsArgs) {
    let registry = match load_registry(&args.schema_path) {
        Ok(registry) => registry,
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(1);
        }
    };

    if args.json {
        println!("{}", render_json(&registry));
    } else {
        print!("{}", render_text(&registry));
    }
}

/// One line per collection: `users <- posts, comments`.
pub fn render_text(registry: &Registry) -> String {
    let mut out = String::new();
    for schema in registry.iter() {
        let sources = referencing(registry, schema.name());
        if sources.is_empty() {
            out.push_str(&format!("{}\n", schema.name()));
        } else {
            out.push_str(&format!("{} <- {}\n", schema.name(), sources.join(", ")));
        }
    }
    out
}

pub fn render_json(registry: &Registry) -> String {
    let map: Map<String, Value> = registry
        .iter()
        .map(|schema| {
            let sources = referencing(registry, schema.name())
                .into_iter()
                .map(Value::from)
                .collect();
            (schema.name().to_owned(), Value::Array(sources))
        })
        .collect();
    Value::Object(map).to_string()
}

fn referencing<'r>(registry: &'r Registry, name: &str) -> Vec<&'r str> {
    registry
        .referenced_by(name)
        .map(|set| set.iter().map(String::as_str).collect())
        .unwrap_or_default()
}
