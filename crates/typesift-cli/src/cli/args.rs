//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Schema file or directory of schema files (positional).
pub fn schema_path_arg() -> Arg {
    Arg::new("schema_path")
        .value_name("SCHEMA")
        .required(true)
        .value_parser(value_parser!(PathBuf))
        .help("Collection schema JSON file, or a directory of them")
}

/// Collection to validate against (-c/--collection).
pub fn collection_arg() -> Arg {
    Arg::new("collection")
        .short('c')
        .long("collection")
        .value_name("NAME")
        .required(true)
        .help("Collection the expressions target")
}

/// Filter expression (-f/--filter).
pub fn filter_arg() -> Arg {
    Arg::new("filter")
        .short('f')
        .long("filter")
        .value_name("EXPR")
        .help("Filter expression (filter_by)")
}

/// Sort expression (-s/--sort).
pub fn sort_arg() -> Arg {
    Arg::new("sort")
        .short('s')
        .long("sort")
        .value_name("EXPR")
        .help("Sort expression (sort_by)")
}

/// Nesting limit (--max-depth).
pub fn max_depth_arg() -> Arg {
    Arg::new("max_depth")
        .long("max-depth")
        .value_name("N")
        .value_parser(value_parser!(u32))
        .help("Maximum nesting of joins, parentheses and _eval clauses")
}

/// Machine-readable output (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Print JSON instead of text")
}

/// Debug logging to stderr (-v/--verbose).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .long("verbose")
        .action(ArgAction::SetTrue)
        .global(true)
        .help("Log validation steps to stderr")
}
