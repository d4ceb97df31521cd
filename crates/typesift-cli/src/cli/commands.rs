//! Command builders for the CLI.
//!
//! Each command is built using the shared arg builders from `args.rs`.

use clap::Command;

use super::args::*;

/// Build the complete CLI with all subcommands.
pub fn build_cli() -> Command {
    Command::new("typesift")
        .about("Validate Typesense filter and sort expressions against collection schemas")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(verbose_arg())
        .subcommand(check_command())
        .subcommand(tokens_command())
        .subcommand(refs_command())
}

/// Validate expressions. Silent on success, like `cargo check`.
pub fn check_command() -> Command {
    Command::new("check")
        .about("Validate filter and sort expressions")
        .override_usage(
            "\
  typesift check <SCHEMA> -c <NAME> -f <EXPR>
  typesift check <SCHEMA> -c <NAME> -s <EXPR>
  typesift check <SCHEMA> -c <NAME> -f <EXPR> -s <EXPR>",
        )
        .after_help(
            r#"EXAMPLES:
  typesift check schemas/ -c users -f 'age:>30 && $posts(title:Rust)'
  typesift check users.json -c users -s 'age:desc, _text_match:asc'
  typesift check schemas/ -c users -f 'name:=x' --max-depth 8"#,
        )
        .arg(schema_path_arg())
        .arg(collection_arg())
        .arg(filter_arg())
        .arg(sort_arg())
        .arg(max_depth_arg())
}

/// Print the tokens of a filter expression.
pub fn tokens_command() -> Command {
    Command::new("tokens")
        .about("Show how a filter expression tokenizes")
        .after_help(
            r#"EXAMPLES:
  typesift tokens schemas/ -c users -f 'age:[30..40] && name:An'"#,
        )
        .arg(schema_path_arg())
        .arg(collection_arg())
        .arg(filter_arg().required(true))
}

/// Print which collections each collection may join into.
pub fn refs_command() -> Command {
    Command::new("refs")
        .about("List the collections that reference each collection")
        .after_help(
            r#"EXAMPLES:
  typesift refs schemas/
  typesift refs schemas/ --json"#,
        )
        .arg(schema_path_arg())
        .arg(json_arg())
}
