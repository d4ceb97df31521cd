//! Dispatch logic: extract params from ArgMatches and convert to command args.

use std::path::PathBuf;

use clap::ArgMatches;

use crate::commands::check::CheckArgs;
use crate::commands::refs::RefsArgs;
use crate::commands::tokens::TokensArgs;

pub struct CheckParams {
    pub schema_path: PathBuf,
    pub collection: String,
    pub filter: Option<String>,
    pub sort: Option<String>,
    pub max_depth: Option<u32>,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            collection: m.get_one::<String>("collection").cloned().unwrap_or_default(),
            filter: m.get_one::<String>("filter").cloned(),
            sort: m.get_one::<String>("sort").cloned(),
            max_depth: m.get_one::<u32>("max_depth").copied(),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            schema_path: p.schema_path,
            collection: p.collection,
            filter: p.filter,
            sort: p.sort,
            max_depth: p.max_depth,
        }
    }
}

pub struct TokensParams {
    pub schema_path: PathBuf,
    pub collection: String,
    pub filter: String,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            collection: m.get_one::<String>("collection").cloned().unwrap_or_default(),
            filter: m.get_one::<String>("filter").cloned().unwrap_or_default(),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            schema_path: p.schema_path,
            collection: p.collection,
            filter: p.filter,
        }
    }
}

pub struct RefsParams {
    pub schema_path: PathBuf,
    pub json: bool,
}

impl RefsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            schema_path: schema_path(m),
            json: m.get_flag("json"),
        }
    }
}

impl From<RefsParams> for RefsArgs {
    fn from(p: RefsParams) -> Self {
        Self {
            schema_path: p.schema_path,
            json: p.json,
        }
    }
}

fn schema_path(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("schema_path").cloned().unwrap_or_default()
}
