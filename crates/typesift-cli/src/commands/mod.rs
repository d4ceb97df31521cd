pub mod check;
pub mod refs;
pub mod schema_loader;
pub mod tokens;
