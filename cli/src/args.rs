mod global;
mod query;

pub use global::GlobalArgs;
pub use query::QueryArgs;
