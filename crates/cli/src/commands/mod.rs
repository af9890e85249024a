//! CLI command implementations

mod list;
mod simulate;
mod validate;

pub use list::List;
pub use simulate::Simulate;
pub use validate::Validate;
