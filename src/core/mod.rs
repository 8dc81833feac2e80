pub mod function;
pub mod indices;
pub mod instruction;
pub mod types;

pub use function::{Function, Local, LocalKind};
