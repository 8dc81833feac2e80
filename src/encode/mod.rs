//! Emission of the binary format: integer encodings, the byte sink, and the binary form
//! of every type, instruction, function and section.
pub mod instructions;
pub mod integer;
mod module;
pub mod types;
pub mod writer;

pub use module::SectionKind;
pub use writer::ByteWriter;

use thiserror::Error;

/// Errors surfaced while emitting the binary form of a module. There is no recovery path;
/// callers abandon the emission.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EncodeError {
    /// The `any` heap type has a tag reserved for it (-0x12), but the target engine
    /// rejects modules that use it.
    #[error("heap type `any` is not implemented by the target engine")]
    UnsupportedAnyHeapType,
}
