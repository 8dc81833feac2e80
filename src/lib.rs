//! An encoder for WebAssembly modules in the binary format.
//!
//! This library implements an in-memory, strongly-typed model of a module — including the
//! GC extensions (heap types, reference types, runtime type descriptors, struct and array
//! composite types, packed field types) — that can be rendered as an s-expression tree or
//! emitted in the Binary format of the WebAssembly [specification], version 2.
//!
//! The main entry point is the [`ModuleBuilder`].
//!
//! [specification]: https://www.w3.org/TR/wasm-core-2/
#![forbid(unsafe_code)]

mod builder;
pub use builder::ModuleBuilder;

mod core;
pub use core::indices;
pub use core::instruction::{Instruction, InstructionList};
pub use core::types;
pub use core::{Function, Local, LocalKind};

pub mod encode;
pub use encode::{ByteWriter, EncodeError, SectionKind, integer};

pub mod text;
pub use text::SExpr;
