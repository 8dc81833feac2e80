//! Type definitions for the WebAssembly types this builder can express, including the
//! heap, reference and composite types of the GC extensions.
//!
//! <https://www.w3.org/TR/wasm-core-2/#types>
pub mod comptype;
pub use comptype::{ArrayType, CompType, FieldType, FuncType, Mut, PackType, StorageType, StructType};

pub mod heaptype;
pub use heaptype::HeapType;

pub mod numtype;
pub use numtype::NumType;

pub mod reftype;
pub use reftype::RefType;

pub mod rtt;
pub use rtt::Rtt;

pub mod valtype;
pub use valtype::ValType;
