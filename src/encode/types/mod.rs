//! Binary emission of types.
//!
//! Each family writes its form from <https://webassembly.github.io/spec/core/binary/types.html>,
//! with the heap type tags adjusted to what the target engine accepts.
mod comptype;
mod heaptype;
mod numtype;
mod reftype;
mod rtt;
mod valtype;
