use super::heaptype::HeapType;

/// A runtime type descriptor over a heap type, used for downcasts. The depth records how
/// many supertypes the described type has.
///
/// <https://github.com/WebAssembly/gc/blob/master/proposals/gc/MVP.md>
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Rtt {
    pub depth: u32,
    pub heap: HeapType,
}

impl Rtt {
    pub const fn new(depth: u32, heap: HeapType) -> Self {
        Self { depth, heap }
    }
}
