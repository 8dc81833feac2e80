use super::heaptype::HeapType;

/// Reference types classify first-class references to objects in the runtime store. A
/// reference is taken over a heap type and is either nullable or not.
///
/// Reference types are opaque, meaning that neither their size nor their bit pattern can be
/// observed.
///
/// Several combinations have dedicated shorthand notations (`funcref`, `externref`, `anyref`,
/// `eqref` for the nullable abstract cases, `i31ref` for the non-null i31 case). Whenever a
/// reference type matches a shorthand, both the textual and the binary rendering use the
/// shorthand form; the general forms are reserved for combinations no shorthand covers.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#reference-types>
/// <https://webassembly.github.io/spec/core/binary/types.html#reference-types>
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct RefType {
    pub nullable: bool,
    pub heap: HeapType,
}

impl RefType {
    pub const FUNCREF: RefType = RefType::new(true, HeapType::Func);
    pub const EXTERNREF: RefType = RefType::new(true, HeapType::Extern);
    pub const ANYREF: RefType = RefType::new(true, HeapType::Any);
    pub const EQREF: RefType = RefType::new(true, HeapType::Eq);
    pub const I31REF: RefType = RefType::new(false, HeapType::I31);

    pub const fn new(nullable: bool, heap: HeapType) -> Self {
        Self { nullable, heap }
    }
}
