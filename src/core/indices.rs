//! Newtypes for the dense, zero-based index spaces of a module.
//!
//! <https://www.w3.org/TR/wasm-core-2/#binary-indices>

macro_rules! define_index {
    ($name:ident, $doc:literal) => {
        #[doc = $doc]
        #[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
        pub struct $name(pub u32);
    };
}

define_index!(TypeIdx, "Index of a composite type in the module's type index space.");
define_index!(FuncIdx, "Index of a function in the module's function index space.");
define_index!(FieldIdx, "Index of a field within its structure type.");
define_index!(LocalIdx, "Index of a parameter or local within its function.");
