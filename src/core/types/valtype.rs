use super::numtype::NumType;
use super::reftype::RefType;
use super::rtt::Rtt;

/// Value types classify the individual values that WebAssembly code can compute with and
/// the values that a variable accepts. They are either number types, reference types, or
/// runtime type descriptors.
///
/// <https://www.w3.org/TR/wasm-core-2/#value-types>
/// <https://www.w3.org/TR/wasm-core-2/#binary-valtype>
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum ValType {
    Num(NumType),
    Ref(RefType),
    Rtt(Rtt),
}

impl ValType {
    pub const I32: ValType = ValType::Num(NumType::Int32);
    pub const I64: ValType = ValType::Num(NumType::Int64);
    pub const F32: ValType = ValType::Num(NumType::Float32);
    pub const F64: ValType = ValType::Num(NumType::Float64);
    pub const V128: ValType = ValType::Num(NumType::V128);
}
