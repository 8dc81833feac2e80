use super::valtype::ValType;

/// Composite types are all types composed from simpler types, including function types,
/// structure types and array types. Each composite type registered with a module occupies
/// one slot in the module's type index space.
///
/// <https://webassembly.github.io/spec/core/syntax/types.html#composite-types>
/// <https://webassembly.github.io/spec/core/binary/types.html#composite-types>
#[derive(Debug, PartialEq, Clone)]
pub enum CompType {
    Func(FuncType),
    Struct(StructType),
    Array(ArrayType),
}

/// Function types classify the signature of functions, mapping a vector of parameters to a
/// single result. Multiple results are not supported; the binary form always carries a
/// result vector of length one.
///
/// <https://www.w3.org/TR/wasm-core-2/#function-types>
/// <https://www.w3.org/TR/wasm-core-2/#binary-functype>
#[derive(Debug, PartialEq, Clone)]
pub struct FuncType {
    pub parameters: Vec<ValType>,
    pub result: ValType,
}

/// Structure types classify aggregates with heterogeneous fields. The index of a field
/// within its structure is its insertion position.
#[derive(Debug, PartialEq, Clone)]
pub struct StructType {
    pub fields: Vec<FieldType>,
}

/// Array types classify aggregates with a dynamic number of elements of one field type.
#[derive(Debug, PartialEq, Clone)]
pub struct ArrayType {
    pub field: FieldType,
}

/// The type of a structure field or array element: a storage type together with a
/// mutability flag.
#[derive(Debug, PartialEq, Copy, Clone)]
pub struct FieldType(pub Mut, pub StorageType);

impl FieldType {
    pub const fn of_val(ty: ValType, mutability: Mut) -> Self {
        Self(mutability, StorageType::ValType(ty))
    }

    pub const fn of_packed(ty: PackType, mutability: Mut) -> Self {
        Self(mutability, StorageType::PackType(ty))
    }
}

/// Storage types widen the value types with packed integer representations that exist only
/// inside structures and arrays, never as value types proper.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum StorageType {
    ValType(ValType),
    PackType(PackType),
}

/// Packed storage-only integer types.
#[derive(Debug, PartialEq, Copy, Clone)]
pub enum PackType {
    I8,
    I16,
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum Mut {
    Const,
    Var,
}
