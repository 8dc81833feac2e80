//! The central factory owning all type definitions and functions of a module under
//! construction.
use crate::core::function::Function;
use crate::core::indices::{FieldIdx, FuncIdx, TypeIdx};
use crate::core::types::comptype::{
    ArrayType, CompType, FieldType, FuncType, Mut, PackType, StructType,
};
use crate::core::types::heaptype::HeapType;
use crate::core::types::reftype::RefType;
use crate::core::types::valtype::ValType;

/// Owns every composite type and function of one module, assigns their dense zero-based
/// indices in registration order, and emits the module in either output form (see
/// [`ModuleBuilder::encode`] and [`ModuleBuilder::to_sexpr`]).
///
/// The builder performs no validation; it trusts its caller to construct well-typed
/// modules. A builder is a single-threaded construction tool; building modules in
/// parallel takes disjoint builders.
#[derive(Debug, Default)]
pub struct ModuleBuilder {
    types: Vec<CompType>,
    functions: Vec<Function>,
}

impl ModuleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// All composite types, ordered by type index.
    pub fn types(&self) -> &[CompType] {
        &self.types
    }

    /// All functions, ordered by function index.
    pub fn functions(&self) -> &[Function] {
        &self.functions
    }

    /// Look up a composite type by its index.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not assigned by this builder.
    pub fn type_def(&self, index: TypeIdx) -> &CompType {
        &self.types[index.0 as usize]
    }

    /// Look up a function by its index.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not assigned by this builder.
    pub fn function(&self, index: FuncIdx) -> &Function {
        &self.functions[index.0 as usize]
    }

    /// Mutable counterpart of [`ModuleBuilder::function`], for declaring locals and
    /// populating the body.
    pub fn function_mut(&mut self, index: FuncIdx) -> &mut Function {
        &mut self.functions[index.0 as usize]
    }

    /// Register a new function type with the given result and no parameters yet;
    /// parameters are appended through [`ModuleBuilder::push_param`].
    pub fn make_func_type(&mut self, result: ValType) -> TypeIdx {
        self.push_type(CompType::Func(FuncType {
            parameters: Vec::new(),
            result,
        }))
    }

    /// Append a parameter to a previously registered function type.
    ///
    /// # Panics
    ///
    /// Panics if `func` does not refer to a function type of this builder.
    pub fn push_param(&mut self, func: TypeIdx, parameter: ValType) {
        match &mut self.types[func.0 as usize] {
            CompType::Func(ty) => ty.parameters.push(parameter),
            other => panic!("type {} is not a function type: {other:?}", func.0),
        }
    }

    /// Register a new structure type with no fields yet; fields are appended through
    /// [`ModuleBuilder::push_field`].
    pub fn make_struct_type(&mut self) -> TypeIdx {
        self.push_type(CompType::Struct(StructType { fields: Vec::new() }))
    }

    /// Append a field to a previously registered structure type and return its index
    /// within the structure.
    ///
    /// # Panics
    ///
    /// Panics if `strukt` does not refer to a structure type of this builder.
    pub fn push_field(&mut self, strukt: TypeIdx, field: FieldType) -> FieldIdx {
        match &mut self.types[strukt.0 as usize] {
            CompType::Struct(ty) => {
                ty.fields.push(field);
                FieldIdx(u32::try_from(ty.fields.len()).unwrap() - 1)
            }
            other => panic!("type {} is not a struct type: {other:?}", strukt.0),
        }
    }

    /// Register a new array type over the given field type.
    pub fn make_array_type(&mut self, field: FieldType) -> TypeIdx {
        self.push_type(CompType::Array(ArrayType { field }))
    }

    /// Register a new array type over a value type.
    pub fn make_array_of_val(&mut self, ty: ValType, mutability: Mut) -> TypeIdx {
        self.make_array_type(FieldType::of_val(ty, mutability))
    }

    /// Register a new array type over a packed storage type.
    pub fn make_array_of_packed(&mut self, ty: PackType, mutability: Mut) -> TypeIdx {
        self.make_array_type(FieldType::of_packed(ty, mutability))
    }

    /// A concrete heap type referring to a composite registered with this builder.
    pub fn make_heap_type(&self, def: TypeIdx) -> HeapType {
        HeapType::TypeIdx(def)
    }

    pub fn make_ref_type(&self, nullable: bool, heap: HeapType) -> RefType {
        RefType::new(nullable, heap)
    }

    /// Register a new function over a previously registered function type, assigning the
    /// next free function index. An empty name declares it anonymous.
    ///
    /// # Panics
    ///
    /// Panics if `r#type` does not refer to a function type of this builder.
    pub fn add_function(&mut self, name: &str, r#type: TypeIdx) -> FuncIdx {
        assert!(
            matches!(self.types.get(r#type.0 as usize), Some(CompType::Func(_))),
            "function {name:?} needs a function type, got type {}",
            r#type.0
        );

        let index = FuncIdx(u32::try_from(self.functions.len()).unwrap());
        self.functions.push(Function::new(name.to_owned(), index, r#type));
        index
    }

    fn push_type(&mut self, ty: CompType) -> TypeIdx {
        let index = TypeIdx(u32::try_from(self.types.len()).unwrap());
        self.types.push(ty);
        index
    }
}
