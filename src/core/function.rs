use crate::core::indices::{FuncIdx, LocalIdx, TypeIdx};
use crate::core::instruction::InstructionList;
use crate::core::types::valtype::ValType;

/// A function under construction: a name, the module-assigned function index, a reference
/// to a function type registered with the same module, the declared parameters and locals,
/// and an optional body.
///
/// The parameters of the function are referenced through 0-based local indices in the
/// function's body. The index of the first plain local is the smallest index not
/// referencing a parameter.
///
/// <https://www.w3.org/TR/wasm-core-2/#functions>
#[derive(Debug, PartialEq)]
pub struct Function {
    name: String,
    index: FuncIdx,
    r#type: TypeIdx,
    locals: Vec<Local>,
    body: Option<InstructionList>,
}

impl Function {
    pub(crate) fn new(name: String, index: FuncIdx, r#type: TypeIdx) -> Self {
        Self {
            name,
            index,
            r#type,
            locals: Vec::new(),
            body: None,
        }
    }

    /// The function's name. Empty for an anonymous function.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> FuncIdx {
        self.index
    }

    /// The index of this function's type in the owning module's type index space.
    pub fn type_idx(&self) -> TypeIdx {
        self.r#type
    }

    /// Parameters and plain locals, in declaration order. Parameters come first.
    pub fn locals(&self) -> &[Local] {
        &self.locals
    }

    pub fn body(&self) -> Option<&InstructionList> {
        self.body.as_ref()
    }

    /// Declare a parameter or a plain local with the next free local index. An empty name
    /// declares it anonymous.
    ///
    /// # Panics
    ///
    /// Panics when declaring a parameter after a plain local has been declared; the
    /// function header lists all parameters first.
    pub fn add_local(&mut self, kind: LocalKind, r#type: ValType, name: &str) -> LocalIdx {
        assert!(
            kind == LocalKind::Local
                || self.locals.last().is_none_or(|l| l.kind == LocalKind::Param),
            "cannot declare parameter {name:?} after a plain local"
        );

        let index = LocalIdx(u32::try_from(self.locals.len()).unwrap());
        self.locals.push(Local {
            kind,
            r#type,
            name: name.to_owned(),
            index,
        });
        index
    }

    /// Look up a parameter or local by its index.
    ///
    /// # Panics
    ///
    /// Panics if `index` was not assigned by this function.
    pub fn local(&self, index: LocalIdx) -> &Local {
        &self.locals[index.0 as usize]
    }

    /// Look up a parameter or local by name. Anonymous locals are never found this way.
    pub fn local_by_name(&self, name: &str) -> Option<&Local> {
        if name.is_empty() {
            return None;
        }
        self.locals.iter().find(|l| l.name == name)
    }

    /// Install a fresh, empty body, replacing any previous one, and return it for
    /// population.
    pub fn make_body(&mut self) -> &mut InstructionList {
        self.body.insert(InstructionList::new())
    }
}

/// A single parameter or local variable of one function.
#[derive(Debug, PartialEq)]
pub struct Local {
    kind: LocalKind,
    r#type: ValType,
    name: String,
    index: LocalIdx,
}

impl Local {
    pub fn kind(&self) -> LocalKind {
        self.kind
    }

    pub fn value_type(&self) -> ValType {
        self.r#type
    }

    /// The local's name; empty for an anonymous local.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn index(&self) -> LocalIdx {
        self.index
    }
}

#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum LocalKind {
    Param,
    Local,
}
