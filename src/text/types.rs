//! Textual rendering of types.
//!
//! <https://webassembly.github.io/spec/core/text/types.html>
use crate::core::types::comptype::{
    ArrayType, CompType, FieldType, FuncType, Mut, PackType, StorageType, StructType,
};
use crate::core::types::heaptype::HeapType;
use crate::core::types::numtype::NumType;
use crate::core::types::reftype::RefType;
use crate::core::types::rtt::Rtt;
use crate::core::types::valtype::ValType;
use crate::text::SExpr;

impl NumType {
    pub fn to_sexpr(&self) -> SExpr {
        SExpr::symbol(match self {
            NumType::Int32 => "i32",
            NumType::Int64 => "i64",
            NumType::Float32 => "f32",
            NumType::Float64 => "f64",
            NumType::V128 => "v128",
        })
    }
}

impl HeapType {
    pub fn to_sexpr(&self) -> SExpr {
        match self {
            HeapType::Func => SExpr::symbol("func"),
            HeapType::Extern => SExpr::symbol("extern"),
            HeapType::Any => SExpr::symbol("any"),
            HeapType::Eq => SExpr::symbol("eq"),
            HeapType::I31 => SExpr::symbol("i31"),
            HeapType::TypeIdx(idx) => SExpr::Integer(i64::from(idx.0)),
        }
    }
}

impl RefType {
    pub fn to_sexpr(&self) -> SExpr {
        // Shorthand forms must win whenever they apply.
        if !self.nullable && self.heap == HeapType::I31 {
            // ref i31 = i31ref.
            return SExpr::symbol("i31ref");
        }
        if self.nullable {
            // ref null {func,extern,any,eq} = {func,extern,any,eq}ref.
            match self.heap {
                HeapType::Func => return SExpr::symbol("funcref"),
                HeapType::Extern => return SExpr::symbol("externref"),
                HeapType::Any => return SExpr::symbol("anyref"),
                HeapType::Eq => return SExpr::symbol("eqref"),
                _ => {}
            }
        }

        // The general case.
        let mut items = vec![SExpr::symbol("ref")];
        if self.nullable {
            items.push(SExpr::symbol("null"));
        }
        items.push(self.heap.to_sexpr());
        SExpr::List(items)
    }
}

impl Rtt {
    pub fn to_sexpr(&self) -> SExpr {
        SExpr::list([
            SExpr::symbol("rtt"),
            SExpr::Integer(i64::from(self.depth)),
            self.heap.to_sexpr(),
        ])
    }
}

impl ValType {
    pub fn to_sexpr(&self) -> SExpr {
        match self {
            ValType::Num(t) => t.to_sexpr(),
            ValType::Ref(t) => t.to_sexpr(),
            ValType::Rtt(t) => t.to_sexpr(),
        }
    }
}

impl CompType {
    pub fn to_sexpr(&self) -> SExpr {
        match self {
            CompType::Func(t) => t.to_sexpr(),
            CompType::Struct(t) => t.to_sexpr(),
            CompType::Array(t) => t.to_sexpr(),
        }
    }
}

impl FuncType {
    pub fn to_sexpr(&self) -> SExpr {
        let mut items = vec![SExpr::symbol("func")];
        for parameter in &self.parameters {
            items.push(SExpr::list([SExpr::symbol("param"), parameter.to_sexpr()]));
        }
        items.push(SExpr::list([SExpr::symbol("result"), self.result.to_sexpr()]));
        SExpr::List(items)
    }
}

impl StructType {
    pub fn to_sexpr(&self) -> SExpr {
        let mut items = vec![SExpr::symbol("struct")];
        items.extend(self.fields.iter().map(FieldType::to_sexpr));
        SExpr::List(items)
    }
}

impl ArrayType {
    pub fn to_sexpr(&self) -> SExpr {
        SExpr::list([SExpr::symbol("array"), self.field.to_sexpr()])
    }
}

impl FieldType {
    pub fn to_sexpr(&self) -> SExpr {
        let FieldType(mutability, storage) = self;
        let storage = storage.to_sexpr();
        match mutability {
            Mut::Var => SExpr::list([SExpr::symbol("mut"), storage]),
            Mut::Const => storage,
        }
    }
}

impl StorageType {
    pub fn to_sexpr(&self) -> SExpr {
        match self {
            StorageType::ValType(t) => t.to_sexpr(),
            StorageType::PackType(t) => t.to_sexpr(),
        }
    }
}

impl PackType {
    pub fn to_sexpr(&self) -> SExpr {
        SExpr::symbol(match self {
            PackType::I8 => "i8",
            PackType::I16 => "i16",
        })
    }
}
