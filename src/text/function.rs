//! Textual rendering of functions and their locals.
use crate::core::function::{Function, Local, LocalKind};
use crate::text::SExpr;

impl Local {
    pub fn to_sexpr(&self) -> SExpr {
        let mut items = vec![SExpr::symbol(match self.kind() {
            LocalKind::Param => "param",
            LocalKind::Local => "local",
        })];
        if !self.name().is_empty() {
            items.push(SExpr::Symbol(format!("${}", self.name())));
        }
        items.push(self.value_type().to_sexpr());
        SExpr::List(items)
    }
}

impl Function {
    /// `(func $name (type i) local* body)`. Parameters are implied by the referenced type
    /// and are not repeated; only plain locals are listed.
    pub fn to_sexpr(&self) -> SExpr {
        let mut items = vec![SExpr::symbol("func")];
        if !self.name().is_empty() {
            items.push(SExpr::Symbol(format!("${}", self.name())));
        }
        items.push(SExpr::list([
            SExpr::symbol("type"),
            SExpr::Integer(i64::from(self.type_idx().0)),
        ]));
        for local in self.locals() {
            if local.kind() == LocalKind::Local {
                items.push(local.to_sexpr());
            }
        }
        match self.body() {
            Some(body) => items.push(body.to_sexpr(self.locals())),
            None => items.push(SExpr::symbol("<missing body>")),
        }
        SExpr::List(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::indices::{FuncIdx, TypeIdx};
    use crate::core::instruction::Instruction;
    use crate::core::types::valtype::ValType;

    #[test]
    fn function_renders_type_locals_and_body() {
        let mut f = Function::new("main".to_owned(), FuncIdx(0), TypeIdx(2));
        f.add_local(LocalKind::Param, ValType::I32, "x");
        f.add_local(LocalKind::Local, ValType::I64, "tmp");
        f.make_body().push(Instruction::I32Const(42));

        assert_eq!(
            f.to_sexpr().to_string(),
            "(func $main (type 2) (local $tmp i64) (i32.const 42))"
        );
    }

    #[test]
    fn bodyless_function_renders_a_placeholder() {
        let f = Function::new(String::new(), FuncIdx(0), TypeIdx(0));
        assert_eq!(f.to_sexpr().to_string(), "(func (type 0) <missing body>)");
    }
}
