//! Textual rendering of instructions.
//!
//! Local references render through the declaring function's locals, so the instruction
//! renderers take that list as context.
use crate::core::function::Local;
use crate::core::indices::LocalIdx;
use crate::core::instruction::{Instruction, InstructionList};
use crate::text::SExpr;

// `$name` for a named local, the bare index for an anonymous one.
fn local_ref(locals: &[Local], index: LocalIdx) -> String {
    let local = &locals[index.0 as usize];
    if local.name().is_empty() {
        index.0.to_string()
    } else {
        format!("${}", local.name())
    }
}

impl Instruction {
    pub fn to_sexpr(&self, locals: &[Local]) -> SExpr {
        match self {
            Instruction::LocalGet(local) => {
                SExpr::Symbol(format!("local.get {}", local_ref(locals, *local)))
            }
            Instruction::LocalSet(local) => {
                SExpr::Symbol(format!("local.set {}", local_ref(locals, *local)))
            }
            Instruction::I32Const(value) => SExpr::Symbol(format!("i32.const {value}")),
            Instruction::I32Add => SExpr::symbol("i32.add"),
            Instruction::If(then, otherwise) => SExpr::list([
                SExpr::symbol("if"),
                SExpr::list([SExpr::symbol("then"), then.to_sexpr(locals)]),
                SExpr::list([SExpr::symbol("else"), otherwise.to_sexpr(locals)]),
            ]),
        }
    }
}

impl InstructionList {
    pub fn to_sexpr(&self, locals: &[Local]) -> SExpr {
        SExpr::list(self.instructions().iter().map(|i| i.to_sexpr(locals)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::function::{Function, LocalKind};
    use crate::core::indices::{FuncIdx, TypeIdx};
    use crate::core::types::valtype::ValType;

    fn function_with_locals() -> Function {
        let mut f = Function::new("f".to_owned(), FuncIdx(0), TypeIdx(0));
        f.add_local(LocalKind::Param, ValType::I32, "x");
        f.add_local(LocalKind::Local, ValType::I32, "");
        f
    }

    #[test]
    fn local_accessors_render_name_or_index() {
        let f = function_with_locals();
        let get = Instruction::LocalGet(LocalIdx(0));
        let set = Instruction::LocalSet(LocalIdx(1));
        assert_eq!(get.to_sexpr(f.locals()).to_string(), "local.get $x");
        assert_eq!(set.to_sexpr(f.locals()).to_string(), "local.set 1");
    }

    #[test]
    fn if_renders_then_and_else_as_siblings() {
        let f = function_with_locals();
        let then = InstructionList::from_iter([Instruction::I32Const(1)]);
        let otherwise = InstructionList::from_iter([Instruction::I32Const(2)]);
        let instruction = Instruction::If(then, otherwise);
        assert_eq!(
            instruction.to_sexpr(f.locals()).to_string(),
            "(if (then (i32.const 1)) (else (i32.const 2)))"
        );
    }

    #[test]
    fn lists_render_flat() {
        let f = function_with_locals();
        let list = InstructionList::from_iter([
            Instruction::LocalGet(LocalIdx(0)),
            Instruction::I32Const(3),
            Instruction::I32Add,
        ]);
        assert_eq!(
            list.to_sexpr(f.locals()).to_string(),
            "(local.get $x i32.const 3 i32.add)"
        );
    }
}
