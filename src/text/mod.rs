//! The textual output form: an s-expression tree of symbols, integers and lists.
//!
//! Only the tree shape is contractual; the renderer below prints one conventional layout
//! (space-separated atoms, no line breaks).
mod function;
mod instructions;
mod module;
mod types;

use std::fmt;

/// A node of an s-expression tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SExpr {
    Symbol(String),
    Integer(i64),
    List(Vec<SExpr>),
}

impl SExpr {
    pub fn symbol(s: impl Into<String>) -> Self {
        SExpr::Symbol(s.into())
    }

    pub fn list(items: impl IntoIterator<Item = SExpr>) -> Self {
        SExpr::List(items.into_iter().collect())
    }
}

impl fmt::Display for SExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SExpr::Symbol(s) => f.write_str(s),
            SExpr::Integer(i) => write!(f, "{i}"),
            SExpr::List(items) => {
                f.write_str("(")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str(")")
            }
        }
    }
}
