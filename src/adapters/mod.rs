//! Source adapters producing a [`DocumentAst`](crate::core::ast::DocumentAst).

pub mod markdown;
