//! Syntax tree model for the esgen code generator.
//!
//! This crate defines the node kinds the emitter understands: expressions,
//! statements, binding patterns and type annotations, shaped after the
//! ESTree/TSESTree conventions so that the JSON any conforming parser
//! produces deserializes straight into the model. The crate carries no
//! behavior beyond small accessors; rendering lives in `esgen-emitter`.
//!
//! Nodes are plain owned data. The emitter treats them as read-only input
//! and never needs to mutate or take ownership of a tree.

pub mod expr;
pub mod pat;
pub mod source;
pub mod stmt;
pub mod ts;

pub use expr::Expression;
pub use pat::Pattern;
pub use source::{Comment, CommentKind, NodeMeta, Position, SourceLocation};
pub use stmt::{Program, Statement};
