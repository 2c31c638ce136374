//! Konvert — tree core of a Java → Kotlin source converter.
//!
//! # Overview
//!
//! A conversion run parses Java source into an intermediate tree, rewrites
//! that tree in place with an ordered pipeline of passes, and renders the
//! result as Kotlin source. This crate is the middle step: the tree, the
//! visitor dispatch framework passes are written against, and the pipeline
//! driver. Parsing and rendering are separate collaborators.
//!
//! A pass implements [`Visitor`] (or [`VoidVisitor`]) and overrides only the
//! node kinds it transforms; every other kind falls back to its nearest
//! overridden ancestor in the kind hierarchy, ultimately the mandatory
//! root handler.
//!
//! # Quick start
//!
//! ```
//! use konvert::{Node, NodeKind, Pass, PassError, Pipeline, VoidVisitor, convert};
//!
//! // Java assignments are expressions; Kotlin assignments are statements.
//! struct AssignmentsToStatements;
//!
//! impl VoidVisitor for AssignmentsToStatements {
//!     fn visit_element(&mut self, node: &mut Node) {
//!         node.accept_children_void(self);
//!     }
//!
//!     fn visit_java_assignment_expression(&mut self, node: &mut Node) {
//!         node.set_kind(NodeKind::KtAssignmentStatement);
//!         node.accept_children_void(self);
//!     }
//! }
//!
//! struct RewriteAssignments;
//!
//! impl Pass for RewriteAssignments {
//!     fn name(&self) -> &str {
//!         "assignments-to-statements"
//!     }
//!
//!     fn run(&mut self, root: &mut Node) -> Result<(), PassError> {
//!         root.accept_void(&mut AssignmentsToStatements);
//!         Ok(())
//!     }
//! }
//!
//! let tree = Node::with_children(
//!     NodeKind::Block,
//!     vec![Node::new(NodeKind::JavaAssignmentExpression)],
//! );
//!
//! let mut pipeline = Pipeline::new();
//! pipeline.register(Box::new(RewriteAssignments));
//!
//! let converted = convert(tree, &mut pipeline).unwrap();
//! assert_eq!(converted.children()[0].kind(), NodeKind::KtAssignmentStatement);
//! ```

use miette::Diagnostic;
use thiserror::Error;

pub use konvert_core::pass::{Pass, PassError, Pipeline};
pub use konvert_core::tree::{
    Ancestors, HierarchyError, Node, NodeKind, Visitor, VoidVisitor, validate_hierarchy,
};

/// A conversion run that did not produce a target tree.
#[derive(Debug, Error, Diagnostic)]
pub enum ConvertError {
    #[error("conversion pipeline failed")]
    #[diagnostic(code(konvert::pipeline))]
    Pipeline(#[from] PassError),
}

/// Run a full conversion: every registered pass, in order, over `root`.
///
/// This is the single entry the enclosing build tool calls. Errors surface
/// from the failing pass unmodified; the tree is consumed because a failed
/// run leaves it partially rewritten.
pub fn convert(mut root: Node, pipeline: &mut Pipeline) -> Result<Node, ConvertError> {
    pipeline.run(&mut root)?;
    Ok(root)
}
