//! The intermediate tree and its visitor dispatch contracts.
//!
//! A [`Node`] is tagged with exactly one [`NodeKind`] and owns its children;
//! the tree is strictly tree-shaped (no sharing, no cycles) and is built
//! fresh for every conversion run. Kinds form a forest rooted at
//! [`NodeKind::Element`] via [`NodeKind::parent`], and that supertype table
//! drives the hierarchical fallback of the [`Visitor`] and [`VoidVisitor`]
//! contracts: a pass overrides only the kinds it cares about, every other
//! kind is handled by its nearest overridden ancestor.

mod display;
mod node;
mod visitor;

pub use node::Node;
pub use visitor::{Ancestors, HierarchyError, NodeKind, Visitor, VoidVisitor, validate_hierarchy};
