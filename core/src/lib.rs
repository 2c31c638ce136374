#![cfg_attr(all(not(feature = "std"), not(test)), no_std)]

//! Tree core of a Java → Kotlin source converter.
//!
//! The converter works on an intermediate tree shared by both languages.
//! Parsing builds the tree, an ordered list of conversion passes rewrites it
//! in place, and a renderer prints the result as Kotlin source. This crate
//! holds the parts every pass depends on: the node kinds and their supertype
//! table ([`tree::NodeKind`]), the tree nodes themselves ([`tree::Node`]),
//! the visitor dispatch contracts ([`tree::Visitor`], [`tree::VoidVisitor`]),
//! and the pass pipeline ([`pass::Pipeline`]).
//!
//! Parsing and rendering live outside this crate.

extern crate alloc;

// Re-export for convenience so other modules don't need alloc:: prefix
#[allow(unused_imports)]
pub(crate) use alloc::{boxed::Box, format, string::String, string::ToString, vec, vec::Vec};

pub mod pass;
pub mod tree;

pub use pass::{Pass, PassError, Pipeline};
pub use tree::{Node, NodeKind, Visitor, VoidVisitor};
