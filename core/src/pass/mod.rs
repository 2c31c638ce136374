//! The pass pipeline: an ordered list of conversion passes run over a tree.
//!
//! A conversion run is a sequence of passes, each a value implementing
//! [`Pass`], executed in registration order against the same tree. The
//! pipeline does no traversal of its own — each pass constructs whatever
//! dispatcher it needs and drives [`Node::accept`](crate::tree::Node::accept)
//! itself. The first pass error aborts the run and surfaces unmodified; the
//! pipeline never retries or swallows.

use ecow::EcoString;
use thiserror::Error;
use tracing::debug;

use crate::tree::Node;
use crate::{Box, Vec};

/// A failure reported by a conversion pass.
///
/// The dispatch framework itself has no runtime failure mode — dispatch is
/// total by construction — so everything here is a logic error in a pass
/// body, tagged with the pass that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PassError {
    #[error("pass `{pass}` failed: {message}")]
    Failed { pass: EcoString, message: EcoString },

    #[error("pass `{pass}` found a malformed tree: {detail}")]
    MalformedTree { pass: EcoString, detail: EcoString },
}

impl PassError {
    pub fn failed(pass: &str, message: impl Into<EcoString>) -> Self {
        PassError::Failed {
            pass: pass.into(),
            message: message.into(),
        }
    }

    /// For passes that assume tree shape, e.g. a child that must exist.
    pub fn malformed(pass: &str, detail: impl Into<EcoString>) -> Self {
        PassError::MalformedTree {
            pass: pass.into(),
            detail: detail.into(),
        }
    }
}

/// One step of rewriting the tree toward the target language's idioms.
pub trait Pass {
    fn name(&self) -> &str;

    fn run(&mut self, root: &mut Node) -> Result<(), PassError>;
}

/// Ordered sequence of passes.
#[derive(Default)]
pub struct Pipeline {
    passes: Vec<Box<dyn Pass>>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    pub fn register(&mut self, pass: Box<dyn Pass>) -> &mut Self {
        self.passes.push(pass);
        self
    }

    pub fn len(&self) -> usize {
        self.passes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.passes.is_empty()
    }

    /// Run every registered pass over `root`, in order, stopping at the
    /// first error.
    pub fn run(&mut self, root: &mut Node) -> Result<(), PassError> {
        for pass in &mut self.passes {
            debug!(pass = pass.name(), "running conversion pass");
            pass.run(root)?;
        }
        Ok(())
    }
}
