//! Error types for the document and the materializer.

use crate::dom::NodeId;

/// Errors raised by live document operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// The node was released (or never allocated).
    #[error("node {0} does not exist in the document")]
    NodeNotFound(NodeId),

    /// The operation needs an element but the node is text or a fragment.
    #[error("node {0} is not an element")]
    NotAnElement(NodeId),

    /// The tag name cannot name an element.
    #[error("invalid tag name: {0:?}")]
    InvalidTagName(String),

    /// The insertion would create a cycle or target a node that cannot have children.
    #[error("cannot insert node {child} into node {parent}")]
    HierarchyRequest { parent: NodeId, child: NodeId },
}

/// Errors raised while materializing or mounting a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error(transparent)]
    Dom(#[from] DomError),
}

/// Result alias used by render and mount operations.
pub type Result<T, E = RenderError> = std::result::Result<T, E>;
