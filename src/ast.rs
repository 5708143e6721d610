pub mod class;
pub mod node;
pub mod quantifier;

pub use self::{
    class::CharClass,
    node::{Character, Conditional, Group, GroupKind, Lookaround, Node, NodeKind},
    quantifier::{Bound, Quantifier},
};

/// An ordered list of sibling nodes: the whole pattern, or one group body.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Sequence {
    nodes: Vec<Node>,
}

impl Sequence {
    #[must_use]
    pub fn new(nodes: Vec<Node>) -> Self {
        Self { nodes }
    }

    #[must_use]
    pub fn into_nodes(self) -> Vec<Node> {
        self.nodes
    }
}

impl std::ops::Deref for Sequence {
    type Target = [Node];

    fn deref(&self) -> &Self::Target {
        &self.nodes
    }
}

impl PartialEq<&[Node]> for Sequence {
    fn eq(&self, other: &&[Node]) -> bool {
        self.nodes == *other
    }
}

impl<const N: usize> PartialEq<&[Node; N]> for Sequence {
    fn eq(&self, other: &&[Node; N]) -> bool {
        self.nodes == other[..]
    }
}
