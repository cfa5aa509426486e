use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::error::Error;
use crate::node::NodeId;

/// An ordered walk from a source node to a target node, one channel per hop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    nodes: Vec<NodeId>,
}

impl Path {
    pub fn new(nodes: Vec<NodeId>) -> Result<Self, Error> {
        if nodes.is_empty() {
            Err(Error::EmptyPath)
        } else {
            Ok(Self { nodes })
        }
    }

    /// The zero-hop path from `node` to itself.
    pub fn trivial(node: NodeId) -> Self {
        Self { nodes: vec![node] }
    }

    /// Callers guarantee `nodes` is non-empty.
    pub(crate) fn from_walk(nodes: Vec<NodeId>) -> Self {
        debug_assert!(!nodes.is_empty());
        Self { nodes }
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn target(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    pub fn hops(&self) -> usize {
        self.nodes.len() - 1
    }

    pub fn hop_pairs(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }

    pub fn into_nodes(self) -> Vec<NodeId> {
        self.nodes
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, node) in self.nodes.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            f.write_str(&node.label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn endpoints_and_hops() {
        let path = Path::new(vec![NodeId(0), NodeId(3), NodeId(1)]).unwrap();
        assert_eq!(path.source(), NodeId(0));
        assert_eq!(path.target(), NodeId(1));
        assert_eq!(path.hops(), 2);
        assert_eq!(
            path.hop_pairs().collect::<Vec<_>>(),
            vec![(NodeId(0), NodeId(3)), (NodeId(3), NodeId(1))]
        );
        assert_eq!(path.to_string(), "A -> D -> B");
    }

    #[test]
    fn trivial_path_has_no_hops() {
        let path = Path::trivial(NodeId(2));
        assert_eq!(path, Path::new(vec![NodeId(2)]).unwrap());
        assert_eq!(path.hops(), 0);
        assert_eq!(path.source(), path.target());
        assert_eq!(path.hop_pairs().count(), 0);
    }

    #[test]
    fn empty_path_is_rejected() {
        assert_eq!(Path::new(Vec::new()), Err(Error::EmptyPath));
    }
}
