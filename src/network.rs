use alloc::collections::BTreeSet;
use alloc::vec;
use alloc::vec::Vec;

use crate::amount::Amount;
use crate::channel::{Channel, SimpleChannel};
use crate::error::Error;
use crate::node::NodeId;

/// All nodes and channels of one generation.
///
/// The channel list is kept in insertion order and an adjacency list (node -> incident channel
/// indices, also in insertion order) is built once on construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Network<Amount> {
    node_count: usize,
    channels: Vec<SimpleChannel<Amount>>,
    adjacency: Vec<Vec<usize>>,
}

impl<A: Amount> Network<A> {
    pub fn new(node_count: usize, channels: Vec<SimpleChannel<A>>) -> Result<Self, Error> {
        if node_count == 0 {
            return Err(Error::NoNodes);
        }

        let mut adjacency = vec![Vec::new(); node_count];
        let mut pairs = BTreeSet::new();
        for (idx, c) in channels.iter().enumerate() {
            for node in [c.start(), c.end()] {
                if node.index() >= node_count {
                    return Err(Error::NodeOutOfRange { node, node_count });
                }
            }
            let (start, end) = c.pair();
            if !pairs.insert((start, end)) {
                return Err(Error::DuplicateChannel { start, end });
            }
            adjacency[c.start().index()].push(idx);
            adjacency[c.end().index()].push(idx);
        }

        Ok(Self {
            node_count,
            channels,
            adjacency,
        })
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn nodes(&self) -> impl Iterator<Item = NodeId> {
        (0..self.node_count).map(NodeId)
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node.index() < self.node_count
    }

    pub fn channels(&self) -> &[SimpleChannel<A>] {
        &self.channels
    }

    /// Channels touching `node`, in insertion order. Empty for unknown nodes.
    pub fn incident(&self, node: NodeId) -> impl Iterator<Item = &SimpleChannel<A>> + '_ {
        self.adjacency
            .get(node.index())
            .into_iter()
            .flatten()
            .map(|&idx| &self.channels[idx])
    }

    /// Neighbouring nodes of `node` along with the capacity of the connecting channel.
    pub fn neighbors(&self, node: NodeId) -> impl Iterator<Item = (NodeId, A)> + '_ {
        self.incident(node)
            .filter_map(move |c| c.other_end(node).map(|n| (n, c.capacity())))
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(node.index()).map_or(0, Vec::len)
    }

    pub fn channel_between(&self, a: NodeId, b: NodeId) -> Option<&SimpleChannel<A>> {
        self.incident(a).find(|c| c.connects(a, b))
    }

    /// `NodeOutOfRange` unless `node` belongs to this network.
    pub fn ensure_contains(&self, node: NodeId) -> Result<(), Error> {
        if self.contains(node) {
            Ok(())
        } else {
            Err(Error::NodeOutOfRange {
                node,
                node_count: self.node_count,
            })
        }
    }
}
