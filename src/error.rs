use alloc::string::String;

use displaydoc::Display;

use crate::node::NodeId;

#[derive(Clone, Debug, Display, PartialEq, Eq)]
pub enum Error {
    /// Invalid network, expected at least one node
    NoNodes,
    /// Invalid channel probability, expected a value in [0, 1]
    InvalidProbability,
    /// Invalid amount, expected positive value
    NonPositiveAmount,
    /// Invalid channel where both ends are the same node
    ChannelToSelf,
    /// Node {node} is out of range for a network of {node_count} nodes
    NodeOutOfRange { node: NodeId, node_count: usize },
    /// Duplicate channel between {start} and {end}
    DuplicateChannel { start: NodeId, end: NodeId },
    /// Invalid path, expected at least one node
    EmptyPath,
    /// Path does not connect the requested nodes over channels able to carry the amount
    InconsistentPath,
    /// Path search algorithm specific error
    AlgoSpecific(String),
}
