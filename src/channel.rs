use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::node::NodeId;

/// An undirected payment channel between two distinct nodes.
pub trait Channel {
    type Amount;

    fn start(&self) -> NodeId;
    fn end(&self) -> NodeId;
    fn capacity(&self) -> Self::Amount;

    /// The endpoint opposite to `node`, or `None` if the channel doesn't touch `node`.
    fn other_end(&self, node: NodeId) -> Option<NodeId> {
        if node == self.start() {
            Some(self.end())
        } else if node == self.end() {
            Some(self.start())
        } else {
            None
        }
    }

    fn connects(&self, a: NodeId, b: NodeId) -> bool {
        self.other_end(a) == Some(b)
    }

    /// Unordered pair identifying the channel, smaller index first.
    fn pair(&self) -> (NodeId, NodeId) {
        if self.start() < self.end() {
            (self.start(), self.end())
        } else {
            (self.end(), self.start())
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
#[serde(
    try_from = "RawChannel<Amount>",
    bound(deserialize = "Amount: Zero + PartialOrd + Deserialize<'de>")
)]
pub struct SimpleChannel<Amount> {
    start: NodeId,
    end: NodeId,
    capacity: Amount,
}

impl<Amount> SimpleChannel<Amount>
where
    Amount: Zero + PartialOrd,
{
    pub fn new(start: NodeId, end: NodeId, capacity: Amount) -> Result<Self, Error> {
        if start == end {
            Err(Error::ChannelToSelf)
        } else if capacity <= Amount::zero() {
            Err(Error::NonPositiveAmount)
        } else {
            Ok(Self {
                start,
                end,
                capacity,
            })
        }
    }
}

impl<Amount> Channel for SimpleChannel<Amount>
where
    Amount: Copy,
{
    type Amount = Amount;

    fn start(&self) -> NodeId {
        self.start
    }

    fn end(&self) -> NodeId {
        self.end
    }

    fn capacity(&self) -> Self::Amount {
        self.capacity
    }
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Deserialize, Serialize)]
pub struct RawChannel<Amount> {
    pub start: NodeId,
    pub end: NodeId,
    pub capacity: Amount,
}

impl<Amount> TryFrom<RawChannel<Amount>> for SimpleChannel<Amount>
where
    Amount: Zero + PartialOrd,
{
    type Error = Error;

    fn try_from(c: RawChannel<Amount>) -> Result<Self, Self::Error> {
        Self::new(c.start, c.end, c.capacity)
    }
}

impl<Amount> From<SimpleChannel<Amount>> for RawChannel<Amount> {
    fn from(c: SimpleChannel<Amount>) -> Self {
        Self {
            start: c.start,
            end: c.end,
            capacity: c.capacity,
        }
    }
}
