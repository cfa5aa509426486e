use core::fmt::Debug;

use crate::network::Network;
use crate::node::NodeId;
use crate::path::Path;

pub mod bfs;
pub mod reachability;

/// A route discovery algorithm over a fixed network.
pub trait PathSearch {
    type Amount;
    type Error: Debug;

    /// Search for a path from `source` to `target` using only channels able to carry `amount`.
    /// `Ok(None)` means no such path exists.
    ///
    /// Callers are expected to have validated `source`, `target` and `amount` against `network`.
    fn search(
        &mut self,
        network: &Network<Self::Amount>,
        source: NodeId,
        target: NodeId,
        amount: Self::Amount,
    ) -> Result<Option<Path>, Self::Error>;
}
