#![no_std]
#![deny(
    warnings,
    trivial_casts,
    trivial_numeric_casts,
    unused_import_braces,
    unused_qualifications,
    rust_2018_idioms
)]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod algo;
pub mod amount;
pub mod capacity;
pub mod channel;
pub mod error;
pub mod generator;
pub mod network;
pub mod node;
pub mod path;
pub mod summary;

pub mod impls {
    pub mod default;
}

pub use crate::algo::bfs::Bfs;
pub use crate::algo::reachability::eligible_hop_counts;
pub use crate::algo::PathSearch;
pub use crate::amount::Amount;
pub use crate::capacity::{classify, format_sats, CapacityClass, REPRESENTATIVE_CAPACITIES};
pub use crate::channel::{Channel, RawChannel, SimpleChannel};
pub use crate::error::Error;
pub use crate::generator::{generate, GeneratorConfig};
pub use crate::impls::default::DefaultRouter;
pub use crate::network::Network;
pub use crate::node::NodeId;
pub use crate::path::Path;
pub use crate::summary::NetworkSummary;

/// Capacity-constrained route discovery over a [`Network`].
pub trait Router {
    type Amount;
    type Algo;
    type Error;

    /// Find a path from `source` to `target` in which every channel can carry `amount`.
    ///
    /// Invalid requests (non-positive amount, unknown nodes) are errors. A valid request for
    /// which no route exists yields `Ok(None)`.
    fn find_path(
        &mut self,
        network: &Network<Self::Amount>,
        source: NodeId,
        target: NodeId,
        amount: Self::Amount,
    ) -> Result<Option<Path>, Self::Error>;

    /// Verify that `path` is a simple path over existing channels, each able to carry `amount`.
    fn check(
        &self,
        network: &Network<Self::Amount>,
        path: &Path,
        amount: Self::Amount,
    ) -> Result<(), Self::Error>;
}

/// Route `amount` from `source` to `target` with breadth-first search, returning a path with the
/// fewest hops.
pub fn find_path<A: Amount>(
    network: &Network<A>,
    source: NodeId,
    target: NodeId,
    amount: A,
) -> Result<Option<Path>, Error> {
    DefaultRouter::new(Bfs::default()).find_path(network, source, target, amount)
}
