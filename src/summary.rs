use alloc::collections::BTreeMap;

use serde::Serialize;

use crate::algo::reachability::component_count;
use crate::amount::Amount;
use crate::capacity::{classify, CapacityClass};
use crate::channel::Channel;
use crate::network::Network;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NetworkSummary {
    pub node_count: usize,
    pub channel_count: usize,
    pub isolated_nodes: usize,
    pub component_count: usize,
}

impl<A: Amount> Network<A> {
    pub fn summary(&self) -> NetworkSummary {
        let summary = NetworkSummary {
            node_count: self.node_count(),
            channel_count: self.channels().len(),
            isolated_nodes: self.nodes().filter(|&n| self.degree(n) == 0).count(),
            component_count: component_count(self),
        };
        log::debug!("{summary:?}");
        summary
    }
}

impl Network<u64> {
    /// Number of channels per capacity class.
    pub fn class_counts(&self) -> BTreeMap<CapacityClass, usize> {
        self.channels()
            .iter()
            .fold(BTreeMap::new(), |mut acc, c| {
                *acc.entry(classify(c.capacity())).or_default() += 1;
                acc
            })
    }
}
