use alloc::collections::BTreeMap;

use petgraph::algo::{connected_components, dijkstra};
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::EdgeFiltered;

use crate::amount::Amount;
use crate::channel::Channel;
use crate::network::Network;
use crate::node::NodeId;

/// Undirected petgraph view of `network`. Node `i` of the network is `NodeIndex::new(i)`.
fn to_graph<A: Amount>(network: &Network<A>) -> UnGraph<NodeId, A> {
    let mut graph = UnGraph::with_capacity(network.node_count(), network.channels().len());
    network.nodes().for_each(|n| {
        graph.add_node(n);
    });
    network.channels().iter().for_each(|c| {
        graph.add_edge(
            NodeIndex::new(c.start().index()),
            NodeIndex::new(c.end().index()),
            c.capacity(),
        );
    });
    graph
}

/// Minimum hop count from `source` to every node reachable over channels with
/// `capacity >= amount`. The source itself is included with distance zero; unreachable nodes are
/// absent.
pub fn eligible_hop_counts<A: Amount>(
    network: &Network<A>,
    source: NodeId,
    amount: A,
) -> BTreeMap<NodeId, usize> {
    if !network.contains(source) {
        return BTreeMap::new();
    }

    let graph = to_graph(network);
    // only channels able to carry the amount are part of the search graph
    let eligible = EdgeFiltered::from_fn(&graph, |e| *e.weight() >= amount);
    let distance = dijkstra(&eligible, NodeIndex::new(source.index()), None, |_| 1usize);

    distance
        .into_iter()
        .map(|(idx, hops)| (graph[idx], hops))
        .collect()
}

/// Number of connected components, counting isolated nodes as their own component.
pub fn component_count<A: Amount>(network: &Network<A>) -> usize {
    connected_components(&to_graph(network))
}
