use alloc::collections::VecDeque;
use alloc::vec;
use alloc::vec::Vec;
use core::convert::Infallible;
use core::marker::PhantomData;

use crate::algo::PathSearch;
use crate::amount::Amount;
use crate::network::Network;
use crate::node::NodeId;
use crate::path::Path;

/// Breadth-first search over capacity-eligible channels.
///
/// Returns a path with the fewest hops. Among equally short paths the winner is decided by
/// discovery order, i.e. neighbours are tried in channel insertion order rather than by node
/// index.
#[derive(Clone, Debug, Default)]
pub struct Bfs<Amount>(PhantomData<Amount>);

impl<A: Amount> PathSearch for Bfs<A> {
    type Amount = A;
    type Error = Infallible;

    fn search(
        &mut self,
        network: &Network<A>,
        source: NodeId,
        target: NodeId,
        amount: A,
    ) -> Result<Option<Path>, Self::Error> {
        Ok(bfs_path(network, source, target, amount))
    }
}

pub fn bfs_path<A: Amount>(
    network: &Network<A>,
    source: NodeId,
    target: NodeId,
    amount: A,
) -> Option<Path> {
    if source == target {
        return Some(Path::trivial(source));
    }

    // parent[n] is the node that first discovered n; the source is its own parent
    let mut parent: Vec<Option<NodeId>> = vec![None; network.node_count()];
    parent[source.index()] = Some(source);

    let mut queue = VecDeque::from([source]);
    while let Some(node) = queue.pop_front() {
        log::trace!("expanding {}", node.label());

        for (next, capacity) in network.neighbors(node) {
            if capacity < amount || parent[next.index()].is_some() {
                continue;
            }
            parent[next.index()] = Some(node);

            if next == target {
                return Some(unwind(&parent, source, target));
            }
            queue.push_back(next);
        }
    }

    None
}

fn unwind(parent: &[Option<NodeId>], source: NodeId, target: NodeId) -> Path {
    let mut nodes = vec![target];
    let mut node = target;
    while node != source {
        match parent[node.index()] {
            Some(p) => node = p,
            None => break,
        }
        nodes.push(node);
    }
    nodes.reverse();
    Path::from_walk(nodes)
}
