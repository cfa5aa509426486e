use alloc::collections::BTreeSet;
use alloc::format;
use core::marker::PhantomData;

use crate::algo::PathSearch;
use crate::amount::Amount;
use crate::channel::Channel;
use crate::error::Error;
use crate::network::Network;
use crate::node::NodeId;
use crate::path::Path;
use crate::Router;

#[derive(Clone, Debug)]
pub struct DefaultRouter<A, Algo> {
    algo: Algo,
    _phantom: PhantomData<A>,
}

impl<A, Algo> DefaultRouter<A, Algo> {
    pub fn new(algo: Algo) -> Self {
        Self {
            algo,
            _phantom: Default::default(),
        }
    }
}

impl<A, Algo> Router for DefaultRouter<A, Algo>
where
    A: Amount,
    Algo: PathSearch<Amount = A>,
{
    type Amount = A;
    type Algo = Algo;
    type Error = Error;

    fn find_path(
        &mut self,
        network: &Network<A>,
        source: NodeId,
        target: NodeId,
        amount: A,
    ) -> Result<Option<Path>, Self::Error> {
        if amount <= A::zero() {
            return Err(Error::NonPositiveAmount);
        }
        network.ensure_contains(source)?;
        network.ensure_contains(target)?;

        let path = self
            .algo
            .search(network, source, target, amount)
            .map_err(|e| Error::AlgoSpecific(format!("{e:?}")))?;

        match path {
            Some(path) => {
                if path.source() != source || path.target() != target {
                    return Err(Error::InconsistentPath);
                }
                self.check(network, &path, amount)?;
                log::info!("route {} -> {} for {amount}: {path}", source, target);
                Ok(Some(path))
            }
            None => {
                log::info!("no route {} -> {} for {amount}", source, target);
                Ok(None)
            }
        }
    }

    fn check(&self, network: &Network<A>, path: &Path, amount: A) -> Result<(), Self::Error> {
        path.nodes()
            .iter()
            .try_for_each(|&n| network.ensure_contains(n))?;

        // a route never visits the same node twice
        let mut seen = BTreeSet::new();
        if !path.nodes().iter().all(|n| seen.insert(*n)) {
            return Err(Error::InconsistentPath);
        }

        path.hop_pairs().try_for_each(|(a, b)| {
            let channel = network
                .channel_between(a, b)
                .filter(|c| c.capacity() >= amount)
                .ok_or(Error::InconsistentPath)?;
            log::trace!("{} --> {} ({})", a.label(), b.label(), channel.capacity());
            Ok(())
        })
    }
}
