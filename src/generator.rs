use alloc::vec::Vec;

use itertools::Itertools;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::capacity::REPRESENTATIVE_CAPACITIES;
use crate::channel::SimpleChannel;
use crate::error::Error;
use crate::network::Network;
use crate::node::NodeId;

/// Parameters of a random network.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct GeneratorConfig {
    pub node_count: usize,
    /// Probability that any given pair of nodes shares a channel.
    pub channel_probability: f64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            node_count: 20,
            channel_probability: 0.2,
        }
    }
}

impl GeneratorConfig {
    pub fn new(node_count: usize, channel_probability: f64) -> Result<Self, Error> {
        let config = Self {
            node_count,
            channel_probability,
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.node_count == 0 {
            Err(Error::NoNodes)
        } else if !(0.0..=1.0).contains(&self.channel_probability) {
            // also rejects NaN
            Err(Error::InvalidProbability)
        } else {
            Ok(())
        }
    }

    /// Build a fresh network: every pair `(i, j)` with `i < j` gets a channel with probability
    /// `channel_probability`, its capacity drawn uniformly from [`REPRESENTATIVE_CAPACITIES`].
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Network<u64>, Error> {
        self.validate()?;

        let mut channels = Vec::new();
        for (i, j) in (0..self.node_count).tuple_combinations::<(usize, usize)>() {
            if rng.gen_bool(self.channel_probability) {
                let capacity =
                    REPRESENTATIVE_CAPACITIES[rng.gen_range(0..REPRESENTATIVE_CAPACITIES.len())];
                channels.push(SimpleChannel::new(NodeId(i), NodeId(j), capacity)?);
            }
        }

        let network = Network::new(self.node_count, channels)?;
        log::debug!(
            "generated {} nodes and {} channels (p = {})",
            network.node_count(),
            network.channels().len(),
            self.channel_probability
        );
        Ok(network)
    }
}

/// Shorthand for [`GeneratorConfig::generate`].
pub fn generate<R: Rng + ?Sized>(
    node_count: usize,
    channel_probability: f64,
    rng: &mut R,
) -> Result<Network<u64>, Error> {
    GeneratorConfig {
        node_count,
        channel_probability,
    }
    .generate(rng)
}
