//! Network traffic counters.

use color_eyre::eyre::Result;
use sysinfo::Networks;

/// Trait for cumulative network byte counters.
pub trait NetworkCounters {
    /// Create a new counter source instance.
    fn new() -> Result<Self>
    where
        Self: Sized;

    /// Received plus transmitted bytes since boot, across all interfaces.
    fn total_bytes(&mut self) -> Result<u64>;
}

/// Interface counters from `sysinfo`. Loopback traffic is not counted.
pub struct SysinfoNetworks {
    networks: Networks,
}

impl NetworkCounters for SysinfoNetworks {
    fn new() -> Result<Self> {
        Ok(Self {
            networks: Networks::new_with_refreshed_list(),
        })
    }

    fn total_bytes(&mut self) -> Result<u64> {
        self.networks.refresh(true);
        let total = self
            .networks
            .iter()
            .filter(|(name, _)| !is_loopback(name))
            .map(|(_, data)| data.total_received() + data.total_transmitted())
            .sum();
        Ok(total)
    }
}

fn is_loopback(interface: &str) -> bool {
    interface == "lo" || interface.starts_with("lo0")
}
