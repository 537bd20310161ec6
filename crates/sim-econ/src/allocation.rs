//! Proportional split of the marketing budget across active channels.

use rust_decimal::Decimal;
use sim_core::ChannelId;
use std::collections::{BTreeMap, BTreeSet};

/// Allocated amount per catalog channel. Inactive channels map to zero.
pub type Allocation = BTreeMap<ChannelId, Decimal>;

/// Split `budget` over the active channels by catalog weight,
/// renormalized over the active subset only.
///
/// Every catalog channel is present in the result. With no active channel
/// or a budget of zero (or less) every amount is zero.
pub fn allocate_budget(budget: Decimal, active: &BTreeSet<ChannelId>) -> Allocation {
    let active_weight: Decimal = active.iter().map(|c| c.weight()).sum();
    ChannelId::ALL
        .iter()
        .map(|&id| {
            let amount = if active.contains(&id)
                && budget > Decimal::ZERO
                && active_weight > Decimal::ZERO
            {
                budget * id.weight() / active_weight
            } else {
                Decimal::ZERO
            };
            (id, amount)
        })
        .collect()
}
