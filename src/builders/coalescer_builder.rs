//! Builders to construct coalescers from configuration.

use std::collections::HashMap;

use crate::config::{CoalescerConfig, SchedulerConfig};
use crate::core::{CoalesceAction, CoalesceError, Coalescer, Spawn};

/// Build coalescers from scheduler configuration using a provided action factory.
pub fn build_coalescers<A, T, X, S, FX>(
    cfg: &SchedulerConfig,
    mut action_factory: FX,
    spawner: S,
) -> Result<HashMap<String, Coalescer<A, T, X, S>>, CoalesceError>
where
    A: Send + 'static,
    T: Send + 'static,
    X: CoalesceAction<A, T>,
    FX: FnMut(&str, &CoalescerConfig) -> Result<X, CoalesceError>,
    S: Spawn + Clone,
{
    cfg.validate().map_err(CoalesceError::InvalidConfig)?;

    let mut coalescers = HashMap::new();
    for (name, coalescer_cfg) in &cfg.coalescers {
        let action = action_factory(name, coalescer_cfg)?;
        let coalescer =
            Coalescer::new(action, coalescer_cfg.quiet_period(), spawner.clone())
                .with_mode(coalescer_cfg.mode);
        coalescers.insert(name.clone(), coalescer);
    }

    Ok(coalescers)
}
