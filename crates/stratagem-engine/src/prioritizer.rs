//! Entity prioritization — weighted scoring and stable ranking.

use stratagem_core::config::{W_EXPOSURE, W_THREAT, W_TIME_SENSITIVITY, W_VALUE};
use stratagem_core::types::Entity;

/// Weighted priority score for one entity.
///
/// Exposure is the inverse of protection: an unprotected entity is a more
/// attractive candidate.
pub fn priority_score(entity: &Entity) -> f64 {
    W_VALUE * entity.value
        + W_THREAT * entity.threat_tier.score()
        + W_TIME_SENSITIVITY * entity.time_sensitivity
        + W_EXPOSURE * (100.0 - entity.protection)
}

/// Rank entities by descending priority score.
///
/// The sort is stable: entities with equal scores keep their input order,
/// so repeated calls on identical input are identical.
pub fn prioritize(entities: &[Entity]) -> Vec<Entity> {
    let mut ranked: Vec<Entity> = entities.to_vec();
    ranked.sort_by(|a, b| {
        priority_score(b)
            .partial_cmp(&priority_score(a))
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked
}
