// src/host_lib/replay.rs

use crate::host_lib::host_types::{HostError, PatternHost};
use crate::pattern_lib::PlacementTransform;

/// Copies `source` once per placement and moves each copy, in placement order.
/// If any step fails, the copies made so far are removed again.
pub fn replay_placements<H: PatternHost>(
    host: &mut H,
    source: &H::Body,
    placements: &[PlacementTransform],
) -> Result<Vec<H::Body>, HostError> {
    let mut created = Vec::with_capacity(placements.len());

    for placement in placements {
        let step = host.copy_to_scene(source).and_then(|copy| {
            created.push(copy.clone());
            host.apply_transform(&copy, &placement.to_matrix()).map(|_| copy)
        });

        if let Err(e) = step {
            log::warn!(
                "Placing instance {} failed ({}); removing {} copies",
                placement.index,
                e,
                created.len()
            );
            discard_bodies(host, &created);
            return Err(e);
        }
    }

    Ok(created)
}

pub(crate) fn discard_bodies<H: PatternHost>(host: &mut H, bodies: &[H::Body]) {
    for body in bodies.iter().rev() {
        if let Err(e) = host.remove(body) {
            log::warn!("Could not remove {:?}: {}", body, e);
        }
    }
}
