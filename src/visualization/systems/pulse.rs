//! Node glow pulsing.

use std::f32::consts::TAU;

use bevy::prelude::*;

use crate::visualization::components::{NodeMesh, Pulse};
use crate::visualization::constants::{PULSE_EMISSIVE_BASE, PULSE_EMISSIVE_SWING};

/// Advance every pulsing node's glow phase and write the emissive intensity.
///
/// One driver for all nodes: the phase accumulator lives in each node's
/// `Pulse` component and a node stops pulsing simply by leaving the query,
/// so there are no per-object timers to cancel on teardown.
pub fn pulse_nodes(
    time: Res<Time>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    mut query: Query<(&mut Pulse, &MeshMaterial3d<StandardMaterial>), With<NodeMesh>>,
) {
    let dt = time.delta_secs();
    for (mut pulse, material) in query.iter_mut() {
        let speed = pulse.speed;
        pulse.phase = (pulse.phase + speed * dt).rem_euclid(TAU);
        let Some(material) = materials.get_mut(&material.0) else {
            continue;
        };
        let intensity = PULSE_EMISSIVE_BASE + pulse.phase.sin() * PULSE_EMISSIVE_SWING;
        let base = material.base_color.to_linear();
        material.emissive = LinearRgba::rgb(
            base.red * intensity,
            base.green * intensity,
            base.blue * intensity,
        );
    }
}
