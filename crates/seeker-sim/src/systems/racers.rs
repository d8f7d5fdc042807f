//! Racer system: scripted competitor movement.
//!
//! Stands in for the kart physics of a real race: each competitor moves by
//! its scripted velocity, serves out hit-stun, and optionally follows the
//! track so its next waypoint stays meaningful for pathfinding.

use hecs::World;

use seeker_core::components::{Competitor, RacerScript};
use seeker_core::constants::DEFAULT_WAYPOINT_RADIUS;
use seeker_core::fixed::{point_to_dist, Fixed};
use seeker_core::types::FixedVec3;
use seeker_waypoints::WaypointGraph;

pub fn run(world: &mut World, graph: &WaypointGraph, map_scale: Fixed) {
    for (_entity, (competitor, script)) in world.query_mut::<(&mut Competitor, &RacerScript)>() {
        // Ring lock only lasts while an agent keeps asserting it.
        competitor.ring_locked = false;

        let Some(body) = competitor.body.as_mut() else {
            continue;
        };
        if body.hitlag > 0 {
            body.hitlag -= 1;
            body.momentum = FixedVec3::ZERO;
            continue;
        }

        body.momentum = script.velocity;
        body.position = body.position.wrapping_add(&script.velocity);
        let position = body.position;
        competitor.speed = point_to_dist(0, 0, script.velocity.x, script.velocity.y);

        if script.follow_track {
            advance_waypoint(competitor, &position, graph, map_scale);
        }
    }
}

/// Move a competitor's next waypoint along once it has been reached.
fn advance_waypoint(
    competitor: &mut Competitor,
    position: &FixedVec3,
    graph: &WaypointGraph,
    map_scale: Fixed,
) {
    let Some(waypoint) = competitor.next_waypoint.and_then(|id| graph.get(id)) else {
        competitor.next_waypoint = graph.nearest(position);
        return;
    };

    let reach = waypoint
        .radius
        .max(DEFAULT_WAYPOINT_RADIUS.saturating_mul(map_scale));
    let dist = point_to_dist(position.x, position.y, waypoint.position.x, waypoint.position.y);
    if dist <= reach {
        if let Some(&next) = waypoint.successors().first() {
            competitor.next_waypoint = Some(next);
        }
    }
}
