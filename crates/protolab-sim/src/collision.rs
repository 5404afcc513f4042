//! Collision responses: viewport walls, exclusion zones and agent pairs.
//!
//! Agent-agent contact is non-physical: both agents pick a new
//! random heading at cruise speed and are pushed apart along the center
//! axis. An agent held by the pointer is an immovable obstacle.
//!
//! A free agent pinned between a held agent and a wall keeps overlapping
//! the held one: relaxation pushes it into the wall and the wall clamp
//! puts it back. The overlap lasts until the drag ends or the pointer
//! moves away.

use core::f64::consts::TAU;

use rand::Rng;

use crate::agent::Agent;
use crate::geometry::{Rect, Viewport};
use crate::vec2::{EPSILON, Vec2};

/// Extra separation passes run after the redirect pass.
pub const SEPARATION_PASSES: usize = 32;

/// Clamp an agent inside the viewport and force its velocity inward.
///
/// Uses the visual radius so icons never render past an edge. Each edge is
/// handled independently: the velocity component is forced to point away
/// from that edge rather than reflected.
pub fn resolve_walls(agent: &mut Agent, viewport: Viewport, visual_radius: f64) {
    let r = visual_radius;
    if agent.position.x - r <= 0.0 {
        agent.position.x = r;
        agent.velocity.x = agent.velocity.x.abs();
    }
    if agent.position.x + r >= viewport.width {
        agent.position.x = viewport.width - r;
        agent.velocity.x = -agent.velocity.x.abs();
    }
    if agent.position.y - r <= 0.0 {
        agent.position.y = r;
        agent.velocity.y = agent.velocity.y.abs();
    }
    if agent.position.y + r >= viewport.height {
        agent.position.y = viewport.height - r;
        agent.velocity.y = -agent.velocity.y.abs();
    }
}

/// Bounce an agent off one exclusion rectangle.
///
/// Returns `true` if the agent was touching the rectangle.
pub fn resolve_zone(agent: &mut Agent, zone: &Rect, speed: f64) -> bool {
    let closest = zone.closest_point(agent.position);
    let offset = agent.position - closest;
    let distance = offset.length();
    if distance >= agent.radius {
        return false;
    }

    match offset.normalized() {
        Some(normal) => {
            let dot = agent.velocity.dot(normal);
            agent.velocity -= normal * (2.0 * dot);
            agent.position += normal * (agent.radius - distance);
        }
        None => {
            // Center is inside the rectangle: head away from its middle.
            let away = (agent.position - zone.center())
                .normalized()
                .unwrap_or(Vec2::new(0.0, -1.0));
            agent.velocity = away * speed;
        }
    }
    true
}

/// Borrow two distinct elements mutably. Requires `i < j`.
fn pair_mut(agents: &mut [Agent], i: usize, j: usize) -> Option<(&mut Agent, &mut Agent)> {
    if i >= j {
        return None;
    }
    let (left, right) = agents.split_at_mut(j);
    Some((left.get_mut(i)?, right.first_mut()?))
}

/// Push an overlapping pair apart along `axis` (pointing from `a` to `b`).
fn separate(a: &mut Agent, b: &mut Agent, axis: Vec2, overlap: f64) {
    match (a.is_dragging, b.is_dragging) {
        (false, false) => {
            let half = axis * (overlap / 2.0);
            a.position -= half;
            b.position += half;
        }
        (true, false) => b.position += axis * overlap,
        (false, true) => a.position -= axis * overlap,
        (true, true) => {}
    }
}

/// Overlap of a pair, if any: `(axis, overlap)`.
fn overlap_of(a: &Agent, b: &Agent) -> Option<(Option<Vec2>, f64)> {
    if !a.has_appeared || !b.has_appeared {
        return None;
    }
    let delta = b.position - a.position;
    let distance = delta.length();
    let min_distance = a.radius + b.radius;
    (distance < min_distance).then(|| (delta.normalized(), min_distance - distance))
}

/// Redirect and separate every overlapping pair of appeared agents.
///
/// Returns the number of contacts handled.
pub fn resolve_pairs<R: Rng>(agents: &mut [Agent], speed: f64, rng: &mut R) -> usize {
    let mut contacts = 0_usize;
    let n = agents.len();
    for i in 0..n {
        for j in i.saturating_add(1)..n {
            let Some((a, b)) = pair_mut(agents, i, j) else {
                continue;
            };
            let Some((axis, overlap)) = overlap_of(a, b) else {
                continue;
            };
            if a.is_dragging && b.is_dragging {
                continue;
            }

            let first = random_heading(rng);
            let second = random_heading(rng);
            if !a.is_dragging {
                a.velocity = first * speed;
            }
            if !b.is_dragging {
                b.velocity = second * speed;
            }

            separate(a, b, axis.unwrap_or(first), overlap);
            contacts = contacts.saturating_add(1);
        }
    }
    contacts
}

/// One relaxation pass: separate overlapping pairs without changing velocity.
///
/// Returns `true` if any pair still overlapped by more than [`EPSILON`].
pub fn relax_pairs(agents: &mut [Agent]) -> bool {
    let mut any = false;
    let n = agents.len();
    for i in 0..n {
        for j in i.saturating_add(1)..n {
            let Some((a, b)) = pair_mut(agents, i, j) else {
                continue;
            };
            let Some((axis, overlap)) = overlap_of(a, b) else {
                continue;
            };
            if overlap <= EPSILON {
                continue;
            }
            // Coincident centers split horizontally.
            separate(a, b, axis.unwrap_or(Vec2::new(1.0, 0.0)), overlap);
            any = true;
        }
    }
    any
}

/// Smallest clearance between any two appeared agents (distance minus radii).
///
/// Returns `None` when fewer than two agents have appeared.
pub fn min_clearance(agents: &[Agent]) -> Option<f64> {
    let visible: Vec<&Agent> = agents.iter().filter(|a| a.has_appeared).collect();
    let mut best: Option<f64> = None;
    for (i, a) in visible.iter().enumerate() {
        for b in visible.iter().skip(i.saturating_add(1)) {
            let clearance = a.position.distance(b.position) - (a.radius + b.radius);
            best = Some(best.map_or(clearance, |m: f64| m.min(clearance)));
        }
    }
    best
}

/// Uniformly random unit heading.
fn random_heading<R: Rng>(rng: &mut R) -> Vec2 {
    Vec2::from_angle(rng.random::<f64>() * TAU)
}
