//! Collision detection for 2D shapes
//!
//! Provides contact generation between circles and axis-aligned boxes.

use crate::shapes::{Aabb2D, Circle, Collider};
use arkanoid_math::Vec2;

/// Contact information from a collision
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Contact {
    /// Point of contact
    pub point: Vec2,
    /// Unit contact normal (direction documented per test function)
    pub normal: Vec2,
    /// Penetration depth (positive means overlapping)
    pub penetration: f32,
}

impl Contact {
    /// Create a new contact
    pub fn new(point: Vec2, normal: Vec2, penetration: f32) -> Self {
        Self {
            point,
            normal,
            penetration,
        }
    }

    /// Check if this represents an actual collision (positive penetration)
    pub fn is_colliding(&self) -> bool {
        self.penetration > 0.0
    }

    /// The same contact seen from the other shape
    pub fn flipped(mut self) -> Self {
        self.normal = -self.normal;
        self
    }
}

/// Test circle vs circle collision
///
/// The contact normal points from `a` toward `b`.
pub fn circle_vs_circle(a: &Circle, b: &Circle) -> Option<Contact> {
    let delta = b.center - a.center;
    let dist_sq = delta.length_squared();
    let min_dist = a.radius + b.radius;

    if dist_sq < min_dist * min_dist && dist_sq > 0.0001 {
        let dist = dist_sq.sqrt();
        let penetration = min_dist - dist;
        let normal = delta.normalized();
        let point = a.center + normal * a.radius;
        Some(Contact::new(point, normal, penetration))
    } else {
        None
    }
}

/// Test circle vs AABB collision
///
/// The contact normal points from the AABB toward the circle.
pub fn circle_vs_aabb(circle: &Circle, aabb: &Aabb2D) -> Option<Contact> {
    let closest = aabb.closest_point(circle.center);
    let delta = circle.center - closest;
    let dist_squared = delta.length_squared();

    if dist_squared >= circle.radius * circle.radius {
        return None;
    }

    let dist = dist_squared.sqrt();

    if dist > 0.0001 {
        let penetration = circle.radius - dist;
        return Some(Contact::new(closest, delta.normalized(), penetration));
    }

    // Center is inside the box: escape through the nearest edge
    let to_min = circle.center - aabb.min;
    let to_max = aabb.max - circle.center;

    let mut edge_dist = to_min.x;
    let mut normal = -Vec2::X;

    if to_max.x < edge_dist {
        edge_dist = to_max.x;
        normal = Vec2::X;
    }
    if to_min.y < edge_dist {
        edge_dist = to_min.y;
        normal = -Vec2::Y;
    }
    if to_max.y < edge_dist {
        edge_dist = to_max.y;
        normal = Vec2::Y;
    }

    Some(Contact::new(closest, normal, circle.radius + edge_dist))
}

/// Test AABB vs AABB collision
///
/// The contact normal points from `b` toward `a`.
pub fn aabb_vs_aabb(a: &Aabb2D, b: &Aabb2D) -> Option<Contact> {
    if a.max.x < b.min.x || a.min.x > b.max.x {
        return None;
    }
    if a.max.y < b.min.y || a.min.y > b.max.y {
        return None;
    }

    let overlap_x = (a.max.x.min(b.max.x) - a.min.x.max(b.min.x)).max(0.0);
    let overlap_y = (a.max.y.min(b.max.y) - a.min.y.max(b.min.y)).max(0.0);

    let (penetration, normal) = if overlap_x <= overlap_y {
        let n = if a.center().x < b.center().x { -Vec2::X } else { Vec2::X };
        (overlap_x, n)
    } else {
        let n = if a.center().y < b.center().y { -Vec2::Y } else { Vec2::Y };
        (overlap_y, n)
    };

    // Contact point is at the center of the overlap region
    let overlap_min = a.min.max_components(b.min);
    let overlap_max = a.max.min_components(b.max);
    let point = (overlap_min + overlap_max) * 0.5;

    Some(Contact::new(point, normal, penetration))
}

/// Test any pair of colliders
///
/// The contact normal always points from `a` toward `b`.
pub fn collide(a: &Collider, b: &Collider) -> Option<Contact> {
    match (a, b) {
        (Collider::Circle(a), Collider::Circle(b)) => circle_vs_circle(a, b),
        // circle_vs_aabb points from the box toward the circle
        (Collider::Circle(circle), Collider::Aabb(aabb)) => circle_vs_aabb(circle, aabb).map(Contact::flipped),
        (Collider::Aabb(aabb), Collider::Circle(circle)) => circle_vs_aabb(circle, aabb),
        // aabb_vs_aabb points from b toward a
        (Collider::Aabb(a), Collider::Aabb(b)) => aabb_vs_aabb(a, b).map(Contact::flipped),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_box() -> Aabb2D {
        Aabb2D::from_center_half_extents(Vec2::ZERO, Vec2::new(0.5, 0.5))
    }

    #[test]
    fn test_circle_vs_circle_separated() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(3.0, 0.0), 1.0);
        assert!(circle_vs_circle(&a, &b).is_none());
    }

    #[test]
    fn test_circle_vs_circle_overlapping() {
        let a = Circle::new(Vec2::ZERO, 1.0);
        let b = Circle::new(Vec2::new(1.5, 0.0), 1.0);

        let contact = circle_vs_circle(&a, &b).expect("Should collide");
        assert!((contact.penetration - 0.5).abs() < 0.0001);
        assert_eq!(contact.normal, Vec2::X);
    }

    #[test]
    fn test_circle_vs_aabb_no_collision() {
        let circle = Circle::new(Vec2::new(5.0, 0.0), 1.0);
        assert!(circle_vs_aabb(&circle, &unit_box()).is_none());
    }

    #[test]
    fn test_circle_vs_aabb_from_above() {
        let circle = Circle::new(Vec2::new(0.0, 1.0), 1.0);

        // Closest point (0, 0.5), distance 0.5, penetration 0.5
        let contact = circle_vs_aabb(&circle, &unit_box()).expect("Should collide");
        assert!((contact.penetration - 0.5).abs() < 0.0001);
        assert_eq!(contact.normal, Vec2::Y);
    }

    #[test]
    fn test_circle_vs_aabb_touching_is_not_a_collision() {
        let circle = Circle::new(Vec2::new(0.0, 1.5), 1.0);
        assert!(circle_vs_aabb(&circle, &unit_box()).is_none());
    }

    #[test]
    fn test_circle_center_inside_aabb() {
        let wide = Aabb2D::from_center_half_extents(Vec2::ZERO, Vec2::new(10.0, 1.0));
        let circle = Circle::new(Vec2::new(0.0, 0.75), 0.5);

        // Nearest edge is the top one, 0.25 away
        let contact = circle_vs_aabb(&circle, &wide).expect("Should collide");
        assert_eq!(contact.normal, Vec2::Y);
        assert!((contact.penetration - 0.75).abs() < 0.0001);
    }

    #[test]
    fn test_aabb_vs_aabb() {
        let a = Aabb2D::from_center_half_extents(Vec2::ZERO, Vec2::new(1.0, 1.0));
        let b = Aabb2D::from_center_half_extents(Vec2::new(1.5, 0.0), Vec2::new(1.0, 1.0));

        let contact = aabb_vs_aabb(&a, &b).expect("Should collide");
        assert!((contact.penetration - 0.5).abs() < 0.0001);
        assert_eq!(contact.normal, -Vec2::X);

        let far = Aabb2D::from_center_half_extents(Vec2::new(5.0, 0.0), Vec2::new(1.0, 1.0));
        assert!(aabb_vs_aabb(&a, &far).is_none());
    }

    #[test]
    fn test_collide_normal_points_from_a_to_b() {
        let ball = Collider::Circle(Circle::new(Vec2::new(0.0, 1.0), 1.0));
        let brick = Collider::Aabb(unit_box());

        // Ball sits above the brick, so a->b points down
        let contact = collide(&ball, &brick).expect("Should collide");
        assert_eq!(contact.normal, -Vec2::Y);

        let contact = collide(&brick, &ball).expect("Should collide");
        assert_eq!(contact.normal, Vec2::Y);

        let left = Collider::Aabb(Aabb2D::from_center_half_extents(Vec2::ZERO, Vec2::new(1.0, 1.0)));
        let right = Collider::Aabb(Aabb2D::from_center_half_extents(Vec2::new(1.5, 0.0), Vec2::new(1.0, 1.0)));
        assert_eq!(collide(&left, &right).expect("Should collide").normal, Vec2::X);
    }
}
