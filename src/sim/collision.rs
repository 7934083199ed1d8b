//! Collision detection and response for axis-aligned geometry
//!
//! Resolution is sign-based: the direction a body is pushed out is taken from
//! the sign of its velocity on the axis being resolved, not from penetration
//! depth. A body with zero velocity on an axis is never pushed along it, and a
//! body fast enough to jump past a thin platform in one step tunnels through.

use super::rect::{Bounded, Rect};

/// What vertical resolution did to the body
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalContact {
    /// No overlap, or zero vertical velocity
    None,
    /// Falling body was placed on top of geometry
    Landed,
    /// Rising body was placed under geometry
    HeadBump,
}

impl VerticalContact {
    /// Whether the body touched geometry this step (vertical speed must reset)
    pub fn touched(self) -> bool {
        self != VerticalContact::None
    }
}

/// All solids whose rectangle overlaps `body`
pub fn overlapping<'a, T: Bounded>(body: &Rect, solids: &'a [T]) -> impl Iterator<Item = &'a T> {
    let body = *body;
    solids.iter().filter(move |s| s.bounds().overlaps(&body))
}

/// Whether `body` overlaps any solid
pub fn any_overlap<T: Bounded>(body: &Rect, solids: &[T]) -> bool {
    overlapping(body, solids).next().is_some()
}

/// Push `body` out of overlapping solids along x, based on the sign of `vx`
///
/// Returns true if the body was moved.
pub fn resolve_horizontal<T: Bounded>(body: &mut Rect, vx: f32, solids: &[T]) -> bool {
    if vx > 0.0 {
        let wall = overlapping(body, solids)
            .map(|s| s.bounds().left())
            .reduce(f32::min);
        if let Some(left) = wall {
            body.set_right(left);
            return true;
        }
    } else if vx < 0.0 {
        let wall = overlapping(body, solids)
            .map(|s| s.bounds().right())
            .reduce(f32::max);
        if let Some(right) = wall {
            body.set_left(right);
            return true;
        }
    }
    false
}

/// Push `body` out of overlapping solids along y, based on the sign of `vy`
pub fn resolve_vertical<T: Bounded>(body: &mut Rect, vy: f32, solids: &[T]) -> VerticalContact {
    if vy > 0.0 {
        let floor = overlapping(body, solids)
            .map(|s| s.bounds().top())
            .reduce(f32::min);
        if let Some(top) = floor {
            body.set_bottom(top);
            return VerticalContact::Landed;
        }
    } else if vy < 0.0 {
        let ceiling = overlapping(body, solids)
            .map(|s| s.bounds().bottom())
            .reduce(f32::max);
        if let Some(bottom) = ceiling {
            body.set_top(bottom);
            return VerticalContact::HeadBump;
        }
    }
    VerticalContact::None
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn wall() -> Vec<Rect> {
        vec![Rect::new(100.0, 0.0, 50.0, 100.0)]
    }

    #[test]
    fn test_overlapping_returns_only_hits() {
        let solids = vec![
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
            Rect::new(50.0, 50.0, 10.0, 10.0),
        ];
        let body = Rect::new(8.0, 8.0, 4.0, 4.0);
        let hits: Vec<_> = overlapping(&body, &solids).collect();
        assert_eq!(hits.len(), 2);
        assert!(!hits.contains(&&solids[2]));
    }

    #[test]
    fn test_moving_right_snaps_to_left_edge() {
        let mut body = Rect::new(75.0, 10.0, 30.0, 40.0);
        assert!(resolve_horizontal(&mut body, 5.0, &wall()));
        assert_eq!(body.right(), 100.0);
    }

    #[test]
    fn test_moving_left_snaps_to_right_edge() {
        let mut body = Rect::new(145.0, 10.0, 30.0, 40.0);
        assert!(resolve_horizontal(&mut body, -5.0, &wall()));
        assert_eq!(body.left(), 150.0);
    }

    #[test]
    fn test_zero_velocity_overlap_left_alone() {
        let mut body = Rect::new(110.0, 10.0, 30.0, 40.0);
        let before = body;
        assert!(!resolve_horizontal(&mut body, 0.0, &wall()));
        assert_eq!(
            resolve_vertical(&mut body, 0.0, &wall()),
            VerticalContact::None
        );
        assert_eq!(body, before);
    }

    #[test]
    fn test_falling_lands_on_top() {
        let floor = vec![Rect::new(0.0, 360.0, 800.0, 40.0)];
        let mut body = Rect::new(50.0, 322.5, 30.0, 40.0);
        assert_eq!(
            resolve_vertical(&mut body, 2.5, &floor),
            VerticalContact::Landed
        );
        assert_eq!(body.bottom(), 360.0);
    }

    #[test]
    fn test_rising_bumps_head() {
        let ceiling = vec![Rect::new(0.0, 200.0, 100.0, 20.0)];
        let mut body = Rect::new(50.0, 215.0, 30.0, 40.0);
        assert_eq!(
            resolve_vertical(&mut body, -8.0, &ceiling),
            VerticalContact::HeadBump
        );
        assert_eq!(body.top(), 220.0);
    }

    #[test]
    fn test_fast_body_tunnels_through_thin_platform() {
        let thin = vec![Rect::new(0.0, 200.0, 100.0, 5.0)];
        // One step carried the body from above the platform to fully below it
        let mut body = Rect::new(10.0, 210.0, 30.0, 40.0);
        assert_eq!(
            resolve_vertical(&mut body, 60.0, &thin),
            VerticalContact::None
        );
        assert_eq!(body.top(), 210.0);
    }

    fn rect_strategy() -> impl Strategy<Value = Rect> {
        (-200i32..200, -200i32..200, 1i32..120, 1i32..120)
            .prop_map(|(x, y, w, h)| Rect::new(x as f32, y as f32, w as f32, h as f32))
    }

    proptest! {
        #[test]
        fn prop_horizontal_resolution_clears_hit_set(
            body in rect_strategy(),
            solids in prop::collection::vec(rect_strategy(), 0..8),
            vx in prop_oneof![-10i32..=-1, 1i32..=10],
        ) {
            let hits: Vec<Rect> = overlapping(&body, &solids).copied().collect();
            let mut body = body;
            resolve_horizontal(&mut body, vx as f32, &solids);
            for hit in &hits {
                prop_assert!(!body.overlaps(hit));
            }
        }

        #[test]
        fn prop_vertical_resolution_clears_hit_set(
            body in rect_strategy(),
            solids in prop::collection::vec(rect_strategy(), 0..8),
            vy in prop_oneof![-10i32..=-1, 1i32..=10],
        ) {
            let hits: Vec<Rect> = overlapping(&body, &solids).copied().collect();
            let mut body = body;
            let contact = resolve_vertical(&mut body, vy as f32, &solids);
            prop_assert_eq!(contact.touched(), !hits.is_empty());
            for hit in &hits {
                prop_assert!(!body.overlaps(hit));
            }
        }
    }
}
