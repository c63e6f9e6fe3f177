//! Swept-AABB collision math
//!
//! Time-of-impact test for a moving axis-aligned box against a stationary
//! one, accounting for the whole frame's motion so fast movers cannot
//! tunnel through thin geometry. Times are normalized to [0, 1] fractions
//! of the frame's displacement.

use crate::foundation::math::Vec3;

/// Axis-aligned box in center / half-extents form
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Center of the box
    pub center: Vec3,
    /// Half-extents per axis
    pub half_extents: Vec3,
}

impl Aabb {
    /// Create a box from its center and half-extents
    pub fn new(center: Vec3, half_extents: Vec3) -> Self {
        Self {
            center,
            half_extents,
        }
    }

    /// Minimum corner
    pub fn min(&self) -> Vec3 {
        self.center - self.half_extents
    }

    /// Maximum corner
    pub fn max(&self) -> Vec3 {
        self.center + self.half_extents
    }

    /// Static overlap test on all three axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        let (a_min, a_max) = (self.min(), self.max());
        let (b_min, b_max) = (other.min(), other.max());
        a_max.x >= b_min.x
            && b_max.x >= a_min.x
            && a_max.y >= b_min.y
            && b_max.y >= a_min.y
            && a_max.z >= b_min.z
            && b_max.z >= a_min.z
    }
}

/// Result of an accepted sweep: when contact begins and the contact normal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SweepHit {
    /// Fraction of the displacement at which the boxes first touch, in [0, 1]
    pub entry_time: f32,
    /// Contact normal pointing against the direction of approach.
    ///
    /// Each axis whose entry time ties the overall maximum contributes a
    /// ±1 component, so a perfect corner hit yields a multi-axis normal;
    /// the slide response then cancels motion on every tying axis.
    pub normal: Vec3,
}

/// Broadphase volume spanning a box's current and displaced positions.
///
/// Extended only along axes with nonzero displacement, and only in the
/// direction of motion on each axis.
pub fn broadphase_volume(current: &Aabb, displacement: Vec3) -> Aabb {
    let mut min = current.min();
    let mut max = current.max();
    for axis in 0..3 {
        if displacement[axis] > 0.0 {
            max[axis] += displacement[axis];
        } else {
            min[axis] += displacement[axis];
        }
    }
    Aabb {
        center: (min + max) / 2.0,
        half_extents: (max - min) / 2.0,
    }
}

/// Swept-AABB time-of-impact test.
///
/// `moving` travels by `displacement` over the frame; `target` is treated
/// as stationary. Returns `None` when the boxes never come into contact
/// within the frame's motion window.
///
/// Per axis: the entry (exit) time is the signed distance from the moving
/// box's near (far) face to the target's far (near) face, divided by the
/// displacement on that axis. A zero displacement on an axis contributes
/// explicit -infinity / +infinity sentinels rather than relying on IEEE
/// division behavior, so a stationary axis never constrains the result on
/// its own. Contact requires simultaneous overlap on all three axes, so the
/// overall entry is the maximum across axes and the overall exit the
/// minimum.
pub fn sweep_aabb(moving: &Aabb, displacement: Vec3, target: &Aabb) -> Option<SweepHit> {
    let (a_min, a_max) = (moving.min(), moving.max());
    let (b_min, b_max) = (target.min(), target.max());

    let mut entry = Vec3::zeros();
    let mut exit = Vec3::zeros();

    for axis in 0..3 {
        let d = displacement[axis];
        // Signed distances the moving box must cover before its leading
        // face first touches (entry) and its trailing face last touches
        // (exit) the target on this axis.
        let (entry_distance, exit_distance) = if d > 0.0 {
            (b_min[axis] - a_max[axis], b_max[axis] - a_min[axis])
        } else {
            (b_max[axis] - a_min[axis], b_min[axis] - a_max[axis])
        };
        if d == 0.0 {
            entry[axis] = f32::NEG_INFINITY;
            exit[axis] = f32::INFINITY;
        } else {
            entry[axis] = entry_distance / d;
            exit[axis] = exit_distance / d;
        }
    }

    let entry_time = entry.x.max(entry.y).max(entry.z);
    let exit_time = exit.x.min(exit.y).min(exit.z);

    // Reject: axes never overlap simultaneously, motion is entirely away
    // from the target, or first contact lies beyond this frame.
    if entry_time > exit_time
        || (entry.x < 0.0 && entry.y < 0.0 && entry.z < 0.0)
        || entry.x > 1.0
        || entry.y > 1.0
        || entry.z > 1.0
    {
        return None;
    }

    let mut normal = Vec3::zeros();
    for axis in 0..3 {
        if entry[axis] == entry_time {
            normal[axis] = if displacement[axis] > 0.0 { -1.0 } else { 1.0 };
        }
    }

    Some(SweepHit { entry_time, normal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn unit_box_at(x: f32, y: f32, z: f32) -> Aabb {
        Aabb::new(Vec3::new(x, y, z), Vec3::new(0.5, 0.5, 0.5))
    }

    #[test]
    fn head_on_approach_enters_at_face_contact() {
        // Gap between faces is 1.0; covering 2.0 this frame -> entry at 0.5.
        let moving = unit_box_at(0.0, 0.0, 0.0);
        let target = unit_box_at(2.0, 0.0, 0.0);
        let hit = sweep_aabb(&moving, Vec3::new(2.0, 0.0, 0.0), &target).unwrap();
        assert_relative_eq!(hit.entry_time, 0.5);
        assert_relative_eq!(hit.normal.x, -1.0);
        assert_relative_eq!(hit.normal.y, 0.0);
        assert_relative_eq!(hit.normal.z, 0.0);
    }

    #[test]
    fn negative_direction_flips_normal() {
        let moving = unit_box_at(0.0, 0.0, 0.0);
        let target = unit_box_at(-2.0, 0.0, 0.0);
        let hit = sweep_aabb(&moving, Vec3::new(-2.0, 0.0, 0.0), &target).unwrap();
        assert_relative_eq!(hit.entry_time, 0.5);
        assert_relative_eq!(hit.normal.x, 1.0);
    }

    #[test]
    fn contact_beyond_frame_is_rejected() {
        // Gap 1.0 but only 0.5 of motion this frame.
        let moving = unit_box_at(0.0, 0.0, 0.0);
        let target = unit_box_at(2.0, 0.0, 0.0);
        assert!(sweep_aabb(&moving, Vec3::new(0.5, 0.0, 0.0), &target).is_none());
    }

    #[test]
    fn receding_motion_is_rejected() {
        let moving = unit_box_at(0.0, 0.0, 0.0);
        let target = unit_box_at(2.0, 0.0, 0.0);
        assert!(sweep_aabb(&moving, Vec3::new(-1.0, 0.0, 0.0), &target).is_none());
    }

    #[test]
    fn stationary_axes_never_constrain() {
        // Offset on Y within overlap range; zero Y displacement must not
        // produce a Y constraint or a division by zero.
        let moving = Aabb::new(Vec3::new(0.0, 0.25, 0.0), Vec3::new(0.5, 0.5, 0.5));
        let target = unit_box_at(2.0, 0.0, 0.0);
        let hit = sweep_aabb(&moving, Vec3::new(2.0, 0.0, 0.0), &target).unwrap();
        assert_relative_eq!(hit.entry_time, 0.5);
        assert_relative_eq!(hit.normal.y, 0.0);
    }

    #[test]
    fn fully_stationary_box_is_rejected() {
        // Zero displacement: every axis entry is -infinity, which the
        // all-negative-entries rejection catches.
        let moving = unit_box_at(0.0, 0.0, 0.0);
        let target = unit_box_at(2.0, 0.0, 0.0);
        assert!(sweep_aabb(&moving, Vec3::zeros(), &target).is_none());
    }

    #[test]
    fn side_pass_is_rejected_by_broadphase() {
        // Passes the target to the side: Y never overlaps. The stationary
        // Y axis contributes no sweep constraint (its sentinel times span
        // everything), so it is the broadphase gate that prunes this pair.
        let moving = Aabb::new(Vec3::new(0.0, 3.0, 0.0), Vec3::new(0.5, 0.5, 0.5));
        let displacement = Vec3::new(2.0, 0.0, 0.0);
        let target = unit_box_at(2.0, 0.0, 0.0);
        assert!(!broadphase_volume(&moving, displacement).overlaps(&target));
    }

    #[test]
    fn thin_wall_is_not_tunneled() {
        // A fast mover crossing a paper-thin wall in one frame still hits.
        let moving = unit_box_at(0.0, 0.0, 0.0);
        let wall = Aabb::new(Vec3::new(10.0, 0.0, 0.0), Vec3::new(0.01, 5.0, 5.0));
        let hit = sweep_aabb(&moving, Vec3::new(100.0, 0.0, 0.0), &wall).unwrap();
        assert!(hit.entry_time > 0.0 && hit.entry_time < 1.0);
        assert_relative_eq!(hit.normal.x, -1.0);
    }

    #[test]
    fn corner_tie_accumulates_both_axes() {
        // Diagonal approach with identical gaps on X and Y.
        let moving = unit_box_at(0.0, 0.0, 0.0);
        let target = unit_box_at(2.0, 2.0, 0.0);
        let hit = sweep_aabb(&moving, Vec3::new(2.0, 2.0, 0.0), &target).unwrap();
        assert_relative_eq!(hit.entry_time, 0.5);
        assert_relative_eq!(hit.normal.x, -1.0);
        assert_relative_eq!(hit.normal.y, -1.0);
        assert_relative_eq!(hit.normal.z, 0.0);
    }

    #[test]
    fn broadphase_extends_only_along_motion() {
        let current = unit_box_at(0.0, 0.0, 0.0);
        let volume = broadphase_volume(&current, Vec3::new(2.0, -1.0, 0.0));
        assert_relative_eq!(volume.min().x, -0.5);
        assert_relative_eq!(volume.max().x, 2.5);
        assert_relative_eq!(volume.min().y, -1.5);
        assert_relative_eq!(volume.max().y, 0.5);
        assert_relative_eq!(volume.min().z, -0.5);
        assert_relative_eq!(volume.max().z, 0.5);
    }

    #[test]
    fn overlapping_swept_volumes_detect_candidates() {
        let a = unit_box_at(0.0, 0.0, 0.0);
        let b = unit_box_at(3.0, 0.0, 0.0);
        assert!(!a.overlaps(&b));
        let swept = broadphase_volume(&a, Vec3::new(3.0, 0.0, 0.0));
        assert!(swept.overlaps(&b));
    }
}
