//! Drag constraints: which subspace a grab allows the group to move in,
//! which plane the cursor ray is solved against, and how a free-space
//! delta is projected back into the allowed subspace.
//!
//! Coordinate convention: X forward, Y right, Z up.

use glam::Vec3;

/// World up in this crate's convention.
pub const WORLD_UP: Vec3 = Vec3::Z;

/// Below this squared length a computed plane normal counts as degenerate
/// (camera looking straight down the drag axis).
const DEGENERATE_NORMAL_EPSILON: f32 = 1e-4;

/// The movement subspace selected by the gizmo sub-part under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragConstraint {
    X,
    Y,
    Z,
    PlaneXY,
    PlaneYZ,
    PlaneXZ,
}

impl DragConstraint {
    /// The constrained axis, or the normal axis for a plane constraint.
    pub fn axis(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
            Self::PlaneXY => Vec3::Z,
            Self::PlaneYZ => Vec3::X,
            Self::PlaneXZ => Vec3::Y,
        }
    }

    pub fn is_plane(self) -> bool {
        matches!(self, Self::PlaneXY | Self::PlaneYZ | Self::PlaneXZ)
    }

    /// Unit normal of the drag plane for this constraint, computed once at
    /// drag start and held fixed for the whole session.
    ///
    /// For an axis constraint the plane contains the axis and faces the
    /// viewer: cross(axis, camera forward). A plane constraint is its own
    /// drag surface. When the cross product degenerates (camera aligned
    /// with the axis) the normal falls back to world up.
    pub fn drag_plane_normal(self, camera_forward: Vec3) -> Vec3 {
        let normal = if self.is_plane() {
            self.axis()
        } else {
            self.axis().cross(camera_forward)
        };

        if normal.length_squared() < DEGENERATE_NORMAL_EPSILON {
            return WORLD_UP;
        }
        normal.normalize()
    }

    /// Project a free-space delta onto the allowed subspace: the axis
    /// component for an axis constraint, everything but the normal
    /// component for a plane constraint.
    pub fn project(self, delta: Vec3) -> Vec3 {
        let axis = self.axis();
        if self.is_plane() {
            delta - axis * delta.dot(axis)
        } else {
            axis * delta.dot(axis)
        }
    }
}
