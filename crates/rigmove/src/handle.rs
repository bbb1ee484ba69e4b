//! Gizmo widget identity and its grabbable sub-parts.

use crate::constraint::DragConstraint;

/// Opaque identifier for a spawned gizmo widget, issued by the host scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandleId(pub u64);

/// A grabbable sub-part of the gizmo widget. Each part knows which
/// constraint it activates, so hit handling never compares tag strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlePart {
    AxisX,
    AxisY,
    AxisZ,
    PlaneXY,
    PlaneYZ,
    PlaneXZ,
}

impl HandlePart {
    pub const ALL: [HandlePart; 6] = [
        HandlePart::AxisX,
        HandlePart::AxisY,
        HandlePart::AxisZ,
        HandlePart::PlaneXY,
        HandlePart::PlaneYZ,
        HandlePart::PlaneXZ,
    ];

    /// Constraint this sub-part activates when grabbed.
    pub fn constraint(self) -> DragConstraint {
        match self {
            Self::AxisX => DragConstraint::X,
            Self::AxisY => DragConstraint::Y,
            Self::AxisZ => DragConstraint::Z,
            Self::PlaneXY => DragConstraint::PlaneXY,
            Self::PlaneYZ => DragConstraint::PlaneYZ,
            Self::PlaneXZ => DragConstraint::PlaneXZ,
        }
    }
}
