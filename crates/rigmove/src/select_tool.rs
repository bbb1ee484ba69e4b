//! Press-time selection transitions and the group pivot.
//!
//! Selection only ever changes on pointer press; release is handled by
//! the move tool alone.

use glam::Vec3;
use tracing::debug;

use crate::host::{ObjectId, PointerHit, SceneOps};
use crate::math_utils::centroid;
use crate::selection::SelectionManager;

/// Apply one pointer press to the selection. Returns true when membership
/// changed (the caller then refreshes the pivot and the gizmo widget).
///
/// Presses on empty space leave the selection untouched. With the modifier
/// held the hit object's membership is toggled; without it the hit object
/// becomes the sole selection, except that re-clicking an already sole
/// selected object deselects it.
pub fn handle_press(
    selection: &mut SelectionManager,
    scene: &mut dyn SceneOps,
    hit: &PointerHit,
    modifier: bool,
) -> bool {
    if !hit.blocking {
        return false;
    }
    let Some(object) = hit.object else {
        return false;
    };

    if modifier {
        if selection.toggle_selection(object) {
            scene.set_highlight(object, true);
            debug!(?object, "added to selection");
        } else {
            scene.set_highlight(object, false);
            debug!(?object, "removed from selection");
        }
        return true;
    }

    if selection.selection_count() == 1 && selection.is_selected(object) {
        scene.set_highlight(object, false);
        selection.clear();
        debug!(?object, "sole selection deselected");
        return true;
    }

    for &previous in selection.get_selected() {
        scene.set_highlight(previous, false);
    }
    selection.select(object);
    scene.set_highlight(object, true);
    debug!(?object, "selection replaced");
    true
}

/// Group pivot: centroid of the selection's current positions. Objects the
/// scene no longer knows are ignored.
pub fn group_pivot(selection: &SelectionManager, scene: &dyn SceneOps) -> Vec3 {
    let positions: Vec<Vec3> = selection
        .get_selected()
        .iter()
        .filter_map(|&id| scene.position(id))
        .collect();
    centroid(&positions)
}
