//! Playlist nesting depth from flat parent-pointer metadata

use crate::diag::HierarchyError;
use crate::model::PlaylistDescriptor;

/// Number of ancestors between a playlist and its root
///
/// Follows parent persistent-ID links until reaching a descriptor with no
/// parent. Traversal is bounded by the descriptor count, so a cyclic chain
/// errors out instead of looping forever.
pub fn ancestor_depth(
    descriptor: &PlaylistDescriptor,
    all: &[PlaylistDescriptor],
) -> Result<usize, HierarchyError> {
    let mut depth = 0;
    let mut current = descriptor;

    while let Some(parent_id) = current.parent_id.as_deref() {
        if depth >= all.len() {
            return Err(HierarchyError::ParentCycle {
                playlist: descriptor.name.clone(),
            });
        }

        current = all
            .iter()
            .find(|candidate| candidate.persistent_id == parent_id)
            .ok_or_else(|| HierarchyError::BrokenParentLink {
                playlist: descriptor.name.clone(),
                parent_id: parent_id.to_string(),
            })?;

        depth += 1;
    }

    Ok(depth)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn descriptor(name: &str, persistent_id: &str, parent_id: Option<&str>) -> PlaylistDescriptor {
        PlaylistDescriptor {
            name: name.to_string(),
            persistent_id: persistent_id.to_string(),
            parent_id: parent_id.map(str::to_string),
            is_folder: false,
            is_smart: false,
            members: Vec::new(),
        }
    }

    #[test]
    fn test_root_has_depth_zero() {
        let all = vec![descriptor("Root", "A", None)];
        assert_eq!(ancestor_depth(&all[0], &all), Ok(0));
    }

    #[test]
    fn test_depth_counts_hops_to_root() {
        let all = vec![
            descriptor("Root", "A", None),
            descriptor("Mid", "B", Some("A")),
            descriptor("Leaf", "C", Some("B")),
        ];
        assert_eq!(ancestor_depth(&all[1], &all), Ok(1));
        assert_eq!(ancestor_depth(&all[2], &all), Ok(2));
    }

    #[test]
    fn test_broken_parent_link() {
        let all = vec![descriptor("Orphan", "A", Some("MISSING"))];
        assert_eq!(
            ancestor_depth(&all[0], &all),
            Err(HierarchyError::BrokenParentLink {
                playlist: "Orphan".to_string(),
                parent_id: "MISSING".to_string(),
            })
        );
    }

    #[test]
    fn test_cycle_is_detected() {
        let all = vec![
            descriptor("One", "A", Some("B")),
            descriptor("Two", "B", Some("A")),
        ];
        assert_eq!(
            ancestor_depth(&all[0], &all),
            Err(HierarchyError::ParentCycle {
                playlist: "One".to_string(),
            })
        );
    }
}
