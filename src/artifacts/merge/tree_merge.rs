use crate::artifacts::objects::commit::CommitTree;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{BTreeMap, BTreeSet};

const OURS_MARKER: &str = "\n<<<<<<<<<<<<<<<<<<<<<<<<<<<<<HEAD\n";
const SEPARATOR_MARKER: &str = "\n===========================\n";
const THEIRS_MARKER: &str = "\n>>>>>>>>>>>>>>>>>>>>>>>>>>>";

/// How one filename is resolved when merging a branch into HEAD
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Same digest on both sides
    Unchanged(ObjectId),
    /// Only the merged branch has the file
    Theirs(ObjectId),
    /// Only HEAD has the file
    Ours(ObjectId),
    /// Both sides have the file with different content
    Conflict { ours: ObjectId, theirs: ObjectId },
}

#[derive(Debug, Clone, Default)]
pub struct TreeMerge {
    resolutions: BTreeMap<String, Resolution>,
}

impl TreeMerge {
    /// Classify every filename in the union of both snapshots
    pub fn compute(ours: &CommitTree, theirs: &CommitTree) -> Self {
        let names = ours.keys().chain(theirs.keys()).collect::<BTreeSet<_>>();

        let resolutions = names
            .into_iter()
            .filter_map(|name| {
                let resolution = match (ours.get(name), theirs.get(name)) {
                    (Some(ours), Some(theirs)) if ours == theirs => {
                        Resolution::Unchanged(ours.clone())
                    }
                    (Some(ours), Some(theirs)) => Resolution::Conflict {
                        ours: ours.clone(),
                        theirs: theirs.clone(),
                    },
                    (None, Some(theirs)) => Resolution::Theirs(theirs.clone()),
                    (Some(ours), None) => Resolution::Ours(ours.clone()),
                    (None, None) => return None,
                };
                Some((name.clone(), resolution))
            })
            .collect();

        Self { resolutions }
    }

    pub fn resolutions(&self) -> &BTreeMap<String, Resolution> {
        &self.resolutions
    }

    pub fn conflicts(&self) -> impl Iterator<Item = (&String, &ObjectId, &ObjectId)> {
        self.resolutions
            .iter()
            .filter_map(|(name, resolution)| match resolution {
                Resolution::Conflict { ours, theirs } => Some((name, ours, theirs)),
                _ => None,
            })
    }

    pub fn has_conflicts(&self) -> bool {
        self.conflicts().next().is_some()
    }
}

/// Render both versions of a conflicted file between markers
pub fn render_conflict(ours: &[u8], theirs: &[u8], branch_name: &str) -> Vec<u8> {
    let mut content = Vec::with_capacity(ours.len() + theirs.len() + 128);

    content.extend_from_slice(OURS_MARKER.as_bytes());
    content.extend_from_slice(ours);
    content.extend_from_slice(SEPARATOR_MARKER.as_bytes());
    content.extend_from_slice(theirs);
    content.extend_from_slice(THEIRS_MARKER.as_bytes());
    content.extend_from_slice(branch_name.as_bytes());
    content.push(b'\n');

    content
}
