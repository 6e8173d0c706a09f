use crate::areas::database::Database;
use crate::artifacts::objects::commit::Commit;
use crate::artifacts::objects::object_id::ObjectId;
use std::collections::{HashSet, VecDeque};
use tracing::debug;

/// Breadth-first iterator over the commit graph
///
/// A commit is queued at most once, so diamond-shaped histories (and even
/// malformed cyclic ones) are visited a single time per commit.
pub struct RevList<'r> {
    database: &'r Database,
    queue: VecDeque<ObjectId>,
    visited: HashSet<ObjectId>,
    follow_merged_parents: bool,
}

impl<'r> RevList<'r> {
    pub fn new(
        database: &'r Database,
        start: Option<ObjectId>,
        follow_merged_parents: bool,
    ) -> Self {
        let mut rev_list = Self {
            database,
            queue: VecDeque::new(),
            visited: HashSet::new(),
            follow_merged_parents,
        };

        if let Some(start) = start {
            rev_list.enqueue(start);
        }

        rev_list
    }

    fn enqueue(&mut self, oid: ObjectId) {
        if self.visited.insert(oid.clone()) {
            self.queue.push_back(oid);
        }
    }

    /// Every blob digest referenced by any commit reachable from the start
    pub fn ancestry_digests(self) -> anyhow::Result<HashSet<ObjectId>> {
        let mut digests = HashSet::new();

        for entry in self {
            let (_, commit) = entry?;
            digests.extend(commit.tree().values().cloned());
        }

        Ok(digests)
    }
}

impl Iterator for RevList<'_> {
    type Item = anyhow::Result<(ObjectId, Commit)>;

    fn next(&mut self) -> Option<Self::Item> {
        let oid = self.queue.pop_front()?;

        match self.database.load_commit(&oid) {
            Ok(commit) => {
                debug!(%oid, "visiting commit");

                if let Some(parent) = commit.parent() {
                    self.enqueue(parent.clone());
                }
                if self.follow_merged_parents
                    && let Some(merged_parent) = commit.merged_parent()
                {
                    self.enqueue(merged_parent.clone());
                }

                Some(Ok((oid, commit)))
            }
            Err(err) => {
                // stop the walk after surfacing the failure
                self.queue.clear();
                Some(Err(err))
            }
        }
    }
}
