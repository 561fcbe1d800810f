//! Advisory checks over the dependency edges of a backlog graph.
//!
//! Nothing here rejects a graph. Export tolerates every condition reported
//! below: unknown references and self references are skipped by the linker,
//! duplicate ids keep their first registration, and cycles are linked as-is.
//! Callers surface the findings as warnings before exporting.

use crate::BacklogGraph;

use std::collections::{BTreeSet, HashMap, HashSet, VecDeque};
use std::fmt;

use serde::Serialize;

/// A `story -> dependency` edge as declared on a story.
#[derive(Debug, Clone, Serialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DependencyRef {
    pub story_id: String,
    pub dependency_id: String,
}

impl fmt::Display for DependencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.story_id, self.dependency_id)
    }
}

/// Closed dependency path; the first id is repeated at the end.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DependencyCycle {
    pub path: Vec<String>,
}

impl fmt::Display for DependencyCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path.join(" → "))
    }
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct DependencyDiagnostics {
    pub unknown_references: Vec<DependencyRef>,
    pub self_references: Vec<String>,
    pub duplicate_story_ids: Vec<String>,
    pub cycles: Vec<DependencyCycle>,
}

impl DependencyDiagnostics {
    pub fn analyze(graph: &BacklogGraph) -> Self {
        let mut diagnostics = Self::default();

        let mut known: HashSet<&str> = HashSet::new();
        let mut duplicates: BTreeSet<&str> = BTreeSet::new();
        for story in graph.stories() {
            if !known.insert(story.id.as_str()) {
                duplicates.insert(story.id.as_str());
            }
        }
        diagnostics.duplicate_story_ids = duplicates.into_iter().map(String::from).collect();

        // Adjacency over resolvable, non-self edges. A reused id is one node:
        // the linker resolves every story carrying it to the first remote
        // item, so a duplicate's edges leave from that same node.
        let mut edges: HashMap<&str, Vec<&str>> = HashMap::new();
        let mut order: Vec<&str> = Vec::new();
        for story in graph.stories() {
            if !edges.contains_key(story.id.as_str()) {
                order.push(story.id.as_str());
            }
            let targets = edges.entry(story.id.as_str()).or_default();

            for dep in &story.dependencies {
                if dep == &story.id {
                    diagnostics.self_references.push(story.id.clone());
                } else if !known.contains(dep.as_str()) {
                    diagnostics.unknown_references.push(DependencyRef {
                        story_id: story.id.clone(),
                        dependency_id: dep.clone(),
                    });
                } else {
                    targets.push(dep.as_str());
                }
            }
        }

        let mut seen_cycles: HashSet<Vec<String>> = HashSet::new();
        for start in order {
            if let Some(path) = find_cycle_from(start, &edges) {
                let key = canonical_rotation(&path);
                if seen_cycles.insert(key) {
                    diagnostics.cycles.push(DependencyCycle { path });
                }
            }
        }

        diagnostics
    }

    pub fn is_clean(&self) -> bool {
        self.unknown_references.is_empty()
            && self.self_references.is_empty()
            && self.duplicate_story_ids.is_empty()
            && self.cycles.is_empty()
    }

    /// One human-readable line per finding.
    pub fn warnings(&self) -> Vec<String> {
        let mut lines = Vec::new();
        for reference in &self.unknown_references {
            lines.push(format!(
                "Story {} depends on unknown story {}; the link will be skipped",
                reference.story_id, reference.dependency_id
            ));
        }
        for id in &self.self_references {
            lines.push(format!(
                "Story {id} depends on itself; the link will be skipped"
            ));
        }
        for id in &self.duplicate_story_ids {
            lines.push(format!(
                "Story id {id} is used more than once; dependencies resolve to the first occurrence"
            ));
        }
        for cycle in &self.cycles {
            lines.push(format!("Circular dependency detected: {cycle}"));
        }
        lines
    }
}

/// BFS from `start` along dependency edges until `start` is reached again.
fn find_cycle_from(start: &str, edges: &HashMap<&str, Vec<&str>>) -> Option<Vec<String>> {
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();
    let mut parent_map: HashMap<&str, &str> = HashMap::new();

    queue.push_back(start);
    visited.insert(start);

    while let Some(current) = queue.pop_front() {
        for &next in edges.get(current).into_iter().flatten() {
            if next == start {
                let mut path = vec![current];
                let mut node = current;
                while let Some(&parent) = parent_map.get(node) {
                    path.push(parent);
                    node = parent;
                }
                path.reverse();
                path.push(start);
                return Some(path.into_iter().map(String::from).collect());
            }

            if visited.insert(next) {
                parent_map.insert(next, current);
                queue.push_back(next);
            }
        }
    }

    None
}

/// Rotate the open part of a cycle so its smallest id comes first.
fn canonical_rotation(path: &[String]) -> Vec<String> {
    let open = &path[..path.len().saturating_sub(1)];
    let Some(min_index) = open
        .iter()
        .enumerate()
        .min_by(|a, b| a.1.cmp(b.1))
        .map(|(index, _)| index)
    else {
        return Vec::new();
    };

    open[min_index..]
        .iter()
        .chain(open[..min_index].iter())
        .cloned()
        .collect()
}
