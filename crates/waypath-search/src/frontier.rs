//! Sorted-array priority records shared by Dijkstra and A*.
//!
//! Both searches keep one [`Record`] per graph vertex in a single array,
//! partitioned into a settled prefix (finalized, never reordered again)
//! and a frontier suffix kept sorted ascending by priority key. Settling
//! the head relaxes its outgoing edges and re-sorts the suffix.

use std::collections::VecDeque;

use waypath_core::Graph;

use crate::SearchError;

/// One priority record per graph vertex.
///
/// `cumulative` is `None` until the vertex is first reached; that tagged
/// state sorts after every reached record, with no sentinel arithmetic and
/// no overflow when the heuristic is added for ordering. `order` is the
/// vertex insertion index, used as a stable tie-break so equal keys never
/// depend on incidental memory layout.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Record {
    pub(crate) vertex: usize,
    pub(crate) cumulative: Option<u64>,
    pub(crate) heuristic: u64,
    pub(crate) via: Option<usize>,
    pub(crate) order: usize,
}

impl Record {
    /// Priority key: reached before unreached, then cumulative weight plus
    /// heuristic, then insertion order.
    fn key(&self) -> (bool, u64, usize) {
        match self.cumulative {
            Some(g) => (false, g + self.heuristic, self.order),
            None => (true, 0, self.order),
        }
    }
}

/// The record array of a single search call.
pub(crate) struct Frontier {
    records: Vec<Record>,
    settled: usize,
}

impl Frontier {
    /// Build one record per vertex with `estimate` supplying each vertex's
    /// heuristic toward the target (identically zero for uniform-cost
    /// search), and sort the whole array so the start is the first head.
    pub(crate) fn new(graph: &Graph, start: usize, estimate: impl Fn(usize) -> u64) -> Self {
        let mut records: Vec<Record> = (0..graph.len())
            .map(|i| Record {
                vertex: i,
                cumulative: (i == start).then_some(0),
                heuristic: estimate(i),
                via: None,
                order: i,
            })
            .collect();
        records.sort_unstable_by_key(Record::key);
        Self {
            records,
            settled: 0,
        }
    }

    /// The current frontier head, or `None` when every record is settled.
    pub(crate) fn head(&self) -> Option<Record> {
        self.records.get(self.settled).copied()
    }

    /// Relax every outgoing edge of the frontier head, advance the settled
    /// boundary past it, and restore frontier order.
    ///
    /// Must only be called while [`head`](Self::head) is a reached record.
    pub(crate) fn settle_head(&mut self, graph: &Graph) {
        let head = self.records[self.settled];
        let Some(head_g) = head.cumulative else {
            self.settled += 1;
            return;
        };

        for edge in graph.vertex(head.vertex).edges() {
            // The edge straight back to the predecessor can never improve.
            if head.via == Some(edge.dest()) {
                continue;
            }
            let tentative = head_g + u64::from(edge.weight());

            // Only unsettled records may be relaxed; the settled prefix is
            // final. The head itself only matches on a self-loop, which the
            // improvement test rejects.
            for rec in &mut self.records[self.settled..] {
                if rec.vertex != edge.dest() {
                    continue;
                }
                if rec.cumulative.is_none_or(|g| tentative < g) {
                    rec.cumulative = Some(tentative);
                    rec.via = Some(head.vertex);
                }
                break;
            }
        }

        self.settled += 1;
        let settled = self.settled;
        self.records[settled..].sort_unstable_by_key(Record::key);
    }

    /// Reconstruct the identifier path ending at the current head by
    /// walking `via` links backward through the settled records.
    ///
    /// A walk that does not end on a record without predecessor means the
    /// chain is broken, which is reported as [`SearchError::NoPath`].
    pub(crate) fn reconstruct(&self, graph: &Graph) -> Result<Vec<String>, SearchError> {
        let target = &self.records[self.settled];
        let mut path = VecDeque::new();
        path.push_front(graph.vertex(target.vertex).id().to_owned());
        let mut via = target.via;

        for rec in self.records[..self.settled].iter().rev() {
            if via == Some(rec.vertex) {
                path.push_front(graph.vertex(rec.vertex).id().to_owned());
                via = rec.via;
            }
        }

        if via.is_some() {
            return Err(SearchError::NoPath);
        }
        Ok(path.into())
    }
}
