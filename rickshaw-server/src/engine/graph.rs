//! Stand connectivity graph and shortest-path search.
//!
//! The graph is directed: a connection from A to B says nothing about
//! travel from B to A, since shared-auto corridors often run one way or
//! carry different fares in each direction.

use std::collections::HashMap;

use crate::domain::{Point, Stand, StandConnection, StandId};

/// One directed edge out of a stand.
#[derive(Debug, Clone)]
pub struct StandEdge {
    pub to: StandId,
    pub distance_km: f64,
    pub travel_time_minutes: f64,
    pub fare: f64,
}

/// A stand plus its outgoing edges.
#[derive(Debug, Clone)]
pub struct StandNode {
    pub id: StandId,
    pub name: String,
    pub location: Point,
    edges: Vec<StandEdge>,
}

/// Directed graph over auto stands.
#[derive(Debug, Clone)]
pub struct StandGraph {
    nodes: HashMap<StandId, StandNode>,
    // Insertion order of the stands; keeps path search deterministic.
    order: Vec<StandId>,
}

impl StandGraph {
    /// Build a graph from stands and the connections among them.
    ///
    /// Connections whose endpoints are not both in `stands` are dropped.
    pub fn build(stands: &[Stand], connections: &[StandConnection]) -> Self {
        let mut nodes = HashMap::with_capacity(stands.len());
        let mut order = Vec::with_capacity(stands.len());

        for stand in stands {
            if nodes.contains_key(&stand.id) {
                continue;
            }
            order.push(stand.id.clone());
            nodes.insert(
                stand.id.clone(),
                StandNode {
                    id: stand.id.clone(),
                    name: stand.name.clone(),
                    location: stand.location,
                    edges: Vec::new(),
                },
            );
        }

        for conn in connections {
            if !nodes.contains_key(&conn.to_stand_id) {
                continue;
            }
            if let Some(node) = nodes.get_mut(&conn.from_stand_id) {
                node.edges.push(StandEdge {
                    to: conn.to_stand_id.clone(),
                    distance_km: conn.distance_km,
                    travel_time_minutes: conn.travel_time_minutes,
                    fare: conn.fare,
                });
            }
        }

        Self { nodes, order }
    }

    /// Number of stands in the graph.
    pub fn node_count(&self) -> usize {
        self.order.len()
    }

    /// Look up a stand by id.
    pub fn node(&self, id: &StandId) -> Option<&StandNode> {
        self.nodes.get(id)
    }

    /// Look up the edge from one stand to another, if any.
    pub fn edge(&self, from: &StandId, to: &StandId) -> Option<&StandEdge> {
        self.nodes
            .get(from)
            .and_then(|n| n.edges.iter().find(|e| &e.to == to))
    }

    /// Shortest path from `start` to `end` by total travel time.
    ///
    /// Returns the stand ids along the path, endpoints included. An empty
    /// vector means no path: either endpoint is missing from the graph or
    /// `end` is unreachable. `start == end` yields a single-element path
    /// when the stand exists.
    pub fn shortest_path(&self, start: &StandId, end: &StandId) -> Vec<StandId> {
        if !self.nodes.contains_key(start) || !self.nodes.contains_key(end) {
            return Vec::new();
        }
        if start == end {
            return vec![start.clone()];
        }

        let mut dist: HashMap<&StandId, f64> = HashMap::with_capacity(self.order.len());
        let mut prev: HashMap<&StandId, &StandId> = HashMap::new();
        let mut settled: HashMap<&StandId, bool> = HashMap::new();

        dist.insert(start, 0.0);

        loop {
            // Pick the unsettled node with the smallest tentative distance,
            // scanning in insertion order so ties resolve deterministically.
            let mut current: Option<&StandId> = None;
            let mut best = f64::INFINITY;
            for id in &self.order {
                if settled.get(id).copied().unwrap_or(false) {
                    continue;
                }
                if let Some(&d) = dist.get(id) {
                    if d < best {
                        best = d;
                        current = Some(id);
                    }
                }
            }

            let Some(current) = current else {
                // Remaining nodes are unreachable.
                return Vec::new();
            };

            if current == end {
                break;
            }

            settled.insert(current, true);

            let node = &self.nodes[current];
            for edge in &node.edges {
                let next = self
                    .nodes
                    .get_key_value(&edge.to)
                    .map(|(k, _)| k)
                    .unwrap_or(&edge.to);
                if settled.get(next).copied().unwrap_or(false) {
                    continue;
                }
                let candidate = best + edge.travel_time_minutes;
                if candidate < dist.get(next).copied().unwrap_or(f64::INFINITY) {
                    dist.insert(next, candidate);
                    prev.insert(next, current);
                }
            }
        }

        // Walk predecessors back from the end.
        let mut path = vec![end.clone()];
        let mut cursor = end;
        while let Some(&p) = prev.get(cursor) {
            path.push(p.clone());
            cursor = p;
        }
        path.reverse();

        debug_assert_eq!(path.first(), Some(start));
        path
    }
}
