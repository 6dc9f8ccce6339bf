use ahash::{HashMap, HashSet, HashSetExt};
use itertools::Itertools;
use serde::Serialize;

use super::{
    collections::predecessors::Predecessors,
    trace::{SearchEvent, SearchObserver},
    PathFinding,
};
use crate::{
    error::SearchError,
    graphs::{path::Path, Distance, Graph, Vertex},
};

/// Recursion depth allowed by [`dfs_recursive`].
pub const DEFAULT_RECURSION_LIMIT: usize = 4096;

/// Result of a depth-first search.
///
/// Discovery and finish times come from one counter that is incremented when
/// a vertex is discovered and again when its exploration finishes.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DfsData {
    pub visit_order: Vec<Vertex>,
    pub predecessors: Predecessors,
    pub discovery: HashMap<Vertex, u32>,
    pub finish: HashMap<Vertex, u32>,
    #[serde(skip)]
    time: u32,
}

impl DfsData {
    pub fn is_visited(&self, vertex: Vertex) -> bool {
        self.discovery.contains_key(&vertex)
    }

    /// Path from the source to `target` along the depth-first tree. This is
    /// generally not a shortest path.
    pub fn get_path(&self, target: Vertex) -> Option<Path> {
        if !self.is_visited(target) {
            return None;
        }
        let vertices = self.predecessors.path_vertices(target)?;
        let distance = vertices.len() as Distance - 1;
        Some(Path { vertices, distance })
    }

    fn discover(
        &mut self,
        vertex: Vertex,
        predecessor: Option<Vertex>,
        observer: &mut dyn SearchObserver,
    ) {
        self.time += 1;
        self.discovery.insert(vertex, self.time);
        self.visit_order.push(vertex);
        if let Some(predecessor) = predecessor {
            self.predecessors.set(vertex, predecessor);
        }
        observer.observe(SearchEvent::Discovered {
            vertex,
            predecessor,
            time: self.time,
        });
    }

    fn finish(&mut self, vertex: Vertex, observer: &mut dyn SearchObserver) {
        self.time += 1;
        self.finish.insert(vertex, self.time);
        observer.observe(SearchEvent::Finished {
            vertex,
            time: self.time,
        });
    }
}

enum Frame {
    Enter {
        vertex: Vertex,
        predecessor: Option<Vertex>,
    },
    Exit(Vertex),
}

/// Iterative depth-first search. Produces the same visit order, predecessors
/// and timestamps as [`dfs_recursive`] without using the call stack.
pub fn dfs(graph: &dyn Graph, source: Vertex) -> DfsData {
    dfs_observed(graph, source, &mut ())
}

#[tracing::instrument(skip(graph, observer))]
pub fn dfs_observed(
    graph: &dyn Graph,
    source: Vertex,
    observer: &mut dyn SearchObserver,
) -> DfsData {
    let mut data = DfsData::default();
    if !graph.contains(source) {
        tracing::debug!("source is not part of the graph");
        return data;
    }

    let mut stack = vec![Frame::Enter {
        vertex: source,
        predecessor: None,
    }];

    while let Some(frame) = stack.pop() {
        let (vertex, predecessor) = match frame {
            Frame::Exit(vertex) => {
                data.finish(vertex, observer);
                continue;
            }
            Frame::Enter {
                vertex,
                predecessor,
            } => (vertex, predecessor),
        };

        if data.is_visited(vertex) {
            continue;
        }

        data.discover(vertex, predecessor, observer);
        stack.push(Frame::Exit(vertex));

        // reversed so the first neighbor in edge order is explored first
        let unvisited = graph
            .neighbors(vertex)
            .map(|edge| edge.head())
            .filter(|head| !data.is_visited(*head))
            .collect_vec();
        stack.extend(unvisited.into_iter().rev().map(|head| Frame::Enter {
            vertex: head,
            predecessor: Some(vertex),
        }));
    }

    tracing::debug!(visited = data.visit_order.len(), "depth-first search done");
    data
}

/// Recursive depth-first search, bounded by [`DEFAULT_RECURSION_LIMIT`].
pub fn dfs_recursive(graph: &dyn Graph, source: Vertex) -> Result<DfsData, SearchError> {
    dfs_recursive_with_depth_limit(graph, source, DEFAULT_RECURSION_LIMIT)
}

/// Recursive depth-first search that refuses to recurse deeper than `limit`
/// vertices. Graphs with long paths should use [`dfs`] instead.
#[tracing::instrument(skip(graph))]
pub fn dfs_recursive_with_depth_limit(
    graph: &dyn Graph,
    source: Vertex,
    limit: usize,
) -> Result<DfsData, SearchError> {
    let mut search = RecursiveSearch {
        graph,
        limit,
        data: DfsData::default(),
    };
    if graph.contains(source) {
        search.visit(source, None, 1)?;
    }
    Ok(search.data)
}

struct RecursiveSearch<'a> {
    graph: &'a dyn Graph,
    limit: usize,
    data: DfsData,
}

impl RecursiveSearch<'_> {
    fn visit(
        &mut self,
        vertex: Vertex,
        predecessor: Option<Vertex>,
        depth: usize,
    ) -> Result<(), SearchError> {
        if depth > self.limit {
            return Err(SearchError::RecursionDepthExceeded {
                limit: self.limit,
                vertex,
            });
        }

        self.data.discover(vertex, predecessor, &mut ());

        let graph = self.graph;
        for edge in graph.neighbors(vertex) {
            if !self.data.is_visited(edge.head()) {
                self.visit(edge.head(), Some(vertex), depth + 1)?;
            }
        }

        self.data.finish(vertex, &mut ());
        Ok(())
    }
}

/// Depth-first path search. Vertices are marked when pushed, and the search
/// stops when `target` is popped. The path found is not necessarily shortest.
#[tracing::instrument(skip(graph))]
pub fn dfs_path(graph: &dyn Graph, source: Vertex, target: Vertex) -> Option<Path> {
    if !graph.contains(source) {
        return None;
    }

    let mut predecessors = Predecessors::new();
    let mut marked = HashSet::new();
    marked.insert(source);
    let mut stack = vec![source];

    while let Some(vertex) = stack.pop() {
        if vertex == target {
            let vertices = predecessors.path_vertices(target)?;
            let distance = vertices.len() as Distance - 1;
            return Some(Path { vertices, distance });
        }

        let unmarked = graph
            .neighbors(vertex)
            .map(|edge| edge.head())
            .filter(|head| !marked.contains(head))
            .unique()
            .collect_vec();
        for head in unmarked.into_iter().rev() {
            marked.insert(head);
            predecessors.set(head, vertex);
            stack.push(head);
        }
    }

    None
}

/// Finds some path by depth-first search. Implements [`PathFinding`] for
/// comparison only; its paths are not shortest in general.
pub struct DepthFirstSearch<'a> {
    pub graph: &'a dyn Graph,
}

impl PathFinding for DepthFirstSearch<'_> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        dfs_path(self.graph, source, target)
    }
}
