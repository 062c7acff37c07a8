use std::collections::VecDeque;
use std::iter::FusedIterator;
use std::mem;

use super::{Graph, VertexId};

/// Breadth-first traversal. See [`Graph::bfs`].
///
/// A vertex is marked visited when it is enqueued, not when it is yielded, so a vertex reachable
/// along several same-length paths still enters the queue once.
pub struct Bfs<'a, T> {
    graph: &'a Graph<T>,
    queue: VecDeque<VertexId>,
    visited: Vec<bool>,
}

impl<'a, T> Bfs<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>, start: VertexId) -> Bfs<'a, T> {
        assert!(
            start.index() < graph.vertex_count(),
            "start vertex {start:?} is not a vertex of this graph"
        );
        let mut visited = vec![false; graph.vertex_count()];
        visited[start.index()] = true;
        Bfs {
            graph,
            queue: VecDeque::from([start]),
            visited,
        }
    }
}

impl<T> Iterator for Bfs<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.queue.pop_front()?;
        for neighbor in self.graph.neighbors(vertex) {
            if !mem::replace(&mut self.visited[neighbor.index()], true) {
                self.queue.push_back(neighbor);
            }
        }
        Some(vertex)
    }
}

impl<T> FusedIterator for Bfs<'_, T> {}

/// Preorder depth-first traversal. See [`Graph::dfs`].
///
/// The stack may hold a vertex more than once when several branches reach it; the visited check
/// on pop discards the later copies. Neighbors are pushed in reverse so the first listed edge is
/// the first one explored.
pub struct Dfs<'a, T> {
    graph: &'a Graph<T>,
    stack: Vec<VertexId>,
    visited: Vec<bool>,
}

impl<'a, T> Dfs<'a, T> {
    pub(crate) fn new(graph: &'a Graph<T>, start: VertexId) -> Dfs<'a, T> {
        assert!(
            start.index() < graph.vertex_count(),
            "start vertex {start:?} is not a vertex of this graph"
        );
        Dfs {
            graph,
            stack: vec![start],
            visited: vec![false; graph.vertex_count()],
        }
    }
}

impl<T> Iterator for Dfs<'_, T> {
    type Item = VertexId;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let vertex = self.stack.pop()?;
            if mem::replace(&mut self.visited[vertex.index()], true) {
                continue;
            }
            for neighbor in self.graph.neighbors(vertex).rev() {
                if !self.visited[neighbor.index()] {
                    self.stack.push(neighbor);
                }
            }
            break Some(vertex);
        }
    }
}

impl<T> FusedIterator for Dfs<'_, T> {}
