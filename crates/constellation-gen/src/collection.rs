//! Deduplicating shape collection.
//!
//! Shapes are stored as paths in a prefix tree keyed on the cells of their
//! canonical form, in (q, r, s) order. Every canonical shape starts at the
//! origin, so the tree has a single root. A duplicate check walks one path
//! of at most N edges instead of comparing against every stored shape.
//!
//! Nodes live in one arena vector and refer to their children by index.

use std::collections::HashMap;

use constellation_hex::Hex;
use constellation_shape::{CanonicalShape, Shape};

/// Opaque index of a node in the arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct NodeIdx(usize);

#[derive(Debug, Clone, Default)]
struct Node {
    children: HashMap<Hex, NodeIdx>,
    /// Some member shape ends at this node (others may pass through it)
    terminal: bool,
}

/// A set of distinct canonical shapes, iterated in insertion order.
#[derive(Debug, Clone)]
pub struct ShapeSet {
    nodes: Vec<Node>,
    shapes: Vec<CanonicalShape>,
}

impl Default for ShapeSet {
    fn default() -> Self {
        Self::new()
    }
}

impl ShapeSet {
    const ROOT: NodeIdx = NodeIdx(0);

    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            shapes: Vec::new(),
        }
    }

    /// Insert the canonical form of `shape`.
    ///
    /// Returns `false` if an equivalent shape is already present or `shape`
    /// is empty.
    pub fn add(&mut self, shape: &Shape) -> bool {
        if shape.is_empty() {
            return false;
        }
        let canon = shape.normalize();
        debug_assert_eq!(canon.first(), Some(Hex::ORIGIN));

        let mut node = Self::ROOT;
        let mut grew = false;
        for &cell in canon.iter().skip(1) {
            let (child, added) = self.child(node, cell);
            node = child;
            grew |= added;
        }

        let was_terminal = std::mem::replace(&mut self.nodes[node.0].terminal, true);
        if !grew && was_terminal {
            return false;
        }
        self.shapes.push(canon);
        true
    }

    /// Whether an equivalent shape has been added.
    pub fn contains(&self, shape: &Shape) -> bool {
        if shape.is_empty() {
            return false;
        }
        let canon = shape.normalize();
        let mut node = Self::ROOT;
        for cell in canon.iter().skip(1) {
            match self.nodes[node.0].children.get(cell) {
                Some(&child) => node = child,
                None => return false,
            }
        }
        self.nodes[node.0].terminal
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, CanonicalShape> {
        self.shapes.iter()
    }

    pub fn into_shapes(self) -> Vec<CanonicalShape> {
        self.shapes
    }

    /// Child of `parent` labeled `cell`, created if missing.
    fn child(&mut self, parent: NodeIdx, cell: Hex) -> (NodeIdx, bool) {
        if let Some(&idx) = self.nodes[parent.0].children.get(&cell) {
            return (idx, false);
        }
        let idx = NodeIdx(self.nodes.len());
        self.nodes.push(Node::default());
        self.nodes[parent.0].children.insert(cell, idx);
        (idx, true)
    }
}

impl<'a> IntoIterator for &'a ShapeSet {
    type Item = &'a CanonicalShape;
    type IntoIter = std::slice::Iter<'a, CanonicalShape>;

    fn into_iter(self) -> Self::IntoIter {
        self.shapes.iter()
    }
}

impl Extend<Shape> for ShapeSet {
    fn extend<I: IntoIterator<Item = Shape>>(&mut self, iter: I) {
        for shape in iter {
            self.add(&shape);
        }
    }
}

impl FromIterator<Shape> for ShapeSet {
    fn from_iter<I: IntoIterator<Item = Shape>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}
