use rustc_hash::FxHashMap;
use std::fmt;

/// Index of a vertex inside a [`Graph`]'s arena.
pub type VertexId = usize;

/// A labeled maze cell with a weight and its adjacency list.
///
/// `weight` is the cost of entering the cell; `f64::INFINITY` means the
/// weight was never set. Neighbors are stored in edge-insertion order and
/// the list itself does not prevent duplicates.
#[derive(Debug, Clone)]
pub struct Vertex {
    label: String,
    weight: f64,
    neighbors: Vec<VertexId>,
}

impl Vertex {
    fn new(label: &str) -> Self {
        Self {
            label: label.to_string(),
            weight: f64::INFINITY,
            neighbors: Vec::new(),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn weight(&self) -> f64 {
        self.weight
    }

    pub fn set_weight(&mut self, weight: f64) {
        self.weight = weight;
    }

    /// Adjacent vertices, in the order their edges were added.
    pub fn neighbors(&self) -> &[VertexId] {
        &self.neighbors
    }
}

/// Undirected graph over labeled vertices.
///
/// Vertices live in an arena `Vec`; adjacency is stored as arena indices, so
/// the vec order doubles as insertion order for deterministic iteration and
/// rendering. All per-search state lives in the search calls themselves, so
/// repeated searches against one graph cannot contaminate each other.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Vertex>,
    labels: FxHashMap<String, VertexId>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a vertex with the given label and an unset weight.
    ///
    /// Returns `false` without side effect when the label is already present.
    pub fn add_vertex(&mut self, label: &str) -> bool {
        if self.labels.contains_key(label) {
            return false;
        }
        let id = self.vertices.len();
        self.vertices.push(Vertex::new(label));
        self.labels.insert(label.to_string(), id);
        true
    }

    /// Adds an undirected edge by appending each endpoint to the other's
    /// neighbor list.
    ///
    /// Returns `false` without side effect when either label is missing; the
    /// maze builder leans on this to drop edges into walls. Calling twice for
    /// the same pair duplicates the neighbor entries.
    pub fn add_edge(&mut self, label_a: &str, label_b: &str) -> bool {
        let (Some(&a), Some(&b)) = (self.labels.get(label_a), self.labels.get(label_b)) else {
            return false;
        };
        self.vertices[a].neighbors.push(b);
        self.vertices[b].neighbors.push(a);
        true
    }

    pub fn has_vertex(&self, label: &str) -> bool {
        self.labels.contains_key(label)
    }

    /// Whether `label_b`'s vertex appears in `label_a`'s neighbor list.
    ///
    /// The lookup is one-directional; adjacency built through [`add_edge`]
    /// is symmetric, so checking one direction is normally enough.
    ///
    /// [`add_edge`]: Graph::add_edge
    pub fn has_edge(&self, label_a: &str, label_b: &str) -> bool {
        match (self.labels.get(label_a), self.labels.get(label_b)) {
            (Some(&a), Some(&b)) => self.vertices[a].neighbors.contains(&b),
            _ => false,
        }
    }

    pub fn vertex_id(&self, label: &str) -> Option<VertexId> {
        self.labels.get(label).copied()
    }

    /// Direct arena access. `id` must come from this graph.
    pub fn vertex(&self, id: VertexId) -> &Vertex {
        &self.vertices[id]
    }

    pub fn get(&self, label: &str) -> Option<&Vertex> {
        self.vertex_id(label).map(|id| &self.vertices[id])
    }

    pub fn get_mut(&mut self, label: &str) -> Option<&mut Vertex> {
        let id = self.vertex_id(label)?;
        Some(&mut self.vertices[id])
    }

    /// Neighbor ids of the vertex with the given label, `None` when absent.
    pub fn neighbors(&self, label: &str) -> Option<&[VertexId]> {
        self.get(label).map(Vertex::neighbors)
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Half the sum of all neighbor-list lengths.
    ///
    /// Correct only while adjacency stays symmetric; an asymmetric edge
    /// would make this silently misreport.
    pub fn edge_count(&self) -> usize {
        let total: usize = self.vertices.iter().map(|v| v.neighbors.len()).sum();
        total / 2
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.labels.clear();
    }

    /// Vertices in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Vertex> {
        self.vertices.iter()
    }
}

impl fmt::Display for Graph {
    /// One line per vertex in insertion order:
    /// `label weight >>> neighbor neighbor ...`, weight left blank when unset.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in &self.vertices {
            let weight = if vertex.weight.is_infinite() {
                String::new()
            } else {
                vertex.weight.to_string()
            };
            write!(f, "{} {} >>>", vertex.label, weight)?;
            for &neighbor in &vertex.neighbors {
                write!(f, " {}", self.vertices[neighbor].label)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
