use std::collections::HashSet;

/// Line-list edges for wireframe rendering: `(a, b)`, `(b, c)`, `(c, a)` for
/// every face, in face order.
///
/// Edges shared by neighbouring faces are emitted once per face.
pub fn derive_edges(faces: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut edges = Vec::with_capacity(faces.len() * 3);
    for &[a, b, c] in faces {
        edges.push([a, b]);
        edges.push([b, c]);
        edges.push([c, a]);
    }
    edges
}

/// Like [`derive_edges`] but keeps each undirected edge only the first time
/// it appears. Draws the same wireframe with fewer line segments.
pub fn unique_edges(faces: &[[u32; 3]]) -> Vec<[u32; 2]> {
    let mut seen = HashSet::with_capacity(faces.len() * 2);
    derive_edges(faces)
        .into_iter()
        .filter(|&[a, b]| seen.insert((a.min(b), a.max(b))))
        .collect()
}
