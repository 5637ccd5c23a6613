/// Offsets of the Moore neighborhood: NW, N, NE, W, E, SW, S, SE.
const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Returns the 8 neighbors of `(row, column)` on a `width` x `height` torus.
///
/// Both axes wrap, so edge cells see the opposite side of the grid. On
/// degenerate boards (width or height of 1) some of the returned coordinates
/// coincide and the update rule double-counts them; that is the defined
/// behavior, not an error.
pub fn neighbors(row: usize, column: usize, width: usize, height: usize) -> [(usize, usize); 8] {
    let mut result = [(0, 0); 8];
    for (slot, (dr, dc)) in result.iter_mut().zip(NEIGHBOR_OFFSETS) {
        let r = (row as i32 + dr).rem_euclid(height as i32) as usize;
        let c = (column as i32 + dc).rem_euclid(width as i32) as usize;
        *slot = (r, c);
    }
    result
}
