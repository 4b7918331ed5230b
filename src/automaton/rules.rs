//! Conway's B3/S23 transition rule

/// Whether a cell is alive in the next generation
///
/// # Arguments
/// * `alive` - Current state of the cell
/// * `live_neighbors` - Live cells in its Moore neighborhood (0..=8)
pub fn next_alive(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, 3) => true,            // Birth
        _ => false,                    // Under/overpopulation, or stays dead
    }
}
