use crate::graphs::{distance_matrix::DistanceMatrix, Distance};

/// Floyd-Warshall in place. The intermediate vertex k must be the outermost
/// loop: the recurrence assumes all paths using only intermediates < k are
/// final before k is offered as a detour.
///
/// The sweep does not detect negative cycles; running on a matrix that
/// contains one leaves distances that a further sweep would still lower.
/// Detection is the single source engine's job.
pub fn all_pairs(matrix: &mut DistanceMatrix) {
    let number_of_vertices = matrix.number_of_vertices();

    for k in 1..=number_of_vertices {
        for i in 1..=number_of_vertices {
            let Some(distance_to_k) = matrix.get(i, k) else {
                continue;
            };

            for j in 1..=number_of_vertices {
                let Some(distance_from_k) = matrix.get(k, j) else {
                    continue;
                };

                let candidate = distance_to_k + distance_from_k;
                if candidate < matrix.get(i, j).unwrap_or(Distance::MAX) {
                    matrix.set(i, j, candidate);
                }
            }
        }
    }
}
