use log::debug;

use crate::distance_matrix::DistanceMatrix;

/// Greedy nearest-neighbor walk from `start`, ending at `end`.
///
/// Repeatedly extends the route to the closest city not yet placed; ties go
/// to the lowest city index. `end == start` is the circuit form: the walk
/// runs until every city is placed, the route closes back on the start city
/// and the closing edge is included in the returned cost. For the open-path
/// form the walk stops as soon as it reaches `end`.
pub fn nearest_neighbor(matrix: &DistanceMatrix, start: usize, end: usize) -> (Vec<usize>, u64) {
    let mut route = Vec::with_capacity(matrix.cities() + 1);
    let mut visited = vec![false; matrix.cities()];
    let mut cost = 0;
    let mut visiting = start;

    loop {
        let nearest = (0..matrix.cities())
            .filter(|&city| city != visiting && !visited[city])
            .map(|city| (matrix.cost(visiting, city), city))
            .min();

        route.push(visiting);
        visited[visiting] = true;

        match nearest {
            Some((step, next)) => {
                cost += step;
                visiting = next;
            }
            // Every city is placed; the walk cannot extend.
            None => break,
        }

        if visiting == end {
            break;
        }
    }

    route.push(end);
    if start == end {
        // Closing edge back to the start; the walk above never charges it.
        let closing = route[route.len() - 2];
        cost += matrix.cost(closing, end);
    }

    debug!("nearest neighbor route: {route:?} (cost {cost})");

    (route, cost)
}
