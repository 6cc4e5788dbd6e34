//! Closed-tour length and permutation validity.

use crate::distance::DistanceMatrix;
use crate::error::{TourError, TourResult};

/// A visiting order over city indices, implicitly closed back to its first
/// element.
pub type Tour = Vec<usize>;

/// Computes the length of a closed tour.
///
/// Sums `d[tour[i]][tour[i + 1]]` over consecutive pairs plus the closing
/// edge `d[tour[n - 1]][tour[0]]`. The tour must be a valid permutation of
/// the matrix's cities; an empty tour has length zero.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
/// use u_tour::evaluation::tour_length;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 10.0, 15.0, 20.0],
///     vec![10.0, 0.0, 35.0, 25.0],
///     vec![15.0, 35.0, 0.0, 30.0],
///     vec![20.0, 25.0, 30.0, 0.0],
/// ])
/// .unwrap();
/// // 0 -> 1 -> 3 -> 2 -> 0
/// assert_eq!(tour_length(&[0, 1, 3, 2], &dm), 80.0);
/// ```
pub fn tour_length(tour: &[usize], distances: &DistanceMatrix) -> f64 {
    let (first, last) = match (tour.first(), tour.last()) {
        (Some(&f), Some(&l)) => (f, l),
        _ => return 0.0,
    };
    let path: f64 = tour.windows(2).map(|w| distances.get(w[0], w[1])).sum();
    path + distances.get(last, first)
}

/// Returns `true` if `tour` contains every index of `0..n` exactly once.
pub fn is_permutation(tour: &[usize], n: usize) -> bool {
    if tour.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &city in tour {
        if city >= n || seen[city] {
            return false;
        }
        seen[city] = true;
    }
    true
}

/// Checks that `tour` is a valid permutation of the matrix's cities.
///
/// # Errors
/// [`TourError::InvalidInput`] naming the first violation found.
pub fn validate_tour(tour: &[usize], distances: &DistanceMatrix) -> TourResult<()> {
    let n = distances.size();
    if tour.len() != n {
        return Err(TourError::invalid_input(format!(
            "tour visits {} cities, expected {n}",
            tour.len()
        )));
    }
    let mut seen = vec![false; n];
    for (pos, &city) in tour.iter().enumerate() {
        if city >= n {
            return Err(TourError::invalid_input(format!(
                "city {city} at position {pos} is out of range 0..{n}"
            )));
        }
        if seen[city] {
            return Err(TourError::invalid_input(format!(
                "city {city} appears more than once (position {pos})"
            )));
        }
        seen[city] = true;
    }
    Ok(())
}
