//! Dense, validated, immutable distance matrix.

use crate::error::{TourError, TourResult};

/// A dense n×n distance matrix stored in row-major order.
///
/// Entries are nonnegative and finite. The matrix does not need to be
/// symmetric and the diagonal is conventionally zero. Once built it cannot
/// be modified; engines borrow it for the duration of a run.
///
/// # Examples
///
/// ```
/// use u_tour::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 3.0, 4.0],
///     vec![3.0, 0.0, 5.0],
///     vec![4.0, 5.0, 0.0],
/// ])
/// .expect("valid matrix");
/// assert_eq!(dm.size(), 3);
/// assert_eq!(dm.get(1, 2), 5.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawDistanceMatrix"))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

/// Unchecked wire form; deserialized matrices go through [`DistanceMatrix::from_data`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawDistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

#[cfg(feature = "serde")]
impl TryFrom<RawDistanceMatrix> for DistanceMatrix {
    type Error = TourError;

    fn try_from(raw: RawDistanceMatrix) -> TourResult<Self> {
        Self::from_data(raw.size, raw.data)
    }
}

impl DistanceMatrix {
    /// Builds a matrix from nested rows.
    ///
    /// # Errors
    /// [`TourError::InvalidInput`] if there are no rows, a row length differs
    /// from the row count, or any entry is negative or not finite.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> TourResult<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TourError::invalid_input(format!(
                    "distance matrix is not square: row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    /// Builds a matrix from a flat row-major buffer of `size * size` entries.
    ///
    /// # Errors
    /// [`TourError::InvalidInput`] if `size` is zero, the buffer length does
    /// not match, or any entry is negative or not finite.
    pub fn from_data(size: usize, data: Vec<f64>) -> TourResult<Self> {
        if size == 0 {
            return Err(TourError::invalid_input(
                "distance matrix must contain at least one city",
            ));
        }
        let expected = size.checked_mul(size).ok_or_else(|| {
            TourError::invalid_input(format!("distance matrix of {size} cities is too large"))
        })?;
        if data.len() != expected {
            return Err(TourError::invalid_input(format!(
                "distance matrix is not square: {} entries for {size} cities",
                data.len()
            )));
        }
        if let Some(pos) = data.iter().position(|d| !d.is_finite() || *d < 0.0) {
            return Err(TourError::invalid_input(format!(
                "distance ({}, {}) must be finite and nonnegative, got {}",
                pos / size,
                pos % size,
                data[pos]
            )));
        }
        Ok(Self { data, size })
    }

    /// Computes a symmetric Euclidean matrix from planar coordinates.
    ///
    /// # Errors
    /// [`TourError::InvalidInput`] if `coords` is empty or a coordinate is
    /// not finite.
    pub fn from_coords(coords: &[(f64, f64)]) -> TourResult<Self> {
        let n = coords.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = coords[i].0 - coords[j].0;
                let dy = coords[i].1 - coords[j].1;
                let d = (dx * dx + dy * dy).sqrt();
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self::from_data(n, data)
    }

    /// Returns the distance from city `from` to city `to`.
    ///
    /// # Panics
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Distances from `from` to every city.
    #[inline]
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn four_city_rows() -> Vec<Vec<f64>> {
        vec![
            vec![0.0, 10.0, 15.0, 20.0],
            vec![10.0, 0.0, 35.0, 25.0],
            vec![15.0, 35.0, 0.0, 30.0],
            vec![20.0, 25.0, 30.0, 0.0],
        ]
    }

    #[test]
    fn test_from_rows() {
        let dm = DistanceMatrix::from_rows(four_city_rows()).expect("valid");
        assert_eq!(dm.size(), 4);
        assert_eq!(dm.get(0, 3), 20.0);
        assert_eq!(dm.get(2, 1), 35.0);
        assert_eq!(dm.row(1), &[10.0, 0.0, 35.0, 25.0]);
        assert!(dm.is_symmetric(1e-12));
    }

    #[test]
    fn test_not_square_rejected() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]).unwrap_err();
        assert!(matches!(err, TourError::InvalidInput(_)));

        let err = DistanceMatrix::from_data(2, vec![0.0, 1.0, 2.0]).unwrap_err();
        assert!(matches!(err, TourError::InvalidInput(_)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(matches!(
            DistanceMatrix::from_rows(vec![]),
            Err(TourError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_negative_rejected() {
        let err = DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![1.0, 0.0]]).unwrap_err();
        assert!(err.to_string().contains("(0, 1)"), "got: {err}");
    }

    #[test]
    fn test_non_finite_rejected() {
        let err = DistanceMatrix::from_data(2, vec![0.0, f64::NAN, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, TourError::InvalidInput(_)));
        let err = DistanceMatrix::from_data(2, vec![0.0, f64::INFINITY, 1.0, 0.0]).unwrap_err();
        assert!(matches!(err, TourError::InvalidInput(_)));
    }

    #[test]
    fn test_single_city() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0]]).expect("valid");
        assert_eq!(dm.size(), 1);
    }

    #[test]
    fn test_from_coords() {
        let dm = DistanceMatrix::from_coords(&[(0.0, 0.0), (3.0, 4.0), (0.0, 8.0)])
            .expect("valid");
        assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
        assert!((dm.get(0, 2) - 8.0).abs() < 1e-10);
        assert_eq!(dm.get(1, 1), 0.0);
        assert!(dm.is_symmetric(1e-12));
    }

    #[test]
    fn test_asymmetric_matrix() {
        let dm = DistanceMatrix::from_rows(vec![vec![0.0, 10.0], vec![15.0, 0.0]]).expect("valid");
        assert!(!dm.is_symmetric(1e-10));
    }

    #[test]
    fn test_oversized_city_count_rejected() {
        let err = DistanceMatrix::from_data(usize::MAX, vec![0.0]).unwrap_err();
        assert!(err.to_string().contains("too large"), "got: {err}");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates() {
        let dm: DistanceMatrix =
            serde_json::from_str(r#"{"data":[0.0,2.0,2.0,0.0],"size":2}"#).expect("valid");
        assert_eq!(dm.get(0, 1), 2.0);

        let json = serde_json::to_string(&dm).expect("serialize");
        let back: DistanceMatrix = serde_json::from_str(&json).expect("valid");
        assert_eq!(back, dm);

        let negative = serde_json::from_str::<DistanceMatrix>(
            r#"{"data":[0.0,-5.0,-5.0,0.0],"size":2}"#,
        );
        assert!(negative.is_err());

        let short = serde_json::from_str::<DistanceMatrix>(r#"{"data":[0.0,1.0],"size":3}"#);
        let err = short.unwrap_err().to_string();
        assert!(err.contains("not square"), "got: {err}");

        let empty = serde_json::from_str::<DistanceMatrix>(r#"{"data":[],"size":0}"#);
        assert!(empty.is_err());
    }
}
