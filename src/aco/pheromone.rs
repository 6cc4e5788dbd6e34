//! Learned per-edge pheromone levels.

/// A dense n×n pheromone matrix, row-major.
///
/// Entries are directed: `get(i, j)` is the desirability of moving from
/// city `i` to city `j`. Levels only shrink through [`evaporate`] and only
/// grow through [`deposit`]/[`reinforce_path`], so they never go negative.
///
/// [`evaporate`]: PheromoneMatrix::evaporate
/// [`deposit`]: PheromoneMatrix::deposit
/// [`reinforce_path`]: PheromoneMatrix::reinforce_path
#[derive(Debug, Clone, PartialEq)]
pub struct PheromoneMatrix {
    data: Vec<f64>,
    size: usize,
}

impl PheromoneMatrix {
    /// Creates a matrix with every edge set to `initial`.
    pub fn new(size: usize, initial: f64) -> Self {
        Self {
            data: vec![initial; size * size],
            size,
        }
    }

    /// Pheromone on the directed edge `from -> to`.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Pheromone on every edge leaving `from`.
    #[inline]
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Number of cities.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Multiplies every entry by `1 - rate`.
    pub fn evaporate(&mut self, rate: f64) {
        let keep = (1.0 - rate).max(0.0);
        for level in &mut self.data {
            *level *= keep;
        }
    }

    /// Adds `amount` to the directed edge `from -> to`.
    #[inline]
    pub fn deposit(&mut self, from: usize, to: usize, amount: f64) {
        self.data[from * self.size + to] += amount;
    }

    /// Adds `1 / length` to every consecutive edge along `path`.
    ///
    /// The closing edge from the last city back to the first is not
    /// reinforced. Tours of zero length deposit nothing.
    pub fn reinforce_path(&mut self, path: &[usize], length: f64) {
        if length <= 0.0 {
            return;
        }
        let amount = 1.0 / length;
        for w in path.windows(2) {
            self.deposit(w[0], w[1], amount);
        }
    }

    /// Smallest level in the matrix.
    pub fn min_level(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Iterates over all levels in row-major order.
    pub fn levels(&self) -> impl Iterator<Item = f64> + '_ {
        self.data.iter().copied()
    }
}
