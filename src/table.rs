use hashbrown::HashMap;

/// Running statistics for one key. Created from the first observed value,
/// so `min`/`max` always reflect real measurements and `count >= 1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Accumulator {
    pub min: f64,
    pub max: f64,
    pub sum: f64,
    pub count: u64,
}

impl Accumulator {
    pub fn new(value: f64) -> Self {
        Self {
            min: value,
            max: value,
            sum: value,
            count: 1,
        }
    }

    pub fn fold(&mut self, value: f64) {
        self.min = self.min.min(value);
        self.max = self.max.max(value);
        self.sum += value;
        self.count += 1;
    }

    /// Combines two accumulators for the same key. Associative and
    /// commutative up to f64 summation order.
    pub fn merge(&mut self, other: &Accumulator) {
        self.min = self.min.min(other.min);
        self.max = self.max.max(other.max);
        self.sum += other.sum;
        self.count += other.count;
    }

    pub fn mean(&self) -> f64 {
        self.sum / self.count as f64
    }
}

/// Per-key accumulator table. Keys borrow straight from the mapped input.
pub type Table<'a> = HashMap<&'a [u8], Accumulator, ahash::RandomState>;
