/// Fixed, increasing set of capacities (in floats) that auto-resize may pick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapacityLadder {
    buckets: Vec<usize>,
}

impl CapacityLadder {
    /// Smallest bucket of the default ladder.
    pub const DEFAULT_FIRST: usize = 1024;
    /// Number of doublings after the first bucket in the default ladder.
    pub const DEFAULT_DOUBLINGS: u32 = 16;

    /// `first, 2*first, 4*first, ...` with `doublings` steps after `first`.
    pub fn doubling(first: usize, doublings: u32) -> Self {
        Self::from_buckets((0..=doublings).filter_map(|k| first.checked_shl(k)))
    }

    /// Custom ladder. Buckets are sorted and deduplicated; zero is dropped.
    pub fn from_buckets(buckets: impl IntoIterator<Item = usize>) -> Self {
        let mut buckets: Vec<usize> = buckets.into_iter().filter(|&b| b > 0).collect();
        buckets.sort_unstable();
        buckets.dedup();
        Self { buckets }
    }

    pub fn buckets(&self) -> &[usize] {
        &self.buckets
    }

    /// Largest bucket, or 0 for an empty ladder.
    pub fn largest(&self) -> usize {
        self.buckets.last().copied().unwrap_or(0)
    }

    /// Smallest bucket strictly greater than `min`.
    pub fn bucket_above(&self, min: usize) -> Option<usize> {
        let idx = self.buckets.partition_point(|&b| b <= min);
        self.buckets.get(idx).copied()
    }
}

impl Default for CapacityLadder {
    fn default() -> Self {
        Self::doubling(Self::DEFAULT_FIRST, Self::DEFAULT_DOUBLINGS)
    }
}
