//! Tunables for [`introsort_with_options`](crate::introsort_with_options).

/// Selects the optional linear-time probes run before partitioning.
///
/// Both probes are on by default. Turning them off trades the O(n) fast exit
/// on already ordered (or exactly reversed) input for a few saved
/// comparisons on random input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
pub struct SortOptions {
    /// Reverse short (8..17 element) descending ranges instead of
    /// insertion sorting them.
    pub micro_reverse: bool,
    /// Probe longer ranges for ascending / descending order before the
    /// first partition.
    pub probe_sorted: bool,
}

impl Default for SortOptions {
    fn default() -> Self {
        Self {
            micro_reverse: true,
            probe_sorted: true,
        }
    }
}

impl SortOptions {
    /// Options with every probe disabled: plain introsort.
    pub fn plain() -> Self {
        Self {
            micro_reverse: false,
            probe_sorted: false,
        }
    }
}
