use crate::math::{Real, DEFAULT_EPSILON};

/// Flags controlling how contacts are accumulated by the box/triangles collision driver.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ContactFlags(u8);

bitflags::bitflags! {
    impl ContactFlags: u8 {
        /// If set, any contact is as good as another: new contacts are appended without
        /// searching for a duplicate to merge with.
        const CONTACTS_UNIMPORTANT = 1;
        /// If set, candidate triangles keep being tested after the contact buffer is full.
        ///
        /// The extra contacts are never stored, but they can still widen the depth of
        /// the existing contacts they are merged with.
        const SCAN_ALL_CANDIDATES = 1 << 1;
    }
}

/// Tuning parameters of the box/triangles contact generation.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ContactOptions {
    /// Two contacts closer than the square root of this value (and with parallel
    /// normals) are merged into one.
    pub merge_distance_squared: Real,
    /// Two contact normals `n1`, `n2` are considered parallel if `|n1·n2| > 1 - merge_normal_tolerance`.
    pub merge_normal_tolerance: Real,
    /// Factor applied to the depth along an edge-edge axis before comparing it to
    /// the best depth found so far. Values greater than 1 favor face axes.
    pub edge_axis_penalty: Real,
    /// Candidate axes with a length smaller than this are considered degenerate and skipped.
    pub axis_epsilon: Real,
    /// Accumulation policy flags.
    pub flags: ContactFlags,
}

impl Default for ContactOptions {
    fn default() -> Self {
        Self {
            merge_distance_squared: DEFAULT_EPSILON,
            merge_normal_tolerance: DEFAULT_EPSILON,
            edge_axis_penalty: 1.5,
            axis_epsilon: DEFAULT_EPSILON,
            flags: ContactFlags::empty(),
        }
    }
}

impl ContactOptions {
    /// These options with the given flags.
    #[must_use]
    pub fn with_flags(mut self, flags: ContactFlags) -> Self {
        self.flags = flags;
        self
    }
}
