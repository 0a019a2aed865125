//! Various unsorted geometrical and logical operators.

pub use self::sort::{projected_interval3, sort2, sort3};

mod sort;
