/// One of the 13 candidate separating axes of a box/triangle pair.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SeparatingAxis {
    /// The triangle normal (code 1).
    TriangleNormal,
    /// The `axis`-th local axis of the box (codes 2 to 4).
    BoxFace {
        /// The box axis, in `0..3`.
        axis: usize,
    },
    /// The cross product of a box axis and a triangle edge (codes 5 to 13).
    EdgeEdge {
        /// The box axis, in `0..3`.
        box_axis: usize,
        /// The triangle edge, in `0..3`, following [`Triangle::edges`](crate::shape::Triangle::edges).
        tri_edge: usize,
    },
}

impl SeparatingAxis {
    /// The number of candidate axes.
    pub const COUNT: u32 = 13;

    /// The numeric code of this axis, in `1..=13`.
    ///
    /// Codes follow the order the axes are tested in.
    #[inline]
    pub fn index(self) -> u32 {
        match self {
            SeparatingAxis::TriangleNormal => 1,
            SeparatingAxis::BoxFace { axis } => 2 + axis as u32,
            SeparatingAxis::EdgeEdge { box_axis, tri_edge } => {
                5 + 3 * box_axis as u32 + tri_edge as u32
            }
        }
    }

    /// The axis with the given numeric code, if it lies in `1..=13`.
    #[inline]
    pub fn from_index(index: u32) -> Option<Self> {
        match index {
            1 => Some(SeparatingAxis::TriangleNormal),
            2..=4 => Some(SeparatingAxis::BoxFace {
                axis: (index - 2) as usize,
            }),
            5..=13 => Some(SeparatingAxis::EdgeEdge {
                box_axis: ((index - 5) / 3) as usize,
                tri_edge: ((index - 5) % 3) as usize,
            }),
            _ => None,
        }
    }

    /// Is this the normal of a face of either shape?
    #[inline]
    pub fn is_face_axis(self) -> bool {
        !matches!(self, SeparatingAxis::EdgeEdge { .. })
    }
}
