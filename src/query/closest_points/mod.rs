//! Closest points between the features of two shapes.

pub use self::closest_points_line_line::{
    closest_points_line_line, closest_points_line_line_parameters,
    closest_points_line_line_parameters_eps, LineLineParameters,
};

mod closest_points_line_line;
