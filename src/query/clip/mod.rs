pub use self::clip_polygon_plane::{
    clip_polygon_to_plane, clip_polygon_to_planes, ClipPlane, ClipPolygon, MAX_CLIP_VERTICES,
};

mod clip_polygon_plane;
