use crate::query::contact_manifolds::{box_triangle_clip_manifold, ContactBuffer};
use crate::query::sat::{box_triangle_test_separating_axes, AxisTestContext};
use crate::query::{ContactFlags, ContactOptions};
use crate::shape::{OrientedBox, Triangle};

/// A collection of triangles that can be fetched by index.
///
/// Any closure `Fn(u32) -> T` where `T: Into<Triangle>` is a triangle source.
pub trait TriangleSource {
    /// The world-space triangle with the given index.
    fn fetch_triangle(&self, index: u32) -> Triangle;
}

impl<F, T> TriangleSource for F
where
    F: Fn(u32) -> T,
    T: Into<Triangle>,
{
    #[inline]
    fn fetch_triangle(&self, index: u32) -> Triangle {
        self(index).into()
    }
}

/// User-defined callbacks invoked while colliding a box against triangles.
///
/// Every method has a default no-op implementation, and `()` implements this
/// trait with all the defaults.
pub trait CollisionHooks {
    /// Called before the triangle with the given index is tested. Returns `false` to skip it.
    fn should_test_triangle(&mut self, triangle_index: u32) -> bool {
        let _ = triangle_index;
        true
    }

    /// Called once with the full candidate list, before any triangle is tested.
    fn report_touched_triangles(&mut self, triangle_indices: &[u32]) {
        let _ = triangle_indices;
    }
}

impl CollisionHooks for () {}

/// Computes the contacts between a box and the candidate triangles of a mesh.
///
/// This uses the default [`ContactOptions`] and no hooks. At most `max_contacts`
/// contacts are returned.
pub fn collide_box_vs_triangles<S: TriangleSource + ?Sized>(
    obb: &OrientedBox,
    source: &S,
    candidates: &[u32],
    max_contacts: usize,
) -> ContactBuffer {
    let mut buffer = ContactBuffer::new(max_contacts);
    let _ = collide_box_vs_triangles_with_hooks(
        obb,
        source,
        candidates,
        &ContactOptions::default(),
        &mut (),
        &mut buffer,
    );
    buffer
}

/// Computes the contacts between a box and the candidate triangles of a mesh.
///
/// Each triangle of `candidates` accepted by `hooks` is fetched from `source` and
/// tested against the box. Contacts are added to `buffer`, tagged with the index of
/// the triangle they come from. The candidates are processed in order and the scan
/// stops as soon as `buffer` is full, unless `options.flags` contains
/// [`ContactFlags::SCAN_ALL_CANDIDATES`].
///
/// Returns the number of contacts added to `buffer`.
pub fn collide_box_vs_triangles_with_hooks<S, H>(
    obb: &OrientedBox,
    source: &S,
    candidates: &[u32],
    options: &ContactOptions,
    hooks: &mut H,
    buffer: &mut ContactBuffer,
) -> usize
where
    S: TriangleSource + ?Sized,
    H: CollisionHooks + ?Sized,
{
    let initial_len = buffer.len();
    let scan_all = options.flags.contains(ContactFlags::SCAN_ALL_CANDIDATES);

    hooks.report_touched_triangles(candidates);

    for (i, &triangle_index) in candidates.iter().enumerate() {
        if buffer.is_full() && !scan_all {
            log::debug!(
                "Contact buffer full ({} contacts): skipping the last {} candidate triangles.",
                buffer.capacity(),
                candidates.len() - i
            );
            break;
        }

        if !hooks.should_test_triangle(triangle_index) {
            continue;
        }

        let triangle = source.fetch_triangle(triangle_index);
        let mut ctx = AxisTestContext::new(options);

        if !box_triangle_test_separating_axes(obb, &triangle, &mut ctx) {
            if let Some(axis) = ctx.exit_axis {
                log::trace!(
                    "Triangle {triangle_index} separated from the box by the axis {}.",
                    axis.index()
                );
            }
            continue;
        }

        if ctx.has_best_axis() {
            let _ =
                box_triangle_clip_manifold(obb, &triangle, &ctx, triangle_index, options, buffer);
        }
    }

    buffer.len() - initial_len
}
