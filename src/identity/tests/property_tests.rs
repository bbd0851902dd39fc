use proptest::prelude::*;
use proptest::sample::Index;

use crate::geometry::{FieldVector, Geometry};
use crate::host::{StructuredGridOptions, StructuredQuadGrid};
use crate::identity::IdentityGrid;

fn build(cells: [usize; 2], levels: usize, extent: [f64; 2]) -> StructuredQuadGrid {
    StructuredQuadGrid::try_new(&StructuredGridOptions {
        cells,
        levels,
        extent,
        ..Default::default()
    })
    .unwrap()
}

proptest! {
    /// Reading geometry at arbitrary positions never changes where the
    /// iterator is, and advancing always leaves the cache empty.
    #[test]
    fn prop_reads_never_move_the_cursor(
        nx in 1usize..4,
        ny in 1usize..4,
        levels in 0usize..3,
        pick in any::<Index>(),
        reads in prop::collection::vec(0u8..8, 4),
    ) {
        let grid = IdentityGrid::new(build([nx, ny], levels, [1.0, 1.0]));
        let elements: Vec<_> = grid.leaf_elements().collect();
        let element = pick.get(&elements);

        let mut probed = grid.leaf_intersection_begin(element);
        let mut plain = grid.leaf_intersection_begin(element);
        let end = grid.leaf_intersection_end(element);

        for mask in reads {
            prop_assert!(probed != end);
            if mask & 1 != 0 {
                let _ = probed.intersection_self_local();
            }
            if mask & 2 != 0 {
                let _ = probed.intersection_global();
            }
            if mask & 4 != 0 && probed.neighbor() {
                let _ = probed.intersection_neighbor_local();
            }
            prop_assert!(probed == plain);
            prop_assert_eq!(probed.boundary(), plain.boundary());
            prop_assert_eq!(probed.number_in_self(), plain.number_in_self());

            probed.advance();
            plain.advance();
            prop_assert_eq!(probed.cached_geometry_count(), 0);
        }
        prop_assert!(probed == end);
        prop_assert!(plain == end);
    }

    /// Every leaf intersection's faces tile the element boundary, and the
    /// integration outer normal has the length of its face.
    #[test]
    fn prop_intersections_cover_element_boundary(
        nx in 1usize..4,
        ny in 1usize..4,
        levels in 0usize..2,
        wx in 0.5f64..3.0,
        wy in 0.5f64..3.0,
    ) {
        let host = build([nx, ny], levels, [wx, wy]);
        let grid = IdentityGrid::new(&host);
        let [cx, cy] = host.counts(levels).unwrap();
        let (hx, hy) = (wx / cx as f64, wy / cy as f64);

        let mut boundary_faces = 0;
        for element in grid.leaf_elements() {
            let mut it = grid.leaf_intersection_begin(&element);
            let end = grid.leaf_intersection_end(&element);
            let mut perimeter = 0.0;
            while it != end {
                let length = it.intersection_global().volume();
                perimeter += length;
                let n = it.integration_outer_normal(&[0.5]);
                prop_assert!((n.two_norm() - length).abs() < 1e-9);
                prop_assert_eq!(it.boundary(), !it.neighbor());
                if it.boundary() {
                    boundary_faces += 1;
                    prop_assert!(it.boundary_id() > 0);
                } else {
                    prop_assert_eq!(it.boundary_id(), 0);
                    prop_assert_eq!(it.outside().level(), levels);
                }
                it.advance();
            }
            prop_assert!((perimeter - 2.0 * (hx + hy)).abs() < 1e-9);
        }
        prop_assert_eq!(boundary_faces, 2 * (cx + cy));
    }
}
