use crate::geometry::Geometry;
use crate::host::quad_cursor::QUAD_FACES;
use crate::host::structured::{StructuredGridOptions, StructuredQuadGrid};
use crate::host::{HostGrid, HostIntersection, QuadElement};

fn two_by_two() -> StructuredQuadGrid {
    StructuredQuadGrid::try_new(&StructuredGridOptions {
        cells: [2, 2],
        ..Default::default()
    })
    .unwrap()
}

fn close(a: [f64; 2], b: [f64; 2]) -> bool {
    (a[0] - b[0]).abs() < 1e-12 && (a[1] - b[1]).abs() < 1e-12
}

#[test]
fn corner_element_has_two_boundary_faces() {
    let g = two_by_two();
    let e = g.element(0, 0, 0).unwrap();
    let mut it = g.ilevel_begin(&e);
    let end = g.ilevel_end(&e);

    let mut seen = Vec::new();
    while it != end {
        seen.push((it.number_in_self(), it.boundary(), it.neighbor(), it.boundary_id()));
        assert_eq!(it.inside(), e);
        it.increment();
    }
    assert_eq!(
        seen,
        vec![(0, true, false, 1), (1, false, true, 0), (2, true, false, 3), (3, false, true, 0)]
    );
}

#[test]
fn interior_faces_point_at_neighbors() {
    let g = two_by_two();
    let e = g.element(0, 0, 0).unwrap();
    let mut it = g.ilevel_begin(&e);
    it.increment();
    assert_eq!(it.outside(), QuadElement::new(0, 1, 0));
    assert_eq!(it.number_in_neighbor(), 0);
    it.increment();
    it.increment();
    assert_eq!(it.outside(), QuadElement::new(0, 0, 1));
    assert_eq!(it.number_in_neighbor(), 2);
}

#[test]
fn geometries_are_consistent_across_the_face() {
    let g = two_by_two();
    let e = g.element(0, 0, 0).unwrap();
    let mut it = g.ilevel_begin(&e);
    it.increment();

    let global = it.intersection_global();
    assert!(close(global.corner(0), [0.5, 0.0]));
    assert!(close(global.corner(1), [0.5, 0.5]));
    assert!((global.volume() - 0.5).abs() < 1e-12);

    let inside_geo = g.element_geometry(e);
    let outside_geo = g.element_geometry(it.outside());
    let self_local = it.intersection_self_local();
    let neighbor_local = it.intersection_neighbor_local();
    for t in [0.0, 0.3, 1.0] {
        let x = global.global(&[t]);
        assert!(close(inside_geo.global(&self_local.global(&[t])), x));
        assert!(close(outside_geo.global(&neighbor_local.global(&[t])), x));
    }
}

#[test]
fn outer_normal_is_scaled_by_face_length() {
    let g = StructuredQuadGrid::try_new(&StructuredGridOptions {
        extent: [2.0, 1.0],
        ..Default::default()
    })
    .unwrap();
    let e = g.element(0, 0, 0).unwrap();
    let mut it = g.ilevel_begin(&e);
    let expected = [[-1.0, 0.0], [1.0, 0.0], [0.0, -2.0], [0.0, 2.0]];
    for n in expected {
        assert!(close(it.outer_normal(&[0.5]), n));
        it.increment();
    }
    assert!(it.is_end());
}

#[test]
fn leaf_traversal_of_coarse_element_is_empty() {
    let g = StructuredQuadGrid::try_new(&StructuredGridOptions {
        levels: 1,
        ..Default::default()
    })
    .unwrap();
    let coarse = g.element(0, 0, 0).unwrap();
    assert_eq!(g.ileaf_begin(&coarse), g.ileaf_end(&coarse));
    assert_ne!(g.ilevel_begin(&coarse), g.ilevel_end(&coarse));

    let fine = g.element(1, 1, 1).unwrap();
    assert_eq!(g.ileaf_begin(&fine).face(), 0);
    assert_eq!(g.ileaf_end(&fine).face(), QUAD_FACES);
}

#[test]
#[should_panic(expected = "outside() requested on boundary face")]
fn outside_on_boundary_panics() {
    let g = two_by_two();
    let e = g.element(0, 0, 0).unwrap();
    let it = g.ilevel_begin(&e);
    let _ = it.outside();
}

#[test]
#[should_panic(expected = "queried past its end")]
fn query_past_end_panics() {
    let g = two_by_two();
    let e = g.element(0, 1, 1).unwrap();
    let _ = g.ilevel_end(&e).boundary();
}
