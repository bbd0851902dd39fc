use crate::debug_invariants::DebugInvariants;
use crate::geometry::Geometry;
use crate::grid_error::GridError;
use crate::host::structured::{BoundaryIds, StructuredGridOptions, StructuredQuadGrid};
use crate::host::{HostGrid, QuadElement};

fn grid(cells: [usize; 2], levels: usize) -> StructuredQuadGrid {
    StructuredQuadGrid::try_new(&StructuredGridOptions {
        cells,
        levels,
        ..Default::default()
    })
    .unwrap()
}

#[test]
fn default_options_build_unit_square() {
    let g = StructuredQuadGrid::try_new(&StructuredGridOptions::default()).unwrap();
    assert_eq!(g.dimension(), 2);
    assert_eq!(g.dimension_world(), 2);
    assert_eq!(g.max_level(), 0);
    assert_eq!(g.counts(0).unwrap(), [1, 1]);
    assert_eq!(g.leaf_elements().count(), 1);
    assert!(g.validate_invariants().is_ok());
}

#[test]
fn level_counts_double_per_level() {
    let g = grid([2, 3], 2);
    assert_eq!(g.counts(0).unwrap(), [2, 3]);
    assert_eq!(g.counts(1).unwrap(), [4, 6]);
    assert_eq!(g.counts(2).unwrap(), [8, 12]);
    assert_eq!(
        g.counts(3),
        Err(GridError::LevelOutOfRange {
            level: 3,
            max_level: 2
        })
    );
    assert_eq!(g.level_elements(1).count(), 24);
    assert_eq!(g.leaf_elements().count(), 96);
    assert_eq!(g.level_elements(3).count(), 0);
}

#[test]
fn level_elements_are_row_major() {
    let g = grid([2, 2], 0);
    let elements: Vec<_> = g.level_elements(0).collect();
    assert_eq!(
        elements,
        vec![
            QuadElement::new(0, 0, 0),
            QuadElement::new(0, 1, 0),
            QuadElement::new(0, 0, 1),
            QuadElement::new(0, 1, 1),
        ]
    );
    for (k, e) in elements.iter().enumerate() {
        assert_eq!(e.linear_index(2), k);
        assert_eq!(g.level_of(e), 0);
    }
}

#[test]
fn element_lookup_is_validated() {
    let g = grid([2, 1], 1);
    assert_eq!(g.element(1, 3, 1).unwrap(), QuadElement::new(1, 3, 1));
    assert_eq!(
        g.element(1, 4, 0),
        Err(GridError::ElementOutOfRange {
            level: 1,
            i: 4,
            j: 0,
            nx: 4,
            ny: 2
        })
    );
    assert!(matches!(
        g.element(2, 0, 0),
        Err(GridError::LevelOutOfRange { .. })
    ));
}

#[test]
fn invalid_layouts_are_rejected() {
    let bad = [
        StructuredGridOptions {
            cells: [0, 1],
            ..Default::default()
        },
        StructuredGridOptions {
            extent: [1.0, -1.0],
            ..Default::default()
        },
        StructuredGridOptions {
            extent: [f64::INFINITY, 1.0],
            ..Default::default()
        },
        StructuredGridOptions {
            origin: [f64::NAN, 0.0],
            ..Default::default()
        },
        StructuredGridOptions {
            levels: usize::BITS as usize,
            ..Default::default()
        },
        StructuredGridOptions {
            boundary_ids: BoundaryIds {
                x_min: 0,
                ..Default::default()
            },
            ..Default::default()
        },
        StructuredGridOptions {
            boundary_ids: BoundaryIds {
                x_max: 1,
                ..Default::default()
            },
            ..Default::default()
        },
    ];
    for options in &bad {
        assert!(
            matches!(
                StructuredQuadGrid::try_new(options),
                Err(GridError::InvalidLayout(_))
            ),
            "accepted {options:?}"
        );
    }
}

#[test]
fn global_refine_adds_levels() {
    let mut g = grid([1, 1], 0);
    g.global_refine(2).unwrap();
    assert_eq!(g.max_level(), 2);
    assert_eq!(g.counts(2).unwrap(), [4, 4]);
    assert!(matches!(
        g.global_refine(usize::MAX),
        Err(GridError::InvalidLayout(_))
    ));
    assert_eq!(g.max_level(), 2);
}

#[test]
fn element_geometry_tiles_the_domain() {
    let g = StructuredQuadGrid::try_new(&StructuredGridOptions {
        origin: [-1.0, 2.0],
        extent: [4.0, 2.0],
        cells: [2, 2],
        levels: 1,
        ..Default::default()
    })
    .unwrap();
    let total: f64 = g
        .leaf_elements()
        .map(|e| g.element_geometry(e).volume())
        .sum();
    assert!((total - 8.0).abs() < 1e-12);
    let last = g.element(1, 3, 3).unwrap();
    assert_eq!(g.element_geometry(last).corner(3), [3.0, 4.0]);
}

#[test]
fn options_load_from_json_with_defaults() {
    let options: StructuredGridOptions =
        serde_json::from_str(r#"{ "cells": [3, 2], "boundary_ids": { "y_max": 9 } }"#).unwrap();
    assert_eq!(options.cells, [3, 2]);
    assert_eq!(options.extent, [1.0, 1.0]);
    assert_eq!(options.levels, 0);
    assert_eq!(options.boundary_ids.by_face(), [1, 2, 3, 9]);

    let text = serde_json::to_string(&options).unwrap();
    let back: StructuredGridOptions = serde_json::from_str(&text).unwrap();
    assert_eq!(back, options);
}
