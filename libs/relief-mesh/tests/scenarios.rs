use approx::{assert_abs_diff_eq, assert_relative_eq};
use relief_mesh::{convert_with_params, IntensityGrid, PhysicalParams, ProjectionMode, ReliefError};

fn unit_params() -> PhysicalParams {
    PhysicalParams::new(1.0, 0.1, 0.019).unwrap()
}

#[test]
fn three_column_ring_with_no_carving() {
    let grid = IntensityGrid::filled(2, 3, 0.0).unwrap();
    let mesh = convert_with_params(&grid, &unit_params(), ProjectionMode::Sequential).unwrap();

    let v0 = mesh.positions()[0];
    assert_abs_diff_eq!(v0.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v0.y, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v0.z, 0.0, epsilon = 1e-12);

    // column 1 sits at theta = π
    let v1 = mesh.positions()[1];
    assert_abs_diff_eq!(v1.x, -1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v1.y, 0.0, epsilon = 1e-12);

    // column 2 sits at theta = 2π, on top of column 0
    let v2 = mesh.positions()[2];
    assert_abs_diff_eq!(v2.x, 1.0, epsilon = 1e-12);
    assert_abs_diff_eq!(v2.y, 0.0, epsilon = 1e-12);

    assert_eq!(mesh.triangle_count(), 6);
}

#[test]
fn full_intensity_carves_to_inner_radius() {
    let grid = IntensityGrid::filled(5, 12, 1.0).unwrap();
    let mesh = convert_with_params(&grid, &unit_params(), ProjectionMode::Parallel).unwrap();
    for p in mesh.positions() {
        assert_relative_eq!(p.truncate().length(), 0.9, max_relative = 1e-12);
    }
}

#[test]
fn minimum_grid_has_one_interior_and_one_seam_pair() {
    let grid = IntensityGrid::filled(2, 2, 0.3).unwrap();
    let mesh = convert_with_params(&grid, &unit_params(), ProjectionMode::Sequential).unwrap();
    assert_eq!(mesh.vertex_count(), 4);
    assert_eq!(mesh.triangle_count(), 4);
    assert_eq!(mesh.triangles(), &[[0, 1, 3], [0, 3, 2], [1, 0, 2], [1, 2, 3]]);
}

#[test]
fn invalid_inputs_fail_before_projection() {
    assert!(matches!(
        IntensityGrid::filled(2, 1, 0.0),
        Err(ReliefError::InvalidGridDimensions { height: 2, width: 1 })
    ));
    assert!(matches!(
        PhysicalParams::new(0.0, 0.0, 0.019),
        Err(ReliefError::InvalidPhysicalParams { .. })
    ));
    assert!(matches!(
        PhysicalParams::new(1.0, 1.5, 0.019),
        Err(ReliefError::InvalidPhysicalParams { .. })
    ));
}
