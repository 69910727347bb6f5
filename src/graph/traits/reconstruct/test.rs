use crate::error::RoadError;
use crate::graph::util::init_network;
use crate::graph::{MemoryNetwork, Reconstruct, Route};
use crate::position::{FeatureId, RoadPos};

use approx::assert_relative_eq;
use geo::{Point, wkt};
use turnroute_fixtures::{DETACHED, GRID, STRAIGHT_ROAD, TWO_ROADS};

fn pos(feature: FeatureId, forward: bool, segment: u32) -> RoadPos {
    RoadPos::new(feature, forward, segment, Point::new(0.0, 0.0))
}

fn reconstruct(network: &MemoryNetwork, positions: &[RoadPos]) -> Result<Route, RoadError> {
    let mut route = Route::default();
    network.reconstruct_path(positions, &mut route)?;
    Ok(route)
}

/// Recovers the road positions of a route from the points at which
/// each of them ends.
fn re_extract(network: &MemoryNetwork, route: &Route) -> Vec<RoadPos> {
    let start = route.geometry().points().next().expect("route has geometry");

    route
        .junctions()
        .scan(start, |from, to| {
            let segment = network.locate_segment(*from, to);
            *from = to;
            Some(segment.map(RoadPos::from).expect("junction pair lies on a road"))
        })
        .collect()
}

#[test_log::test]
fn crosses_between_roads() {
    let network = init_network(TWO_ROADS);
    let route = reconstruct(&network, &[pos(1, true, 0), pos(2, true, 0)]).unwrap();

    assert_eq!(
        *route.geometry(),
        wkt! { LINESTRING (0.0 0.0, 10.0 0.0, 10.0 10.0) }
    );

    let times = route.times();
    assert_eq!(times.len(), 2);
    assert_eq!(times[0].0, 1);
    assert_relative_eq!(times[0].1, 0.6, epsilon = 1e-9);
    assert_eq!(times[1].0, 2);
    assert_relative_eq!(times[1].1, 0.6 + 1.2, epsilon = 1e-9);
    assert_relative_eq!(route.total_seconds(), 1.8, epsilon = 1e-9);
}

#[test]
fn fills_in_skipped_segments() {
    let network = init_network(STRAIGHT_ROAD);
    let route = reconstruct(&network, &[pos(1, true, 0), pos(1, true, 2)]).unwrap();

    assert_eq!(
        *route.geometry(),
        wkt! { LINESTRING (0.0 0.0, 10.0 0.0, 20.0 0.0, 30.0 0.0) }
    );
    assert_eq!(route.times()[1].0, 3);
    assert_relative_eq!(route.total_seconds(), 3.0 * 0.72, epsilon = 1e-9);
}

#[test]
fn walks_backward() {
    let network = init_network(STRAIGHT_ROAD);
    let route = reconstruct(&network, &[pos(1, false, 2), pos(1, false, 0)]).unwrap();

    assert_eq!(
        *route.geometry(),
        wkt! { LINESTRING (30.0 0.0, 20.0 0.0, 10.0 0.0, 0.0 0.0) }
    );
    assert_relative_eq!(route.total_seconds(), 3.0 * 0.72, epsilon = 1e-9);
}

#[test]
fn turns_around_on_a_segment() {
    let network = init_network(TWO_ROADS);
    let route = reconstruct(&network, &[pos(1, true, 0), pos(1, false, 0)]).unwrap();

    assert_eq!(
        *route.geometry(),
        wkt! { LINESTRING (0.0 0.0, 10.0 0.0, 0.0 0.0) }
    );
    assert_relative_eq!(route.total_seconds(), 1.2, epsilon = 1e-9);
}

#[test]
fn single_position_has_two_points() {
    let network = init_network(TWO_ROADS);
    let route = reconstruct(&network, &[pos(2, false, 0)]).unwrap();

    assert_eq!(
        *route.geometry(),
        wkt! { LINESTRING (10.0 10.0, 10.0 0.0) }
    );
    assert_eq!(route.times().len(), 1);
    assert_eq!(route.times()[0].0, 1);
    assert_relative_eq!(route.times()[0].1, 1.2, epsilon = 1e-9);
}

#[test]
fn disconnected_positions_are_inconsistent() {
    let network = init_network(DETACHED);
    let result = reconstruct(&network, &[pos(1, true, 0), pos(2, true, 0)]);
    assert_eq!(result, Err(RoadError::InconsistentPath { index: 0 }));

    // The same segment twice does not connect to itself.
    let network = init_network(STRAIGHT_ROAD);
    let result = reconstruct(
        &network,
        &[pos(1, true, 0), pos(1, true, 1), pos(1, true, 1)],
    );
    assert_eq!(result, Err(RoadError::InconsistentPath { index: 1 }));
}

#[test]
fn rejects_anchors_and_empty_paths() {
    let network = init_network(TWO_ROADS);

    assert_eq!(reconstruct(&network, &[]), Err(RoadError::EmptyPath));

    let anchored = [
        pos(1, true, 0),
        RoadPos::finish(Point::new(10.0, 5.0)),
    ];
    assert_eq!(
        reconstruct(&network, &anchored),
        Err(RoadError::InconsistentPath { index: 0 })
    );
}

#[test]
fn missing_segment_is_invalid_data() {
    let network = init_network(STRAIGHT_ROAD);
    let result = reconstruct(&network, &[pos(1, true, 1), pos(1, true, 5)]);

    assert!(
        matches!(result, Err(RoadError::InvalidRoadData { feature: 1, .. })),
        "Got {result:?}"
    );
}

#[test]
fn re_extracts_input_positions() {
    let network = init_network(GRID);

    let positions = vec![
        pos(1, true, 0),
        pos(5, true, 0),
        pos(2, true, 1),
        pos(6, true, 1),
        pos(1, false, 1),
    ];

    let route = reconstruct(&network, &positions).unwrap();
    assert_eq!(route.geometry().0.len(), positions.len() + 1);

    let extracted = re_extract(&network, &route);
    assert_eq!(extracted, positions);

    // Equality ignores direction, so compare it separately.
    let directions = |p: &[RoadPos]| p.iter().map(RoadPos::is_forward).collect::<Vec<_>>();
    assert_eq!(directions(&extracted), directions(&positions));

    // Timing is monotonic along the route.
    assert!(route.times().windows(2).all(|w| w[0].1 < w[1].1));
}
