use criterion::criterion_main;
use geo::Point;
use std::hint::black_box;
use turnroute::{FeatureId, MemoryNetwork, RoadPos, RouteRequest, Router, Turns};
use turnroute_fixtures::{FixtureRoad, GRID, RING_WITH_SPUR};

struct RouteScenario {
    name: &'static str,
    network: &'static [FixtureRoad],

    departure: (FeatureId, bool, u32),
    arrival: (FeatureId, bool, u32),
}

const ROUTE_CASES: [RouteScenario; 2] = [
    RouteScenario {
        name: "GRID_CORNER_TO_CORNER",
        network: GRID,
        departure: (4, true, 0),
        arrival: (3, true, 1),
    },
    RouteScenario {
        name: "RING_TO_SPUR",
        network: RING_WITH_SPUR,
        departure: (1, false, 3),
        arrival: (2, true, 1),
    },
];

fn load(fixture: &[FixtureRoad]) -> MemoryNetwork {
    let mut network = MemoryNetwork::default();

    for road in fixture {
        network
            .insert_wkt(road.id, road.wkt, road.speed_kmph, road.bidirectional)
            .expect("Fixture road must load");
    }

    network
}

fn position((feature, forward, segment): (FeatureId, bool, u32)) -> RoadPos {
    RoadPos::new(feature, forward, segment, Point::new(0.0, 0.0))
}

fn turns_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("turns");
    let network = load(GRID);

    // The centre of the grid, where three roads meet.
    let segment = position((7, true, 0));
    let Some(segment) = segment.as_real() else {
        return;
    };

    group.bench_function("nearest_turns: GRID_CENTRE", |b| {
        b.iter(|| {
            let turns = network
                .nearest_turns(black_box(segment))
                .expect("Turns must be found");

            assert_eq!(turns.len(), 4);
        })
    });

    group.finish();
}

fn route_benchmark(c: &mut criterion::Criterion) {
    let mut group = c.benchmark_group("route");
    group.significance_level(0.1).sample_size(50);

    ROUTE_CASES.into_iter().for_each(|sc| {
        let network = load(sc.network);
        let router = Router::new(&network);

        let request = RouteRequest::new(Point::new(-1.0, -1.0), Point::new(500.0, 500.0))
            .with_start_vicinity([position(sc.departure)])
            .with_final_vicinity([position(sc.arrival)]);

        group.bench_function(format!("route: {}", sc.name), |b| {
            b.iter(|| {
                router
                    .calculate_route(black_box(&request))
                    .expect("Route must be found")
            })
        });
    });

    group.finish();
}

criterion::criterion_group!(targeted_benches, turns_benchmark, route_benchmark);
criterion_main!(targeted_benches);
