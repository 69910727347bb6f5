use geo::{LineString, Point};

/// Receiver of a reconstructed route.
pub trait RouteSink {
    /// The ordered points of the route.
    fn set_geometry(&mut self, points: Vec<Point>);

    /// Pairs of `(geometry index, cumulative seconds)`, one per road
    /// position of the route, marking where its segment ends.
    fn set_section_times(&mut self, times: Vec<(usize, f64)>);
}

/// A reconstructed route: geometry and cumulative timing.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    geometry: LineString,
    times: Vec<(usize, f64)>,
}

impl Default for Route {
    fn default() -> Self {
        Self {
            geometry: LineString::new(Vec::new()),
            times: Vec::new(),
        }
    }
}

impl Route {
    pub fn geometry(&self) -> &LineString {
        &self.geometry
    }

    pub fn times(&self) -> &[(usize, f64)] {
        &self.times
    }

    /// Total travel time in seconds.
    pub fn total_seconds(&self) -> f64 {
        self.times.last().map(|(_, seconds)| *seconds).unwrap_or_default()
    }

    /// The geometry points at which each road position of the route ends.
    pub fn junctions(&self) -> impl Iterator<Item = Point> + '_ {
        self.times
            .iter()
            .filter_map(|(index, _)| self.geometry.0.get(*index).copied().map(Point))
    }
}

impl RouteSink for Route {
    fn set_geometry(&mut self, points: Vec<Point>) {
        self.geometry = points.into_iter().collect();
    }

    fn set_section_times(&mut self, times: Vec<(usize, f64)>) {
        self.times = times;
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_empty() {
        let route = Route::default();

        assert_eq!(route.geometry().0.len(), 0);
        assert!(route.times().is_empty());
        assert_eq!(route.total_seconds(), 0.0);
        assert_eq!(route.junctions().count(), 0);
    }

    #[test]
    fn junctions_follow_times() {
        let mut route = Route::default();
        route.set_geometry(vec![
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            Point::new(10.0, 10.0),
        ]);
        route.set_section_times(vec![(1, 0.6), (2, 1.8)]);

        assert_eq!(
            route.junctions().collect::<Vec<_>>(),
            vec![Point::new(10.0, 0.0), Point::new(10.0, 10.0)]
        );
        assert_eq!(route.total_seconds(), 1.8);
    }
}
