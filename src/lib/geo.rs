use geo::prelude::*;
use geo_types::{LineString, Point, Polygon};
use serde::{Deserialize, Serialize};
use std::iter::once;

#[derive(Serialize, Deserialize, Debug)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl From<Point<f64>> for Location {
    fn from(point: Point<f64>) -> Self {
        Location {
            lat: point.lat(),
            lon: point.lng(),
        }
    }
}

impl From<Location> for [f64; 2] {
    fn from(loc: Location) -> Self {
        [loc.lon, loc.lat]
    }
}

pub struct BoundaryGeometry(Polygon<f64>);

impl BoundaryGeometry {
    pub fn new(polygon: Polygon<f64>) -> Self {
        BoundaryGeometry(polygon)
    }

    /// Rings as (lon, lat) pairs, the outer boundary first.
    pub fn coordinates(&self) -> Vec<Vec<(f64, f64)>> {
        once(self.0.exterior())
            .chain(self.0.interiors().iter())
            .map(|ring| {
                ring.points_iter()
                    .map(|point| (point.lng(), point.lat()))
                    .collect()
            })
            .collect()
    }

    pub fn sw_ne(&self) -> Option<([f64; 2], [f64; 2])> {
        let rect = self.0.bounding_rect()?;
        let sw = [rect.min().x, rect.min().y];
        let ne = [rect.max().x, rect.max().y];
        Some((sw, ne))
    }

    pub fn centroid(&self) -> Option<Location> {
        let point = self.0.centroid()?;
        Some(point.into())
    }
}

impl From<Vec<Vec<(f64, f64)>>> for BoundaryGeometry {
    fn from(mut rings: Vec<Vec<(f64, f64)>>) -> Self {
        let exterior: LineString<f64> = if rings.is_empty() {
            LineString(vec![])
        } else {
            rings.remove(0).into()
        };
        let interiors = rings.into_iter().map(LineString::from).collect();
        BoundaryGeometry::new(Polygon::new(exterior, interiors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn approx_eq<T: Into<[f64; 2]>>(expected: [f64; 2], actual: Option<T>) {
        let actual: [f64; 2] = actual.unwrap().into();
        assert_relative_eq!(expected[0], actual[0], epsilon = f64::EPSILON);
        assert_relative_eq!(expected[1], actual[1], epsilon = f64::EPSILON);
    }

    fn square() -> BoundaryGeometry {
        // 3-----2
        // |     |
        // |     |
        // 0/4---1
        let ring = vec![(6., 50.), (8., 50.), (8., 52.), (6., 52.), (6., 50.)];
        BoundaryGeometry::from(vec![ring])
    }

    #[test]
    fn centroid_of_square() {
        approx_eq([7., 51.], square().centroid());
    }

    #[test]
    fn sw_ne_of_square() {
        let (sw, ne) = square().sw_ne().unwrap();
        assert_eq!(sw, [6., 50.]);
        assert_eq!(ne, [8., 52.]);
    }

    #[test]
    fn coordinates_keep_ring_order() {
        let outer = vec![(6., 50.), (8., 50.), (8., 52.), (6., 52.), (6., 50.)];
        let hole = vec![(6.5, 50.5), (7.5, 50.5), (7.5, 51.5), (6.5, 51.5), (6.5, 50.5)];
        let geometry = BoundaryGeometry::from(vec![outer.clone(), hole.clone()]);
        let rings = geometry.coordinates();
        assert_eq!(rings.len(), 2);
        assert_eq!(rings[0], outer);
        assert_eq!(rings[1], hole);
    }

    #[test]
    fn new_wraps_a_geo_types_polygon() {
        let exterior: LineString<f64> =
            vec![(6., 50.), (8., 50.), (8., 52.), (6., 52.), (6., 50.)].into();
        let geometry = BoundaryGeometry::new(Polygon::new(exterior, vec![]));
        let (sw, ne) = geometry.sw_ne().unwrap();
        assert_eq!(sw, [6., 50.]);
        assert_eq!(ne, [8., 52.]);
    }

    #[test]
    fn empty_geometry_has_no_extent() {
        let geometry = BoundaryGeometry::from(vec![]);
        assert!(geometry.sw_ne().is_none());
        assert!(geometry.centroid().is_none());
    }
}
