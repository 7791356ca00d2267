use super::geo::BoundaryGeometry;
use super::items::Neighborhood;

/// The neighborhood boundaries of Downtown San Diego.
///
/// The Gaslamp Quarter entry is a hand-drawn sample; it will be replaced
/// (and joined by the other downtown neighborhoods) once the converted
/// SANDAG shapefile data is pasted in.
pub fn downtown_neighborhoods() -> Vec<Neighborhood> {
    let ring = vec![
        (-117.161, 32.710),
        (-117.156, 32.710),
        (-117.156, 32.715),
        (-117.161, 32.715),
        (-117.161, 32.710),
    ];
    let geometry = BoundaryGeometry::from(vec![ring]);
    let gaslamp = Neighborhood {
        name: "Gaslamp Quarter".to_string(),
        description: "Historic district in Downtown San Diego".to_string(),
        geometry,
    };
    vec![gaslamp]
}
