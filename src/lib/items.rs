use super::geo::BoundaryGeometry;

pub struct Neighborhood {
    pub name: String,
    pub description: String,
    pub geometry: BoundaryGeometry,
}
