//! Neighborhood boundary data for Downtown San Diego, exposed as typed
//! GeoJSON values a map renderer or spatial lookup can ingest directly.

mod data;
mod geo;
pub mod geojson;
mod items;
pub mod output;

pub use self::geo::{BoundaryGeometry, Location};
pub use self::items::Neighborhood;

/// Returns the Downtown San Diego neighborhood boundaries.
pub fn neighborhoods() -> Vec<Neighborhood> {
    data::downtown_neighborhoods()
}
