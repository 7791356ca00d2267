use super::geo::Location;
use super::geojson::{Entity, Geometry};
use super::items::Neighborhood;
use serde::{Deserialize, Serialize};
use serde_json::to_string;
use std::error::Error;
use std::io::Write;

pub trait Output {
    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>>;
}

#[derive(Serialize, Deserialize)]
struct JSONBBox {
    sw: [f64; 2],
    ne: [f64; 2],
}

#[derive(Serialize, Deserialize)]
struct JSONNeighborhood {
    name: String,
    description: String,
    centroid: Location,
    bbox: JSONBBox,
}

impl Output for Vec<Neighborhood> {
    fn write_json_lines(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        for neighborhood in self.iter() {
            let name = neighborhood.name.clone();
            let description = neighborhood.description.clone();
            let centroid = neighborhood
                .geometry
                .centroid()
                .ok_or("could not calculate centroid")?;
            let (sw, ne) = neighborhood
                .geometry
                .sw_ne()
                .ok_or("boundary has no extent")?;
            let bbox = JSONBBox { sw, ne };
            let json_neighborhood = JSONNeighborhood {
                name,
                description,
                centroid,
                bbox,
            };
            let json = to_string(&json_neighborhood)?;
            writeln!(writer, "{}", json)?;
        }
        Ok(())
    }

    fn write_geojson(&self, writer: &mut dyn Write) -> Result<(), Box<dyn Error>> {
        let features = self
            .iter()
            .map(|neighborhood| {
                let coordinates = neighborhood.geometry.coordinates();
                let geometry = Geometry::Polygon { coordinates };
                let properties = vec![
                    (String::from("name"), neighborhood.name.clone()),
                    (String::from("description"), neighborhood.description.clone()),
                ]
                .into_iter()
                .collect();
                Entity::Feature {
                    geometry,
                    properties,
                }
            })
            .collect();
        let feature_collection = Entity::FeatureCollection { features };
        let string = to_string(&feature_collection)?;
        writeln!(writer, "{}", string)?;
        Ok(())
    }
}
