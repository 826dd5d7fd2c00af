/// Map view constants for the Central Sulawesi region.
pub const CENTER_LAT: f64 = -1.5;
pub const CENTER_LNG: f64 = 120.0;
pub const INITIAL_ZOOM: f64 = 7.0;

pub const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
pub const TILE_SUBDOMAINS: [&str; 3] = ["a", "b", "c"];
pub const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;
pub const TILE_MAX_ZOOM: u32 = 19;

/// Province outlines of Indonesia.
pub const BOUNDARY_URL: &str =
    "https://raw.githubusercontent.com/superpikar/indonesia-geojson/master/indonesia-prov.geojson";
pub const BOUNDARY_NAME_PROPERTY: &str = "Propinsi";
pub const BOUNDARY_COLOR: &str = "#444";
pub const BOUNDARY_WEIGHT: f64 = 1.0;

/// Padding in screen pixels when fitting the view to the visible markers.
pub const FIT_PADDING_PX: f64 = 50.0;

/// Smallest lat/lng box containing a set of points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// `None` for an empty set of points.
    pub fn from_points<I>(points: I) -> Option<Bounds>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        points.into_iter().fold(None, |acc, (lat, lng)| {
            Some(match acc {
                None => Bounds {
                    south: lat,
                    west: lng,
                    north: lat,
                    east: lng,
                },
                Some(b) => Bounds {
                    south: b.south.min(lat),
                    west: b.west.min(lng),
                    north: b.north.max(lat),
                    east: b.east.max(lng),
                },
            })
        })
    }

    pub fn south_west(&self) -> (f64, f64) {
        (self.south, self.west)
    }

    pub fn north_east(&self) -> (f64, f64) {
        (self.north, self.east)
    }

    pub fn contains(&self, (lat, lng): (f64, f64)) -> bool {
        lat >= self.south && lat <= self.north && lng >= self.west && lng <= self.east
    }
}
