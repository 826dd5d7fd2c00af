use serde::{Deserialize, Serialize};

/// A fixed-location rainfall monitoring point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationPost {
    pub name: String,
    #[serde(rename = "lat")]
    pub latitude: f64,
    #[serde(rename = "lng")]
    pub longitude: f64,
    #[serde(rename = "kabupaten")]
    pub district: String,
    #[serde(rename = "kecamatan")]
    pub subdistrict: String,
}

impl ObservationPost {
    pub fn lat_lng(&self) -> (f64, f64) {
        (self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct District {
    pub name: String,
    pub subdistricts: Vec<String>,
}

/// District → sub-districts, in the order they were defined.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdministrativeIndex {
    districts: Vec<District>,
}

impl AdministrativeIndex {
    pub fn new(districts: Vec<District>) -> Self {
        AdministrativeIndex { districts }
    }

    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    pub fn district_names(&self) -> impl Iterator<Item = &str> {
        self.districts.iter().map(|d| d.name.as_str())
    }

    /// Sub-districts of `district`, empty for an unknown district.
    pub fn subdistricts(&self, district: &str) -> &[String] {
        self.districts
            .iter()
            .find(|d| d.name == district)
            .map(|d| d.subdistricts.as_slice())
            .unwrap_or(&[])
    }

    pub fn contains(&self, district: &str, subdistrict: &str) -> bool {
        self.subdistricts(district).iter().any(|s| s == subdistrict)
    }
}

/// Problems found when cross-checking posts against the index.
pub fn validate_posts(index: &AdministrativeIndex, posts: &[ObservationPost]) -> Vec<String> {
    let mut problems = Vec::new();
    for post in posts {
        if !index.district_names().any(|d| d == post.district) {
            problems.push(format!(
                "{}: unknown district '{}'",
                post.name, post.district
            ));
        } else if !index.contains(&post.district, &post.subdistrict) {
            problems.push(format!(
                "{}: sub-district '{}' is not part of '{}'",
                post.name, post.subdistrict, post.district
            ));
        }
    }
    problems
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    pub fn index() -> AdministrativeIndex {
        let district = |name: &str, subs: &[&str]| District {
            name: name.to_string(),
            subdistricts: subs.iter().map(|s| s.to_string()).collect(),
        };
        AdministrativeIndex::new(vec![
            district("Palu", &["Palu Barat", "Palu Timur"]),
            district("Sigi", &["Dolo", "Sigi Biromaru"]),
            district("Parigi", &["Parigi", "Ampibabo"]),
        ])
    }

    pub fn posts() -> Vec<ObservationPost> {
        let post = |name: &str, lat: f64, lng: f64, d: &str, s: &str| ObservationPost {
            name: name.to_string(),
            latitude: lat,
            longitude: lng,
            district: d.to_string(),
            subdistrict: s.to_string(),
        };
        vec![
            post("Pos Hujan Bariri", -1.39, 119.9, "Sigi", "Dolo"),
            post("Pos Hujan Sigi", -1.45, 120.1, "Sigi", "Sigi Biromaru"),
            post("Pos Hujan Palu Timur", -0.9, 119.8, "Palu", "Palu Timur"),
        ]
    }
}
