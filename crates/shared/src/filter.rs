use crate::map::Bounds;
use crate::models::{AdministrativeIndex, ObservationPost};

/// District / sub-district selection. An empty field matches every post.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostFilter {
    pub district: String,
    pub subdistrict: String,
}

impl PostFilter {
    pub fn new(district: impl Into<String>, subdistrict: impl Into<String>) -> Self {
        PostFilter {
            district: district.into(),
            subdistrict: subdistrict.into(),
        }
    }

    /// Build from optional inputs; `None` behaves like an empty selection.
    pub fn from_options(district: Option<String>, subdistrict: Option<String>) -> Self {
        PostFilter {
            district: district.unwrap_or_default(),
            subdistrict: subdistrict.unwrap_or_default(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.district.is_empty() && self.subdistrict.is_empty()
    }

    pub fn matches(&self, post: &ObservationPost) -> bool {
        let district_ok = self.district.is_empty() || post.district == self.district;
        let subdistrict_ok = self.subdistrict.is_empty() || post.subdistrict == self.subdistrict;
        district_ok && subdistrict_ok
    }

    /// Choosing a district always drops the sub-district selection.
    pub fn select_district(&mut self, district: impl Into<String>) {
        self.district = district.into();
        self.subdistrict.clear();
    }

    pub fn select_subdistrict(&mut self, subdistrict: impl Into<String>) {
        self.subdistrict = subdistrict.into();
    }

    pub fn reset(&mut self) {
        self.district.clear();
        self.subdistrict.clear();
    }
}

/// Posts matching `filter`, in list order.
pub fn select<'a>(posts: &'a [ObservationPost], filter: &PostFilter) -> Vec<&'a ObservationPost> {
    posts.iter().filter(|p| filter.matches(p)).collect()
}

/// Bounds of the matched posts, `None` when nothing matched.
pub fn matched_bounds(matched: &[&ObservationPost]) -> Option<Bounds> {
    Bounds::from_points(matched.iter().map(|p| p.lat_lng()))
}

/// One entry of the sub-district select.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

pub const SUBDISTRICT_PLACEHOLDER: &str = "Kecamatan";
pub const DISTRICT_PLACEHOLDER: &str = "Kabupaten";

/// Leading "all" option followed by the district's sub-districts in stored order.
pub fn subdistrict_options(index: &AdministrativeIndex, district: &str) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: SUBDISTRICT_PLACEHOLDER.to_string(),
    })
    .chain(index.subdistricts(district).iter().map(|s| SelectOption {
        value: s.clone(),
        label: s.clone(),
    }))
    .collect()
}

/// Leading "all" option followed by every district in index order.
pub fn district_options(index: &AdministrativeIndex) -> Vec<SelectOption> {
    std::iter::once(SelectOption {
        value: String::new(),
        label: DISTRICT_PLACEHOLDER.to_string(),
    })
    .chain(index.district_names().map(|d| SelectOption {
        value: d.to_string(),
        label: d.to_string(),
    }))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures::{index, posts};

    fn names(matched: &[&ObservationPost]) -> Vec<String> {
        matched.iter().map(|p| p.name.clone()).collect()
    }

    #[test]
    fn test_empty_filter_matches_all() {
        let data = posts();
        let matched = select(&data, &PostFilter::default());
        assert_eq!(matched.len(), 3);
    }

    #[test]
    fn test_district_only() {
        let data = posts();
        let matched = select(&data, &PostFilter::new("Sigi", ""));
        assert_eq!(names(&matched), vec!["Pos Hujan Bariri", "Pos Hujan Sigi"]);
    }

    #[test]
    fn test_district_and_subdistrict() {
        let data = posts();
        let matched = select(&data, &PostFilter::new("Sigi", "Dolo"));
        assert_eq!(names(&matched), vec!["Pos Hujan Bariri"]);
    }

    #[test]
    fn test_subdistrict_only_still_filters() {
        let data = posts();
        let matched = select(&data, &PostFilter::new("", "Palu Timur"));
        assert_eq!(names(&matched), vec!["Pos Hujan Palu Timur"]);
    }

    #[test]
    fn test_district_without_posts_matches_nothing() {
        let data = posts();
        let matched = select(&data, &PostFilter::new("Parigi", ""));
        assert!(matched.is_empty());
        assert!(matched_bounds(&matched).is_none());
    }

    #[test]
    fn test_mismatched_pair_matches_nothing() {
        let data = posts();
        assert!(select(&data, &PostFilter::new("Palu", "Dolo")).is_empty());
    }

    #[test]
    fn test_every_combination_agrees_with_predicate() {
        let data = posts();
        let idx = index();
        let mut districts: Vec<&str> = vec![""];
        districts.extend(idx.district_names());
        for d in &districts {
            let mut subs: Vec<&str> = vec![""];
            subs.extend(idx.subdistricts(d).iter().map(String::as_str));
            for s in subs {
                let filter = PostFilter::new(*d, s);
                let matched = select(&data, &filter);
                let expected: Vec<&ObservationPost> = data
                    .iter()
                    .filter(|p| {
                        (d.is_empty() || p.district == *d) && (s.is_empty() || p.subdistrict == s)
                    })
                    .collect();
                assert_eq!(matched, expected, "filter {:?}", filter);
            }
        }
    }

    #[test]
    fn test_matched_bounds_for_sigi() {
        let data = posts();
        let matched = select(&data, &PostFilter::new("Sigi", ""));
        let b = matched_bounds(&matched).unwrap();
        assert_eq!(b.south_west(), (-1.45, 119.9));
        assert_eq!(b.north_east(), (-1.39, 120.1));
    }

    #[test]
    fn test_select_district_clears_subdistrict() {
        let mut filter = PostFilter::new("Sigi", "Dolo");
        filter.select_district("Palu");
        assert_eq!(filter, PostFilter::new("Palu", ""));
    }

    #[test]
    fn test_reset_restores_match_all() {
        let mut filter = PostFilter::new("Sigi", "Dolo");
        filter.reset();
        assert!(filter.is_empty());
        assert_eq!(select(&posts(), &filter).len(), 3);
    }

    #[test]
    fn test_from_options_none_is_empty() {
        assert!(PostFilter::from_options(None, None).is_empty());
        let f = PostFilter::from_options(Some("Sigi".into()), None);
        assert_eq!(f.district, "Sigi");
        assert!(f.subdistrict.is_empty());
    }

    #[test]
    fn test_subdistrict_options_for_district() {
        let opts = subdistrict_options(&index(), "Sigi");
        let values: Vec<&str> = opts.iter().map(|o| o.value.as_str()).collect();
        assert_eq!(values, vec!["", "Dolo", "Sigi Biromaru"]);
        assert_eq!(opts[0].label, SUBDISTRICT_PLACEHOLDER);
    }

    #[test]
    fn test_subdistrict_options_without_district_is_placeholder_only() {
        assert_eq!(subdistrict_options(&index(), "").len(), 1);
        assert_eq!(subdistrict_options(&index(), "Donggala").len(), 1);
    }

    #[test]
    fn test_district_options() {
        let opts = district_options(&index());
        let labels: Vec<&str> = opts.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["Kabupaten", "Palu", "Sigi", "Parigi"]);
        assert!(opts[0].value.is_empty());
    }
}
