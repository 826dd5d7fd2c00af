use poshujan_shared::filter::{self, PostFilter};
use poshujan_shared::map::Bounds;
use poshujan_shared::models::ObservationPost;

#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub lat: f64,
    pub lng: f64,
    pub popup_html: String,
}

/// What the map should show for one filter state.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPlan {
    pub markers: Vec<MarkerSpec>,
    /// `None` leaves the current view where it is.
    pub fit: Option<Bounds>,
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

pub fn popup_html(post: &ObservationPost) -> String {
    format!(
        "<strong>{}</strong><br>Kabupaten: {}<br>Kecamatan: {}",
        escape_html(&post.name),
        escape_html(&post.district),
        escape_html(&post.subdistrict)
    )
}

pub fn plan_markers(posts: &[ObservationPost], post_filter: &PostFilter) -> MarkerPlan {
    let matched = filter::select(posts, post_filter);
    MarkerPlan {
        markers: matched
            .iter()
            .map(|p| MarkerSpec {
                lat: p.latitude,
                lng: p.longitude,
                popup_html: popup_html(p),
            })
            .collect(),
        fit: filter::matched_bounds(&matched),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posts() -> Vec<ObservationPost> {
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

    #[test]
    fn test_popup_html() {
        assert_eq!(
            popup_html(&posts()[0]),
            "<strong>Pos Hujan Bariri</strong><br>Kabupaten: Sigi<br>Kecamatan: Dolo"
        );
    }

    #[test]
    fn test_popup_html_escapes_names() {
        let mut post = posts()[0].clone();
        post.name = "<img src=x onerror=alert(1)>".to_string();
        let html = popup_html(&post);
        assert!(html.starts_with("<strong>&lt;img src=x onerror=alert(1)&gt;</strong>"));
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"A & "B" 'C'"#), "A &amp; &quot;B&quot; &#39;C&#39;");
    }

    #[test]
    fn test_plan_unfiltered_shows_all_and_fits() {
        let plan = plan_markers(&posts(), &PostFilter::default());
        assert_eq!(plan.markers.len(), 3);
        let fit = plan.fit.unwrap();
        assert_eq!(fit.south_west(), (-1.45, 119.8));
        assert_eq!(fit.north_east(), (-0.9, 120.1));
    }

    #[test]
    fn test_plan_sigi_dolo() {
        let plan = plan_markers(&posts(), &PostFilter::new("Sigi", "Dolo"));
        assert_eq!(plan.markers.len(), 1);
        assert_eq!((plan.markers[0].lat, plan.markers[0].lng), (-1.39, 119.9));
        assert!(plan.markers[0].popup_html.contains("Pos Hujan Bariri"));
    }

    #[test]
    fn test_plan_no_match_keeps_view() {
        let plan = plan_markers(&posts(), &PostFilter::new("Parigi", ""));
        assert!(plan.markers.is_empty());
        assert!(plan.fit.is_none());
    }

    #[test]
    fn test_plan_keeps_list_order() {
        let plan = plan_markers(&posts(), &PostFilter::new("Sigi", ""));
        let lats: Vec<f64> = plan.markers.iter().map(|m| m.lat).collect();
        assert_eq!(lats, vec![-1.39, -1.45]);
    }
}
