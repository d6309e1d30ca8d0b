//! Overpass QL query formatting.

use parkside_core::Coordinate;

/// Server-side timeout requested in every query, in seconds.
pub const QUERY_TIMEOUT_SECS: u32 = 25;

/// Selectors requested around the search centre, in output order.
const SELECTORS: [&str; 5] = [
    r#"node["leisure"="playground"]"#,
    r#"way["leisure"="playground"]"#,
    r#"node["amenity"~"cafe|restaurant"]"#,
    r#"node["amenity"="charging_station"]"#,
    r#"way["amenity"="charging_station"]"#,
];

/// Format the Overpass QL query for features within `radius_m` of `center`.
///
/// Ways are returned with a computed centre (`out center`). The radius is
/// not validated; zero or negative values are passed through.
///
/// # Examples
/// ```
/// use parkside_core::coordinate;
/// use parkside_data::build_query;
///
/// let query = build_query(coordinate(59.9139, 10.7522), 500.0);
/// assert!(query.starts_with("[out:json][timeout:25];"));
/// assert!(query.contains(r#"node["leisure"="playground"](around:500,59.9139,10.7522);"#));
/// assert!(query.ends_with("out center;\n"));
/// ```
#[must_use]
pub fn build_query(center: Coordinate, radius_m: f64) -> String {
    let around = format!("(around:{radius_m},{},{})", center.y, center.x);
    let mut query = format!("[out:json][timeout:{QUERY_TIMEOUT_SECS}];\n(\n");
    for selector in SELECTORS {
        query.push_str("  ");
        query.push_str(selector);
        query.push_str(&around);
        query.push_str(";\n");
    }
    query.push_str(");\n(._;>;);\nout center;\n");
    query
}

#[cfg(test)]
mod tests {
    use super::*;
    use parkside_core::coordinate;
    use rstest::rstest;

    #[rstest]
    fn formats_reference_query() {
        let query = build_query(coordinate(59.9139, 10.7522), 500.0);
        let expected = "[out:json][timeout:25];\n\
            (\n\
            \x20 node[\"leisure\"=\"playground\"](around:500,59.9139,10.7522);\n\
            \x20 way[\"leisure\"=\"playground\"](around:500,59.9139,10.7522);\n\
            \x20 node[\"amenity\"~\"cafe|restaurant\"](around:500,59.9139,10.7522);\n\
            \x20 node[\"amenity\"=\"charging_station\"](around:500,59.9139,10.7522);\n\
            \x20 way[\"amenity\"=\"charging_station\"](around:500,59.9139,10.7522);\n\
            );\n\
            (._;>;);\n\
            out center;\n";
        assert_eq!(query, expected);
    }

    #[rstest]
    #[case(1_500.5, "(around:1500.5,")]
    #[case(0.0, "(around:0,")]
    #[case(-20.0, "(around:-20,")]
    fn passes_radius_through_unvalidated(#[case] radius: f64, #[case] fragment: &str) {
        let query = build_query(coordinate(0.0, 0.0), radius);
        assert_eq!(query.matches(fragment).count(), 5);
    }

    #[rstest]
    fn places_latitude_before_longitude() {
        let query = build_query(coordinate(-33.5, 151.25), 100.0);
        assert!(query.contains("(around:100,-33.5,151.25)"));
    }
}
