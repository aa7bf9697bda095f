//! Location-string heuristics.
//!
//! Users type places loosely: `CA`, `san francisco`, `Austin TX`,
//! `Paris,FR`. [`expand_location`] turns these into the `City, Region,
//! Country` form the geocoder resolves reliably. A `lat,lon` pair is picked
//! out by [`parse_coordinates`] before any expansion happens.

/// Region and country codes and what they expand to.
///
/// `DE` and `IN` mean Germany and India, not Delaware and Indiana.
const REGIONS: &[(&str, &str)] = &[
    // US states
    ("AL", "Alabama, US"),
    ("AK", "Alaska, US"),
    ("AZ", "Arizona, US"),
    ("AR", "Arkansas, US"),
    ("CA", "California, US"),
    ("CO", "Colorado, US"),
    ("CT", "Connecticut, US"),
    ("FL", "Florida, US"),
    ("GA", "Georgia, US"),
    ("HI", "Hawaii, US"),
    ("ID", "Idaho, US"),
    ("IL", "Illinois, US"),
    ("IA", "Iowa, US"),
    ("KS", "Kansas, US"),
    ("KY", "Kentucky, US"),
    ("LA", "Louisiana, US"),
    ("ME", "Maine, US"),
    ("MD", "Maryland, US"),
    ("MA", "Massachusetts, US"),
    ("MI", "Michigan, US"),
    ("MN", "Minnesota, US"),
    ("MS", "Mississippi, US"),
    ("MO", "Missouri, US"),
    ("MT", "Montana, US"),
    ("NE", "Nebraska, US"),
    ("NV", "Nevada, US"),
    ("NH", "New Hampshire, US"),
    ("NJ", "New Jersey, US"),
    ("NM", "New Mexico, US"),
    ("NY", "New York, US"),
    ("NC", "North Carolina, US"),
    ("ND", "North Dakota, US"),
    ("OH", "Ohio, US"),
    ("OK", "Oklahoma, US"),
    ("OR", "Oregon, US"),
    ("PA", "Pennsylvania, US"),
    ("RI", "Rhode Island, US"),
    ("SC", "South Carolina, US"),
    ("SD", "South Dakota, US"),
    ("TN", "Tennessee, US"),
    ("TX", "Texas, US"),
    ("UT", "Utah, US"),
    ("VT", "Vermont, US"),
    ("VA", "Virginia, US"),
    ("WA", "Washington, US"),
    ("WV", "West Virginia, US"),
    ("WI", "Wisconsin, US"),
    ("WY", "Wyoming, US"),
    ("DC", "Washington DC, US"),
    // Canadian provinces
    ("ON", "Ontario, CA"),
    ("QC", "Quebec, CA"),
    ("BC", "British Columbia, CA"),
    ("AB", "Alberta, CA"),
    ("MB", "Manitoba, CA"),
    ("SK", "Saskatchewan, CA"),
    ("NS", "Nova Scotia, CA"),
    ("NB", "New Brunswick, CA"),
    ("NL", "Newfoundland, CA"),
    ("PE", "Prince Edward Island, CA"),
    ("NT", "Northwest Territories, CA"),
    ("YT", "Yukon, CA"),
    ("NU", "Nunavut, CA"),
    // Countries
    ("USA", "United States"),
    ("UK", "United Kingdom"),
    ("UAE", "United Arab Emirates"),
    ("JP", "Japan"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("AU", "Australia"),
    ("NZ", "New Zealand"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("MX", "Mexico"),
    ("BR", "Brazil"),
    ("IN", "India"),
    ("CN", "China"),
];

const MAJOR_CITIES: &[(&str, &str)] = &[
    ("san francisco", "San Francisco, CA, US"),
    ("los angeles", "Los Angeles, CA, US"),
    ("san diego", "San Diego, CA, US"),
    ("san jose", "San Jose, CA, US"),
    ("san ramon", "San Ramon, CA, US"),
    ("new york", "New York, NY, US"),
    ("chicago", "Chicago, IL, US"),
    ("houston", "Houston, TX, US"),
    ("phoenix", "Phoenix, AZ, US"),
    ("philadelphia", "Philadelphia, PA, US"),
    ("san antonio", "San Antonio, TX, US"),
    ("dallas", "Dallas, TX, US"),
    ("austin", "Austin, TX, US"),
    ("seattle", "Seattle, WA, US"),
    ("boston", "Boston, MA, US"),
    ("miami", "Miami, FL, US"),
    ("london", "London, UK"),
    ("paris", "Paris, FR"),
    ("tokyo", "Tokyo, JP"),
    ("sydney", "Sydney, AU"),
    ("toronto", "Toronto, CA"),
    ("vancouver", "Vancouver, CA"),
    ("berlin", "Berlin, DE"),
    ("madrid", "Madrid, ES"),
    ("rome", "Rome, IT"),
    ("amsterdam", "Amsterdam, NL"),
    ("dubai", "Dubai, AE"),
    ("singapore", "Singapore, SG"),
    ("hong kong", "Hong Kong, HK"),
    ("mumbai", "Mumbai, IN"),
    ("beijing", "Beijing, CN"),
    ("shanghai", "Shanghai, CN"),
];

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

/// Expand abbreviations and well-known city names.
///
/// Input that matches nothing comes back with its whitespace collapsed and
/// its commas spaced as `a, b`.
pub fn expand_location(input: &str) -> String {
    let location = input.split_whitespace().collect::<Vec<_>>().join(" ");

    if let Some(full) = lookup(REGIONS, &location.to_uppercase()) {
        return full.to_string();
    }
    if let Some(full) = lookup(MAJOR_CITIES, &location.to_lowercase()) {
        return full.to_string();
    }

    if location.contains(',') {
        return location
            .split(',')
            .map(str::trim)
            .collect::<Vec<_>>()
            .join(", ");
    }

    // "Austin TX" style: a trailing code becomes its own component.
    if let Some((city, last)) = location.rsplit_once(' ') {
        let code = last.to_uppercase();
        if let Some(full) = lookup(REGIONS, &code) {
            return match full.rsplit_once(", ") {
                Some((_, country)) => format!("{city}, {code}, {country}"),
                None => format!("{city}, {code}"),
            };
        }
        if code.len() <= 3 && code.chars().all(|c| c.is_ascii_uppercase()) {
            return format!("{city}, {code}");
        }
    }

    location
}

/// Parse `lat,lon` when both halves are numbers. Range checks are left to
/// the caller.
pub fn parse_coordinates(input: &str) -> Option<(f64, f64)> {
    let (lat, lon) = input.split_once(',')?;
    let lat = lat.trim().parse().ok()?;
    let lon = lon.trim().parse().ok()?;
    Some((lat, lon))
}
