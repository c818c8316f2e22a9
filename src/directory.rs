//! Static nearby-places directory, keyed by campus. Read-only data; the
//! only operations over it are campus lookup and category filtering.

use serde::Serialize;

use crate::session::Campus;

pub const PLACE_CATEGORIES: &[&str] = &["cafe", "restaurant", "shopping", "convenience"];

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NearbyPlace {
    pub id: &'static str,
    pub name: &'static str,
    pub category: &'static str,
    pub distance: &'static str,
    pub address: &'static str,
    pub rating: f64,
}

pub fn places_for(campus: Campus) -> &'static [NearbyPlace] {
    match campus {
        Campus::Chennai => CHENNAI_PLACES,
        Campus::Vellore => VELLORE_PLACES,
        Campus::Bhopal => BHOPAL_PLACES,
        Campus::Amaravati => AMARAVATI_PLACES,
    }
}

static VELLORE_PLACES: &[NearbyPlace] = &[
    NearbyPlace {
        id: "vlr-1",
        name: "Cafe Coffee Day",
        category: "cafe",
        distance: "0.5 km",
        address: "Katpadi Road, near main gate",
        rating: 4.2,
    },
    NearbyPlace {
        id: "vlr-2",
        name: "Hotel Darling Residency",
        category: "restaurant",
        distance: "2.1 km",
        address: "Officer's Line, Vellore",
        rating: 4.0,
    },
    NearbyPlace {
        id: "vlr-3",
        name: "VV Supermarket",
        category: "convenience",
        distance: "0.8 km",
        address: "Katpadi Junction",
        rating: 3.9,
    },
    NearbyPlace {
        id: "vlr-4",
        name: "Smart Shopping Mall",
        category: "shopping",
        distance: "3.4 km",
        address: "Gandhi Nagar, Vellore",
        rating: 4.1,
    },
    NearbyPlace {
        id: "vlr-5",
        name: "Aavin Parlour",
        category: "cafe",
        distance: "1.2 km",
        address: "Katpadi Road",
        rating: 4.3,
    },
];

static CHENNAI_PLACES: &[NearbyPlace] = &[
    NearbyPlace {
        id: "chn-1",
        name: "Chai Kings",
        category: "cafe",
        distance: "0.6 km",
        address: "Vandalur-Kelambakkam Road",
        rating: 4.1,
    },
    NearbyPlace {
        id: "chn-2",
        name: "A2B Veg Restaurant",
        category: "restaurant",
        distance: "1.5 km",
        address: "Kelambakkam",
        rating: 4.4,
    },
    NearbyPlace {
        id: "chn-3",
        name: "Marina Mall",
        category: "shopping",
        distance: "6.2 km",
        address: "OMR, Egattur",
        rating: 4.3,
    },
    NearbyPlace {
        id: "chn-4",
        name: "Nilgiris",
        category: "convenience",
        distance: "1.1 km",
        address: "Kelambakkam main road",
        rating: 3.8,
    },
];

static BHOPAL_PLACES: &[NearbyPlace] = &[
    NearbyPlace {
        id: "bpl-1",
        name: "Sagar Gaire Fast Food",
        category: "restaurant",
        distance: "2.3 km",
        address: "Ashta-Sehore bypass",
        rating: 4.0,
    },
    NearbyPlace {
        id: "bpl-2",
        name: "Cafe Nook",
        category: "cafe",
        distance: "0.9 km",
        address: "Kothri Kalan",
        rating: 3.9,
    },
    NearbyPlace {
        id: "bpl-3",
        name: "Reliance Smart Point",
        category: "convenience",
        distance: "1.8 km",
        address: "Sehore Road",
        rating: 3.7,
    },
];

static AMARAVATI_PLACES: &[NearbyPlace] = &[
    NearbyPlace {
        id: "amv-1",
        name: "Minerva Coffee Shop",
        category: "cafe",
        distance: "1.4 km",
        address: "Inavolu, Amaravati",
        rating: 4.2,
    },
    NearbyPlace {
        id: "amv-2",
        name: "Sweet Magic",
        category: "restaurant",
        distance: "2.6 km",
        address: "Mangalagiri Road",
        rating: 4.1,
    },
    NearbyPlace {
        id: "amv-3",
        name: "More Supermarket",
        category: "convenience",
        distance: "1.0 km",
        address: "Inavolu village centre",
        rating: 3.8,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_campus_has_entries() {
        for campus in [
            Campus::Chennai,
            Campus::Vellore,
            Campus::Bhopal,
            Campus::Amaravati,
        ] {
            assert!(!places_for(campus).is_empty());
        }
    }

    #[test]
    fn every_entry_uses_a_known_category() {
        for campus in [
            Campus::Chennai,
            Campus::Vellore,
            Campus::Bhopal,
            Campus::Amaravati,
        ] {
            for place in places_for(campus) {
                assert!(
                    PLACE_CATEGORIES.contains(&place.category),
                    "{} has unknown category {}",
                    place.id,
                    place.category
                );
            }
        }
    }
}
