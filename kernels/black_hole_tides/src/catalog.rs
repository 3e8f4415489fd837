// Catalog of well-known black holes

// A named black hole entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KnownBlackHole {
    // Display name, as it appears in reports
    pub name: &'static str,
    // Stable lowercase identifier the CLIs accept
    pub slug: &'static str,
    pub mass_solar: f64,
}

impl KnownBlackHole {
    #[inline]
    pub fn mass_kg(&self) -> f64 {
        crate::units::solar_masses_to_kg(self.mass_solar)
    }
}

// A small preset table so the CLIs and the frontend can offer real objects
// instead of asking everyone to remember masses. Mass values are the commonly
// quoted estimates, good to the precision this tool cares about.
pub const KNOWN_BLACK_HOLES: [KnownBlackHole; 4] = [
    // Stellar-mass X-ray binary, the classic "first confirmed" black hole
    KnownBlackHole {
        name: "Cygnus X-1",
        slug: "cygnus-x1",
        mass_solar: 21.0,
    },
    // The supermassive hole at the center of the Milky Way
    KnownBlackHole {
        name: "Sagittarius A*",
        slug: "sgr-a",
        mass_solar: 4.3e6,
    },
    // The EHT-imaged giant in Virgo
    KnownBlackHole {
        name: "M87*",
        slug: "m87",
        mass_solar: 6.5e9,
    },
    // Merger remnant of the first detected gravitational wave event
    KnownBlackHole {
        name: "GW150914 remnant",
        slug: "gw150914",
        mass_solar: 62.0,
    },
];

// Look up a catalog entry by its slug
pub fn find(slug: &str) -> Option<&'static KnownBlackHole> {
    KNOWN_BLACK_HOLES.iter().find(|bh| bh.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BlackHoleSpec;

    #[test]
    fn test_find_known_slugs() {
        assert_eq!(find("m87").unwrap().name, "M87*");
        assert_eq!(find("sgr-a").unwrap().mass_solar, 4.3e6);
        assert!(find("cygnus-x1").is_some());
        assert!(find("gw150914").is_some());
    }

    #[test]
    fn test_find_unknown_slug() {
        assert!(find("ton-618").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn test_slugs_are_unique() {
        for (i, a) in KNOWN_BLACK_HOLES.iter().enumerate() {
            for b in &KNOWN_BLACK_HOLES[i + 1..] {
                assert_ne!(a.slug, b.slug);
            }
        }
    }

    #[test]
    fn test_every_entry_builds_a_valid_spec() {
        for bh in &KNOWN_BLACK_HOLES {
            let spec = BlackHoleSpec::from_solar_masses(bh.mass_solar);
            assert!(spec.is_ok(), "catalog entry {} is invalid", bh.name);
            assert!((spec.unwrap().mass_kg() - bh.mass_kg()).abs() < 1e20);
        }
    }
}
