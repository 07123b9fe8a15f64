//! Catalog of datacenter sites and their data halls offered by the
//! inspection flow.

#[derive(Debug, PartialEq, Eq)]
pub struct Site {
    pub name: &'static str,
    pub data_halls: &'static [&'static str],
}

impl Site {
    pub fn has_data_hall(&self, hall: &str) -> bool {
        self.data_halls.contains(&hall)
    }
}

pub const SITES: &[Site] = &[
    Site {
        name: "Data Center A",
        data_halls: &["Hall A", "Hall B", "Hall C"],
    },
    Site {
        name: "Data Center B",
        data_halls: &["Hall 1", "Hall 2"],
    },
    Site {
        name: "Data Center C",
        data_halls: &["North Hall", "South Hall"],
    },
];

pub fn find_site(name: &str) -> Option<&'static Site> {
    SITES.iter().find(|site| site.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn halls_belong_to_their_site() {
        let site = find_site("Data Center B").unwrap();
        assert!(site.has_data_hall("Hall 2"));
        assert!(!site.has_data_hall("Hall A"));
        assert!(find_site("Data Center Z").is_none());
    }
}
