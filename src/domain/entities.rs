use serde::Deserialize;

// The serialization within this layer is a dependency leak, but its a pragmatic approach
// One browse page of the upstream NEO catalog.
#[derive(Debug, Deserialize)]
pub struct NeoBrowsePage {
    // Some upstream responses omit the array entirely; decode that as empty.
    #[serde(default)]
    pub near_earth_objects: Vec<NeoCatalogEntry>,
}

// A single catalog entry, reduced to the fields this service exposes.
#[derive(Clone, Debug, Deserialize)]
pub struct NeoCatalogEntry {
    pub id: String,
    // Canonical full designation. Upstream also carries a truncated
    // `name_limited` variant; it is never read.
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn when_browse_array_is_absent_then_page_decodes_as_empty() {
        let page: NeoBrowsePage =
            serde_json::from_str(r#"{"page":{"number":0,"size":20}}"#)
                .expect("expected page to decode");

        assert!(page.near_earth_objects.is_empty());
    }

    #[test]
    fn when_entry_carries_both_name_fields_then_the_full_name_is_used() {
        let body = r#"{
            "near_earth_objects": [
                {
                    "id": "2021277",
                    "name": "1021 Flammario (1924 RG)",
                    "name_limited": "Flammario",
                    "absolute_magnitude_h": 14.43
                }
            ]
        }"#;

        let page: NeoBrowsePage = serde_json::from_str(body).expect("expected page to decode");

        assert_eq!(page.near_earth_objects.len(), 1);
        assert_eq!(page.near_earth_objects[0].id, "2021277");
        assert_eq!(page.near_earth_objects[0].name, "1021 Flammario (1924 RG)");
    }

    #[test]
    fn when_entries_carry_unknown_fields_then_they_are_ignored() {
        let body = r#"{
            "links": {"next": "https://example.test/neo/browse?page=1"},
            "near_earth_objects": [
                {"id": "3542519", "name": "(2010 PK9)", "is_potentially_hazardous_asteroid": true},
                {"id": "2162038", "name": "162038 (1996 DH)", "estimated_diameter": {}}
            ]
        }"#;

        let page: NeoBrowsePage = serde_json::from_str(body).expect("expected page to decode");

        assert_eq!(page.near_earth_objects.len(), 2);
        assert_eq!(page.near_earth_objects[1].name, "162038 (1996 DH)");
    }
}
