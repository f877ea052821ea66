use serde::{Deserialize, Serialize};

/// One entry of the coding resources listing.
///
/// The listing is owned by the remote service; only the fields rendered by
/// the resources view are modelled. Unknown fields are ignored and missing
/// tag arrays decode as empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodingResource {
    pub id: i64,
    pub description: String,
    pub url: String,
    #[serde(default)]
    pub types: Vec<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub levels: Vec<String>,
}

/// Keep the first `limit` resources in received order.
pub fn take_top(mut resources: Vec<CodingResource>, limit: usize) -> Vec<CodingResource> {
    resources.truncate(limit);
    resources
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource(id: i64) -> CodingResource {
        CodingResource {
            id,
            description: format!("Resource {id}"),
            url: format!("https://example.com/{id}"),
            types: vec![],
            topics: vec![],
            levels: vec![],
        }
    }

    #[test]
    fn take_top_keeps_first_entries_in_order() {
        let all: Vec<_> = (1..=7).map(resource).collect();
        let top = take_top(all, 5);
        let ids: Vec<i64> = top.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn take_top_with_short_list_keeps_everything() {
        let all: Vec<_> = (1..=3).map(resource).collect();
        assert_eq!(take_top(all.clone(), 5), all);
        assert!(take_top(Vec::new(), 5).is_empty());
    }

    #[test]
    fn decodes_wire_shape_and_ignores_unknown_fields() {
        let json = r#"{
            "id": 4,
            "description": "MDN",
            "url": "https://developer.mozilla.org",
            "types": ["reference"],
            "topics": ["html", "css"],
            "levels": ["beginner", "advanced"],
            "extra": true
        }"#;
        let parsed: CodingResource = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.id, 4);
        assert_eq!(parsed.topics, vec!["html", "css"]);
        assert_eq!(parsed.levels.len(), 2);
    }

    #[test]
    fn missing_tag_arrays_default_to_empty() {
        let json = r#"{"id": 1, "description": "A", "url": "http://a"}"#;
        let parsed: CodingResource = serde_json::from_str(json).unwrap();
        assert!(parsed.types.is_empty());
        assert!(parsed.topics.is_empty());
        assert!(parsed.levels.is_empty());
    }
}
