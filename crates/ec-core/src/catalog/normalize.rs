//! Field mapping from loosely-typed upstream payloads onto canonical records.
//!
//! Upstream key names vary between deployments (legacy exports prefix the id
//! column with the table name, e.g. `expat-contacts`), and optional fields
//! are frequently absent. All reshaping lives here as pure functions rather
//! than ad hoc at call sites.

use serde_json::Value;

use crate::catalog::kind::ResourceKind;
use crate::catalog::model::{CommunityEvent, Contact, Pathway, ResourceSet, Video};

/// Map a raw upstream array onto the canonical record set for `kind`.
pub fn normalize(kind: ResourceKind, raw: &[Value]) -> ResourceSet {
    match kind {
        ResourceKind::Videos => ResourceSet::Videos(raw.iter().map(video_from_raw).collect()),
        ResourceKind::Contacts => {
            ResourceSet::Contacts(raw.iter().map(contact_from_raw).collect())
        }
        ResourceKind::Pathways => {
            ResourceSet::Pathways(raw.iter().map(pathway_from_raw).collect())
        }
        ResourceKind::Events => ResourceSet::Events(raw.iter().map(event_from_raw).collect()),
    }
}

fn video_from_raw(item: &Value) -> Video {
    Video {
        id: id_from(item, "expat-videos"),
        title: str_or(item, "title", "Untitled"),
        url: str_or(item, "url", ""),
        thumb: str_or(item, "thumb", "https://picsum.photos/300/200?random=1"),
        duration: str_or(item, "duration", "0:00"),
        category: str_or(item, "category", "General"),
        description: str_or(item, "description", ""),
    }
}

fn contact_from_raw(item: &Value) -> Contact {
    Contact {
        id: id_from(item, "expat-contacts"),
        name: str_or(item, "name", "Unknown"),
        title: str_or(item, "title", "Staff Member"),
        avatar: str_or(item, "avatar", "https://picsum.photos/100/100?random=1"),
        phone: str_or(item, "phone", ""),
        email: str_or(item, "email", ""),
        department: str_or(item, "department", "General"),
    }
}

fn pathway_from_raw(item: &Value) -> Pathway {
    Pathway {
        id: id_from(item, "expat-pathways"),
        title: str_or(item, "title", "Pathway"),
        color: str_or(item, "color", "#2160DC"),
        icon: str_or(item, "icon", "help-circle"),
        description: str_or(item, "description", ""),
        faqs: item
            .get("faqs")
            .and_then(|v| serde_json::from_value(v.clone()).ok())
            .unwrap_or_default(),
        contact: item
            .get("contact")
            .filter(|v| v.is_object())
            .map(contact_from_raw),
    }
}

fn event_from_raw(item: &Value) -> CommunityEvent {
    CommunityEvent {
        id: id_from(item, "expat-events"),
        title: str_or(item, "title", "Untitled"),
        date: str_or(item, "date", ""),
        time: str_or(item, "time", ""),
        location: str_or(item, "location", ""),
        description: str_or(item, "description", ""),
        category: str_or(item, "category", "General"),
        is_virtual: item
            .get("isVirtual")
            .or_else(|| item.get("is_virtual"))
            .and_then(Value::as_bool)
            .unwrap_or(false),
        registration_url: opt_str(item, "registrationUrl").or_else(|| opt_str(item, "registration_url")),
        image: opt_str(item, "image"),
    }
}

/// Prefer the legacy table-prefixed id key, then `id`, then a sentinel.
fn id_from(item: &Value, alt_key: &str) -> String {
    item.get(alt_key)
        .or_else(|| item.get("id"))
        .and_then(Value::as_str)
        .unwrap_or("unknown")
        .to_string()
}

fn str_or(item: &Value, key: &str, default: &str) -> String {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn opt_str(item: &Value, key: &str) -> Option<String> {
    item.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn contact_maps_legacy_id_key() {
        let raw = vec![json!({
            "expat-contacts": "c-17",
            "name": "Dana Reyes",
            "title": "Regional Director",
            "phone": "+1-555-0117",
            "email": "dana@example.org"
        })];

        let set = normalize(ResourceKind::Contacts, &raw);
        let contacts = set.into_contacts().unwrap();

        assert_eq!(contacts[0].id, "c-17");
        assert_eq!(contacts[0].name, "Dana Reyes");
        assert_eq!(contacts[0].department, "General");
        assert!(contacts[0].avatar.starts_with("https://picsum.photos/"));
    }

    #[test]
    fn contact_falls_back_to_plain_id_then_sentinel() {
        let raw = vec![json!({"id": "42"}), json!({})];

        let contacts = normalize(ResourceKind::Contacts, &raw)
            .into_contacts()
            .unwrap();

        assert_eq!(contacts[0].id, "42");
        assert_eq!(contacts[1].id, "unknown");
        assert_eq!(contacts[1].name, "Unknown");
        assert_eq!(contacts[1].title, "Staff Member");
    }

    #[test]
    fn video_defaults_fill_missing_fields() {
        let raw = vec![json!({"expat-videos": "v-1", "title": "Settling In"})];

        let videos = normalize(ResourceKind::Videos, &raw).into_videos().unwrap();

        assert_eq!(videos[0].id, "v-1");
        assert_eq!(videos[0].duration, "0:00");
        assert_eq!(videos[0].category, "General");
        assert_eq!(videos[0].url, "");
    }

    #[test]
    fn pathway_defaults_match_upstream_conventions() {
        let raw = vec![json!({"id": "p-1"})];

        let pathways = normalize(ResourceKind::Pathways, &raw)
            .into_pathways()
            .unwrap();

        assert_eq!(pathways[0].title, "Pathway");
        assert_eq!(pathways[0].color, "#2160DC");
        assert_eq!(pathways[0].icon, "help-circle");
        assert!(pathways[0].faqs.is_empty());
        assert!(pathways[0].contact.is_none());
    }

    #[test]
    fn pathway_nested_contact_and_faqs_survive() {
        let raw = vec![json!({
            "id": "p-2",
            "title": "Crisis Care",
            "faqs": [{"id": "f-1", "question": "Who do I call?", "answer": "Your coordinator."}],
            "contact": {"id": "c-1", "name": "On-call Counselor"}
        })];

        let pathways = normalize(ResourceKind::Pathways, &raw)
            .into_pathways()
            .unwrap();

        assert_eq!(pathways[0].faqs.len(), 1);
        assert_eq!(pathways[0].faqs[0].question, "Who do I call?");
        let contact = pathways[0].contact.as_ref().unwrap();
        assert_eq!(contact.name, "On-call Counselor");
    }

    #[test]
    fn event_accepts_both_casing_conventions() {
        let raw = vec![
            json!({"id": "e-1", "date": "2026-09-01", "isVirtual": true, "registrationUrl": "https://example.org/r"}),
            json!({"id": "e-2", "date": "2026-09-02", "is_virtual": true, "registration_url": "https://example.org/r2"}),
        ];

        let events = normalize(ResourceKind::Events, &raw).into_events().unwrap();

        assert!(events[0].is_virtual);
        assert_eq!(events[0].registration_url.as_deref(), Some("https://example.org/r"));
        assert!(events[1].is_virtual);
        assert_eq!(events[1].registration_url.as_deref(), Some("https://example.org/r2"));
    }

    #[test]
    fn empty_input_normalizes_to_empty_set() {
        let set = normalize(ResourceKind::Contacts, &[]);
        assert!(set.is_empty());
        assert_eq!(set.kind(), ResourceKind::Contacts);
    }
}
