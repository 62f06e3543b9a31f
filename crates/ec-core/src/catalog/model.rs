use serde::{Deserialize, Serialize};

use crate::catalog::kind::ResourceKind;

/// Instructional video entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    pub thumb: String,
    pub duration: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
}

/// Support-network contact. Lives behind the directory gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub title: String,
    pub avatar: String,
    pub phone: String,
    pub email: String,
    pub department: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// A named care category bundling FAQs and an optional contact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pathway {
    pub id: String,
    pub title: String,
    pub color: String,
    pub icon: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub faqs: Vec<Faq>,
    #[serde(default)]
    pub contact: Option<Contact>,
}

/// Community event. Dates are ISO `YYYY-MM-DD` strings, which order
/// correctly under plain string comparison.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityEvent {
    pub id: String,
    pub title: String,
    pub date: String,
    pub time: String,
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub is_virtual: bool,
    #[serde(default)]
    pub registration_url: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// One normalized resource collection, tagged by kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceSet {
    Videos(Vec<Video>),
    Contacts(Vec<Contact>),
    Pathways(Vec<Pathway>),
    Events(Vec<CommunityEvent>),
}

impl ResourceSet {
    pub fn kind(&self) -> ResourceKind {
        match self {
            ResourceSet::Videos(_) => ResourceKind::Videos,
            ResourceSet::Contacts(_) => ResourceKind::Contacts,
            ResourceSet::Pathways(_) => ResourceKind::Pathways,
            ResourceSet::Events(_) => ResourceKind::Events,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ResourceSet::Videos(v) => v.len(),
            ResourceSet::Contacts(v) => v.len(),
            ResourceSet::Pathways(v) => v.len(),
            ResourceSet::Events(v) => v.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn into_videos(self) -> Option<Vec<Video>> {
        match self {
            ResourceSet::Videos(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_contacts(self) -> Option<Vec<Contact>> {
        match self {
            ResourceSet::Contacts(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_pathways(self) -> Option<Vec<Pathway>> {
        match self {
            ResourceSet::Pathways(v) => Some(v),
            _ => None,
        }
    }

    pub fn into_events(self) -> Option<Vec<CommunityEvent>> {
        match self {
            ResourceSet::Events(v) => Some(v),
            _ => None,
        }
    }
}
