pub mod events;
pub mod kind;
pub mod model;
pub mod normalize;

pub use kind::ResourceKind;
pub use model::{CommunityEvent, Contact, Faq, Pathway, ResourceSet, Video};
pub use normalize::normalize;
