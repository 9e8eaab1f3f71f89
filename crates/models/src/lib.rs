//! Record types shared by the services and the dashboard.
//! - Wire shapes match the stored documents exactly (`_id` included).
//! - Drafts are the create payloads: the same fields minus identity.
//! - `Resource` is the seam that lets one service/store/client template
//!   serve both domains.

pub mod product;
pub mod resource;
pub mod user;

pub use product::{Product, ProductDraft};
pub use resource::Resource;
pub use user::{User, UserDraft};
