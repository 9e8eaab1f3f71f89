use serde::{Deserialize, Serialize};

use crate::resource::Resource;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// Create payload for a product. The dashboard validates the price is
/// positive before submitting; the service persists whatever it receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDraft {
    pub name: String,
    pub price: f64,
}

impl Resource for Product {
    const NAME: &'static str = "products";
    const TITLE: &'static str = "Product";

    type Draft = ProductDraft;

    fn from_draft(id: String, draft: ProductDraft) -> Self {
        Self { id, name: draft.name, price: draft.price }
    }

    fn id(&self) -> &str {
        &self.id
    }
}
