//! Product Models

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use cart_app::domain::products::models::Product;

/// Product Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductResponse {
    /// Product id
    pub id: i64,

    /// Product description, unique across the catalog
    pub description: String,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id.into_i64(),
            description: product.description,
        }
    }
}
