//! Product model, input payload, and external representation.

use serde::Serialize;
use serde_json::{Map, Value};
use sqlx::FromRow;

use shopfront_core::types::{DbId, Timestamp};

/// A row from the `products` table.
///
/// Clients define the product schema themselves: the payload submitted at
/// create/update time is stored verbatim in the `attributes` JSONB column.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub attributes: Value,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Open key-value payload accepted from clients.
///
/// Deserializing through a JSON map rejects non-object bodies (arrays,
/// scalars) at the extractor boundary; field-level constraints are out of
/// scope here.
pub type ProductInput = Map<String, Value>;

/// External representation of a [`Product`].
///
/// The flattened attribute map plus the system-assigned identifier. This is
/// the only shape product-carrying responses expose; storage rows never leave
/// the service directly.
#[derive(Debug, Clone, Serialize)]
pub struct ProductResource {
    pub id: DbId,
    #[serde(flatten)]
    pub attributes: Map<String, Value>,
}

impl From<Product> for ProductResource {
    fn from(product: Product) -> Self {
        let mut attributes = match product.attributes {
            Value::Object(map) => map,
            // The column default and both write paths only store objects.
            _ => Map::new(),
        };
        // The system identifier wins over any client-supplied "id" attribute.
        attributes.remove("id");
        Self {
            id: product.id,
            attributes,
        }
    }
}
