//! Represents a placed order as written to the orders collection.
//!
//! An `Order` is built once by the submission workflow and written once. This crate never
//! changes it afterwards; status changes belong to whoever fulfils the order.
use crate::model::{ItemId, UserId};
use crate::store::{Document, NewDocument};
use serde::{Deserialize, Serialize};

/// Field the store stamps with its own write time.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Fulfilment status at creation. Later transitions belong to whoever fulfils the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub user_id: UserId,
    pub item_id: ItemId,
    pub item_name: String,
    pub size: String,
    pub quantity: u32,
    pub total_price: f64,
    pub delivery_address: String,
    pub status: OrderStatus,
}

impl Order {
    /// Converts the order into a write payload whose `createdAt` the store fills in.
    pub fn to_document(&self) -> Result<NewDocument, serde_json::Error> {
        Ok(NewDocument::from_record(self)?.with_server_timestamp(CREATED_AT_FIELD))
    }

    /// Reads an order back from a stored document. Extra fields such as `createdAt` are ignored.
    pub fn from_document(doc: &Document) -> Result<Self, serde_json::Error> {
        serde_json::from_value(serde_json::Value::Object(doc.fields.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Order {
        Order {
            user_id: UserId::from("u1"),
            item_id: ItemId::from("latte"),
            item_name: "Latte".to_string(),
            size: "Medium".to_string(),
            quantity: 2,
            total_price: 9.98,
            delivery_address: "12 Main St".to_string(),
            status: OrderStatus::Pending,
        }
    }

    #[test]
    fn test_document_uses_wire_field_names() {
        let doc = sample().to_document().unwrap();

        assert_eq!(
            doc.fields,
            json!({
                "userId": "u1",
                "itemId": "latte",
                "itemName": "Latte",
                "size": "Medium",
                "quantity": 2,
                "totalPrice": 9.98,
                "deliveryAddress": "12 Main St",
                "status": "pending",
            })
        );
        assert_eq!(doc.server_timestamps, vec![CREATED_AT_FIELD.to_string()]);
    }

    #[test]
    fn test_reads_back_from_stored_document() {
        let mut fields = match sample().to_document().unwrap().fields {
            serde_json::Value::Object(map) => map,
            _ => panic!("expected object"),
        };
        fields.insert(CREATED_AT_FIELD.to_string(), json!("2026-01-01T00:00:00Z"));

        let order = Order::from_document(&Document::new("order_1", fields)).unwrap();
        assert_eq!(order, sample());
    }

    #[test]
    fn test_only_pending_status_is_modeled() {
        assert_eq!(
            serde_json::from_value::<OrderStatus>(json!("pending")).unwrap(),
            OrderStatus::Pending
        );
        assert!(serde_json::from_value::<OrderStatus>(json!("cancelled")).is_err());
    }
}
