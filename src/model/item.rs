//! Represents a purchasable drink on the menu.
//!
//! Items are read-only: they are built from documents of the drinks collection by
//! [`Item::from_document`] and never written back. Construction validates the record, so an
//! `Item` value always has an id, a name, a usable price and at least one size.
use crate::store::{Document, DocumentId};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use thiserror::Error;

/// Type-safe identifier for Items (the store's document id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<DocumentId> for ItemId {
    fn from(id: DocumentId) -> Self {
        Self(id.0)
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Why a record could not become an [`Item`].
#[derive(Debug, Clone, Error, PartialEq)]
pub enum InvalidItem {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("invalid price: {0}")]
    InvalidPrice(f64),

    #[error("item has no sizes")]
    NoSizes,
}

/// What the UI should show for an item's picture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource<'a> {
    Asset(&'a str),
    Placeholder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    pub price: f64,
    pub description: String,
    sizes: Vec<String>,
    image: Option<String>,
}

impl Item {
    /// Creates a new Item.
    ///
    /// # Arguments
    /// * `id` - Store-assigned identifier, must not be empty
    /// * `name` - Display name
    /// * `price` - Unit price, finite and non-negative
    /// * `sizes` - Size labels in display order; duplicates are collapsed
    ///
    /// # Errors
    /// Returns [`InvalidItem`] if the id is empty, the price is unusable or no size remains.
    pub fn new(
        id: impl Into<ItemId>,
        name: impl Into<String>,
        price: f64,
        sizes: Vec<String>,
    ) -> Result<Self, InvalidItem> {
        let id = id.into();
        if id.0.is_empty() {
            return Err(InvalidItem::MissingField("id"));
        }
        if !price.is_finite() || price < 0.0 {
            return Err(InvalidItem::InvalidPrice(price));
        }

        let mut distinct: Vec<String> = Vec::with_capacity(sizes.len());
        for size in sizes {
            if !distinct.contains(&size) {
                distinct.push(size);
            }
        }
        if distinct.is_empty() {
            return Err(InvalidItem::NoSizes);
        }

        Ok(Self {
            id,
            name: name.into(),
            price,
            description: String::new(),
            sizes: distinct,
            image: None,
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the image reference. `"null"` and empty names mean "no image".
    pub fn with_image(mut self, image: impl Into<String>) -> Self {
        let image = image.into();
        self.image = if image.is_empty() || image == "null" {
            None
        } else {
            Some(image)
        };
        self
    }

    /// Builds an Item from a drinks document.
    ///
    /// `name`, `price` and `sizes` are required; `description` defaults to empty and
    /// `imageFilename` is optional.
    pub fn from_document(doc: &Document) -> Result<Self, InvalidItem> {
        let name = doc
            .str_field("name")
            .ok_or(InvalidItem::MissingField("name"))?;
        let price = doc
            .number_field("price")
            .ok_or(InvalidItem::MissingField("price"))?;
        let sizes = doc.string_list_field("sizes").unwrap_or_default();

        let mut item = Self::new(doc.id.clone(), name, price, sizes)?;
        if let Some(description) = doc.str_field("description") {
            item = item.with_description(description);
        }
        if let Some(image) = doc.str_field("imageFilename") {
            item = item.with_image(image);
        }
        Ok(item)
    }

    pub fn sizes(&self) -> &[String] {
        &self.sizes
    }

    pub fn has_size(&self, size: &str) -> bool {
        self.sizes.iter().any(|s| s == size)
    }

    /// The size preselected on the detail screen: the middle option of a three-or-more list,
    /// otherwise the first.
    pub fn default_size(&self) -> &str {
        if self.sizes.len() >= 3 {
            &self.sizes[1]
        } else {
            &self.sizes[0]
        }
    }

    pub fn image_source(&self) -> ImageSource<'_> {
        match &self.image {
            Some(name) => ImageSource::Asset(name),
            None => ImageSource::Placeholder,
        }
    }

    /// Price as shown on the menu card, e.g. `$4.99`.
    pub fn formatted_price(&self) -> String {
        format_price(self.price)
    }
}

pub(crate) fn format_price(amount: f64) -> String {
    format!("${:.2}", amount)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn doc(id: &str, value: Value) -> Document {
        match value {
            Value::Object(fields) => Document::new(id, fields),
            _ => panic!("expected object"),
        }
    }

    fn sizes(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_from_document_full_record() {
        let item = Item::from_document(&doc(
            "latte",
            json!({
                "name": "Café Latte",
                "price": 4.99,
                "description": "Espresso with steamed milk",
                "sizes": ["Small", "Medium", "Large"],
                "imageFilename": "latte.png",
            }),
        ))
        .unwrap();

        assert_eq!(item.id, ItemId::from("latte"));
        assert_eq!(item.name, "Café Latte");
        assert_eq!(item.price, 4.99);
        assert_eq!(item.description, "Espresso with steamed milk");
        assert_eq!(item.sizes(), &sizes(&["Small", "Medium", "Large"])[..]);
        assert_eq!(item.image_source(), ImageSource::Asset("latte.png"));
    }

    #[test]
    fn test_from_document_rejects_missing_required_fields() {
        let no_name = doc("a", json!({"price": 1.0, "sizes": ["One"]}));
        let no_price = doc("b", json!({"name": "Tea", "sizes": ["One"]}));
        let text_price = doc("c", json!({"name": "Tea", "price": "2", "sizes": ["One"]}));

        assert_eq!(
            Item::from_document(&no_name),
            Err(InvalidItem::MissingField("name"))
        );
        assert_eq!(
            Item::from_document(&no_price),
            Err(InvalidItem::MissingField("price"))
        );
        assert_eq!(
            Item::from_document(&text_price),
            Err(InvalidItem::MissingField("price"))
        );
    }

    #[test]
    fn test_from_document_rejects_empty_id_bad_price_and_no_sizes() {
        let empty_id = doc("", json!({"name": "Tea", "price": 1.0, "sizes": ["One"]}));
        let negative = doc("n", json!({"name": "Tea", "price": -1.0, "sizes": ["One"]}));
        let no_sizes = doc("s", json!({"name": "Tea", "price": 1.0}));

        assert_eq!(
            Item::from_document(&empty_id),
            Err(InvalidItem::MissingField("id"))
        );
        assert_eq!(
            Item::from_document(&negative),
            Err(InvalidItem::InvalidPrice(-1.0))
        );
        assert_eq!(Item::from_document(&no_sizes), Err(InvalidItem::NoSizes));
    }

    #[test]
    fn test_optional_fields_default() {
        let item = Item::from_document(&doc(
            "tea",
            json!({"name": "Tea", "price": 2, "sizes": ["Regular"], "imageFilename": "null"}),
        ))
        .unwrap();

        assert_eq!(item.price, 2.0);
        assert_eq!(item.description, "");
        assert_eq!(item.image_source(), ImageSource::Placeholder);
    }

    #[test]
    fn test_duplicate_sizes_collapse() {
        let item = Item::new("x", "X", 1.0, sizes(&["Small", "Large", "Small"])).unwrap();
        assert_eq!(item.sizes(), &sizes(&["Small", "Large"])[..]);
    }

    #[test]
    fn test_default_size() {
        let three = Item::new("a", "A", 1.0, sizes(&["Small", "Medium", "Large"])).unwrap();
        let two = Item::new("b", "B", 1.0, sizes(&["Small", "Large"])).unwrap();
        let one = Item::new("c", "C", 1.0, sizes(&["Only"])).unwrap();

        assert_eq!(three.default_size(), "Medium");
        assert_eq!(two.default_size(), "Small");
        assert_eq!(one.default_size(), "Only");
    }

    #[test]
    fn test_formatted_price() {
        let item = Item::new("a", "A", 4.5, sizes(&["One"])).unwrap();
        assert_eq!(item.formatted_price(), "$4.50");
    }
}
