//! # Order Form
//!
//! The in-progress selection on the product detail screen. Mutators are plain in-memory
//! updates and never touch [`SubmissionState`]; only the workflow moves it.

use crate::model::item::format_price;
use crate::model::Item;

/// Where the form is in its submission lifecycle.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    /// The last attempt failed with this message. The next attempt starts over.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct OrderForm {
    item: Item,
    selected_size: String,
    quantity: u32,
    delivery_address: String,
    pub(crate) state: SubmissionState,
}

impl OrderForm {
    /// Opens a form for `item` with the item's default size, quantity 1 and no address.
    pub fn new(item: Item) -> Self {
        let selected_size = item.default_size().to_string();
        Self {
            item,
            selected_size,
            quantity: 1,
            delivery_address: String::new(),
            state: SubmissionState::Idle,
        }
    }

    pub fn item(&self) -> &Item {
        &self.item
    }

    pub fn selected_size(&self) -> &str {
        &self.selected_size
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn delivery_address(&self) -> &str {
        &self.delivery_address
    }

    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// Selects `size` if the item offers it; anything else is ignored.
    pub fn set_size(&mut self, size: &str) {
        if self.item.has_size(size) {
            self.selected_size = size.to_string();
        }
    }

    pub fn increment_quantity(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    /// Never goes below 1.
    pub fn decrement_quantity(&mut self) {
        if self.quantity > 1 {
            self.quantity -= 1;
        }
    }

    pub fn set_address(&mut self, text: impl Into<String>) {
        self.delivery_address = text.into();
    }

    /// Unit price times quantity.
    pub fn total_price(&self) -> f64 {
        self.item.price * f64::from(self.quantity)
    }

    /// Running total as shown next to the order button, e.g. `$9.98`.
    pub fn formatted_total(&self) -> String {
        format_price(self.total_price())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn latte() -> Item {
        Item::new(
            "latte",
            "Latte",
            4.99,
            vec!["Small".into(), "Medium".into(), "Large".into()],
        )
        .unwrap()
    }

    #[test]
    fn test_new_form_defaults() {
        let form = OrderForm::new(latte());
        assert_eq!(form.selected_size(), "Medium");
        assert_eq!(form.quantity(), 1);
        assert_eq!(form.delivery_address(), "");
        assert_eq!(form.state(), &SubmissionState::Idle);
    }

    #[test]
    fn test_decrement_stops_at_one() {
        let mut form = OrderForm::new(latte());
        form.decrement_quantity();
        assert_eq!(form.quantity(), 1);

        form.increment_quantity();
        form.increment_quantity();
        form.decrement_quantity();
        assert_eq!(form.quantity(), 2);
    }

    #[test]
    fn test_unknown_size_is_ignored() {
        let mut form = OrderForm::new(latte());
        form.set_size("Venti");
        assert_eq!(form.selected_size(), "Medium");

        form.set_size("Large");
        assert_eq!(form.selected_size(), "Large");
    }

    #[test]
    fn test_mutators_leave_state_alone() {
        let mut form = OrderForm::new(latte());
        form.state = SubmissionState::Failed("boom".into());

        form.set_size("Small");
        form.increment_quantity();
        form.set_address("12 Main St");

        assert_eq!(form.state(), &SubmissionState::Failed("boom".into()));
    }

    #[test]
    fn test_formatted_total() {
        let mut form = OrderForm::new(latte());
        form.increment_quantity();
        assert_eq!(form.total_price(), 9.98);
        assert_eq!(form.formatted_total(), "$9.98");
    }
}
