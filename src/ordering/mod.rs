//! # Ordering
//!
//! The product detail screen's form and the workflow that turns it into one written order.
//!
//! ```rust
//! use cafe_order::model::Item;
//! use cafe_order::ordering::OrderForm;
//!
//! let item = Item::new("latte", "Latte", 4.99, vec!["Small".into(), "Large".into()]).unwrap();
//! let mut form = OrderForm::new(item);
//! form.increment_quantity();
//! assert_eq!(form.formatted_total(), "$9.98");
//! ```

pub mod error;
pub mod form;
pub mod workflow;

pub use error::OrderError;
pub use form::{OrderForm, SubmissionState};
pub use workflow::OrderWorkflow;
