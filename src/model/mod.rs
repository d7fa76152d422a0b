//! Pure data structures read from and written to the document store.

pub mod item;
pub mod order;
pub mod user;

pub use item::*;
pub use order::*;
pub use user::*;
