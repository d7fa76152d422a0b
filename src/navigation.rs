//! # Navigation
//!
//! Screen transitions are not performed by the workflow or the session layer. They return a
//! [`NavigationIntent`] and the caller applies it to its own [`NavigationState`], so there is no
//! global navigation singleton to reach into.

use crate::model::Item;
use crate::store::DocumentId;
use tracing::debug;

/// The screens of the app.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Login,
    Menu,
    ProductDetails(Item),
    ThankYou,
    AddProduct,
}

/// A requested screen transition.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationIntent {
    /// A menu card was tapped.
    OpenProduct(Item),
    /// The order write succeeded; show the confirmation screen.
    OrderPlaced { order_id: DocumentId },
    /// "Back" from the detail screen or "back to menu" from the confirmation screen.
    BackToMenu,
    AddProduct,
    /// The session ended.
    LoggedOut,
}

/// The navigation controller's current screen.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState {
    current: Screen,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            current: Screen::Login,
        }
    }
}

impl NavigationState {
    pub fn new(start: Screen) -> Self {
        Self { current: start }
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    /// Applies an intent and returns the screen now shown.
    pub fn apply(&mut self, intent: NavigationIntent) -> &Screen {
        let next = match intent {
            NavigationIntent::OpenProduct(item) => Screen::ProductDetails(item),
            NavigationIntent::OrderPlaced { .. } => Screen::ThankYou,
            NavigationIntent::BackToMenu => Screen::Menu,
            NavigationIntent::AddProduct => Screen::AddProduct,
            NavigationIntent::LoggedOut => Screen::Login,
        };
        debug!(from = ?self.current, to = ?next, "Navigate");
        self.current = next;
        &self.current
    }

    /// Called once an order has been placed.
    pub fn notify_succeeded(&mut self, order_id: DocumentId) -> &Screen {
        self.apply(NavigationIntent::OrderPlaced { order_id })
    }

    /// Called once the session has ended.
    pub fn notify_logged_out(&mut self) -> &Screen {
        self.apply(NavigationIntent::LoggedOut)
    }
}
