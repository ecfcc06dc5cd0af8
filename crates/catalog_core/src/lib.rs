//! Catalog core: domain model, pure state machine and view-model helpers.
mod config;
mod confirm;
mod effect;
mod form;
pub mod format;
mod model;
mod msg;
mod notification;
mod state;
mod update;
mod view_model;

pub use config::{CatalogConfig, DEFAULT_AUTO_DISMISS, DEFAULT_PAGE_SIZE};
pub use confirm::ConfirmationGate;
pub use effect::Effect;
pub use form::{
    parse_price, EditingContext, FormError, ProductForm, NAME_MAX_CHARS, PRICE_MAX_DECIMALS,
};
pub use model::{
    DeleteReceipt, ListQuery, OfferFilter, Product, ProductDraft, ProductId, ProductPage,
    ProductPatch,
};
pub use msg::Msg;
pub use notification::{DismissToken, Notification, NotificationCenter, Severity};
pub use state::CatalogState;
pub use update::update;
pub use view_model::{CatalogViewModel, FormView, LookupView, ProductRowView};
