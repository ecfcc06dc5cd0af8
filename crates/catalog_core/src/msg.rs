use crate::{
    DismissToken, EditingContext, OfferFilter, Product, ProductDraft, ProductId, ProductPage,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Reload the whole collection from the server.
    LoadRequested,
    ProductsLoaded(ProductPage),
    LoadFailed { detail: String },

    /// Form field edits.
    NameChanged(String),
    PriceChanged(String),
    OfferToggled(bool),
    SubmitClicked,
    ProductCreated(Product),
    ProductUpdated(Product),
    /// A create or update call failed; carries the draft so it can be refilled.
    SaveFailed {
        context: EditingContext,
        draft: ProductDraft,
        detail: String,
    },

    /// User clicked Edit on a listed product.
    EditClicked(ProductId),
    CancelEditClicked,

    /// User clicked Delete; opens the confirmation gate.
    DeleteClicked(ProductId),
    DeleteConfirmed,
    DeleteCancelled,
    ProductDeleted { id: ProductId, message: String },
    DeleteFailed { id: ProductId, detail: String },

    SearchChanged(String),
    OfferFilterChanged(OfferFilter),

    /// Fetch a single product by id.
    LookupRequested(ProductId),
    LookupSucceeded(Product),
    LookupFailed {
        id: ProductId,
        detail: String,
        not_found: bool,
    },
    LookupCleared,

    NotificationDismissed,
    NotificationExpired { token: DismissToken },

    /// Fallback for placeholder wiring.
    NoOp,
}
