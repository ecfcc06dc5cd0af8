use crate::format::{format_date_label, format_price_eur};
use crate::{EditingContext, Notification, OfferFilter, Product, ProductForm, ProductId};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CatalogViewModel {
    pub loading: bool,
    /// Server-reported total for the current offer filter.
    pub total: u64,
    pub loaded_count: usize,
    pub visible_count: usize,
    pub products: Vec<ProductRowView>,
    pub search: String,
    pub offer_filter: OfferFilter,
    pub form: FormView,
    pub pending_deletion: Option<ProductId>,
    pub notification: Option<Notification>,
    pub lookup: Option<LookupView>,
    pub dirty: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductRowView {
    pub id: ProductId,
    pub name: String,
    pub price_label: String,
    pub offer: bool,
    pub created_label: String,
}

impl ProductRowView {
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            id: product.id,
            name: product.name.clone(),
            price_label: format_price_eur(product.price),
            offer: product.is_offer,
            created_label: format_date_label(&product.created_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupView {
    pub row: ProductRowView,
    pub updated_label: String,
}

impl LookupView {
    pub(crate) fn from_product(product: &Product) -> Self {
        Self {
            row: ProductRowView::from_product(product),
            updated_label: format_date_label(&product.updated_at),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FormView {
    pub mode: EditingContext,
    pub title: String,
    pub submit_label: &'static str,
    pub name: String,
    pub price: String,
    pub is_offer: bool,
    pub error: Option<String>,
}

impl FormView {
    pub(crate) fn from_form(form: &ProductForm) -> Self {
        let (title, submit_label) = match form.mode() {
            EditingContext::Creating => ("Create product".to_string(), "Create"),
            EditingContext::Editing(id) => (format!("Update product #{id}"), "Update"),
        };
        Self {
            mode: form.mode(),
            title,
            submit_label,
            name: form.name().to_string(),
            price: form.price().to_string(),
            is_offer: form.is_offer(),
            error: form.error().map(ToString::to_string),
        }
    }
}
