use crate::view_model::{CatalogViewModel, FormView, LookupView, ProductRowView};
use crate::{
    CatalogConfig, ConfirmationGate, EditingContext, ListQuery, NotificationCenter, OfferFilter,
    Product, ProductForm, ProductId,
};

/// Owns the authoritative product list and every piece of UI state around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogState {
    config: CatalogConfig,
    products: Vec<Product>,
    total: u64,
    loading: bool,
    search: String,
    offer_filter: OfferFilter,
    lookup: Option<Product>,
    pub(crate) form: ProductForm,
    pub(crate) gate: ConfirmationGate,
    pub(crate) notifications: NotificationCenter,
    dirty: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::with_config(CatalogConfig::default())
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: CatalogConfig) -> Self {
        Self {
            config,
            products: Vec::new(),
            total: 0,
            loading: false,
            search: String::new(),
            offer_filter: OfferFilter::All,
            lookup: None,
            form: ProductForm::new(),
            gate: ConfirmationGate::new(),
            notifications: NotificationCenter::new(config.auto_dismiss),
            dirty: false,
        }
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    /// The last full snapshot received from the server.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Which record the form is bound to. The form owns this.
    pub fn editing(&self) -> EditingContext {
        self.form.mode()
    }

    pub fn pending_deletion(&self) -> Option<ProductId> {
        self.gate.pending()
    }

    pub fn form(&self) -> &ProductForm {
        &self.form
    }

    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn offer_filter(&self) -> OfferFilter {
        self.offer_filter
    }

    pub fn lookup(&self) -> Option<&Product> {
        self.lookup.as_ref()
    }

    /// Products whose name contains the search text, ignoring case.
    pub fn visible_products(&self) -> Vec<&Product> {
        let needle = self.search.to_lowercase();
        self.products
            .iter()
            .filter(|product| needle.is_empty() || product.name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn find_product(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }

    pub fn list_query(&self) -> ListQuery {
        ListQuery {
            skip: 0,
            limit: self.config.page_size,
            is_offer: self.offer_filter.as_query(),
        }
    }

    pub fn view(&self) -> CatalogViewModel {
        let products: Vec<ProductRowView> = self
            .visible_products()
            .into_iter()
            .map(ProductRowView::from_product)
            .collect();
        CatalogViewModel {
            loading: self.loading,
            total: self.total,
            loaded_count: self.products.len(),
            visible_count: products.len(),
            products,
            search: self.search.clone(),
            offer_filter: self.offer_filter,
            form: FormView::from_form(&self.form),
            pending_deletion: self.gate.pending(),
            notification: self.notifications.current().cloned(),
            lookup: self.lookup.as_ref().map(LookupView::from_product),
            dirty: self.dirty,
        }
    }

    /// Returns whether anything changed since the last call, and resets the flag.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn begin_loading(&mut self) {
        self.loading = true;
    }

    pub(crate) fn replace_products(&mut self, page: crate::ProductPage) {
        self.total = page.total;
        self.products = page.items;
        self.loading = false;
    }

    pub(crate) fn finish_loading(&mut self) {
        self.loading = false;
    }

    pub(crate) fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub(crate) fn set_offer_filter(&mut self, filter: OfferFilter) {
        self.offer_filter = filter;
    }

    pub(crate) fn set_lookup(&mut self, lookup: Option<Product>) {
        self.lookup = lookup;
    }
}
