use std::time::Duration;

use crate::{DismissToken, ListQuery, ProductDraft, ProductId};

/// Side effects requested by [`crate::update`]. The core never performs IO itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    FetchProducts(ListQuery),
    FetchProduct { id: ProductId },
    CreateProduct { draft: ProductDraft },
    UpdateProduct { id: ProductId, draft: ProductDraft },
    DeleteProduct { id: ProductId },
    ScheduleDismiss { token: DismissToken, after: Duration },
    CancelDismiss { token: DismissToken },
}

impl Effect {
    /// True for effects that reach the backend.
    pub fn is_network(&self) -> bool {
        !matches!(
            self,
            Effect::ScheduleDismiss { .. } | Effect::CancelDismiss { .. }
        )
    }
}
