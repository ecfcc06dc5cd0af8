use crate::{CatalogState, EditingContext, Effect, Msg, Severity};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: CatalogState, msg: Msg) -> (CatalogState, Vec<Effect>) {
    let effects = match msg {
        Msg::LoadRequested => reload(&mut state),
        Msg::ProductsLoaded(page) => {
            state.replace_products(page);
            Vec::new()
        }
        Msg::LoadFailed { detail } => {
            // The previous snapshot stays in place.
            state.finish_loading();
            state
                .notifications
                .show(format!("Could not load products: {detail}"), Severity::Error)
        }
        Msg::NameChanged(name) => {
            state.form.set_name(name);
            Vec::new()
        }
        Msg::PriceChanged(price) => {
            state.form.set_price(price);
            Vec::new()
        }
        Msg::OfferToggled(is_offer) => {
            state.form.set_offer(is_offer);
            Vec::new()
        }
        Msg::SubmitClicked => match state.form.submit() {
            Ok(draft) => match state.editing() {
                EditingContext::Creating => vec![Effect::CreateProduct { draft }],
                EditingContext::Editing(id) => vec![Effect::UpdateProduct { id, draft }],
            },
            Err(err) => state
                .notifications
                .show(format!("Invalid product: {err}"), Severity::Warning),
        },
        Msg::ProductCreated(product) => {
            let mut effects = state.notifications.show(
                format!("Product '{}' created", product.name),
                Severity::Success,
            );
            finish_edit(&mut state);
            effects.extend(reload(&mut state));
            effects
        }
        Msg::ProductUpdated(product) => {
            let mut effects = state.notifications.show(
                format!("Product '{}' updated", product.name),
                Severity::Success,
            );
            finish_edit(&mut state);
            effects.extend(reload(&mut state));
            effects
        }
        Msg::SaveFailed {
            context,
            draft,
            detail,
        } => {
            // Editing context is left alone so the user can retry.
            if state.form.is_blank() {
                state.form.restore(&draft);
            }
            let message = match context {
                EditingContext::Creating => format!("Could not create product: {detail}"),
                EditingContext::Editing(id) => {
                    format!("Could not update product #{id}: {detail}")
                }
            };
            state.notifications.show(message, Severity::Error)
        }
        Msg::EditClicked(id) => match state.find_product(id).cloned() {
            Some(product) => {
                state.form.seed(&product);
                Vec::new()
            }
            None => state.notifications.show(
                format!("Product #{id} is no longer in the list"),
                Severity::Warning,
            ),
        },
        Msg::CancelEditClicked => {
            state.form.clear();
            Vec::new()
        }
        Msg::DeleteClicked(id) => {
            state.gate.open(id);
            Vec::new()
        }
        Msg::DeleteConfirmed => match state.gate.confirm() {
            Some(id) => vec![Effect::DeleteProduct { id }],
            None => return (state, Vec::new()),
        },
        Msg::DeleteCancelled => {
            state.gate.cancel();
            Vec::new()
        }
        Msg::ProductDeleted { id, message } => {
            if state.lookup().is_some_and(|product| product.id == id) {
                state.set_lookup(None);
            }
            let message = if message.trim().is_empty() {
                format!("Product #{id} deleted")
            } else {
                message
            };
            let mut effects = state.notifications.show(message, Severity::Success);
            effects.extend(reload(&mut state));
            effects
        }
        Msg::DeleteFailed { id, detail } => state.notifications.show(
            format!("Could not delete product #{id}: {detail}"),
            Severity::Error,
        ),
        Msg::SearchChanged(text) => {
            state.set_search(text);
            Vec::new()
        }
        Msg::OfferFilterChanged(filter) => {
            state.set_offer_filter(filter);
            reload(&mut state)
        }
        Msg::LookupRequested(id) => vec![Effect::FetchProduct { id }],
        Msg::LookupSucceeded(product) => {
            let message = format!("Found product #{}", product.id);
            state.set_lookup(Some(product));
            state.notifications.show(message, Severity::Info)
        }
        Msg::LookupFailed {
            id,
            detail,
            not_found,
        } => {
            state.set_lookup(None);
            if not_found {
                state
                    .notifications
                    .show(format!("Product #{id} not found"), Severity::Warning)
            } else {
                state.notifications.show(
                    format!("Could not look up product #{id}: {detail}"),
                    Severity::Error,
                )
            }
        }
        Msg::LookupCleared => {
            state.set_lookup(None);
            Vec::new()
        }
        Msg::NotificationDismissed => state.notifications.dismiss(),
        Msg::NotificationExpired { token } => {
            if !state.notifications.expire(token) {
                return (state, Vec::new());
            }
            Vec::new()
        }
        Msg::NoOp => return (state, Vec::new()),
    };

    state.mark_dirty();
    (state, effects)
}

fn reload(state: &mut CatalogState) -> Vec<Effect> {
    state.begin_loading();
    vec![Effect::FetchProducts(state.list_query())]
}

fn finish_edit(state: &mut CatalogState) {
    state.form.end_edit();
}
