use std::sync::{mpsc, Arc};

use catalog_core::{EditingContext, Effect, Msg};
use catalog_engine::{ClientSettings, EngineError, EngineEvent, EngineHandle, EventSink};
use catalog_logging::{catalog_info, catalog_warn};

use super::app::AppEvent;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(
        settings: &ClientSettings,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Result<Self, EngineError> {
        let sink: Arc<dyn EventSink> = Arc::new(MsgSink { event_tx });
        let engine = EngineHandle::new(settings, sink)?;
        Ok(Self { engine })
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            if effect.is_network() {
                catalog_info!("effect {:?}", effect);
            }
            match effect {
                Effect::FetchProducts(query) => self.engine.list(query),
                Effect::FetchProduct { id } => self.engine.get(id),
                Effect::CreateProduct { draft } => self.engine.create(draft),
                Effect::UpdateProduct { id, draft } => self.engine.update(id, draft),
                Effect::DeleteProduct { id } => self.engine.delete(id),
                Effect::ScheduleDismiss { token, after } => {
                    self.engine.schedule_dismiss(token, after)
                }
                Effect::CancelDismiss { token } => self.engine.cancel_dismiss(token),
            }
        }
    }
}

struct MsgSink {
    event_tx: mpsc::Sender<AppEvent>,
}

impl EventSink for MsgSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.event_tx.send(AppEvent::Msg(map_event(event)));
    }
}

fn map_event(event: EngineEvent) -> Msg {
    match event {
        EngineEvent::ProductsListed(Ok(page)) => Msg::ProductsLoaded(page),
        EngineEvent::ProductsListed(Err(err)) => {
            catalog_warn!("list failed: {}", err);
            Msg::LoadFailed {
                detail: err.detail().to_string(),
            }
        }
        EngineEvent::ProductFetched { result: Ok(product), .. } => Msg::LookupSucceeded(product),
        EngineEvent::ProductFetched { id, result: Err(err) } => Msg::LookupFailed {
            id,
            detail: err.detail().to_string(),
            not_found: err.is_not_found(),
        },
        EngineEvent::ProductSaved {
            context,
            result: Ok(product),
            ..
        } => match context {
            EditingContext::Creating => Msg::ProductCreated(product),
            EditingContext::Editing(_) => Msg::ProductUpdated(product),
        },
        EngineEvent::ProductSaved {
            context,
            draft,
            result: Err(err),
        } => {
            catalog_warn!("save failed ({:?}): {}", context, err);
            Msg::SaveFailed {
                context,
                draft,
                detail: err.detail().to_string(),
            }
        }
        EngineEvent::ProductDeleted { id, result: Ok(receipt) } => Msg::ProductDeleted {
            id,
            message: receipt.message,
        },
        EngineEvent::ProductDeleted { id, result: Err(err) } => {
            catalog_warn!("delete of {} failed: {}", id, err);
            Msg::DeleteFailed {
                id,
                detail: err.detail().to_string(),
            }
        }
        EngineEvent::DismissElapsed { token } => Msg::NotificationExpired { token },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog_core::{DeleteReceipt, Product, ProductDraft};
    use catalog_engine::ClientError;
    use pretty_assertions::assert_eq;
    use rust_decimal::Decimal;

    fn product(id: u64) -> Product {
        Product {
            id,
            name: "Laptop".to_string(),
            price: Decimal::new(99999, 2),
            is_offer: false,
            created_at: "2024-01-01T10:00:00".to_string(),
            updated_at: "2024-01-01T10:00:00".to_string(),
        }
    }

    fn draft() -> ProductDraft {
        ProductDraft {
            name: "Laptop".to_string(),
            price: Decimal::new(99999, 2),
            is_offer: false,
        }
    }

    #[test]
    fn saved_product_maps_by_context() {
        let created = map_event(EngineEvent::ProductSaved {
            context: EditingContext::Creating,
            draft: draft(),
            result: Ok(product(1)),
        });
        assert_eq!(created, Msg::ProductCreated(product(1)));

        let updated = map_event(EngineEvent::ProductSaved {
            context: EditingContext::Editing(1),
            draft: draft(),
            result: Ok(product(1)),
        });
        assert_eq!(updated, Msg::ProductUpdated(product(1)));
    }

    #[test]
    fn failed_save_keeps_draft_and_detail() {
        let msg = map_event(EngineEvent::ProductSaved {
            context: EditingContext::Editing(7),
            draft: draft(),
            result: Err(ClientError::Validation {
                status: 422,
                detail: "price: Input should be greater than 0".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::SaveFailed {
                context: EditingContext::Editing(7),
                draft: draft(),
                detail: "price: Input should be greater than 0".to_string(),
            }
        );
    }

    #[test]
    fn lookup_failure_flags_not_found() {
        let msg = map_event(EngineEvent::ProductFetched {
            id: 9,
            result: Err(ClientError::NotFound {
                id: 9,
                detail: "Producto con ID 9 no encontrado".to_string(),
            }),
        });
        assert_eq!(
            msg,
            Msg::LookupFailed {
                id: 9,
                detail: "Producto con ID 9 no encontrado".to_string(),
                not_found: true,
            }
        );
    }

    #[test]
    fn delete_and_timer_events() {
        let msg = map_event(EngineEvent::ProductDeleted {
            id: 4,
            result: Ok(DeleteReceipt {
                message: "Producto 'Mouse' eliminado exitosamente".to_string(),
                id: 4,
            }),
        });
        assert_eq!(
            msg,
            Msg::ProductDeleted {
                id: 4,
                message: "Producto 'Mouse' eliminado exitosamente".to_string(),
            }
        );

        let msg = map_event(EngineEvent::ProductsListed(Err(ClientError::Network {
            message: "connection refused".to_string(),
        })));
        assert_eq!(
            msg,
            Msg::LoadFailed {
                detail: "connection refused".to_string(),
            }
        );

        assert_eq!(
            map_event(EngineEvent::DismissElapsed { token: 3 }),
            Msg::NotificationExpired { token: 3 }
        );
    }
}
