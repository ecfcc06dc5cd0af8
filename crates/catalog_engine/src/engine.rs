use std::collections::HashMap;
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::Duration;

use catalog_core::{DismissToken, EditingContext, ListQuery, ProductDraft, ProductId, ProductPatch};
use catalog_logging::{catalog_debug, catalog_info};
use tokio::task::JoinHandle;

use crate::{ClientSettings, EngineError, EngineEvent, ProductApi, ReqwestProductClient};

/// Receives engine events. Called from runtime worker threads.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

enum EngineCommand {
    Request(Request),
    ScheduleDismiss { token: DismissToken, after: Duration },
    CancelDismiss(DismissToken),
}

enum Request {
    List(ListQuery),
    Get(ProductId),
    Create(ProductDraft),
    Update { id: ProductId, draft: ProductDraft },
    Delete(ProductId),
}

/// Runs backend calls and dismiss timers on a background tokio runtime.
///
/// Commands are fire-and-forget; each one produces exactly one event on the
/// sink, except cancelled timers which produce none.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: &ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let api: Arc<dyn ProductApi> = Arc::new(ReqwestProductClient::new(settings)?);
        Self::with_api(api, sink)
    }

    /// Runs against any [`ProductApi`] implementation.
    pub fn with_api(
        api: Arc<dyn ProductApi>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .thread_name("catalog-engine")
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut timers: HashMap<DismissToken, JoinHandle<()>> = HashMap::new();
            while let Ok(command) = cmd_rx.recv() {
                dispatch(&runtime, &api, &sink, &mut timers, command);
            }
            catalog_info!("engine command channel closed; shutting down");
            for (_, timer) in timers.drain() {
                timer.abort();
            }
        });

        Ok(Self { cmd_tx })
    }

    pub fn list(&self, query: ListQuery) {
        self.send(EngineCommand::Request(Request::List(query)));
    }

    pub fn get(&self, id: ProductId) {
        self.send(EngineCommand::Request(Request::Get(id)));
    }

    pub fn create(&self, draft: ProductDraft) {
        self.send(EngineCommand::Request(Request::Create(draft)));
    }

    pub fn update(&self, id: ProductId, draft: ProductDraft) {
        self.send(EngineCommand::Request(Request::Update { id, draft }));
    }

    pub fn delete(&self, id: ProductId) {
        self.send(EngineCommand::Request(Request::Delete(id)));
    }

    pub fn schedule_dismiss(&self, token: DismissToken, after: Duration) {
        self.send(EngineCommand::ScheduleDismiss { token, after });
    }

    pub fn cancel_dismiss(&self, token: DismissToken) {
        self.send(EngineCommand::CancelDismiss(token));
    }

    fn send(&self, command: EngineCommand) {
        let _ = self.cmd_tx.send(command);
    }
}

fn dispatch(
    runtime: &tokio::runtime::Runtime,
    api: &Arc<dyn ProductApi>,
    sink: &Arc<dyn EventSink>,
    timers: &mut HashMap<DismissToken, JoinHandle<()>>,
    command: EngineCommand,
) {
    match command {
        EngineCommand::ScheduleDismiss { token, after } => {
            timers.retain(|_, timer| !timer.is_finished());
            let sink = sink.clone();
            let timer = runtime.spawn(async move {
                tokio::time::sleep(after).await;
                sink.emit(EngineEvent::DismissElapsed { token });
            });
            timers.insert(token, timer);
        }
        EngineCommand::CancelDismiss(token) => {
            if let Some(timer) = timers.remove(&token) {
                catalog_debug!("cancelling dismiss timer {}", token);
                timer.abort();
            }
        }
        EngineCommand::Request(request) => {
            let api = api.clone();
            let sink = sink.clone();
            runtime.spawn(async move {
                let event = handle_request(api.as_ref(), request).await;
                sink.emit(event);
            });
        }
    }
}

async fn handle_request(api: &dyn ProductApi, request: Request) -> EngineEvent {
    match request {
        Request::List(query) => EngineEvent::ProductsListed(api.list(query).await),
        Request::Get(id) => EngineEvent::ProductFetched {
            id,
            result: api.get(id).await,
        },
        Request::Create(draft) => {
            let result = api.create(&draft).await;
            EngineEvent::ProductSaved {
                context: EditingContext::Creating,
                draft,
                result,
            }
        }
        Request::Update { id, draft } => {
            let patch = ProductPatch::from(draft.clone());
            let result = api.update(id, &patch).await;
            EngineEvent::ProductSaved {
                context: EditingContext::Editing(id),
                draft,
                result,
            }
        }
        Request::Delete(id) => EngineEvent::ProductDeleted {
            id,
            result: api.delete(id).await,
        },
    }
}
