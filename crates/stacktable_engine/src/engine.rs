use std::sync::{mpsc, Arc};
use std::thread;

use stacktable_logging::{table_debug, table_warn};

use crate::fetch::{ReqwestSearchClient, SearchClient};
use crate::query::{request_url, EngineConfig, PageRequest};
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Search {
        request_id: RequestId,
        request: PageRequest,
    },
}

pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    /// Starts the engine thread. Completion events arrive on the returned
    /// receiver, one per issued search, in completion order.
    pub fn new(config: EngineConfig) -> (Self, mpsc::Receiver<EngineEvent>) {
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();
        let client = Arc::new(ReqwestSearchClient::new(config.fetch.clone()));
        let config = Arc::new(config);

        thread::spawn(move || {
            let runtime = tokio::runtime::Runtime::new().expect("tokio runtime");
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let config = config.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    handle_command(client.as_ref(), &config, command, event_tx).await;
                });
            }
        });

        (Self { cmd_tx }, event_rx)
    }

    pub fn search(&self, request_id: RequestId, request: PageRequest) {
        let _ = self.cmd_tx.send(EngineCommand::Search {
            request_id,
            request,
        });
    }
}

async fn handle_command(
    client: &dyn SearchClient,
    config: &EngineConfig,
    command: EngineCommand,
    event_tx: mpsc::Sender<EngineEvent>,
) {
    match command {
        EngineCommand::Search {
            request_id,
            request,
        } => {
            table_debug!(
                "search request_id={} sort={} order={} page_index={}",
                request_id,
                request.sort,
                request.order,
                request.page_index
            );
            let result = match request_url(config, &request) {
                Ok(url) => client.fetch_page(&url).await,
                Err(err) => Err(err),
            };
            if let Err(err) = &result {
                table_warn!("search request_id={} failed: {}", request_id, err.kind);
            }
            let _ = event_tx.send(EngineEvent::FetchCompleted { request_id, result });
        }
    }
}
