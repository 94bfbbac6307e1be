use std::sync::mpsc;
use std::thread;

use stacktable_core::{Effect, Msg, PageResult, QueryState, QuestionRow};
use stacktable_engine::{
    EngineConfig, EngineEvent, EngineHandle, PageRequest, QuestionItem, SearchPage,
};
use stacktable_logging::{table_info, table_warn};

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    pub fn new(config: EngineConfig, msg_tx: mpsc::Sender<Msg>) -> Self {
        let (engine, event_rx) = EngineHandle::new(config);
        spawn_event_pump(event_rx, msg_tx);
        Self { engine }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::FetchPage { request_id, query } => {
                    stacktable_logging::set_request_seq(request_id);
                    table_info!(
                        "FetchPage request_id={} sort={} order={} page_index={}",
                        request_id,
                        query.sort_field.as_str(),
                        query.sort_direction.as_str(),
                        query.page_index
                    );
                    self.engine.search(request_id, map_query(&query));
                }
            }
        }
    }
}

fn spawn_event_pump(event_rx: mpsc::Receiver<EngineEvent>, msg_tx: mpsc::Sender<Msg>) {
    thread::spawn(move || {
        while let Ok(event) = event_rx.recv() {
            match event {
                EngineEvent::FetchCompleted { request_id, result } => {
                    // Every engine failure becomes the sentinel outcome, so a
                    // bad fetch can never take the event loop down with it.
                    let page = match result {
                        Ok(page) => Some(map_page(page)),
                        Err(err) => {
                            table_warn!("fetch {} absorbed: {}", request_id, err.kind);
                            None
                        }
                    };
                    let _ = msg_tx.send(Msg::FetchCompleted { request_id, page });
                }
            }
        }
    });
}

fn map_query(query: &QueryState) -> PageRequest {
    PageRequest {
        sort: query.sort_field.as_str().to_string(),
        order: query.sort_direction.as_str().to_string(),
        page_index: query.page_index,
    }
}

fn map_page(page: SearchPage) -> PageResult {
    PageResult {
        rows: page.items.into_iter().map(map_item).collect(),
        total: page.quota_max,
    }
}

fn map_item(item: QuestionItem) -> QuestionRow {
    QuestionRow {
        title: item.title,
        view_count: item.view_count,
        score: item.score,
        link: item.link,
    }
}
