// crates/trade-client/src/network.rs

use std::sync::Arc;

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};
use trade_api::{ApiError, TradeApi};
use trade_core::{FetchRequest, Page, RequestId, Trade};

/// Work the UI asks the network side to do.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiCommand {
    Search(FetchRequest),
    History {
        id: u64,
        apartment_name: String,
        dong: String,
    },
    Frequent {
        id: u64,
        region_code: String,
        months: u32,
        min_count: u32,
    },
}

/// Completion of an `ApiCommand`, tagged with the id it was sent with.
#[derive(Debug)]
pub enum ApiReply {
    Search {
        id: RequestId,
        result: Result<Page<Trade>, ApiError>,
    },
    Detail {
        id: u64,
        result: Result<Vec<Trade>, ApiError>,
    },
}

/// Runs API calls off the UI task.
///
/// Each command gets its own tokio task, so replies can arrive in any
/// order. The UI side sorts that out by id.
pub struct ApiWorker {
    api: Arc<dyn TradeApi>,
    tx: UnboundedSender<ApiReply>,
}

impl ApiWorker {
    pub fn new(api: Arc<dyn TradeApi>, tx: UnboundedSender<ApiReply>) -> Self {
        Self { api, tx }
    }

    pub async fn run(self, mut rx: UnboundedReceiver<ApiCommand>) {
        while let Some(cmd) = rx.recv().await {
            debug!("Dispatching {:?}", cmd);
            let api = Arc::clone(&self.api);
            let tx = self.tx.clone();
            tokio::spawn(async move {
                let reply = execute(api.as_ref(), cmd).await;
                if let Err(e) = tx.send(reply) {
                    warn!("Failed to send reply to app: {}", e);
                }
            });
        }
        info!("API worker shutting down (command channel closed)");
    }
}

/// Perform one command and wrap its result.
pub async fn execute(api: &dyn TradeApi, cmd: ApiCommand) -> ApiReply {
    match cmd {
        ApiCommand::Search(request) => ApiReply::Search {
            id: request.id,
            result: api.search(&request.condition).await,
        },
        ApiCommand::History {
            id,
            apartment_name,
            dong,
        } => {
            let dong = (!dong.is_empty()).then_some(dong.as_str());
            ApiReply::Detail {
                id,
                result: api.history(&apartment_name, dong).await,
            }
        }
        ApiCommand::Frequent {
            id,
            region_code,
            months,
            min_count,
        } => ApiReply::Detail {
            id,
            result: api.frequent_trades(&region_code, months, min_count).await,
        },
    }
}

#[cfg(test)]
pub(crate) mod fake {
    //! Scripted `TradeApi` for tests.

    use std::sync::Mutex;

    use async_trait::async_trait;
    use trade_api::{ApiError, TradeApi};
    use trade_core::{Page, Region, SearchCondition, Trade};

    #[derive(Default)]
    pub struct FakeApi {
        pub searches: Mutex<Vec<SearchCondition>>,
        pub history_calls: Mutex<Vec<(String, Option<String>)>>,
        pub fail_with: Option<String>,
    }

    pub fn trade(id: i64, name: &str) -> Trade {
        Trade {
            id,
            apartment_name: name.to_string(),
            dong: "사직동".to_string(),
            transaction_amount: "12,345".to_string(),
            transaction_date: "20230115".to_string(),
            exclusive_area: Some(84.9),
            floor: "7".to_string(),
            ..Trade::default()
        }
    }

    #[async_trait]
    impl TradeApi for FakeApi {
        async fn search(&self, condition: &SearchCondition) -> Result<Page<Trade>, ApiError> {
            self.searches.lock().unwrap().push(condition.clone());
            if let Some(msg) = &self.fail_with {
                return Err(ApiError::Server {
                    status: 500,
                    message: Some(msg.clone()),
                });
            }
            Ok(Page {
                items: vec![trade(1, "경희궁의아침")],
                total_item_count: 1,
                total_page_count: 1,
                page_size: condition.page_size.unwrap_or(20),
                page_index: condition.page.unwrap_or(0),
            })
        }

        async fn history(
            &self,
            apartment_name: &str,
            dong: Option<&str>,
        ) -> Result<Vec<Trade>, ApiError> {
            self.history_calls
                .lock()
                .unwrap()
                .push((apartment_name.to_string(), dong.map(str::to_string)));
            Ok(vec![trade(2, apartment_name), trade(3, apartment_name)])
        }

        async fn frequent_trades(
            &self,
            _region_code: &str,
            _months: u32,
            _min_count: u32,
        ) -> Result<Vec<Trade>, ApiError> {
            Ok(vec![trade(4, "A"), trade(5, "B"), trade(6, "C")])
        }

        async fn provinces(&self) -> Result<Vec<Region>, ApiError> {
            Ok(Vec::new())
        }

        async fn districts(&self, _province_code: &str) -> Result<Vec<Region>, ApiError> {
            Ok(Vec::new())
        }
    }
}
