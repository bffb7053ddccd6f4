use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use yardstick_core::{
    ChartProvider, ChartRange, ChartRequest, ChartWindow, PriceSeries, YardstickError,
};

/// Instruction for how a chart call should behave.
#[derive(Clone)]
pub enum MockBehavior {
    /// Return the provided series immediately.
    Return(PriceSeries),
    /// Fail immediately with the provided error.
    Fail(YardstickError),
    /// Hang indefinitely (simulate a stalled relay).
    Hang,
}

/// Which chart requests a behavior applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChartRoute {
    /// Named-range requests with this range.
    Range(ChartRange),
    /// Any explicit-window request.
    Period,
    /// Every request for the symbol not matched by a narrower route.
    Any,
}

#[derive(Default)]
struct InternalState {
    rules: HashMap<(String, ChartRoute), MockBehavior>,
    requests: Vec<ChartRequest>,
}

impl InternalState {
    fn behavior_for(&self, req: &ChartRequest) -> Option<MockBehavior> {
        let narrow = match req.window() {
            ChartWindow::Range(r) => ChartRoute::Range(r),
            ChartWindow::Period { .. } => ChartRoute::Period,
        };
        let symbol = req.symbol().to_string();
        self.rules
            .get(&(symbol.clone(), narrow))
            .or_else(|| self.rules.get(&(symbol, ChartRoute::Any)))
            .cloned()
    }
}

/// Controller handle used by tests to drive the dynamic mock from the outside.
pub struct DynamicMockController {
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockController {
    /// Set the behavior for requests of `symbol` matching `route`.
    pub async fn set_behavior(
        &self,
        symbol: &str,
        route: ChartRoute,
        behavior: MockBehavior,
    ) {
        let mut guard = self.state.lock().await;
        guard.rules.insert((symbol.to_string(), route), behavior);
    }

    /// Return a copy of every request received so far, in arrival order.
    pub async fn requests(&self) -> Vec<ChartRequest> {
        self.state.lock().await.requests.clone()
    }

    /// Clear all configured behaviors and the request log.
    pub async fn clear_all_behaviors(&self) {
        let mut guard = self.state.lock().await;
        guard.rules.clear();
        guard.requests.clear();
    }
}

/// A chart provider that defers all behavior to an external controller.
///
/// Requests with no matching rule fail with `NotFound`.
pub struct DynamicMockProvider {
    name: &'static str,
    state: Arc<Mutex<InternalState>>,
}

impl DynamicMockProvider {
    /// Create a new dynamic mock provider and its controller.
    #[must_use]
    pub fn new_with_controller(
        name: &'static str,
    ) -> (Arc<dyn ChartProvider>, DynamicMockController) {
        let state = Arc::new(Mutex::new(InternalState::default()));
        let controller = DynamicMockController {
            state: Arc::clone(&state),
        };
        let me = Arc::new(Self { name, state });
        (me as Arc<dyn ChartProvider>, controller)
    }
}

#[async_trait]
impl ChartProvider for DynamicMockProvider {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn chart(&self, req: &ChartRequest) -> Result<PriceSeries, YardstickError> {
        // Snapshot the behavior without holding the lock across the hang.
        let behavior = {
            let mut guard = self.state.lock().await;
            guard.requests.push(req.clone());
            guard.behavior_for(req)
        };
        match behavior {
            Some(MockBehavior::Return(series)) => Ok(series),
            Some(MockBehavior::Fail(e)) => Err(e),
            Some(MockBehavior::Hang) => std::future::pending().await,
            None => Err(YardstickError::not_found(format!(
                "chart for {}",
                req.symbol()
            ))),
        }
    }
}
