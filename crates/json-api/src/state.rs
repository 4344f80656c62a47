use std::sync::Arc;

use cart_app::context::AppContext;

/// Everything handlers reach through the depot.
pub(crate) struct State {
    pub(crate) app: AppContext,
}

impl State {
    pub(crate) fn shared(app: AppContext) -> Arc<Self> {
        Arc::new(Self { app })
    }
}
