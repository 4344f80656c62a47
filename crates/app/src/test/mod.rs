//! Service test harness

mod context;

pub(crate) use context::TestContext;
