//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::constants::{DEFAULT_LOG_FILTER, LOG_ENV_VAR};

static INIT: Once = Once::new();

/// Install a stderr subscriber for estimator events.
///
/// `ESTIMATOR_LOG` holds the filter directives, e.g. one module at debug.
/// Format: `ESTIMATOR_LOG=estimator_engine::cloud=debug,estimator_core=info`
///
/// Falls back to `estimator=info` if `ESTIMATOR_LOG` is not set or is invalid.
///
/// Only the first call has any effect.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        // An embedding service may already have installed its own subscriber.
        let _ = tracing_subscriber::registry()
            .with(fmt::layer().with_target(true).with_line_number(true))
            .with(filter)
            .try_init();
    });
}
