//! Shared constants for the estimator.

/// Project config file name, resolved against the project root.
pub const CONFIG_FILE_NAME: &str = "estimator.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_ENV_VAR: &str = "ESTIMATOR_LOG";

/// Fallback tracing filter when `ESTIMATOR_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "estimator=info";

// ---- Function points ----

/// Function points converted to developer-weeks.
pub const DEFAULT_FP_TO_DEV_WEEK: f64 = 0.1;

/// Base points a library entry gets when none are stored.
pub const DEFAULT_BASE_POINTS: f64 = 10.0;

/// Category a library entry gets when none is stored.
pub const DEFAULT_FEATURE_CATEGORY: &str = "core";

/// Decimal places the cumulative buffer is rounded to.
pub const BUFFER_DECIMALS: usize = 2;

// ---- Team ----

/// Function points one generalist developer is expected to carry.
pub const DEFAULT_FP_PER_DEVELOPER: f64 = 80.0;

/// Function points one QA engineer is expected to cover.
pub const DEFAULT_FP_PER_QA: f64 = 120.0;

/// Integrations above this count bring in a DevOps engineer.
pub const DEVOPS_INTEGRATION_THRESHOLD: usize = 3;

// ---- Cloud ----

/// Default display currency for cloud costs.
pub const DEFAULT_CURRENCY: &str = "INR";

/// Default USD → display currency exchange rate.
pub const DEFAULT_USD_EXCHANGE_RATE: f64 = 89.0;

/// Discount applied to a yearly cloud commitment.
pub const DEFAULT_YEARLY_DISCOUNT: f64 = 0.10;

/// Integration name fragments that indicate realtime infrastructure.
pub const REALTIME_KEYWORDS: [&str; 6] = [
    "socket",
    "websocket",
    "real-time",
    "live",
    "chat",
    "notification",
];

/// Build type name fragments that indicate a mobile target.
pub const MOBILE_KEYWORDS: [&str; 3] = ["Mobile App", "iOS", "Android"];

// ---- Validation ----

/// Minimum length of the goals text.
pub const MIN_GOALS_LEN: usize = 5;

/// Maximum number of reference artifacts on a request.
pub const MAX_ARTIFACTS: usize = 5;
