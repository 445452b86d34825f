//! Platform-wide constants: statuses, events, drivers, limits.

// ── Build, step and service statuses ──

pub const STATUS_PENDING: &str = "pending";
pub const STATUS_PENDING_APPROVAL: &str = "pending approval";
pub const STATUS_RUNNING: &str = "running";
pub const STATUS_SUCCESS: &str = "success";
pub const STATUS_FAILURE: &str = "failure";
pub const STATUS_KILLED: &str = "killed";
pub const STATUS_CANCELED: &str = "canceled";
pub const STATUS_ERROR: &str = "error";
pub const STATUS_SKIPPED: &str = "skipped";

// ── Webhook events ──

pub const EVENT_PUSH: &str = "push";
pub const EVENT_PULL: &str = "pull_request";
pub const EVENT_TAG: &str = "tag";
pub const EVENT_DEPLOY: &str = "deployment";
pub const EVENT_COMMENT: &str = "comment";
pub const EVENT_SCHEDULE: &str = "schedule";

// ── Runtime and secret engine drivers ──

pub const DRIVER_DOCKER: &str = "docker";
pub const DRIVER_KUBERNETES: &str = "kubernetes";
pub const DRIVER_NATIVE: &str = "native";
pub const DRIVER_VAULT: &str = "vault";

// ── Ruleset matchers and operators ──

pub const MATCHER_FILEPATH: &str = "filepath";
pub const MATCHER_REGEXP: &str = "regexp";
pub const MATCHER_REGEX: &str = "regex";
pub const OPERATOR_AND: &str = "and";
pub const OPERATOR_OR: &str = "or";

// ── Secrets ──

pub const SECRET_REPO: &str = "repo";
pub const SECRET_ORG: &str = "org";
pub const SECRET_SHARED: &str = "shared";

/// Replacement for secret values found in log output.
pub const SECRET_LOG_MASK: &str = "***";

// ── Pipelines ──

pub const PIPELINE_TYPE_YAML: &str = "yaml";
pub const PIPELINE_TYPE_GO: &str = "go";
pub const PIPELINE_TYPE_STARLARK: &str = "starlark";

// ── Repository visibility ──

pub const VISIBILITY_PUBLIC: &str = "public";
pub const VISIBILITY_PRIVATE: &str = "private";

// ── Column width limits ──

pub const BUILD_TITLE_LENGTH: usize = 1000;
pub const BUILD_MESSAGE_LENGTH: usize = 2000;
pub const BUILD_ERROR_LENGTH: usize = 500;

/// Upper bound on the comma-joined size of favorites and dashboard admins.
pub const FAVORITES_MAX_SIZE: usize = 5000;

/// Longest user name the SCM providers hand out.
pub const USER_NAME_MAX_LENGTH: usize = 38;

// ── zlib compression levels ──

pub const COMPRESSION_DEFAULT: i32 = -1;
pub const COMPRESSION_NONE: i32 = 0;
pub const COMPRESSION_BEST_SPEED: i32 = 1;
pub const COMPRESSION_BEST: i32 = 9;

/// Size of the AES-256 key used for field-level encryption.
pub const ENCRYPTION_KEY_LENGTH: usize = 32;

// ── Table names ──

pub const TABLE_BUILD: &str = "builds";
pub const TABLE_BUILD_EXECUTABLE: &str = "build_executables";
pub const TABLE_BUILD_ITINERARY: &str = "build_itineraries";
pub const TABLE_COMPILED: &str = "compiled";
pub const TABLE_DASHBOARD: &str = "dashboards";
pub const TABLE_DEPLOYMENT: &str = "deployments";
pub const TABLE_HOOK: &str = "hooks";
pub const TABLE_INIT: &str = "inits";
pub const TABLE_INIT_STEP: &str = "init_steps";
pub const TABLE_LOG: &str = "logs";
pub const TABLE_PIPELINE: &str = "pipelines";
pub const TABLE_REPO: &str = "repos";
pub const TABLE_SCHEDULE: &str = "schedules";
pub const TABLE_SECRET: &str = "secrets";
pub const TABLE_SERVICE: &str = "services";
pub const TABLE_STEP: &str = "steps";
pub const TABLE_USER: &str = "users";
pub const TABLE_WORKER: &str = "workers";
