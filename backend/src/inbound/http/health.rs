//! Health endpoints: liveness & readiness probes for orchestration and load balancers.
//! Document endpoints in OpenAPI via Utoipa.
//!
//! ```text
//! GET /health
//! GET /health/live
//! GET /health/ready
//! GET /brew
//! ```

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use actix_web::http::{StatusCode, header};
use actix_web::{HttpResponse, HttpResponseBuilder, get, web};
use chrono::SecondsFormat;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use tracing::warn;
use utoipa::ToSchema;

use crate::domain::ports::ReadinessCheck;

/// Version reported by `GET /health`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

const STARTUP_CHECK: &str = "startup";
const STATUS_OK: &str = "ok";
const STATUS_DOWN: &str = "down";
const STATUS_DEGRADED: &str = "degraded";

/// Shared health state for readiness and liveness checks.
/// Track readiness and whether the process should report itself as alive to orchestrators.
pub struct HealthState {
    ready: AtomicBool,
    live: AtomicBool,
    clock: Arc<dyn Clock>,
    checks: Vec<Arc<dyn ReadinessCheck>>,
}

impl HealthState {
    /// Create a new health state starting as not ready but live.
    ///
    /// `checks` are consulted by the readiness probe alongside the startup
    /// flag.
    pub fn new(clock: Arc<dyn Clock>, checks: Vec<Arc<dyn ReadinessCheck>>) -> Self {
        Self {
            ready: AtomicBool::new(false),
            live: AtomicBool::new(true),
            clock,
            checks,
        }
    }

    /// Mark the service as ready.
    pub fn mark_ready(&self) {
        self.ready.store(true, Ordering::Release);
    }

    /// Flag the service as unhealthy so liveness checks fail fast during shutdown.
    pub fn mark_unhealthy(&self) {
        self.live.store(false, Ordering::Release);
    }

    /// Return readiness state.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::Acquire)
    }

    /// Return liveness state. When false, liveness probes emit 503 to trigger restarts.
    pub fn is_alive(&self) -> bool {
        self.live.load(Ordering::Acquire)
    }

    fn timestamp(&self) -> String {
        self.clock.utc().to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }

    fn check_results(&self) -> Vec<CheckBody> {
        let startup = CheckBody::new(STARTUP_CHECK, self.is_ready());
        let dependencies = self
            .checks
            .iter()
            .map(|check| CheckBody::new(check.name(), check.is_ok()));
        std::iter::once(startup).chain(dependencies).collect()
    }
}

fn probe_response(probe_ok: bool) -> HttpResponseBuilder {
    let mut response = if probe_ok {
        HttpResponse::Ok()
    } else {
        HttpResponse::ServiceUnavailable()
    };
    response.insert_header((header::CACHE_CONTROL, "no-store"));
    response
}

/// Payload of `GET /health`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct HealthBody {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(format = "date-time")]
    pub timestamp: String,
    #[schema(example = "1.0.0")]
    pub version: String,
}

/// Payload of `GET /health/live`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LivenessBody {
    /// `ok` while alive, `down` once draining.
    #[schema(example = "ok")]
    pub status: String,
}

/// Outcome of one readiness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CheckBody {
    #[schema(example = "memory")]
    pub name: String,
    #[schema(example = "ok")]
    pub status: String,
}

impl CheckBody {
    fn new(name: &str, ok: bool) -> Self {
        Self {
            name: name.to_owned(),
            status: if ok { STATUS_OK } else { STATUS_DOWN }.to_owned(),
        }
    }

    fn is_ok(&self) -> bool {
        self.status == STATUS_OK
    }
}

/// Payload of `GET /health/ready`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReadinessBody {
    /// `ok` when every check passes, `degraded` otherwise.
    #[schema(example = "ok")]
    pub status: String,
    #[schema(format = "date-time")]
    pub timestamp: String,
    pub checks: Vec<CheckBody>,
}

/// Payload of the coffee refusal served by `GET /brew`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct TeapotRefusalBody {
    #[schema(example = "I'm a teapot")]
    pub error: String,
    pub message: String,
    pub spec: String,
}

/// General health summary.
#[utoipa::path(
    get,
    path = "/health",
    tags = ["health"],
    responses((status = 200, description = "Service is running", body = HealthBody)),
    operation_id = "health"
)]
#[get("/health")]
pub async fn health(state: web::Data<HealthState>) -> HttpResponse {
    probe_response(true).json(HealthBody {
        status: STATUS_OK.to_owned(),
        timestamp: state.timestamp(),
        version: VERSION.to_owned(),
    })
}

/// Readiness probe. Return 200 when every check passes; return 503 otherwise.
#[utoipa::path(
    get,
    path = "/health/ready",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is ready to handle traffic", body = ReadinessBody),
        (status = 503, description = "A readiness check failed", body = ReadinessBody)
    ),
    operation_id = "readiness"
)]
#[get("/health/ready")]
pub async fn ready(state: web::Data<HealthState>) -> HttpResponse {
    let checks = state.check_results();
    let ok = checks.iter().all(CheckBody::is_ok);
    if !ok {
        warn!(?checks, "readiness probe degraded");
    }
    probe_response(ok).json(ReadinessBody {
        status: if ok { STATUS_OK } else { STATUS_DEGRADED }.to_owned(),
        timestamp: state.timestamp(),
        checks,
    })
}

/// Liveness probe. Return 200 while the process is marked alive and 503 once draining.
/// Call `HealthState::mark_unhealthy` before graceful shutdown to surface the drain early.
#[utoipa::path(
    get,
    path = "/health/live",
    tags = ["health"],
    responses(
        (status = 200, description = "Server is alive", body = LivenessBody),
        (status = 503, description = "Server is shutting down", body = LivenessBody)
    ),
    operation_id = "liveness"
)]
#[get("/health/live")]
pub async fn live(state: web::Data<HealthState>) -> HttpResponse {
    let alive = state.is_alive();
    probe_response(alive).json(LivenessBody {
        status: if alive { STATUS_OK } else { STATUS_DOWN }.to_owned(),
    })
}

/// Refuse to brew coffee.
#[utoipa::path(
    get,
    path = "/brew",
    tags = ["compliance"],
    responses((status = 418, description = "This server is a teapot", body = TeapotRefusalBody)),
    operation_id = "brewCoffee"
)]
#[get("/brew")]
pub async fn brew_coffee() -> HttpResponse {
    HttpResponse::build(StatusCode::IM_A_TEAPOT).json(TeapotRefusalBody {
        error: "I'm a teapot".to_owned(),
        message: "This server is TIF-compliant and cannot brew coffee".to_owned(),
        spec: "https://teapotframework.dev".to_owned(),
    })
}
