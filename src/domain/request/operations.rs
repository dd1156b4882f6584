use super::error::RequestError;
use super::types::{NavigationMode, Outcome, PostRequest, RequestState, SendConfig};
use super::validation::validate_destination;
use crate::measure::is_debug_mode;
use crate::platform::Platform;
use crate::ports::RequestOptions;
use crate::time_it;
use serde::Serialize;

/// A request that passed every pre-flight check and owns everything the
/// detached task needs.
#[derive(Debug, Clone)]
pub struct PreparedRequest {
    pub url: String,
    pub options: RequestOptions,
    pub error_message: String,
    pub redirect_target: String,
    pub navigation: NavigationMode,
    pub alert_on_transport_failure: bool,
}

impl PreparedRequest {
    /// Builds from an already encoded JSON body, e.g. one produced by the
    /// host's own `JSON.stringify`.
    pub fn from_encoded(
        destination: &str,
        body: String,
        error_message: &str,
        redirect_target: &str,
        config: &SendConfig,
    ) -> Result<Self, RequestError> {
        validate_destination(destination)?;

        Ok(Self {
            url: destination.to_string(),
            options: RequestOptions::json(body, config.timeout()),
            error_message: error_message.to_string(),
            redirect_target: redirect_target.to_string(),
            navigation: config.navigation,
            alert_on_transport_failure: config.alert_on_transport_failure,
        })
    }
}

pub fn encode_payload<P: Serialize + ?Sized>(payload: &P) -> Result<String, RequestError> {
    serde_json::to_string(payload).map_err(RequestError::from)
}

/// Serializes and validates. Nothing is sent.
pub fn prepare<P: Serialize>(
    request: &PostRequest<P>,
    config: &SendConfig,
) -> Result<PreparedRequest, RequestError> {
    let body = encode_payload(&request.payload)?;

    PreparedRequest::from_encoded(
        &request.destination,
        body,
        &request.error_message,
        &request.redirect_target,
        config,
    )
}

/// Sends `request` and reacts to the result: navigate on 2xx, alert on any
/// other status, log when no response arrives.
///
/// Returns `Err` only for pre-flight failures (nothing was sent) or when the
/// navigation primitive itself fails.
pub async fn send<P: Serialize>(
    platform: &Platform,
    request: &PostRequest<P>,
    config: &SendConfig,
) -> Result<Outcome, RequestError> {
    let prepared = prepare(request, config)?;
    execute(platform, prepared).await
}

/// Lifecycle trace, debug mode only: a normal request writes nothing to the
/// console besides its one diagnostic on failure.
fn trace_transition(platform: &Platform, label: &str, from: RequestState, to: RequestState) {
    if is_debug_mode() {
        platform
            .logger()
            .log(&format!("{}: {} -> {}", label, from, to));
    }
}

pub async fn execute(
    platform: &Platform,
    prepared: PreparedRequest,
) -> Result<Outcome, RequestError> {
    let logger = platform.logger();
    let label = format!("POST {}", prepared.url);

    trace_transition(platform, &label, RequestState::Idle, RequestState::Pending);

    let response = time_it!(
        platform,
        &label,
        platform
            .transport()
            .post(&prepared.url, &prepared.options)
            .await
    );

    let outcome = match response {
        Err(err) => {
            logger.error(&format!("Error: {}", err));
            if prepared.alert_on_transport_failure {
                platform.alerter().alert(&prepared.error_message);
            }
            Outcome::TransportFailed {
                reason: err.to_string(),
            }
        }
        Ok(status) if !status.is_success() => {
            platform.alerter().alert(&prepared.error_message);
            logger.warn(&format!("HTTP error! status: {}", status));
            Outcome::Rejected { status: status.0 }
        }
        Ok(_) => {
            let navigated = platform
                .navigator()
                .navigate(&prepared.redirect_target, prepared.navigation);
            trace_transition(platform, &label, RequestState::Pending, RequestState::Success);
            navigated.map_err(RequestError::Navigation)?;
            return Ok(Outcome::Navigated {
                target: prepared.redirect_target,
            });
        }
    };

    trace_transition(
        platform,
        &label,
        RequestState::Pending,
        RequestState::from(&outcome),
    );

    Ok(outcome)
}

async fn run_detached(platform: &Platform, prepared: PreparedRequest) -> Option<Outcome> {
    match execute(platform, prepared).await {
        Ok(outcome) => Some(outcome),
        Err(err) => {
            platform.logger().error(&err.to_string());
            None
        }
    }
}

/// Fire-and-forget `send`: pre-flight errors are returned right away, the
/// network part runs as a detached task that handles its own failures.
#[cfg(target_arch = "wasm32")]
pub fn dispatch<P: Serialize>(
    platform: Platform,
    request: &PostRequest<P>,
    config: &SendConfig,
) -> Result<(), RequestError> {
    let prepared = prepare(request, config)?;
    dispatch_prepared(platform, prepared);
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn dispatch_prepared(platform: Platform, prepared: PreparedRequest) {
    wasm_bindgen_futures::spawn_local(async move {
        run_detached(&platform, prepared).await;
    });
}

/// Fire-and-forget `send` on a tokio runtime. The handle may be dropped; it
/// only exists so callers that do care can observe the outcome.
#[cfg(not(target_arch = "wasm32"))]
pub fn dispatch<P: Serialize>(
    platform: Platform,
    request: &PostRequest<P>,
    config: &SendConfig,
) -> Result<tokio::task::JoinHandle<Option<Outcome>>, RequestError> {
    let prepared = prepare(request, config)?;
    Ok(tokio::spawn(async move {
        run_detached(&platform, prepared).await
    }))
}
