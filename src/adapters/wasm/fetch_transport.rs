use super::error_conversions::js_error_message;
use crate::global::get_global_scope;
use crate::ports::{HttpStatus, RequestOptions, TransportError, TransportPort};
use async_trait::async_trait;
use futures::future::{select, Either};
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{AbortController, Headers, Request, RequestInit, Response, WorkerGlobalScope};

/// `fetch` from the window or the current worker.
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

impl FetchTransport {
    pub fn new() -> Self {
        Self
    }

    fn build_request(
        url: &str,
        options: &RequestOptions,
        controller: Option<&AbortController>,
    ) -> Result<Request, JsValue> {
        let headers = Headers::new()?;
        for (name, value) in &options.headers {
            headers.set(name, value)?;
        }

        let init = RequestInit::new();
        init.set_method(options.method);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&options.body));
        if let Some(controller) = controller {
            init.set_signal(Some(&controller.signal()));
        }

        Request::new_with_str_and_init(url, &init)
    }

    fn fetch(request: &Request) -> Result<js_sys::Promise, JsValue> {
        let global = get_global_scope()?;

        if let Ok(worker) = global.clone().dyn_into::<WorkerGlobalScope>() {
            Ok(worker.fetch_with_request(request))
        } else if let Ok(window) = global.dyn_into::<web_sys::Window>() {
            Ok(window.fetch_with_request(request))
        } else {
            Err(JsValue::from_str("Could not access fetch"))
        }
    }
}

fn network_error(err: JsValue) -> TransportError {
    TransportError::Network(js_error_message(&err))
}

#[async_trait(?Send)]
impl TransportPort for FetchTransport {
    async fn post(
        &self,
        url: &str,
        options: &RequestOptions,
    ) -> Result<HttpStatus, TransportError> {
        let controller = match options.timeout {
            Some(_) => Some(AbortController::new().map_err(network_error)?),
            None => None,
        };

        let request = Self::build_request(url, options, controller.as_ref()).map_err(network_error)?;
        let pending = JsFuture::from(Self::fetch(&request).map_err(network_error)?);

        let settled = match (options.timeout, controller) {
            (Some(timeout), Some(controller)) => {
                let millis = u32::try_from(timeout.as_millis()).unwrap_or(u32::MAX);
                match select(pending, TimeoutFuture::new(millis)).await {
                    Either::Left((settled, _)) => settled,
                    Either::Right(_) => {
                        controller.abort();
                        return Err(TransportError::Timeout(timeout));
                    }
                }
            }
            _ => pending.await,
        };

        let response: Response = settled
            .map_err(network_error)?
            .dyn_into()
            .map_err(|_| TransportError::Network("fetch did not resolve to a Response".into()))?;

        Ok(HttpStatus(response.status()))
    }
}
