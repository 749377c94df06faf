//! C-ABI wrapper around `dino-core`.
//!
//! # Overview
//! Two ways for a mobile host to get the dinosaur list:
//! - host-does-IO: `dino_build_list_dinosaurs` describes the request, the host
//!   runs it on its own HTTP stack, `dino_parse_list_dinosaurs` decodes it;
//! - controller: `dino_controller_new` owns a small tokio runtime and a
//!   `FetchController`, the host reads snapshots with `dino_controller_state`,
//!   registers a change listener and wires its retry button to
//!   `dino_controller_retry`.
//!
//! # Design
//! - Every `extern "C"` function wraps its body in `catch_unwind` so panics
//!   never cross the FFI boundary.
//! - The C caller owns all returned pointers and must call the matching
//!   `dino_free_*` function to release them.

pub mod types;

use std::ffi::{c_void, CStr};
use std::os::raw::c_char;
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::sync::{Mutex, PoisonError};

use dino_core::{ApiConfig, ApiError, DinosaurApi, FetchController, HttpResponse};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use types::*;

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Install a `tracing` fmt subscriber filtered by `RUST_LOG` (default
/// `info`). Returns true if this call installed it; later calls are no-ops.
#[unsafe(no_mangle)]
pub extern "C" fn dino_init_logging() -> bool {
    catch_unwind(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .try_init()
            .is_ok()
    })
    .unwrap_or(false)
}

// ---------------------------------------------------------------------------
// Client lifecycle
// ---------------------------------------------------------------------------

/// Create a new `DinosaurClient` bound to `<base_url>/dinosaurs`.
///
/// Returns null if `base_url` is null or if an internal panic occurs.
/// The caller must free the returned pointer with `dino_client_free`.
#[unsafe(no_mangle)]
pub extern "C" fn dino_client_new(base_url: *const c_char) -> *mut FfiDinoClient {
    catch_unwind(|| {
        if base_url.is_null() {
            return std::ptr::null_mut();
        }
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().unwrap_or("");
        let client = dino_core::DinosaurClient::new(url);
        Box::into_raw(Box::new(FfiDinoClient { inner: client }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Free a client created by `dino_client_new`. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dino_client_free(client: *mut FfiDinoClient) {
    if !client.is_null() {
        let _ = catch_unwind(|| {
            drop(unsafe { Box::from_raw(client) });
        });
    }
}

// ---------------------------------------------------------------------------
// Host-does-IO
// ---------------------------------------------------------------------------

/// Build the HTTP request for listing dinosaurs.
///
/// Returns null if `client` is null.
/// The caller must free the returned pointer with `dino_free_request`.
#[unsafe(no_mangle)]
pub extern "C" fn dino_build_list_dinosaurs(client: *const FfiDinoClient) -> *mut FfiHttpRequest {
    catch_unwind(|| {
        if client.is_null() {
            return std::ptr::null_mut();
        }
        let client = unsafe { &*client };
        FfiHttpRequest::from_core(client.inner.build_list_dinosaurs())
    })
    .unwrap_or(std::ptr::null_mut())
}

fn ffi_response_to_core(resp: &FfiHttpResponse) -> Result<HttpResponse, ApiError> {
    let body: &[u8] = if resp.body.is_null() {
        &[]
    } else {
        unsafe { CStr::from_ptr(resp.body) }.to_bytes()
    };
    HttpResponse::from_body_bytes(resp.status, body)
}

/// Parse the HTTP response of a list request.
///
/// The caller must free the returned pointer with `dino_free_result`.
#[unsafe(no_mangle)]
pub extern "C" fn dino_parse_list_dinosaurs(
    client: *const FfiDinoClient,
    response: *const FfiHttpResponse,
) -> *mut FfiListResult {
    catch_unwind(|| {
        if client.is_null() {
            return FfiListResult::null_arg("client");
        }
        if response.is_null() {
            return FfiListResult::null_arg("response");
        }
        let client = unsafe { &*client };
        let resp = unsafe { &*response };
        let parsed = ffi_response_to_core(resp)
            .and_then(|core_resp| client.inner.parse_list_dinosaurs(core_resp));
        match parsed {
            Ok(dinos) => FfiListResult::ok(&dinos),
            Err(e) => FfiListResult::from_error(&e),
        }
    })
    .unwrap_or_else(|_| FfiListResult::panic("panic in dino_parse_list_dinosaurs"))
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

fn controller_config(base_url: *const c_char, config_json: *const c_char) -> Option<ApiConfig> {
    let mut config = if config_json.is_null() {
        ApiConfig::default()
    } else {
        let raw = unsafe { CStr::from_ptr(config_json) }.to_str().ok()?;
        match ApiConfig::from_json(raw) {
            Ok(config) => config,
            Err(error) => {
                warn!(%error, "rejecting controller config");
                return None;
            }
        }
    };
    if !base_url.is_null() {
        let url = unsafe { CStr::from_ptr(base_url) }.to_str().ok()?;
        config.base_url = url.to_string();
    }
    Some(config)
}

/// Create a controller and start the first fetch.
///
/// `config_json` may be null or a JSON object with any of `base_url`,
/// `path`, `timeout_secs` and `user_agent`. A non-null `base_url` overrides
/// the one in the config. Returns null on an invalid config or if the
/// runtime cannot be started. Free with `dino_controller_free`.
#[unsafe(no_mangle)]
pub extern "C" fn dino_controller_new(
    base_url: *const c_char,
    config_json: *const c_char,
) -> *mut FfiController {
    catch_unwind(|| {
        let Some(config) = controller_config(base_url, config_json) else {
            return std::ptr::null_mut();
        };
        let api = match DinosaurApi::new(&config) {
            Ok(api) => api,
            Err(error) => {
                warn!(%error, "cannot build HTTP client");
                return std::ptr::null_mut();
            }
        };
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("dino-fetch")
            .enable_all()
            .build()
        {
            Ok(runtime) => runtime,
            Err(error) => {
                warn!(%error, "cannot start fetch runtime");
                return std::ptr::null_mut();
            }
        };
        let controller = FetchController::new(api, runtime.handle().clone());
        Box::into_raw(Box::new(FfiController {
            controller,
            listener: Mutex::new(None),
            runtime,
        }))
    })
    .unwrap_or(std::ptr::null_mut())
}

/// Snapshot the current state. Returns null if `controller` is null.
/// Free with `dino_free_state`.
#[unsafe(no_mangle)]
pub extern "C" fn dino_controller_state(controller: *const FfiController) -> *mut FfiFetchState {
    catch_unwind(AssertUnwindSafe(|| {
        if controller.is_null() {
            return std::ptr::null_mut();
        }
        let ctrl = unsafe { &*controller };
        let (attempt, state) = ctrl.controller.snapshot();
        FfiFetchState::from_core(&state, attempt)
    }))
    .unwrap_or(std::ptr::null_mut())
}

/// Reset to `Loading` and start a new fetch. Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dino_controller_retry(controller: *const FfiController) {
    if controller.is_null() {
        return;
    }
    let _ = catch_unwind(AssertUnwindSafe(|| {
        let ctrl = unsafe { &*controller };
        ctrl.controller.retry();
    }));
}

/// Register `listener` to be called with the new state tag on every later
/// state change, replacing any previous listener. Pass a null listener to
/// unregister. Returns false if `controller` is null.
#[unsafe(no_mangle)]
pub extern "C" fn dino_controller_set_listener(
    controller: *const FfiController,
    listener: Option<FfiStateListener>,
    user_data: *mut c_void,
) -> bool {
    if controller.is_null() {
        return false;
    }
    catch_unwind(AssertUnwindSafe(|| {
        let ctrl = unsafe { &*controller };
        let mut slot = ctrl.listener.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = slot.take() {
            previous.abort();
        }
        let Some(listener) = listener else {
            return true;
        };

        let mut rx = ctrl.controller.subscribe();
        let user_data = UserData(user_data);
        let task = ctrl.runtime.spawn(async move {
            while rx.changed().await.is_ok() {
                let tag = FfiStateTag::from(&*rx.borrow_and_update());
                listener(user_data.get(), tag);
            }
        });
        *slot = Some(task.abort_handle());
        true
    }))
    .unwrap_or(false)
}

/// Stop the controller, cancelling any in-flight fetch, and free it.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dino_controller_free(controller: *mut FfiController) {
    if controller.is_null() {
        return;
    }
    let _ = catch_unwind(AssertUnwindSafe(|| {
        let FfiController {
            controller,
            listener,
            runtime,
        } = *unsafe { Box::from_raw(controller) };
        drop(controller);
        if let Some(task) = listener.into_inner().unwrap_or_else(PoisonError::into_inner) {
            task.abort();
        }
        runtime.shutdown_background();
    }));
}

// ---------------------------------------------------------------------------
// Free functions
// ---------------------------------------------------------------------------

/// Free an `FfiHttpRequest` returned by `dino_build_list_dinosaurs`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dino_free_request(req: *mut FfiHttpRequest) {
    if req.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let req = unsafe { Box::from_raw(req) };
        unsafe { free_c_string(req.path) };
        if !req.headers.is_null() && req.headers_len > 0 {
            let slice = std::ptr::slice_from_raw_parts_mut(req.headers, req.headers_len as usize);
            let headers = unsafe { Box::from_raw(slice) };
            for h in headers.iter() {
                unsafe {
                    free_c_string(h.key);
                    free_c_string(h.value);
                }
            }
        }
    });
}

/// Free an `FfiListResult` returned by `dino_parse_list_dinosaurs`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dino_free_result(result: *mut FfiListResult) {
    if result.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let mut result = unsafe { Box::from_raw(result) };
        unsafe {
            free_c_string(result.error_message);
            result.list.release();
        }
    });
}

/// Free an `FfiFetchState` returned by `dino_controller_state`.
/// Safe to call with null.
#[unsafe(no_mangle)]
pub extern "C" fn dino_free_state(state: *mut FfiFetchState) {
    if state.is_null() {
        return;
    }
    let _ = catch_unwind(|| {
        let mut state = unsafe { Box::from_raw(state) };
        unsafe {
            free_c_string(state.error_message);
            state.records.release();
        }
    });
}

// ---------------------------------------------------------------------------
// Unit tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;
    use std::time::{Duration, Instant};

    const REX: &str =
        r#"[{"id":"1","img_src":"http://x/a.png","description":"d","name":"Rex","length":"12m"}]"#;

    fn cstr(ptr: *const c_char) -> &'static str {
        unsafe { CStr::from_ptr(ptr) }.to_str().unwrap()
    }

    fn new_client() -> *mut FfiDinoClient {
        let url = CString::new("http://localhost:3000").unwrap();
        dino_client_new(url.as_ptr())
    }

    /// Start the mock server with the seed data on its own thread.
    fn spawn_mock_server() -> String {
        let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = std_listener.local_addr().unwrap();
        std_listener.set_nonblocking(true).unwrap();

        std::thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .unwrap();
            rt.block_on(async {
                let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
                mock_server::run(listener, mock_server::seed_dinosaurs()).await
            })
            .unwrap();
        });

        format!("http://{addr}")
    }

    fn closed_port_url() -> String {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}")
    }

    /// Poll until the controller leaves `Loading`; returns the settled tag.
    fn wait_settled(controller: *const FfiController) -> FfiStateTag {
        let deadline = Instant::now() + Duration::from_secs(10);
        loop {
            let state = dino_controller_state(controller);
            let tag = unsafe { &*state }.tag;
            dino_free_state(state);
            if tag != FfiStateTag::Loading {
                return tag;
            }
            assert!(Instant::now() < deadline, "controller never settled");
            std::thread::sleep(Duration::from_millis(10));
        }
    }

    // --- client ---

    #[test]
    fn client_new_and_free() {
        let client = new_client();
        assert!(!client.is_null());
        dino_client_free(client);
    }

    #[test]
    fn client_new_null_returns_null() {
        assert!(dino_client_new(std::ptr::null()).is_null());
    }

    #[test]
    fn client_free_null_is_safe() {
        dino_client_free(std::ptr::null_mut());
    }

    #[test]
    fn build_list_dinosaurs_returns_correct_request() {
        let client = new_client();
        let req = dino_build_list_dinosaurs(client);
        assert!(!req.is_null());

        let req_ref = unsafe { &*req };
        assert_eq!(req_ref.method, FfiHttpMethod::Get);
        assert_eq!(cstr(req_ref.path), "http://localhost:3000/dinosaurs");
        assert_eq!(req_ref.headers_len, 1);
        let header = unsafe { &*req_ref.headers };
        assert_eq!(cstr(header.key), "accept");
        assert_eq!(cstr(header.value), "application/json");

        dino_free_request(req);
        dino_client_free(client);
    }

    #[test]
    fn build_list_dinosaurs_null_client_returns_null() {
        assert!(dino_build_list_dinosaurs(std::ptr::null()).is_null());
    }

    #[test]
    fn parse_list_dinosaurs_empty() {
        let client = new_client();
        let body = CString::new("[]").unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = dino_parse_list_dinosaurs(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert!(r.error_message.is_null());
        assert_eq!(r.list.len, 0);
        assert!(r.list.items.is_null());

        dino_free_result(result);
        dino_client_free(client);
    }

    #[test]
    fn parse_list_dinosaurs_maps_every_field() {
        let client = new_client();
        let body = CString::new(REX).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = dino_parse_list_dinosaurs(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(r.list.len, 1);

        let items = unsafe { std::slice::from_raw_parts(r.list.items, r.list.len as usize) };
        assert_eq!(cstr(items[0].id), "1");
        assert_eq!(cstr(items[0].name), "Rex");
        assert_eq!(cstr(items[0].length), "12m");
        assert_eq!(cstr(items[0].description), "d");
        assert_eq!(cstr(items[0].image_url), "http://x/a.png");
        assert_eq!(cstr(items[0].title), "Rex (12m)");

        dino_free_result(result);
        dino_client_free(client);
    }

    #[test]
    fn parse_list_dinosaurs_server_error() {
        let client = new_client();
        let body = CString::new("unavailable").unwrap();
        let resp = FfiHttpResponse {
            status: 503,
            body: body.as_ptr(),
        };
        let result = dino_parse_list_dinosaurs(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Network);
        assert_eq!(r.http_status, 503);
        assert_eq!(cstr(r.error_message), "HTTP 503: unavailable");
        assert_eq!(r.list.len, 0);

        dino_free_result(result);
        dino_client_free(client);
    }

    #[test]
    fn parse_list_dinosaurs_missing_field_is_malformed() {
        let client = new_client();
        let body = CString::new(r#"[{"id":"1","name":"Rex"}]"#).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = dino_parse_list_dinosaurs(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::MalformedRecord);
        assert_eq!(r.http_status, 0);
        assert!(r.list.items.is_null());

        dino_free_result(result);
        dino_client_free(client);
    }

    #[test]
    fn parse_invalid_utf8_body_is_malformed() {
        let client = new_client();
        let mut raw = br#"[{"id":"1","img_src":"u","description":"d","name":"R"#.to_vec();
        raw.push(0xFF);
        raw.extend_from_slice(br#"x","length":"12m"}]"#);
        let body = CString::new(raw).unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = dino_parse_list_dinosaurs(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::MalformedRecord);
        assert_eq!(r.list.len, 0);
        assert!(r.list.items.is_null());

        dino_free_result(result);
        dino_client_free(client);
    }

    #[test]
    fn parse_null_body_is_malformed() {
        let client = new_client();
        let resp = FfiHttpResponse {
            status: 200,
            body: std::ptr::null(),
        };
        let result = dino_parse_list_dinosaurs(client, &resp);
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::MalformedRecord);

        dino_free_result(result);
        dino_client_free(client);
    }

    #[test]
    fn parse_null_client_returns_null_arg() {
        let body = CString::new("[]").unwrap();
        let resp = FfiHttpResponse {
            status: 200,
            body: body.as_ptr(),
        };
        let result = dino_parse_list_dinosaurs(std::ptr::null(), &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::NullArg);
        assert_eq!(cstr(r.error_message), "null argument: client");

        dino_free_result(result);
    }

    #[test]
    fn parse_null_response_returns_null_arg() {
        let client = new_client();
        let result = dino_parse_list_dinosaurs(client, std::ptr::null());
        assert_eq!(unsafe { &*result }.error_code, FfiErrorCode::NullArg);

        dino_free_result(result);
        dino_client_free(client);
    }

    #[test]
    fn host_driven_round_trip_with_ureq() {
        let base_url = CString::new(spawn_mock_server()).unwrap();
        let client = dino_client_new(base_url.as_ptr());
        let req = dino_build_list_dinosaurs(client);
        let path = cstr(unsafe { &*req }.path).to_string();
        dino_free_request(req);

        let agent = ureq::Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        let mut response = agent.get(&path).call().unwrap();
        let status = response.status().as_u16();
        let body = CString::new(response.body_mut().read_to_string().unwrap()).unwrap();

        let resp = FfiHttpResponse {
            status,
            body: body.as_ptr(),
        };
        let result = dino_parse_list_dinosaurs(client, &resp);
        let r = unsafe { &*result };
        assert_eq!(r.error_code, FfiErrorCode::Ok);
        assert_eq!(r.list.len as usize, mock_server::seed_dinosaurs().len());

        dino_free_result(result);
        dino_client_free(client);
    }

    // --- controller ---

    #[test]
    fn controller_settles_to_success_with_seed() {
        let base_url = CString::new(spawn_mock_server()).unwrap();
        let controller = dino_controller_new(base_url.as_ptr(), std::ptr::null());
        assert!(!controller.is_null());

        assert_eq!(wait_settled(controller), FfiStateTag::Success);
        let state = dino_controller_state(controller);
        let s = unsafe { &*state };
        assert_eq!(s.attempt, 1);
        assert_eq!(s.error_code, FfiErrorCode::Ok);
        assert!(s.error_message.is_null());
        let seed = mock_server::seed_dinosaurs();
        assert_eq!(s.records.len as usize, seed.len());
        let items = unsafe { std::slice::from_raw_parts(s.records.items, s.records.len as usize) };
        assert_eq!(cstr(items[0].name), seed[0].name);
        assert_eq!(cstr(items[0].image_url), seed[0].img_src);

        dino_free_state(state);
        dino_controller_free(controller);
    }

    #[test]
    fn controller_reports_network_error() {
        let base_url = CString::new(closed_port_url()).unwrap();
        let controller = dino_controller_new(base_url.as_ptr(), std::ptr::null());

        assert_eq!(wait_settled(controller), FfiStateTag::Error);
        let state = dino_controller_state(controller);
        let s = unsafe { &*state };
        assert_eq!(s.error_code, FfiErrorCode::Network);
        assert!(!s.error_message.is_null());
        assert_eq!(s.records.len, 0);

        dino_free_state(state);
        dino_controller_free(controller);
    }

    #[test]
    fn controller_config_json_sets_path() {
        let base_url = CString::new(spawn_mock_server()).unwrap();
        let config = CString::new(r#"{"path":"photos","timeout_secs":5}"#).unwrap();
        let controller = dino_controller_new(base_url.as_ptr(), config.as_ptr());

        assert_eq!(wait_settled(controller), FfiStateTag::Error);
        let state = dino_controller_state(controller);
        assert_eq!(unsafe { &*state }.http_status, 404);

        dino_free_state(state);
        dino_controller_free(controller);
    }

    #[test]
    fn controller_invalid_config_returns_null() {
        let config = CString::new(r#"{"timeout_secs":"soon"}"#).unwrap();
        let controller = dino_controller_new(std::ptr::null(), config.as_ptr());
        assert!(controller.is_null());
    }

    extern "C" fn record_tag(user_data: *mut c_void, tag: FfiStateTag) {
        let tags = unsafe { &*(user_data as *const Mutex<Vec<FfiStateTag>>) };
        tags.lock().unwrap().push(tag);
    }

    #[test]
    fn retry_notifies_listener_with_each_state() {
        let tags: Mutex<Vec<FfiStateTag>> = Mutex::new(Vec::new());
        let base_url = CString::new(spawn_mock_server()).unwrap();
        let controller = dino_controller_new(base_url.as_ptr(), std::ptr::null());
        assert_eq!(wait_settled(controller), FfiStateTag::Success);

        assert!(dino_controller_set_listener(
            controller,
            Some(record_tag),
            &tags as *const Mutex<Vec<FfiStateTag>> as *mut c_void,
        ));
        dino_controller_retry(controller);

        assert_eq!(wait_settled(controller), FfiStateTag::Success);
        let deadline = Instant::now() + Duration::from_secs(5);
        while tags.lock().unwrap().last() != Some(&FfiStateTag::Success) {
            assert!(Instant::now() < deadline, "listener never saw Success");
            std::thread::sleep(Duration::from_millis(10));
        }
        assert!(tags.lock().unwrap().contains(&FfiStateTag::Loading));

        let state = dino_controller_state(controller);
        assert_eq!(unsafe { &*state }.attempt, 2);

        dino_free_state(state);
        assert!(dino_controller_set_listener(controller, None, std::ptr::null_mut()));
        dino_controller_free(controller);
    }

    #[test]
    fn controller_null_arguments_are_safe() {
        assert!(dino_controller_state(std::ptr::null()).is_null());
        dino_controller_retry(std::ptr::null());
        assert!(!dino_controller_set_listener(
            std::ptr::null(),
            None,
            std::ptr::null_mut()
        ));
        dino_controller_free(std::ptr::null_mut());
    }

    #[test]
    fn controller_free_while_loading_is_safe() {
        let base_url = CString::new(closed_port_url()).unwrap();
        let controller = dino_controller_new(base_url.as_ptr(), std::ptr::null());
        dino_controller_free(controller);
    }

    // --- free ---

    #[test]
    fn free_request_null_is_safe() {
        dino_free_request(std::ptr::null_mut());
    }

    #[test]
    fn free_result_null_is_safe() {
        dino_free_result(std::ptr::null_mut());
    }

    #[test]
    fn free_state_null_is_safe() {
        dino_free_state(std::ptr::null_mut());
    }

    #[test]
    fn init_logging_is_idempotent() {
        dino_init_logging();
        assert!(!dino_init_logging());
    }
}
