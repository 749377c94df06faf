//! `#[repr(C)]` types for the FFI boundary.
//!
//! # Design
//! Each type mirrors a core type but uses C-compatible representations:
//! `*mut c_char` instead of `String`, pointer + length instead of `Vec`, and
//! enums with explicit discriminants. Conversion and release helpers live
//! here to keep `lib.rs` focused on the `extern "C"` surface.

use std::ffi::{c_void, CString};
use std::os::raw::c_char;
use std::sync::Mutex;

use dino_core::{ApiError, Dinosaur, DinosaurApi, ErrorKind, FetchController, FetchState};
use tokio::runtime::Runtime;
use tokio::task::AbortHandle;

/// Opaque handle to a `DinosaurClient`.
pub struct FfiDinoClient {
    pub(crate) inner: dino_core::DinosaurClient,
}

/// Opaque handle to a running `FetchController` and the runtime its
/// attempts execute on.
///
/// Field order is drop order: the controller goes first so its in-flight
/// attempt is aborted before the runtime is shut down.
pub struct FfiController {
    pub(crate) controller: FetchController<DinosaurApi>,
    pub(crate) listener: Mutex<Option<AbortHandle>>,
    pub(crate) runtime: Runtime,
}

/// Listener invoked from a runtime thread each time the state changes.
/// It must not call `dino_controller_free` on the controller it observes.
pub type FfiStateListener = extern "C" fn(user_data: *mut c_void, tag: FfiStateTag);

/// Host pointer handed back to the listener untouched.
pub(crate) struct UserData(pub(crate) *mut c_void);

// The host promises `user_data` may be used from the runtime thread.
unsafe impl Send for UserData {}

impl UserData {
    pub(crate) fn get(&self) -> *mut c_void {
        self.0
    }
}

/// Convert to an owned C string, dropping interior NULs.
pub(crate) fn c_string(s: &str) -> *mut c_char {
    CString::new(s.replace('\0', ""))
        .unwrap_or_default()
        .into_raw()
}

/// # Safety
/// `s` must be null or come from `c_string`.
pub(crate) unsafe fn free_c_string(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

// ---------------------------------------------------------------------------
// Request / response
// ---------------------------------------------------------------------------

/// HTTP method as a C enum.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiHttpMethod {
    Get = 0,
}

impl From<dino_core::HttpMethod> for FfiHttpMethod {
    fn from(m: dino_core::HttpMethod) -> Self {
        match m {
            dino_core::HttpMethod::Get => FfiHttpMethod::Get,
        }
    }
}

/// A single HTTP header as a key-value pair of C strings.
#[repr(C)]
pub struct FfiHeader {
    pub key: *mut c_char,
    pub value: *mut c_char,
}

/// An HTTP request described as C-compatible plain data.
#[repr(C)]
pub struct FfiHttpRequest {
    pub method: FfiHttpMethod,
    pub path: *mut c_char,
    pub headers: *mut FfiHeader,
    pub headers_len: u32,
}

impl FfiHttpRequest {
    pub(crate) fn from_core(req: dino_core::HttpRequest) -> *mut Self {
        let headers_len = req.headers.len() as u32;
        let headers = if req.headers.is_empty() {
            std::ptr::null_mut()
        } else {
            let ffi_headers: Vec<FfiHeader> = req
                .headers
                .iter()
                .map(|(k, v)| FfiHeader {
                    key: c_string(k),
                    value: c_string(v),
                })
                .collect();
            Box::into_raw(ffi_headers.into_boxed_slice()) as *mut FfiHeader
        };

        Box::into_raw(Box::new(FfiHttpRequest {
            method: req.method.into(),
            path: c_string(&req.path),
            headers,
            headers_len,
        }))
    }
}

/// An HTTP response described as C-compatible plain data.
///
/// The C caller constructs this after executing a request and passes a
/// pointer to `dino_parse_list_dinosaurs`. The FFI layer reads but does not
/// free these fields.
#[repr(C)]
pub struct FfiHttpResponse {
    pub status: u16,
    pub body: *const c_char,
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// A single dinosaur exposed to C. `title` is the ready-made card heading.
#[repr(C)]
pub struct FfiDinosaur {
    pub id: *mut c_char,
    pub name: *mut c_char,
    pub length: *mut c_char,
    pub description: *mut c_char,
    pub image_url: *mut c_char,
    pub title: *mut c_char,
}

impl FfiDinosaur {
    fn from_core(dino: &Dinosaur) -> Self {
        Self {
            id: c_string(&dino.id),
            name: c_string(&dino.name),
            length: c_string(&dino.length),
            description: c_string(&dino.description),
            image_url: c_string(&dino.image_url),
            title: c_string(&dino.display_title()),
        }
    }

    /// # Safety
    /// Every field must be null or come from `c_string`.
    unsafe fn free_fields(&self) {
        unsafe {
            free_c_string(self.id);
            free_c_string(self.name);
            free_c_string(self.length);
            free_c_string(self.description);
            free_c_string(self.image_url);
            free_c_string(self.title);
        }
    }
}

/// An ordered list of dinosaurs. `items` is null when `len` is 0.
#[repr(C)]
pub struct FfiDinosaurList {
    pub items: *mut FfiDinosaur,
    pub len: u32,
}

impl FfiDinosaurList {
    pub(crate) fn empty() -> Self {
        Self {
            items: std::ptr::null_mut(),
            len: 0,
        }
    }

    pub(crate) fn from_core(dinos: &[Dinosaur]) -> Self {
        if dinos.is_empty() {
            return Self::empty();
        }
        let items: Box<[FfiDinosaur]> = dinos.iter().map(FfiDinosaur::from_core).collect();
        let len = items.len() as u32;
        Self {
            items: Box::into_raw(items) as *mut FfiDinosaur,
            len,
        }
    }

    /// # Safety
    /// Must come from `from_core` and not have been released yet.
    pub(crate) unsafe fn release(&mut self) {
        if !self.items.is_null() && self.len > 0 {
            let slice = std::ptr::slice_from_raw_parts_mut(self.items, self.len as usize);
            let items = unsafe { Box::from_raw(slice) };
            for item in items.iter() {
                unsafe { item.free_fields() };
            }
        }
        self.items = std::ptr::null_mut();
        self.len = 0;
    }
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Error codes carried by results and state snapshots.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiErrorCode {
    Ok = 0,
    Network = 1,
    MalformedRecord = 2,
    Panic = 3,
    NullArg = 4,
}

impl From<&ApiError> for FfiErrorCode {
    fn from(err: &ApiError) -> Self {
        match err.kind() {
            ErrorKind::Network => FfiErrorCode::Network,
            ErrorKind::MalformedRecord => FfiErrorCode::MalformedRecord,
        }
    }
}

/// Result envelope for `dino_parse_list_dinosaurs`.
///
/// On success `error_code` is `Ok`, `error_message` is null and `list` holds
/// the records. On failure `list` is empty and `error_message` is a
/// human-readable C string. `http_status` is set for non-2xx responses.
#[repr(C)]
pub struct FfiListResult {
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub list: FfiDinosaurList,
}

impl FfiListResult {
    pub(crate) fn ok(dinos: &[Dinosaur]) -> *mut Self {
        Box::into_raw(Box::new(FfiListResult {
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            list: FfiDinosaurList::from_core(dinos),
        }))
    }

    pub(crate) fn from_error(err: &ApiError) -> *mut Self {
        Box::into_raw(Box::new(FfiListResult {
            error_code: err.into(),
            error_message: c_string(&err.to_string()),
            http_status: err.http_status().unwrap_or(0),
            list: FfiDinosaurList::empty(),
        }))
    }

    pub(crate) fn null_arg(name: &str) -> *mut Self {
        Self::failure(FfiErrorCode::NullArg, &format!("null argument: {name}"))
    }

    pub(crate) fn panic(msg: &str) -> *mut Self {
        Self::failure(FfiErrorCode::Panic, msg)
    }

    fn failure(error_code: FfiErrorCode, msg: &str) -> *mut Self {
        Box::into_raw(Box::new(FfiListResult {
            error_code,
            error_message: c_string(msg),
            http_status: 0,
            list: FfiDinosaurList::empty(),
        }))
    }
}

// ---------------------------------------------------------------------------
// Fetch state
// ---------------------------------------------------------------------------

/// Which `FetchState` variant a snapshot holds.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FfiStateTag {
    Loading = 0,
    Success = 1,
    Error = 2,
}

impl From<&FetchState> for FfiStateTag {
    fn from(state: &FetchState) -> Self {
        match state {
            FetchState::Loading => FfiStateTag::Loading,
            FetchState::Success(_) => FfiStateTag::Success,
            FetchState::Error(_) => FfiStateTag::Error,
        }
    }
}

/// Snapshot of a controller's state.
///
/// `records` is filled only for `Success`; `error_code`, `error_message`
/// and `http_status` only for `Error`. `attempt` is the sequence number of
/// the latest issued fetch.
#[repr(C)]
pub struct FfiFetchState {
    pub tag: FfiStateTag,
    pub records: FfiDinosaurList,
    pub error_code: FfiErrorCode,
    pub error_message: *mut c_char,
    pub http_status: u16,
    pub attempt: u64,
}

impl FfiFetchState {
    pub(crate) fn from_core(state: &FetchState, attempt: u64) -> *mut Self {
        let mut snapshot = FfiFetchState {
            tag: state.into(),
            records: FfiDinosaurList::empty(),
            error_code: FfiErrorCode::Ok,
            error_message: std::ptr::null_mut(),
            http_status: 0,
            attempt,
        };
        match state {
            FetchState::Loading => {}
            FetchState::Success(dinos) => snapshot.records = FfiDinosaurList::from_core(dinos),
            FetchState::Error(err) => {
                snapshot.error_code = err.into();
                snapshot.error_message = c_string(&err.to_string());
                snapshot.http_status = err.http_status().unwrap_or(0);
            }
        }
        Box::into_raw(Box::new(snapshot))
    }
}
