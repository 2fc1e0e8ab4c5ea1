//! Canonical logging macros
//!
//! Every operation logs a `start` record and exactly one of `end` or
//! `end_error`, tagged with `component` (the calling module) and `op`.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use seqmock_core::log_op_start;
/// log_op_start!("anchor_commitment");
/// log_op_start!("anchor_commitment", batch_id = "b123");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use seqmock_core::log_op_end;
/// log_op_end!("anchor_commitment", duration_ms = 42);
/// log_op_end!("anchor_commitment", duration_ms = 42, removed = 1);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` is anything convertible into `ExError`; its kind and stable code
/// are attached as `err_kind` and `err_code`.
///
/// # Example
///
/// ```
/// # use seqmock_core::{log_op_error, errors::SeqMockError};
/// let err = SeqMockError::InvalidBatchId { batch_id: "zz".to_string() };
/// log_op_error!("anchor_commitment", &err, duration_ms = 10);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = %ex_err,
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::warn!(
            component = module_path!(),
            op = $op,
            event = $crate::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_message = %ex_err,
            $($field)*
        );
    }};
}
