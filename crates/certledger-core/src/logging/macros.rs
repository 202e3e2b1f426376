//! Canonical logging macros
//!
//! These macros provide a structured, consistent way to log operations.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use certledger_core::log_op_start;
/// log_op_start!("issue");
/// log_op_start!("issue", certificate_id = "cert-1");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = certledger_core_types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = certledger_core_types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use certledger_core::log_op_end;
/// log_op_end!("issue", block_seq = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = certledger_core_types::schema::EVENT_END,
        );
    };
    ($op:expr, $($field:tt)*) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = certledger_core_types::schema::EVENT_END,
            $($field)*
        );
    };
}

/// Log an operation error with its stable code
///
/// # Example
///
/// ```
/// # use certledger_core::log_op_error;
/// # use certledger_core::RegistryError;
/// let err = RegistryError::NotFound { certificate_id: "cert-1".to_string() };
/// log_op_error!("revoke", err);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = certledger_core_types::schema::EVENT_END_ERROR,
            err_code = $err.code(),
        );
    };
    ($op:expr, $err:expr, $($field:tt)*) => {
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = certledger_core_types::schema::EVENT_END_ERROR,
            err_code = $err.code(),
            $($field)*
        );
    };
}
