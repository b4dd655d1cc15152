use thiserror::Error;

/// Generation-time failures.
///
/// Any of these aborts the whole session: there is no partial-success or
/// resumable state, and callers must discard every sink written so far.
/// Diagnostics always identify class, method, and overload index.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    #[error("method name `{method}` on class `{class}` is not a valid identifier")]
    InvalidMethodName { class: String, method: String },

    #[error(
        "{class}.{method} overload {overload}: argument name `{name}` is not a valid identifier"
    )]
    InvalidArgumentName {
        class: String,
        method: String,
        overload: usize,
        name: String,
    },

    #[error("{class}.{method} overload {overload}: return slot type `{ty}` cannot be marshaled")]
    MalformedReturn {
        class: String,
        method: String,
        overload: usize,
        ty: String,
    },
}
