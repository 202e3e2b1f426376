//! Sensitive data marker for automatic redaction
//!
//! The `Sensitive<T>` wrapper ensures that sensitive data (subject
//! identifiers, subject names, salts) is never accidentally logged or
//! displayed. The registry ledger only ever sees commitment hashes; the
//! plaintext identity fields exist solely on the holder's side, and this
//! wrapper keeps them out of any Debug or Display output along the way.

use std::fmt;

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use certledger_core_types::Sensitive;
///
/// let subject = Sensitive::new("2101001");
/// println!("{:?}", subject); // Prints: ***REDACTED***
/// println!("{}", subject);   // Prints: ***REDACTED***
///
/// // Access the actual value when needed
/// assert_eq!(subject.expose(), &"2101001");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Use this method sparingly and only when the sensitive data
    /// must be accessed (e.g., to compute a commitment hash).
    pub fn expose(&self) -> &T {
        &self.0
    }

    /// Consume the wrapper and return the inner value
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "***REDACTED***")
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
