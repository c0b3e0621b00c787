use std::error::Error as StdError;
use std::fmt;
use std::path::PathBuf;

/* # Why a custom error type and not use anyhow/eyre/thiserror etc?

- Better control over error handling
- No dependencies to compile and integrate
- More transparency into error handling logic
 */

/// Error variants that can occur in greetings operations.
/// Each variant represents a specific error category with its associated context.
#[derive(Debug)]
pub enum ErrorKind {
    /// A name was the empty string. The only failure the greeting
    /// operations themselves can produce.
    EmptyName,

    /// File system operation failed (configuration loading)
    FileError {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A configured greeting template does not carry exactly one `{name}` slot
    InvalidTemplate { template: String },

    /// Catch-all for other errors with a message
    Message { message: String },
}

/* # Why separate ErrorKind and GreetingsError?
This two-layer design provides a clear separation of concerns:
- ErrorKind: structural variants with specific contexts (paths, templates)
- GreetingsError: wraps ErrorKind with additional runtime context strings

Benefits:
- Users can pattern match on ErrorKind for specific handling
- GreetingsError provides ergonomic context attachment for propagation
- Avoids nested context strings (which get expensive with many layers)
*/

/// Error type wrapping ErrorKind with optional context.
/// Implements the standard Error trait and supports context attachment.
#[derive(Debug)]
pub struct GreetingsError {
    kind: ErrorKind,
    context: Vec<String>,
}

impl GreetingsError {
    /// Creates a new error from an ErrorKind.
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: vec![],
        }
    }

    /// Creates a catch-all `Message` error.
    pub fn message(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Message {
            message: message.into(),
        })
    }

    /// Attaches context to an error.
    /// Context is displayed before the error message.
    pub fn context(mut self, context: impl Into<String>) -> Self {
        self.context.push(context.into());
        self
    }

    /// Attaches context using lazy evaluation.
    /// Useful to avoid expensive string construction for successful paths.
    pub fn with_context<F>(mut self, f: F) -> Self
    where
        F: FnOnce() -> String,
    {
        self.context.push(f());
        self
    }

    /// Returns a reference to the underlying ErrorKind.
    /// Allows pattern matching on specific error variants.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Returns the innermost error in the chain.
    /// Traverses the error source chain to find the root cause.
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(next) = current.source() {
            current = next;
        }
        current
    }
}

impl From<ErrorKind> for GreetingsError {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl StdError for GreetingsError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        match &self.kind {
            ErrorKind::FileError { source, .. } => Some(source),
            ErrorKind::EmptyName
            | ErrorKind::InvalidTemplate { .. }
            | ErrorKind::Message { .. } => None,
        }
    }
}

impl fmt::Display for GreetingsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Display context first if present
        for (i, ctx) in self.context.iter().enumerate() {
            if i == 0 {
                write!(f, "{}", ctx)?;
            } else {
                write!(f, ": {}", ctx)?;
            }
        }

        // Add a separator if we have context
        if !self.context.is_empty() {
            write!(f, ": ")?;
        }

        // Display the underlying error kind
        match &self.kind {
            // The caller-facing fatal line is built from this exact text
            ErrorKind::EmptyName => {
                write!(f, "empty name")
            }
            ErrorKind::FileError { path, source } => {
                write!(f, "File error at {}: {}", path.display(), source)
            }
            ErrorKind::InvalidTemplate { template } => {
                write!(
                    f,
                    "Invalid template '{}': expected exactly one {{name}} placeholder",
                    template
                )
            }
            ErrorKind::Message { message } => {
                write!(f, "{}", message)
            }
        }
    }
}

/* # Why use Box<GreetingsError> in the result type?

Boxing the error reduces the size of the result type, making it more efficient
to return in the common case.

*/

/// Standard result type for greetings operations.
pub type GreetingsResult<T> = std::result::Result<T, Box<GreetingsError>>;

/// Creates a boxed `Message` error from format arguments.
#[macro_export]
macro_rules! err {
    ($($arg:tt)*) => {
        Box::new($crate::error::GreetingsError::message(format!($($arg)*)))
    };
}

/* # Why provide ResultExt for context attachment?
The ResultExt trait provides ergonomic methods to add context to errors during
propagation. Using `.context("message")` is more readable than manually
mapping and wrapping errors.
*/

/// Extension trait for attaching context to Results.
pub trait ResultExt<T> {
    /// Attaches context to an error, consuming and re-wrapping it.
    /// Eager evaluation: context is evaluated immediately.
    fn context(self, context: impl Into<String>) -> GreetingsResult<T>;

    /// Attaches context using lazy evaluation.
    /// Context is only evaluated if the result is an error.
    /// Prefer this to avoid expensive string formatting in the success path.
    fn with_context<F>(self, f: F) -> GreetingsResult<T>
    where
        F: FnOnce() -> String;
}

impl<T> ResultExt<T> for GreetingsResult<T> {
    fn context(self, context: impl Into<String>) -> GreetingsResult<T> {
        self.map_err(|err| Box::new(err.context(context)))
    }

    fn with_context<F>(self, f: F) -> GreetingsResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|err| Box::new(err.with_context(f)))
    }
}
