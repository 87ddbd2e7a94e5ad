//! Building error trees.
//!
//! Every constructor that records a location is `#[track_caller]`: the
//! location is the line that called the constructor, never a line inside this
//! crate. Constructors taking a cause that may be absent return `None` when it
//! is, so call sites can wrap unconditionally.

use crate::Location;
use crate::node::{Error, Kind, Message};
use std::borrow::Cow;
use std::error::Error as StdError;

impl Error {
    /// A new error with `message`, located at the caller.
    #[track_caller]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self::new_at(message, Location::caller())
    }

    /// A new error with `message`, located at `location`.
    pub fn new_at(message: impl Into<Cow<'static, str>>, location: Location) -> Self {
        Self::from_kind(Kind::Leaf { message: Message::Text(message.into()), location: Some(location) })
    }

    /// Adopt an already-boxed foreign error as a leaf.
    pub fn from_boxed(err: Box<dyn StdError + Send + Sync + 'static>) -> Self {
        Self::from_kind(Kind::Leaf { message: Message::Foreign(err), location: None })
    }

    /// Wrap this error with `message`, located at the caller.
    #[track_caller]
    #[must_use]
    pub fn wrap(self, message: impl Into<Cow<'static, str>>) -> Self {
        self.wrap_at(message, Location::caller())
    }

    /// Wrap this error with `message`, located at `location`.
    #[must_use]
    pub fn wrap_at(self, message: impl Into<Cow<'static, str>>, location: Location) -> Self {
        Self::from_kind(Kind::Wrap { message: message.into(), location, cause: self })
    }

    /// Record the caller's location without adding a message.
    #[track_caller]
    #[must_use]
    pub fn located(self) -> Self {
        self.wrap_at("", Location::caller())
    }
}

/// Foreign errors become leaves without a location of their own.
impl<E> From<E> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: E) -> Self {
        Self::from_boxed(Box::new(err))
    }
}

/// Wraps `cause` with `message` if there is a cause.
#[track_caller]
pub fn wrap(cause: Option<Error>, message: impl Into<Cow<'static, str>>) -> Option<Error> {
    match cause {
        Some(cause) => Some(cause.wrap(message)),
        None => None,
    }
}

/// Stamps the caller's location onto `cause` if there is a cause.
#[track_caller]
pub fn attach_location(cause: Option<Error>) -> Option<Error> {
    match cause {
        Some(cause) => Some(cause.located()),
        None => None,
    }
}

/// Joins independent errors, in order, discarding absent ones.
///
/// Returns `None` when nothing is left. Accepts errors and optional errors
/// alike:
///
/// ```
/// use errtrail::{Error, join};
///
/// assert!(join([None::<Error>, None]).is_none());
///
/// let err = join([Some(Error::new("A")), None, Some(Error::new("B"))]).unwrap();
/// assert_eq!(err.plain().to_string(), "A\nB");
/// ```
pub fn join<I>(errors: I) -> Option<Error>
where
    I: IntoIterator,
    I::Item: Into<Option<Error>>,
{
    let mut discarded = 0usize;
    let causes: Vec<Error> = errors
        .into_iter()
        .filter_map(|err| {
            let err = err.into();
            discarded += usize::from(err.is_none());
            err
        })
        .collect();
    if discarded > 0 {
        tracing::trace!(discarded, kept = causes.len(), "Discarded absent errors from join");
    }
    if causes.is_empty() {
        return None;
    }
    Some(Error::from_kind(Kind::Join { causes }))
}

/// A new error with a [`format!`]ted message, located at the call site.
///
/// Errors used as format arguments contribute their text to the message;
/// use [`wrapf!`](crate::wrapf) to keep a cause as part of the tree.
#[macro_export]
macro_rules! errorf {
    ($($arg:tt)+) => {
        $crate::Error::new(::std::format!($($arg)+))
    };
}

/// Wraps an optional cause with a [`format!`]ted message, located at the call
/// site. Evaluates to `None`, without formatting, when the cause is absent.
#[macro_export]
macro_rules! wrapf {
    ($cause:expr, $($arg:tt)+) => {
        match $cause {
            ::std::option::Option::Some(cause) => {
                ::std::option::Option::Some($crate::Error::wrap(cause, ::std::format!($($arg)+)))
            },
            ::std::option::Option::None => ::std::option::Option::None,
        }
    };
}

/// Error wrapping for [`Result`]s: an `Ok` passes through untouched.
pub trait ResultExt<T> {
    /// Wrap the error with `message`, located at the caller.
    fn wrap(self, message: impl Into<Cow<'static, str>>) -> Result<T, Error>;

    /// Wrap the error with a lazily-built message, located at the caller.
    fn wrap_with<M, F>(self, message: F) -> Result<T, Error>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M;

    /// Record the caller's location on the error, without a message.
    fn located(self) -> Result<T, Error>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<Error>,
{
    #[track_caller]
    fn wrap(self, message: impl Into<Cow<'static, str>>) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Into::<Error>::into(err).wrap(message)),
        }
    }

    #[track_caller]
    fn wrap_with<M, F>(self, message: F) -> Result<T, Error>
    where
        M: Into<Cow<'static, str>>,
        F: FnOnce() -> M,
    {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Into::<Error>::into(err).wrap(message())),
        }
    }

    #[track_caller]
    fn located(self) -> Result<T, Error> {
        match self {
            Ok(value) => Ok(value),
            Err(err) => Err(Into::<Error>::into(err).located()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    fn io_error() -> io::Error {
        io::Error::new(io::ErrorKind::AlreadyExists, "file already exists")
    }

    #[test]
    fn test_new_records_call_site() {
        let line = line!() + 1;
        let err = Error::new("an error");
        assert_eq!(err.location().map(|location| location.line()), Some(line));
        assert!(err.is_innermost());
    }

    #[test]
    fn test_absent_causes_stay_absent() {
        assert!(wrap(None, "message").is_none());
        assert!(attach_location(None).is_none());
        assert!(wrapf!(None::<Error>, "message {}", 1).is_none());
        assert!(join(Vec::<Option<Error>>::new()).is_none());
        assert!(join(Vec::<Error>::new()).is_none());
        assert!(join([None::<Error>, None, None]).is_none());
    }

    #[test]
    fn test_wrap_records_call_site() {
        let line = line!() + 1;
        let err = wrap(Some(Error::new("an error")), "another error").unwrap();
        assert_eq!(err.location().map(|location| location.line()), Some(line));
        assert_eq!(err.plain().to_string(), "another error: an error");
    }

    #[test]
    fn test_attach_location() {
        let inner = Error::new("an error");
        let inner_line = inner.location().unwrap().line();
        let line = line!() + 1;
        let err = attach_location(Some(inner)).unwrap();
        assert_eq!(err.message(), Some(""));
        assert_eq!(err.plain().to_string(), "an error");
        let location = err.location().unwrap();
        assert_eq!(location.line(), line);
        assert_eq!(
            err.trace().to_string(),
            format!("{file}:{line}: {file}:{inner_line}: an error", file = location.file())
        );
    }

    #[test]
    fn test_errorf() {
        let line = line!() + 1;
        let err = errorf!("an error: {}", io_error());
        assert!(err.is_innermost());
        assert_eq!(err.plain().to_string(), "an error: file already exists");
        assert_eq!(err.location().unwrap().line(), line);
    }

    #[test]
    fn test_wrapf() {
        let line = line!() + 1;
        let err = wrapf!(Some(Error::from(io_error())), "could not create {:?}", "out.txt").unwrap();
        assert_eq!(err.plain().to_string(), "could not create \"out.txt\": file already exists");
        assert_eq!(err.location().unwrap().line(), line);
        assert!(!err.is_innermost());
    }

    #[test]
    fn test_join_keeps_order() {
        let err = join([Some(Error::new("A")), None, Some(Error::new("B")), None, Some(Error::new("C"))]).unwrap();
        assert_eq!(err.plain().to_string(), "A\nB\nC");
        assert_eq!(err.location(), None);
        assert_eq!(err.unwrap_all_innermost().len(), 3);
    }

    #[test]
    fn test_join_single() {
        let err = join([Error::new("A")]).unwrap();
        assert_eq!(err.plain().to_string(), "A");
        assert!(!err.is_innermost());
    }

    #[test]
    fn test_result_ext_passes_ok() {
        let ok: Result<u8, io::Error> = Ok(3);
        assert_eq!(ok.wrap("unused").unwrap(), 3);
        let ok: Result<u8, Error> = Ok(4);
        assert_eq!(ok.located().unwrap(), 4);
    }

    #[test]
    fn test_result_ext_wraps_err() {
        let result: Result<(), io::Error> = Err(io_error());
        let line = line!() + 1;
        let err = result.wrap("an error").unwrap_err();
        let location = err.location().unwrap();
        assert_eq!(location.line(), line);
        assert_eq!(err.plain().to_string(), "an error: file already exists");
        assert_eq!(err.trace().to_string(), format!("{}:{line}: an error: file already exists", location.file()));
    }

    #[test]
    fn test_result_ext_wrap_with() {
        let result: Result<(), Error> = Err(Error::new("inner"));
        let err = result.wrap_with(|| format!("attempt {}", 2)).unwrap_err();
        assert_eq!(err.plain().to_string(), "attempt 2: inner");
    }

    #[test]
    fn test_question_mark_converts() {
        fn create() -> io::Result<()> {
            Err(io_error())
        }
        fn open() -> Result<(), Error> {
            create()?;
            Ok(())
        }
        let err = open().unwrap_err();
        assert_eq!(err.location(), None);
        assert_eq!(err.plain().to_string(), "file already exists");
    }
}
