//! Rendering error trees as text.
//!
//! There are two styles. [`Style::Plain`] shows only messages:
//! `another error: an error`. [`Style::Trace`] prefixes every located node
//! with its `file:line`: `src/main.rs:13: another error: src/main.rs:12: an error`.
//! Joins put each cause on its own line in both styles.
//!
//! Which style `{}` uses depends on the process-wide debug toggle (see
//! [`errtrail_config::debug`]); `{:#}` always renders the trace.

use crate::Location;
use crate::node::{Error, Kind, Message};
use std::fmt::{self, Debug, Display, Formatter, Write};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Style {
    /// Messages only.
    #[default]
    Plain,
    /// Messages annotated with the location of every wrapping point.
    Trace,
}

impl Style {
    /// The style `{}` renders with, according to the debug toggle.
    pub fn configured() -> Self {
        Self::from_debug(errtrail_config::debug())
    }

    pub fn from_debug(debug: bool) -> Self {
        if debug { Self::Trace } else { Self::Plain }
    }
}

pub(crate) fn render(error: &Error, style: Style, out: &mut dyn Write) -> fmt::Result {
    match error.kind() {
        Kind::Leaf { message: Message::Text(text), location } => head(out, style, *location, text).map(drop),
        Kind::Leaf { message: Message::Foreign(err), location } => {
            if let (Style::Trace, Some(location)) = (style, location) {
                write!(out, "{location}: ")?;
            }
            write!(out, "{err}")
        },
        Kind::Wrap { message, location, cause } => {
            if head(out, style, Some(*location), message)? {
                out.write_str(": ")?;
            }
            render(cause, style, out)
        },
        Kind::Join { causes } => {
            for (i, cause) in causes.iter().enumerate() {
                if i > 0 {
                    out.write_char('\n')?;
                }
                render(cause, style, out)?;
            }
            Ok(())
        },
    }
}

/// Writes a node's own location and message, returning whether anything was
/// written.
fn head(out: &mut dyn Write, style: Style, location: Option<Location>, message: &str) -> Result<bool, fmt::Error> {
    let mut written = false;
    if let (Style::Trace, Some(location)) = (style, location) {
        write!(out, "{location}")?;
        written = true;
    }
    if !message.is_empty() {
        if written {
            out.write_str(": ")?;
        }
        out.write_str(message)?;
        written = true;
    }
    Ok(written)
}

/// An [`Error`] bound to a presentation form, ready for `{}`.
#[derive(Clone, Copy)]
pub struct Render<'a> {
    error: &'a Error,
    style: Style,
    quoted: bool,
}

impl Render<'_> {
    /// Render as an escaped, double-quoted string literal.
    #[must_use]
    pub fn quoted(self) -> Self {
        Self { quoted: true, ..self }
    }
}

impl Display for Render<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.quoted {
            let mut text = String::new();
            render(self.error, self.style, &mut text)?;
            write!(f, "{text:?}")
        } else {
            render(self.error, self.style, f)
        }
    }
}

impl Error {
    pub fn render(&self, style: Style) -> Render<'_> {
        Render { error: self, style, quoted: false }
    }

    /// The short message, without locations.
    pub fn plain(&self) -> Render<'_> {
        self.render(Style::Plain)
    }

    /// The full trace, regardless of the debug toggle.
    pub fn trace(&self) -> Render<'_> {
        self.render(Style::Trace)
    }

    /// The default rendering, quoted.
    pub fn quoted(&self) -> Render<'_> {
        self.render(Style::configured()).quoted()
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let style = if f.alternate() { Style::Trace } else { Style::configured() };
        render(self, style, f)
    }
}

/// `{:?}` renders the trace; `{:#?}` shows the node structure.
impl Debug for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !f.alternate() {
            return render(self, Style::Trace, f);
        }
        match self.kind() {
            Kind::Leaf { message, location } => {
                f.debug_struct("Leaf").field("message", message).field("location", location).finish()
            },
            Kind::Wrap { message, location, cause } => f
                .debug_struct("Wrap")
                .field("message", message)
                .field("location", location)
                .field("cause", cause)
                .finish(),
            Kind::Join { causes } => f.debug_struct("Join").field("causes", causes).finish(),
        }
    }
}

impl Debug for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => Debug::fmt(text, f),
            Message::Foreign(err) => Debug::fmt(err, f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const FILE: &str = "src/format.rs";

    fn leaf(message: &'static str, line: u32) -> Error {
        Error::from_kind(Kind::Leaf { message: Message::Text(message.into()), location: Some(Location::new(FILE, line, 1)) })
    }

    fn wrap(cause: Error, message: &'static str, line: u32) -> Error {
        Error::from_kind(Kind::Wrap { message: message.into(), location: Location::new(FILE, line, 1), cause })
    }

    fn join(causes: Vec<Error>) -> Error {
        Error::from_kind(Kind::Join { causes })
    }

    fn foreign() -> Error {
        let io = std::io::Error::new(std::io::ErrorKind::AlreadyExists, "file already exists");
        Error::from_kind(Kind::Leaf { message: Message::Foreign(Box::new(io)), location: None })
    }

    #[rstest]
    #[case(Style::Plain, "an error")]
    #[case(Style::Trace, "src/format.rs:12: an error")]
    fn test_leaf(#[case] style: Style, #[case] expected: &str) {
        assert_eq!(leaf("an error", 12).render(style).to_string(), expected);
    }

    #[rstest]
    #[case(Style::Plain, "another error: an error")]
    #[case(Style::Trace, "src/format.rs:13: another error: src/format.rs:12: an error")]
    fn test_wrap(#[case] style: Style, #[case] expected: &str) {
        let err = wrap(leaf("an error", 12), "another error", 13);
        assert_eq!(err.render(style).to_string(), expected);
    }

    #[rstest]
    #[case(Style::Plain, "an error")]
    #[case(Style::Trace, "src/format.rs:20: src/format.rs:12: an error")]
    fn test_wrap_without_message(#[case] style: Style, #[case] expected: &str) {
        let err = wrap(leaf("an error", 12), "", 20);
        assert_eq!(err.render(style).to_string(), expected);
    }

    #[rstest]
    #[case(Style::Plain, "D: A\nC: B")]
    #[case(Style::Trace, "src/format.rs:4: D: src/format.rs:1: A\nsrc/format.rs:3: C: src/format.rs:2: B")]
    fn test_join(#[case] style: Style, #[case] expected: &str) {
        let err = wrap(join(vec![leaf("A", 1), wrap(leaf("B", 2), "C", 3)]), "D", 4);
        assert_eq!(err.render(style).to_string(), expected);
    }

    #[rstest]
    #[case(Style::Plain, "an error: file already exists")]
    #[case(Style::Trace, "src/format.rs:52: an error: file already exists")]
    fn test_foreign_leaf_has_no_location(#[case] style: Style, #[case] expected: &str) {
        let err = wrap(foreign(), "an error", 52);
        assert_eq!(err.render(style).to_string(), expected);
    }

    #[rstest]
    #[case(Style::Plain)]
    #[case(Style::Trace)]
    fn test_empty_leaf(#[case] style: Style) {
        let err = Error::from_kind(Kind::Leaf { message: Message::Text("".into()), location: None });
        assert_eq!(err.render(style).to_string(), "");
    }

    #[test]
    fn test_quoted() {
        let err = join(vec![leaf("A", 1), leaf("say \"B\"", 2)]);
        assert_eq!(err.plain().quoted().to_string(), r#""A\nsay \"B\"""#);
        assert_eq!(leaf("an error", 12).plain().quoted().to_string(), r#""an error""#);
    }

    #[test]
    fn test_alternate_is_trace() {
        let err = wrap(leaf("an error", 12), "another error", 13);
        assert_eq!(format!("{err:#}"), "src/format.rs:13: another error: src/format.rs:12: an error");
        assert_eq!(format!("{err:?}"), "src/format.rs:13: another error: src/format.rs:12: an error");
    }

    #[test]
    fn test_debug_structure() {
        let err = wrap(leaf("an error", 12), "another error", 13);
        let debug = format!("{err:#?}");
        assert!(debug.starts_with("Wrap {"));
        assert!(debug.contains("Leaf {"));
        assert!(debug.contains("\"an error\""));
    }

    #[rstest]
    #[case(false, Style::Plain)]
    #[case(true, Style::Trace)]
    fn test_style_from_debug(#[case] debug: bool, #[case] expected: Style) {
        assert_eq!(Style::from_debug(debug), expected);
    }
}
