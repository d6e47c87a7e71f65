//! Encoding flags.

/// Formatting and escaping flags accepted by [`crate::encode`].
///
/// The default produces compact JSON with `/` and non-ASCII characters
/// written verbatim. When both `pretty` and `one_line` are set, `pretty`
/// wins.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EncodeOptions {
    pub pretty: bool,
    pub one_line: bool,
    pub escape_slashes: bool,
    pub escape_unicode: bool,
}

impl EncodeOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty(mut self) -> Self {
        self.pretty = true;
        self
    }

    pub fn one_line(mut self) -> Self {
        self.one_line = true;
        self
    }

    pub fn escape_slashes(mut self) -> Self {
        self.escape_slashes = true;
        self
    }

    pub fn escape_unicode(mut self) -> Self {
        self.escape_unicode = true;
        self
    }
}
