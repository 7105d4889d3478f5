//! Where color strings come from.
//!
//! Positional arguments are used verbatim, one color each. With no arguments,
//! or when the first argument is `-`, colors are read from stdin one per line.

use std::io::{self, BufRead};

/// The source of input color strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Each argument is one color string.
    Arguments(Vec<String>),
    /// One color string per non-empty stdin line.
    Stdin,
}

impl InputSource {
    /// Choose the source for the given positional arguments.
    ///
    /// Arguments after a leading `-` are ignored.
    #[must_use]
    pub fn from_args(args: Vec<String>) -> Self {
        match args.first().map(String::as_str) {
            None | Some("-") => Self::Stdin,
            Some(_) => Self::Arguments(args),
        }
    }

    /// Iterate the color strings, reading `stdin` only for [`InputSource::Stdin`].
    pub fn inputs<'a, R: BufRead + 'a>(
        self,
        stdin: R,
    ) -> Box<dyn Iterator<Item = io::Result<String>> + 'a> {
        match self {
            Self::Arguments(args) => Box::new(args.into_iter().map(Ok::<String, io::Error>)),
            Self::Stdin => Box::new(lines(stdin)),
        }
    }
}

/// Split `reader` on `\n`, dropping empty lines and a trailing `\r`.
///
/// Invalid UTF-8 is replaced rather than rejected; such a line simply fails
/// to parse as a color.
pub fn lines<R: BufRead>(reader: R) -> impl Iterator<Item = io::Result<String>> {
    reader.split(b'\n').filter_map(|chunk| match chunk {
        Ok(mut bytes) => {
            if bytes.last() == Some(&b'\r') {
                bytes.pop();
            }
            if bytes.is_empty() {
                None
            } else {
                Some(Ok(String::from_utf8_lossy(&bytes).into_owned()))
            }
        }
        Err(err) => Some(Err(err)),
    })
}
