//! Document input from a file or stdin.

use std::io::Read;
use std::path::Path;

use precis_core::Result;
use tracing::debug;

/// Where the document comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source<'a> {
    Stdin,
    File(&'a Path),
}

impl<'a> Source<'a> {
    /// `None` or `-` means stdin.
    pub fn from_arg(arg: Option<&'a str>) -> Self {
        match arg {
            None | Some("-") => Self::Stdin,
            Some(path) => Self::File(Path::new(path)),
        }
    }
}

pub fn read_document(source: &Source<'_>) -> Result<String> {
    let text = match source {
        Source::Stdin => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
        Source::File(path) => std::fs::read_to_string(path)?,
    };
    debug!("Read {} bytes from {:?}", text.len(), source);
    Ok(text)
}
