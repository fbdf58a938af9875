//! The gallery's interactive vocabulary.
//!
//! Menu buttons, key presses and scripted sessions all boil down to a
//! [`GalleryCommand`] handed to
//! [`Gallery::execute`](super::Gallery::execute). Commands also parse from
//! short text such as `"helix"`, `"sphere 500"` or `"resize 800x600"`.

use std::str::FromStr;
use std::time::Duration;

use crate::error::TilescapeError;
use crate::layout::FormationKind;

/// One user-facing gallery operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GalleryCommand {
    /// Move every tile to a formation.
    Transform {
        /// Target formation.
        kind: FormationKind,
        /// Transition length; `None` uses the configured default.
        duration: Option<Duration>,
    },
    /// The host viewport changed size.
    Resize {
        /// New width in pixels.
        width: u32,
        /// New height in pixels.
        height: u32,
    },
    /// Jump every tile to the end of its transition.
    Skip,
    /// Freeze every tile where it is.
    Cancel,
}

impl GalleryCommand {
    /// Transform to `kind` with the configured default duration.
    #[must_use]
    pub fn select(kind: FormationKind) -> Self {
        Self::Transform {
            kind,
            duration: None,
        }
    }
}

impl FromStr for GalleryCommand {
    type Err = TilescapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s.split_whitespace();
        let head = words.next().unwrap_or_default();
        let arg = words.next();
        let bad = || TilescapeError::BadCommand(s.to_owned());

        match head.to_ascii_lowercase().as_str() {
            "skip" => Ok(Self::Skip),
            "cancel" => Ok(Self::Cancel),
            "resize" => {
                let (w, h) = arg.and_then(|a| a.split_once('x')).ok_or_else(bad)?;
                Ok(Self::Resize {
                    width: w.parse().map_err(|_| bad())?,
                    height: h.parse().map_err(|_| bad())?,
                })
            }
            _ => {
                let kind = head.parse::<FormationKind>()?;
                let duration = arg
                    .map(|ms| ms.parse::<u64>().map(Duration::from_millis))
                    .transpose()
                    .map_err(|_| bad())?;
                Ok(Self::Transform { kind, duration })
            }
        }
    }
}
