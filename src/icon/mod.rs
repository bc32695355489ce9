//! Icon identifiers and their naming conventions.
//!
//! An [`IconRequest`] is the `(style, name)` pair extracted from a reference
//! such as `@heroicons.Outline_bars_3`. The same request has two spellings:
//!
//! | Use | Form | Example |
//! |-----|------|---------|
//! | Asset URL / cache | lower-case, hyphenated | `bars-3` |
//! | templ component | capitalised, underscored | `Outline_Bars_3` |
//!
//! Requests order by style (outline first) and then by asset name, which is
//! the order components appear in the generated document.

use std::fmt;
use std::str::FromStr;

/// Rendering convention of an icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum IconStyle {
    /// Stroked icons (`fill="none"`, `stroke="currentColor"`)
    Outline,
    /// Filled icons (`fill="currentColor"`)
    Solid,
}

impl IconStyle {
    /// Every supported style, in rendering order.
    pub const ALL: [Self; 2] = [Self::Outline, Self::Solid];

    /// Lower-case directory name used in asset and catalog URLs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Outline => "outline",
            Self::Solid => "solid",
        }
    }

    /// Capitalised prefix used in component identifiers.
    #[must_use]
    pub const fn component_prefix(self) -> &'static str {
        match self {
            Self::Outline => "Outline",
            Self::Solid => "Solid",
        }
    }
}

impl fmt::Display for IconStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for IconStyle {
    type Err = UnknownStyle;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("outline") {
            Ok(Self::Outline)
        } else if s.eq_ignore_ascii_case("solid") {
            Ok(Self::Solid)
        } else {
            Err(UnknownStyle(s.to_string()))
        }
    }
}

/// A style token other than `outline` or `solid`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown icon style '{0}'")]
pub struct UnknownStyle(pub String);

/// A single icon referenced somewhere in the scanned sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IconRequest {
    style: IconStyle,
    name: String,
}

impl IconRequest {
    /// Build a request from a style and the name segments of a reference.
    ///
    /// Returns `None` when there are no segments or any segment is empty.
    pub fn from_segments<S: AsRef<str>>(style: IconStyle, segments: &[S]) -> Option<Self> {
        if segments.is_empty() || segments.iter().any(|s| s.as_ref().is_empty()) {
            return None;
        }
        let name = segments
            .iter()
            .map(|s| s.as_ref().to_ascii_lowercase())
            .collect::<Vec<_>>()
            .join("-");
        Some(Self { style, name })
    }

    /// Parse the part of a reference after the namespace, e.g. `Outline_bars_3`.
    ///
    /// ```
    /// use templ_heroicons::icon::{IconRequest, IconStyle};
    ///
    /// let icon = IconRequest::parse_reference("solid_Check_Circle").unwrap();
    /// assert_eq!(icon.style(), IconStyle::Solid);
    /// assert_eq!(icon.name(), "check-circle");
    /// assert_eq!(icon.component_name(), "Solid_Check_Circle");
    /// assert!(IconRequest::parse_reference("Outline").is_none());
    /// ```
    #[must_use]
    pub fn parse_reference(raw: &str) -> Option<Self> {
        let (style, rest) = raw.split_once('_')?;
        let style = style.parse().ok()?;
        let segments: Vec<&str> = rest.split('_').collect();
        Self::from_segments(style, &segments)
    }

    /// The icon's style.
    #[must_use]
    pub const fn style(&self) -> IconStyle {
        self.style
    }

    /// Lower-case hyphenated asset name (`bars-3`).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Asset file name including extension (`bars-3.svg`).
    #[must_use]
    pub fn file_name(&self) -> String {
        format!("{}.svg", self.name)
    }

    /// templ component identifier (`Outline_Bars_3`).
    #[must_use]
    pub fn component_name(&self) -> String {
        let mut out = String::from(self.style.component_prefix());
        for segment in self.name.split('-') {
            out.push('_');
            out.push_str(&capitalize(segment));
        }
        out
    }

    /// Path of the asset relative to the asset base URL (`outline/bars-3.svg`).
    #[must_use]
    pub fn asset_path(&self) -> String {
        format!("{}/{}", self.style.as_str(), self.file_name())
    }
}

impl fmt::Display for IconRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.style, self.name)
    }
}

fn capitalize(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => {
            first.to_ascii_uppercase().to_string() + &chars.as_str().to_ascii_lowercase()
        }
        None => String::new(),
    }
}
