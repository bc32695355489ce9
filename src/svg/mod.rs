//! Vector content extraction.
//!
//! Turns a fetched SVG document into the ordered list of graphical primitives
//! that make up an icon. Only these element kinds are kept:
//!
//! `path`, `circle`, `rect`, `ellipse`, `line`, `polygon`, `polyline`
//!
//! `g` is allow-listed for traversal but never recorded: its primitive
//! children are flattened into the icon in document order and the group's
//! own attributes (`transform`, `fill`, `opacity`, ...) are dropped. This is
//! lossy for assets that rely on group transforms. The upstream 24px icon set
//! does not use them.
//!
//! Anything else (`defs`, `title`, `clipPath`, ...) is skipped together with
//! its subtree, as are comments, declarations and text.
//!
//! # Example
//!
//! ```
//! use templ_heroicons::icon::IconStyle;
//! use templ_heroicons::svg::extract_elements;
//!
//! let svg = br#"<svg xmlns="http://www.w3.org/2000/svg" fill="none" stroke="currentColor">
//!   <path stroke-linecap="round" d="M3.75 6.75h16.5"/>
//! </svg>"#;
//! let content = extract_elements(svg).unwrap();
//! assert_eq!(content.style_hint, IconStyle::Outline);
//! assert_eq!(content.elements[0].kind, "path");
//! assert_eq!(content.elements[0].attribute("d"), Some("M3.75 6.75h16.5"));
//! ```

use crate::icon::IconStyle;
use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};
use thiserror::Error;
use tracing::trace;

/// Element kinds that may appear in a rendered icon. `g` is traversed, not emitted.
pub const ALLOWED_ELEMENTS: &[&str] =
    &["path", "circle", "rect", "ellipse", "line", "polygon", "polyline", "g"];

const GROUP: &str = "g";
const ROOT: &str = "svg";

/// One primitive shape with its attributes in source order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GraphicalElement {
    /// Element name, e.g. `path`
    pub kind: String,
    /// Attributes as written, values unescaped
    pub attributes: Vec<(String, String)>,
}

impl GraphicalElement {
    /// Value of attribute `name`, if present.
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.iter().find(|(key, _)| key == name).map(|(_, value)| value.as_str())
    }
}

/// Extracted content of one SVG asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SvgContent {
    /// Primitives in document order
    pub elements: Vec<GraphicalElement>,
    /// Style suggested by the root element's `fill`/`stroke`; informational only
    pub style_hint: IconStyle,
}

/// Why an asset could not be turned into an icon.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SvgError {
    /// Not well-formed XML, or more than one root element.
    #[error("malformed SVG: {0}")]
    Malformed(String),

    /// The root element is not `<svg>`.
    #[error("root element is <{root}>, expected <svg>")]
    NotSvg {
        /// Local name of the actual root
        root: String,
    },

    /// The document has no drawable elements.
    #[error("SVG contains no drawable elements")]
    NoElements,
}

#[derive(Clone, Copy)]
enum Frame {
    /// Children are inspected (root and `g`).
    Descend,
    /// Children are ignored.
    Skip,
}

/// Parse `bytes` and collect its graphical primitives.
pub fn extract_elements(bytes: &[u8]) -> Result<SvgContent, SvgError> {
    let text = std::str::from_utf8(bytes)
        .map_err(|e| SvgError::Malformed(format!("invalid UTF-8: {e}")))?;

    let mut reader = Reader::from_str(text);
    reader.config_mut().trim_text(true);

    let mut stack: Vec<Frame> = Vec::new();
    let mut elements = Vec::new();
    let mut root_attributes: Option<Vec<(String, String)>> = None;
    let mut root_closed = false;

    loop {
        let event = reader.read_event().map_err(|e| {
            SvgError::Malformed(format!("{e} (at byte {})", reader.buffer_position()))
        })?;

        match event {
            Event::Start(start) => {
                let frame =
                    enter(&start, &stack, &mut elements, &mut root_attributes, root_closed)?;
                stack.push(frame);
            }
            Event::Empty(start) => {
                enter(&start, &stack, &mut elements, &mut root_attributes, root_closed)?;
                if stack.is_empty() {
                    root_closed = true;
                }
            }
            Event::End(_) => {
                if stack.pop().is_none() {
                    return Err(SvgError::Malformed("unexpected closing tag".to_string()));
                }
                if stack.is_empty() {
                    root_closed = true;
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !stack.is_empty() {
        return Err(SvgError::Malformed("unexpected end of document".to_string()));
    }
    let Some(root_attributes) = root_attributes else {
        return Err(SvgError::Malformed("document has no root element".to_string()));
    };
    if elements.is_empty() {
        return Err(SvgError::NoElements);
    }

    Ok(SvgContent {
        elements,
        style_hint: style_hint(&root_attributes),
    })
}

/// Handle an opening tag and decide how its children are treated.
fn enter(
    start: &BytesStart<'_>,
    stack: &[Frame],
    elements: &mut Vec<GraphicalElement>,
    root_attributes: &mut Option<Vec<(String, String)>>,
    root_closed: bool,
) -> Result<Frame, SvgError> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();

    let Some(parent) = stack.last() else {
        if root_closed || root_attributes.is_some() {
            return Err(SvgError::Malformed("multiple root elements".to_string()));
        }
        if name != ROOT {
            return Err(SvgError::NotSvg { root: name });
        }
        *root_attributes = Some(read_attributes(start)?);
        return Ok(Frame::Descend);
    };

    if matches!(parent, Frame::Skip) {
        return Ok(Frame::Skip);
    }
    if name == GROUP {
        trace!("Flattening <g>");
        return Ok(Frame::Descend);
    }
    if ALLOWED_ELEMENTS.contains(&name.as_str()) {
        elements.push(GraphicalElement {
            kind: name,
            attributes: read_attributes(start)?,
        });
    } else {
        trace!("Skipping <{}>", name);
    }
    Ok(Frame::Skip)
}

fn read_attributes(start: &BytesStart<'_>) -> Result<Vec<(String, String)>, SvgError> {
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr.map_err(|e| SvgError::Malformed(e.to_string()))?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        if key == "xmlns" || key.starts_with("xmlns:") {
            continue;
        }
        let value = attr
            .unescape_value()
            .map_err(|e| SvgError::Malformed(e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(attributes)
}

/// Solid when the root has a non-`none` fill or no stroke; outline otherwise.
fn style_hint(root: &[(String, String)]) -> IconStyle {
    let get = |name: &str| root.iter().find(|(k, _)| k == name).map(|(_, v)| v.as_str());
    let filled = get("fill").is_some_and(|fill| fill.trim() != "none");
    if filled || get("stroke").is_none() {
        IconStyle::Solid
    } else {
        IconStyle::Outline
    }
}
