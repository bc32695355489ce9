//! Attributes of the generated root `<svg>` element.

use crate::constants::{OUTLINE_STROKE_WIDTH, SVG_NAMESPACE, SVG_VIEWBOX};
use crate::icon::IconStyle;
use std::collections::BTreeMap;

/// Presentation attributes implied by a style.
#[must_use]
pub fn style_attributes(style: IconStyle) -> Vec<(String, String)> {
    let pairs: &[(&str, &str)] = match style {
        IconStyle::Outline => &[
            ("fill", "none"),
            ("stroke-width", OUTLINE_STROKE_WIDTH),
            ("stroke", "currentColor"),
        ],
        IconStyle::Solid => &[("fill", "currentColor")],
    };
    pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect()
}

/// Full attribute list of the root element, in output order.
///
/// `xmlns`, `viewBox`, the style attributes and `class` come first. Entries
/// of `extra` then replace an existing attribute of the same name in place,
/// or are appended. Every name appears once.
#[must_use]
pub fn root_attributes(
    style_attributes: &[(String, String)],
    class: &str,
    extra: &BTreeMap<String, String>,
) -> Vec<(String, String)> {
    let mut attributes = vec![
        ("xmlns".to_string(), SVG_NAMESPACE.to_string()),
        ("viewBox".to_string(), SVG_VIEWBOX.to_string()),
    ];
    merge(&mut attributes, style_attributes.iter().cloned());
    if !class.trim().is_empty() {
        merge(&mut attributes, [("class".to_string(), class.to_string())]);
    }
    merge(&mut attributes, extra.iter().map(|(k, v)| (k.clone(), v.clone())));
    attributes
}

fn merge(into: &mut Vec<(String, String)>, from: impl IntoIterator<Item = (String, String)>) {
    for (name, value) in from {
        match into.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => into.push((name, value)),
        }
    }
}
