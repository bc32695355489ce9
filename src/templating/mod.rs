//! templ document rendering.
//!
//! Produces the single generated file: a banner, the package clause and one
//! component per resolved icon, in (style, name) order whatever order the
//! icons were resolved in.
//!
//! Each component looks like this:
//!
//! ```text
//! // Outline_Bars_3 renders the "bars-3" icon (outline style).
//! // Source: https://raw.githubusercontent.com/tailwindlabs/heroicons/master/optimized/24/outline/bars-3.svg
//! templ Outline_Bars_3(attrs templ.Attributes) {
//! 	<svg
//! 		{ heroiconAttributes(templ.Attributes{
//! 			"xmlns": "http://www.w3.org/2000/svg",
//! 			"viewBox": "0 0 24 24",
//! 			"fill": "none",
//! 			"stroke-width": "1.5",
//! 			"stroke": "currentColor",
//! 			"class": "size-6",
//! 		}, attrs)... }
//! 	>
//! 		<path stroke-linecap="round" stroke-linejoin="round" d="M3.75 6.75h16.5"/>
//! 	</svg>
//! }
//! ```
//!
//! Root attributes are a map merged with the caller's `attrs` by the
//! `heroiconAttributes` helper emitted once per document. Every name is
//! rendered once and a value passed at the call site replaces the default.

pub mod attributes;
pub mod filters;
pub mod package;

use crate::constants::{HEROICONS_HOMEPAGE, MIN_TEMPL_VERSION};
use crate::core::HeroiconsError;
use crate::icon::IconRequest;
use crate::svg::GraphicalElement;
use serde::Serialize;
use std::collections::BTreeMap;
use tera::{Context, Tera};

pub use attributes::{root_attributes, style_attributes};
pub use package::{derive_package_name, is_valid_go_package_name};

const DOCUMENT_TEMPLATE: &str = r#"// Code generated by templ-heroicons. DO NOT EDIT.
// Source: {{ source }}
// Version: {{ version }}

package {{ package }}

// Heroicons ({{ homepage }}) as templ components.
// Requires templ {{ min_templ_version }} or later.
{%- if icons | length == 0 %}

// No icons were referenced in the scanned sources.
{%- else %}

// {{ merge_helper }} overlays attrs on a component's defaults. Each attribute
// is rendered once and the caller's value wins.
func {{ merge_helper }}(defaults, attrs templ.Attributes) templ.Attributes {
	merged := make(templ.Attributes, len(defaults)+len(attrs))
	for name, value := range defaults {
		merged[name] = value
	}
	for name, value := range attrs {
		merged[name] = value
	}
	return merged
}
{%- endif %}
{%- for icon in icons %}

// {{ icon.component }} renders the "{{ icon.name }}" icon ({{ icon.style }} style).
// Source: {{ icon.url }}
templ {{ icon.component }}(attrs templ.Attributes) {
	<svg
		{ {{ merge_helper }}(templ.Attributes{
{%- for attr in icon.root_attributes %}
			{{ attr.name | go_string }}: {{ attr.value | go_string }},
{%- endfor %}
		}, attrs)... }
	>
{%- for element in icon.elements %}
		<{{ element.kind }}{% for attr in element.attributes %} {{ attr.name }}="{{ attr.value | attr_escape }}"{% endfor %}/>
{%- endfor %}
	</svg>
}
{%- endfor %}
"#;

/// Go helper that merges component defaults with call-site attributes.
const MERGE_HELPER: &str = "heroiconAttributes";

/// An icon that was fetched and parsed, ready to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIcon {
    /// The referenced icon
    pub request: IconRequest,
    /// Primitives in document order
    pub elements: Vec<GraphicalElement>,
    /// Root presentation attributes for the icon's style
    pub style_attributes: Vec<(String, String)>,
    /// Asset URL, shown in the component header
    pub url: String,
}

impl ResolvedIcon {
    /// Pair a request with its extracted elements.
    pub fn new(
        request: IconRequest,
        elements: Vec<GraphicalElement>,
        url: impl Into<String>,
    ) -> Self {
        let style_attributes = style_attributes(request.style());
        Self {
            request,
            elements,
            style_attributes,
            url: url.into(),
        }
    }
}

/// Document-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    /// Go package clause
    pub package_name: String,
    /// `class` on every root `<svg>`; omitted when blank
    pub default_class: String,
    /// Asset URL template shown in the banner
    pub source: String,
    /// Asset version tag shown in the banner
    pub version: String,
    /// Additional root attributes overriding built-in ones
    pub svg_attributes: BTreeMap<String, String>,
}

#[derive(Serialize)]
struct AttributeView<'a> {
    name: &'a str,
    value: &'a str,
}

#[derive(Serialize)]
struct OwnedAttributeView {
    name: String,
    value: String,
}

#[derive(Serialize)]
struct ElementView<'a> {
    kind: &'a str,
    attributes: Vec<AttributeView<'a>>,
}

#[derive(Serialize)]
struct IconView<'a> {
    component: String,
    name: &'a str,
    style: &'static str,
    url: &'a str,
    root_attributes: Vec<OwnedAttributeView>,
    elements: Vec<ElementView<'a>>,
}

/// Renders the generated templ document.
pub struct ComponentRenderer {
    tera: Tera,
}

impl Default for ComponentRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ComponentRenderer {
    /// Create a renderer with the `attr_escape` and `go_string` filters registered.
    #[must_use]
    pub fn new() -> Self {
        let mut tera = Tera::default();
        tera.register_filter("attr_escape", filters::attr_escape);
        tera.register_filter("go_string", filters::go_string);
        Self { tera }
    }

    /// Render `icons` into a complete document ending in a single newline.
    pub fn render(
        &mut self,
        icons: &[ResolvedIcon],
        config: &RenderConfig,
    ) -> Result<String, HeroiconsError> {
        let mut sorted: Vec<&ResolvedIcon> = icons.iter().collect();
        sorted.sort_by(|a, b| a.request.cmp(&b.request));
        sorted.dedup_by(|a, b| a.request == b.request);

        let views: Vec<IconView<'_>> = sorted.iter().map(|icon| icon_view(icon, config)).collect();

        let mut context = Context::new();
        context.insert("source", &config.source);
        context.insert("version", &config.version);
        context.insert("package", &config.package_name);
        context.insert("homepage", HEROICONS_HOMEPAGE);
        context.insert("min_templ_version", MIN_TEMPL_VERSION);
        context.insert("merge_helper", MERGE_HELPER);
        context.insert("icons", &views);

        let rendered = self.tera.render_str(DOCUMENT_TEMPLATE, &context).map_err(|e| {
            HeroiconsError::TemplateError {
                reason: error_chain(&e),
            }
        })?;

        let mut document = rendered.trim_end().to_string();
        document.push('\n');
        Ok(document)
    }
}

fn icon_view<'a>(icon: &'a ResolvedIcon, config: &RenderConfig) -> IconView<'a> {
    IconView {
        component: icon.request.component_name(),
        name: icon.request.name(),
        style: icon.request.style().as_str(),
        url: &icon.url,
        root_attributes: root_attributes(
            &icon.style_attributes,
            &config.default_class,
            &config.svg_attributes,
        )
        .into_iter()
        .map(|(name, value)| OwnedAttributeView { name, value })
        .collect(),
        elements: icon
            .elements
            .iter()
            .map(|element| ElementView {
                kind: &element.kind,
                attributes: element
                    .attributes
                    .iter()
                    .map(|(name, value)| AttributeView { name, value })
                    .collect(),
            })
            .collect(),
    }
}

fn error_chain(error: &tera::Error) -> String {
    let mut message = error.to_string();
    let mut source = std::error::Error::source(error);
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}
