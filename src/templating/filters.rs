//! Custom Tera filters for the component template.

use std::collections::HashMap;

/// Escape a value for a double-quoted attribute in a templ document.
///
/// ```
/// use templ_heroicons::templating::filters::escape_attribute;
///
/// assert_eq!(
///     escape_attribute(r#"a<b & "c" 'd'>"#),
///     "a&lt;b &amp; &quot;c&quot; &#39;d&#39;&gt;"
/// );
/// ```
#[must_use]
pub fn escape_attribute(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Quote a value as a Go interpreted string literal.
///
/// ```
/// use templ_heroicons::templating::filters::go_string_literal;
///
/// assert_eq!(go_string_literal("size-6"), r#""size-6""#);
/// assert_eq!(go_string_literal("a\"b\\c\n"), r#""a\"b\\c\n""#);
/// ```
#[must_use]
pub fn go_string_literal(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for ch in value.chars() {
        match ch {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04x}", u32::from(c))),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

fn filter_text(name: &str, value: &tera::Value) -> tera::Result<String> {
    match value {
        tera::Value::String(s) => Ok(s.clone()),
        tera::Value::Number(_) | tera::Value::Bool(_) => Ok(value.to_string()),
        _ => Err(tera::Error::msg(format!("{name} filter requires a string"))),
    }
}

/// The `attr_escape` filter: `{{ value | attr_escape }}`.
pub fn attr_escape(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let text = filter_text("attr_escape", value)?;
    Ok(tera::Value::String(escape_attribute(&text)))
}

/// The `go_string` filter: `{{ value | go_string }}`.
pub fn go_string(
    value: &tera::Value,
    _args: &HashMap<String, tera::Value>,
) -> tera::Result<tera::Value> {
    let text = filter_text("go_string", value)?;
    Ok(tera::Value::String(go_string_literal(&text)))
}
