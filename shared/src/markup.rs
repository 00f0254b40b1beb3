//! Identifiers, attribute values and HTML rendering of the accordion markup.
//!
//! The browser component and [`render_html`] both derive their attributes
//! from [`ItemAttrs`], so the two renderings always agree.

use crate::state::AccordionController;

/// Heading level wrapping every control.
pub const HEADING_LEVEL: u8 = 3;

pub const CONTAINER_CLASS: &str = "accordion";
pub const LIST_CLASS: &str = "accordion-controls";

/// Id of the control for the section at `index` (ids are 1-based).
pub fn control_id(index: usize) -> String {
    format!("accordion-control-{}", index + 1)
}

/// Id of the content region for the section at `index` (ids are 1-based).
pub fn region_id(index: usize) -> String {
    format!("content-{}", index + 1)
}

/// Section index encoded in a control id, the inverse of [`control_id`].
pub fn index_from_control_id(id: &str) -> Option<usize> {
    id.strip_prefix("accordion-control-")?
        .parse::<usize>()
        .ok()?
        .checked_sub(1)
}

/// Attribute values for one section in a given state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemAttrs {
    pub control_id: String,
    pub region_id: String,
    pub expanded: bool,
    pub hidden: bool,
}

impl ItemAttrs {
    /// Value of the control's `aria-expanded` attribute.
    pub fn aria_expanded(&self) -> &'static str {
        bool_attr(self.expanded)
    }

    /// Value of the region's `aria-hidden` attribute.
    pub fn aria_hidden(&self) -> &'static str {
        bool_attr(self.hidden)
    }
}

fn bool_attr(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Render the accordion in its current state as an HTML fragment.
pub fn render_html(controller: &AccordionController) -> String {
    let mut html = String::new();

    html.push_str(&format!(
        "<div class=\"{}\"><ul aria-label=\"{}\" class=\"{}\">",
        CONTAINER_CLASS,
        escape(controller.label()),
        LIST_CLASS
    ));

    for (index, item) in controller.items().iter().enumerate() {
        let attrs = controller.attrs(index);
        html.push_str(&format!(
            "<li><h{level}><button id=\"{control}\" aria-controls=\"{region}\" aria-expanded=\"{expanded}\">{title}</button></h{level}>",
            level = HEADING_LEVEL,
            control = attrs.control_id,
            region = attrs.region_id,
            expanded = attrs.aria_expanded(),
            title = escape(&item.title),
        ));
        html.push_str(&format!(
            "<div id=\"{region}\" role=\"region\" aria-labelledby=\"{control}\" aria-hidden=\"{hidden}\"><p>{body}</p></div></li>",
            region = attrs.region_id,
            control = attrs.control_id,
            hidden = attrs.aria_hidden(),
            body = escape(&item.body),
        ));
    }

    html.push_str("</ul></div>");
    html
}

/// Escape text for use in element content and double-quoted attributes.
pub fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
