//! Virtual screen reader over the rendered accordion.
//!
//! The rendered markup is flattened into the sequence of phrases a desktop
//! screen reader speaks while moving its virtual cursor through the page.
//! Content under `aria-hidden="true"` is never spoken. Activating a control
//! toggles the underlying controller and re-renders, as the browser would.

use std::collections::HashMap;

use accordion_shared::markup::{self, HEADING_LEVEL};
use accordion_shared::{AccordionController, Activation, ActivationKey};
use scraper::{ElementRef, Html, Node, Selector};

/// One stop of the virtual cursor.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpokenNode {
    pub phrase: String,
    /// Section index when this stop is an accordion control
    pub control: Option<usize>,
    pub focusable: bool,
}

impl SpokenNode {
    fn text(phrase: String) -> Self {
        Self {
            phrase,
            control: None,
            focusable: false,
        }
    }
}

pub struct VirtualScreenReader {
    controller: AccordionController,
    nodes: Vec<SpokenNode>,
    cursor: Option<usize>,
    spoken: Vec<String>,
}

impl VirtualScreenReader {
    /// Start reading the accordion from the top of the page.
    pub fn start(controller: AccordionController) -> Self {
        let nodes = linearize(&markup::render_html(&controller));
        log::debug!("Screen reader started with {} stops", nodes.len());
        Self {
            controller,
            nodes,
            cursor: None,
            spoken: Vec::new(),
        }
    }

    pub fn controller(&self) -> &AccordionController {
        &self.controller
    }

    /// Phrases for every stop in reading order.
    pub fn phrases(&self) -> Vec<&str> {
        self.nodes.iter().map(|n| n.phrase.as_str()).collect()
    }

    /// Most recent phrase, empty before anything has been spoken.
    pub fn last_spoken_phrase(&self) -> &str {
        self.spoken.last().map(String::as_str).unwrap_or_default()
    }

    pub fn spoken_phrase_log(&self) -> &[String] {
        &self.spoken
    }

    /// Move to the next stop. Returns `None` at the end of the content.
    pub fn next(&mut self) -> Option<&str> {
        let target = match self.cursor {
            None => 0,
            Some(at) => at + 1,
        };
        self.move_to(target)
    }

    /// Move to the previous stop. Returns `None` at the start of the content.
    pub fn previous(&mut self) -> Option<&str> {
        let target = self.cursor?.checked_sub(1)?;
        self.move_to(target)
    }

    /// Move focus to the next focusable control.
    pub fn press_tab(&mut self) -> Option<&str> {
        let from = self.cursor.map(|at| at + 1).unwrap_or(0);
        let target = (from..self.nodes.len()).find(|i| self.nodes[*i].focusable)?;
        self.move_to(target)
    }

    /// Move focus to the previous focusable control.
    pub fn press_shift_tab(&mut self) -> Option<&str> {
        let target = (0..self.cursor?).rev().find(|i| self.nodes[*i].focusable)?;
        self.move_to(target)
    }

    /// Activate the control under the cursor. Returns whether anything was activated.
    pub fn act(&mut self) -> bool {
        self.activate(Activation::Pointer)
    }

    /// Press a key on the current stop: Tab navigates, Enter and Space activate.
    pub fn press(&mut self, key: &str) -> bool {
        if key == "Tab" {
            return self.press_tab().is_some();
        }
        match ActivationKey::from_key(key) {
            Some(activation_key) => self.activate(Activation::Key(activation_key)),
            None => false,
        }
    }

    fn activate(&mut self, activation: Activation) -> bool {
        let Some(index) = self.cursor.and_then(|at| self.nodes[at].control) else {
            return false;
        };

        self.controller.activate(index, activation);
        self.nodes = linearize(&markup::render_html(&self.controller));

        // Re-announce the control so its new state is heard.
        match self.nodes.iter().position(|n| n.control == Some(index)) {
            Some(at) => {
                self.move_to(at);
            }
            None => self.cursor = None,
        }
        true
    }

    fn move_to(&mut self, target: usize) -> Option<&str> {
        let phrase = self.nodes.get(target)?.phrase.clone();
        log::debug!("Screen reader: {}", phrase);
        self.cursor = Some(target);
        self.spoken.push(phrase);
        self.spoken.last().map(String::as_str)
    }
}

/// Flatten markup into screen reader stops.
pub fn linearize(html: &str) -> Vec<SpokenNode> {
    let document = Html::parse_fragment(html);
    let labels = label_texts(&document);
    let mut nodes = Vec::new();
    walk(document.root_element(), &labels, &mut nodes);
    nodes
}

fn label_texts(document: &Html) -> HashMap<String, String> {
    let mut labels = HashMap::new();
    if let Ok(selector) = Selector::parse("[id]") {
        for element in document.select(&selector) {
            if let Some(id) = element.value().id() {
                labels.insert(id.to_string(), text_of(&element));
            }
        }
    }
    labels
}

fn text_of(element: &ElementRef) -> String {
    element.text().flat_map(str::split_whitespace).collect::<Vec<_>>().join(" ")
}

fn accessible_name(element: &ElementRef, labels: &HashMap<String, String>) -> Option<String> {
    let value = element.value();
    if let Some(label) = value.attr("aria-label").filter(|l| !l.trim().is_empty()) {
        return Some(label.trim().to_string());
    }
    let labelled: Vec<&str> = value
        .attr("aria-labelledby")
        .map(|refs| {
            refs.split_whitespace()
                .filter_map(|id| labels.get(id).map(String::as_str))
                .filter(|text| !text.is_empty())
                .collect()
        })
        .unwrap_or_default();
    if labelled.is_empty() {
        None
    } else {
        Some(labelled.join(" "))
    }
}

fn with_name(role: &str, name: &Option<String>) -> String {
    match name {
        Some(name) => format!("{}, {}", role, name),
        None => role.to_string(),
    }
}

fn walk(element: ElementRef, labels: &HashMap<String, String>, nodes: &mut Vec<SpokenNode>) {
    let value = element.value();
    if value.attr("aria-hidden") == Some("true") {
        return;
    }

    let name = value.name();
    match (name, value.attr("role")) {
        (_, Some("region")) => {
            let label = accessible_name(&element, labels);
            nodes.push(SpokenNode::text(with_name("region", &label)));
            walk_children(element, labels, nodes);
            nodes.push(SpokenNode::text(with_name("end of region", &label)));
        }
        ("ul" | "ol", _) => {
            let label = accessible_name(&element, labels);
            nodes.push(SpokenNode::text(with_name("list", &label)));
            walk_children(element, labels, nodes);
            nodes.push(SpokenNode::text(with_name("end of list", &label)));
        }
        ("li", _) => {
            nodes.push(SpokenNode::text("listitem".to_string()));
            walk_children(element, labels, nodes);
        }
        ("h1" | "h2" | "h3" | "h4" | "h5" | "h6", _) => {
            let level = name[1..].parse::<u8>().unwrap_or(HEADING_LEVEL);
            nodes.push(SpokenNode::text(format!(
                "heading, {}, level {}",
                text_of(&element),
                level
            )));
            walk_children(element, labels, nodes);
        }
        ("button", _) => {
            let label = value
                .attr("aria-label")
                .map(str::to_string)
                .unwrap_or_else(|| text_of(&element));
            let mut phrase = format!("button, {}", label);
            match value.attr("aria-expanded") {
                Some("true") => phrase.push_str(", expanded"),
                Some(_) => phrase.push_str(", not expanded"),
                None => {}
            }
            nodes.push(SpokenNode {
                phrase,
                control: value.id().and_then(markup::index_from_control_id),
                focusable: value.attr("disabled").is_none(),
            });
        }
        _ => walk_children(element, labels, nodes),
    }
}

fn walk_children(
    element: ElementRef,
    labels: &HashMap<String, String>,
    nodes: &mut Vec<SpokenNode>,
) {
    for child in element.children() {
        if let Some(child_element) = ElementRef::wrap(child) {
            walk(child_element, labels, nodes);
        } else if let Node::Text(text) = child.value() {
            let spoken = text.split_whitespace().collect::<Vec<_>>().join(" ");
            if !spoken.is_empty() {
                nodes.push(SpokenNode::text(spoken));
            }
        }
    }
}
