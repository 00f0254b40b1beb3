//! Automated accessibility audit of accordion markup.
//!
//! Rules follow the axe-core checks relevant to a disclosure accordion
//! (WCAG 1.3.1 Info and Relationships, 4.1.2 Name, Role, Value) plus the
//! state consistency the accordion itself must uphold.

use std::collections::{HashMap, HashSet};

use accordion_shared::markup::{self, HEADING_LEVEL};
use accordion_shared::{AccordionController, OpenIndex};
use scraper::{ElementRef, Html, Selector};
use serde::Serialize;

use crate::finding::{AuditReport, Finding, Severity};

/// Elements that take keyboard focus without a tabindex.
const FOCUSABLE: &str = "button, a[href], input, select, textarea, summary, [tabindex]";

/// Audit result for one reachable accordion state.
#[derive(Debug, Clone, Serialize)]
pub struct StateAudit {
    pub open_index: OpenIndex,
    pub report: AuditReport,
}

impl StateAudit {
    pub fn describe_state(&self) -> String {
        match self.open_index {
            None => "all sections collapsed".to_string(),
            Some(index) => format!("section {} expanded", index + 1),
        }
    }
}

/// Audit an HTML document or fragment.
pub fn audit_html(html: &str) -> AuditReport {
    let document = Html::parse_fragment(html);
    let mut report = AuditReport::new();

    check_list_label(&document, &mut report);
    check_list_children(&document, &mut report);
    check_duplicate_ids(&document, &mut report);
    check_aria_values(&document, &mut report);
    check_button_names(&document, &mut report);
    check_region_names(&document, &mut report);
    check_hidden_focus(&document, &mut report);
    check_heading_wraps_control(&document, &mut report);
    check_disclosure_attributes(&document, &mut report);
    check_expanded_state(&document, &mut report);
    check_single_expanded(&document, &mut report);

    report
}

/// Render the controller in its current state and audit the result.
pub fn audit_controller(controller: &AccordionController) -> AuditReport {
    audit_html(&markup::render_html(controller))
}

/// Audit every state the accordion can reach: nothing open, then each section open.
pub fn audit_reachable_states(controller: &AccordionController) -> Vec<StateAudit> {
    let states = std::iter::once(None).chain((0..controller.len()).map(Some));

    states
        .map(|open_index| {
            let state = with_open(controller, open_index);
            let report = audit_controller(&state);
            log::debug!(
                "Audited state {:?}: {} finding(s)",
                open_index,
                report.len()
            );
            StateAudit { open_index, report }
        })
        .collect()
}

/// Drive a copy of `controller` to `open` through toggles alone.
fn with_open(controller: &AccordionController, open: OpenIndex) -> AccordionController {
    let mut state = controller.clone();
    if let Some(current) = state.open_index() {
        state.toggle(current);
    }
    if let Some(index) = open {
        state.toggle(index);
    }
    state
}

// ============================================================================
// Helpers
// ============================================================================

fn select<'a>(document: &'a Html, css: &str) -> Vec<ElementRef<'a>> {
    match Selector::parse(css) {
        Ok(selector) => document.select(&selector).collect(),
        Err(_) => Vec::new(),
    }
}

fn describe(element: &ElementRef) -> String {
    let value = element.value();
    match value.id() {
        Some(id) => format!("<{} id=\"{}\">", value.name(), id),
        None => format!("<{}>", value.name()),
    }
}

fn text_of(element: &ElementRef) -> String {
    element.text().collect::<Vec<_>>().join(" ").split_whitespace().collect::<Vec<_>>().join(" ")
}

fn non_blank(value: Option<&str>) -> bool {
    value.map(|v| !v.trim().is_empty()).unwrap_or(false)
}

fn elements_by_id<'a>(document: &'a Html) -> HashMap<&'a str, ElementRef<'a>> {
    let mut ids = HashMap::new();
    for element in select(document, "[id]") {
        if let Some(id) = element.value().id() {
            ids.entry(id).or_insert(element);
        }
    }
    ids
}

// ============================================================================
// Rules
// ============================================================================

/// Lists grouping the controls need an accessible name.
fn check_list_label(document: &Html, report: &mut AuditReport) {
    for list in select(document, "ul, ol") {
        let value = list.value();
        if !non_blank(value.attr("aria-label")) && !non_blank(value.attr("aria-labelledby")) {
            report.add(
                Finding::new("list-label", Severity::Error, "List has no accessible label")
                    .with_element(&describe(&list))
                    .with_wcag("1.3.1"),
            );
        }
    }
}

fn check_list_children(document: &Html, report: &mut AuditReport) {
    for list in select(document, "ul, ol") {
        for child in list.children().filter_map(ElementRef::wrap) {
            if child.value().name() != "li" {
                report.add(
                    Finding::new(
                        "list-children",
                        Severity::Error,
                        &format!("<{}> must only contain <li> elements", list.value().name()),
                    )
                    .with_element(&describe(&child))
                    .with_wcag("1.3.1"),
                );
            }
        }
    }
}

fn check_duplicate_ids(document: &Html, report: &mut AuditReport) {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();

    for element in select(document, "[id]") {
        if let Some(id) = element.value().id() {
            if !seen.insert(id) && reported.insert(id) {
                report.add(
                    Finding::new(
                        "duplicate-id",
                        Severity::Error,
                        &format!("id \"{}\" is used more than once", id),
                    )
                    .with_element(&describe(&element))
                    .with_wcag("4.1.1"),
                );
            }
        }
    }
}

/// Boolean ARIA states hold `true`/`false`; id references point at existing elements.
fn check_aria_values(document: &Html, report: &mut AuditReport) {
    for attr in ["aria-expanded", "aria-hidden"] {
        for element in select(document, &format!("[{}]", attr)) {
            let value = element.value().attr(attr).unwrap_or_default();
            if value != "true" && value != "false" {
                report.add(
                    Finding::new(
                        "aria-valid-attr-value",
                        Severity::Error,
                        &format!("{}=\"{}\" must be \"true\" or \"false\"", attr, value),
                    )
                    .with_element(&describe(&element))
                    .with_wcag("4.1.2"),
                );
            }
        }
    }

    let ids = elements_by_id(document);
    for attr in ["aria-controls", "aria-labelledby"] {
        for element in select(document, &format!("[{}]", attr)) {
            let value = element.value().attr(attr).unwrap_or_default();
            let mut targets = value.split_whitespace().peekable();
            if targets.peek().is_none() {
                report.add(
                    Finding::new(
                        "aria-valid-attr-value",
                        Severity::Error,
                        &format!("{} is empty", attr),
                    )
                    .with_element(&describe(&element))
                    .with_wcag("4.1.2"),
                );
                continue;
            }
            for target in targets {
                if !ids.contains_key(target) {
                    report.add(
                        Finding::new(
                            "aria-valid-attr-value",
                            Severity::Error,
                            &format!("{} references missing id \"{}\"", attr, target),
                        )
                        .with_element(&describe(&element))
                        .with_wcag("4.1.2"),
                    );
                }
            }
        }
    }
}

fn check_button_names(document: &Html, report: &mut AuditReport) {
    for button in select(document, "button, [role=button]") {
        if text_of(&button).is_empty() && !non_blank(button.value().attr("aria-label")) {
            report.add(
                Finding::new("button-name", Severity::Error, "Button has no accessible name")
                    .with_element(&describe(&button))
                    .with_wcag("4.1.2"),
            );
        }
    }
}

fn check_region_names(document: &Html, report: &mut AuditReport) {
    let ids = elements_by_id(document);

    for region in select(document, "[role=region]") {
        let labelled_by = region
            .value()
            .attr("aria-labelledby")
            .map(|refs| {
                refs.split_whitespace()
                    .filter_map(|id| ids.get(id))
                    .any(|label| !text_of(label).is_empty())
            })
            .unwrap_or(false);

        if !labelled_by && !non_blank(region.value().attr("aria-label")) {
            report.add(
                Finding::new("region-name", Severity::Error, "Region has no accessible name")
                    .with_element(&describe(&region))
                    .with_wcag("4.1.2"),
            );
        }
    }
}

/// Content hidden from assistive technology must not take focus.
fn check_hidden_focus(document: &Html, report: &mut AuditReport) {
    let Ok(focusable) = Selector::parse(FOCUSABLE) else {
        return;
    };

    for hidden in select(document, "[aria-hidden=true]") {
        for element in hidden.select(&focusable) {
            let value = element.value();
            if value.attr("tabindex") == Some("-1") || value.attr("disabled").is_some() {
                continue;
            }
            report.add(
                Finding::new(
                    "aria-hidden-focus",
                    Severity::Error,
                    "Focusable element inside aria-hidden content",
                )
                .with_element(&describe(&element))
                .with_wcag("4.1.2"),
            );
        }
    }
}

/// Disclosure buttons sit alone inside a heading of the accordion's level.
fn check_heading_wraps_control(document: &Html, report: &mut AuditReport) {
    let heading = format!("h{}", HEADING_LEVEL);

    for button in select(document, "button[aria-controls]") {
        let parent_name = button
            .parent()
            .and_then(ElementRef::wrap)
            .map(|parent| parent.value().name().to_string());

        if parent_name.as_deref() != Some(heading.as_str()) {
            report.add(
                Finding::new(
                    "heading-wraps-control",
                    Severity::Warning,
                    &format!("Accordion button should be wrapped in an <{}>", heading),
                )
                .with_element(&describe(&button))
                .with_wcag("1.3.1"),
            );
        }
    }
}

/// Accordion buttons carry their disclosure state and control a region with `aria-hidden`.
fn check_disclosure_attributes(document: &Html, report: &mut AuditReport) {
    let ids = elements_by_id(document);

    for button in select(document, &format!("ul > li > h{} > button", HEADING_LEVEL)) {
        for attr in ["aria-controls", "aria-expanded"] {
            if !non_blank(button.value().attr(attr)) {
                report.add(
                    Finding::new(
                        "disclosure-attributes",
                        Severity::Error,
                        &format!("Accordion button has no {}", attr),
                    )
                    .with_element(&describe(&button))
                    .with_wcag("4.1.2"),
                );
            }
        }

        // Without aria-controls the panel is the element following the heading.
        let panels: Vec<ElementRef> = match button.value().attr("aria-controls") {
            Some(controls) if non_blank(Some(controls)) => controls
                .split_whitespace()
                .filter_map(|id| ids.get(id).copied())
                .collect(),
            _ => button
                .parent()
                .and_then(ElementRef::wrap)
                .and_then(|heading| heading.next_siblings().filter_map(ElementRef::wrap).next())
                .into_iter()
                .collect(),
        };

        for panel in panels {
            if panel.value().attr("role") != Some("region") {
                report.add(
                    Finding::new(
                        "disclosure-attributes",
                        Severity::Error,
                        "Accordion panel has no role=\"region\"",
                    )
                    .with_element(&describe(&panel))
                    .with_wcag("4.1.2"),
                );
            }
            if !non_blank(panel.value().attr("aria-hidden")) {
                report.add(
                    Finding::new(
                        "disclosure-attributes",
                        Severity::Error,
                        "Accordion panel has no aria-hidden",
                    )
                    .with_element(&describe(&panel))
                    .with_wcag("4.1.2"),
                );
            }
        }
    }
}

/// A control reads expanded exactly when its region is not hidden.
fn check_expanded_state(document: &Html, report: &mut AuditReport) {
    let ids = elements_by_id(document);

    for button in select(document, "[aria-controls][aria-expanded]") {
        let expanded = button.value().attr("aria-expanded") == Some("true");
        let controls = button.value().attr("aria-controls").unwrap_or_default();

        for region in controls.split_whitespace().filter_map(|id| ids.get(id)) {
            let hidden = region.value().attr("aria-hidden") == Some("true");
            if expanded == hidden {
                report.add(
                    Finding::new(
                        "expanded-state-mismatch",
                        Severity::Error,
                        &format!(
                            "aria-expanded=\"{}\" but controlled {} is {}",
                            expanded,
                            describe(region),
                            if hidden { "hidden" } else { "visible" }
                        ),
                    )
                    .with_element(&describe(&button))
                    .with_wcag("4.1.2"),
                );
            }
        }
    }
}

fn check_single_expanded(document: &Html, report: &mut AuditReport) {
    let Ok(expanded) = Selector::parse("[aria-controls][aria-expanded=true]") else {
        return;
    };

    for list in select(document, "ul, ol") {
        let open = list.select(&expanded).count();
        if open > 1 {
            report.add(
                Finding::new(
                    "single-expanded",
                    Severity::Error,
                    &format!("{} sections expanded at once, at most one allowed", open),
                )
                .with_element(&describe(&list)),
            );
        }
    }
}
