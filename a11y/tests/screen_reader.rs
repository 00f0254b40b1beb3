//! What a desktop screen reader user hears when reaching and using the accordion.
//!
//! Follows the WAI-ARIA Authoring Practices accordion pattern: a focused
//! accordion button announces its purpose, its button role, its label and
//! its expanded or collapsed state.

use accordion_a11y::VirtualScreenReader;
use accordion_shared::AccordionController;

fn start() -> VirtualScreenReader {
    VirtualScreenReader::start(AccordionController::default())
}

/// Advance until the last phrase satisfies `matches`, giving up after `limit` steps.
fn navigate_until(
    reader: &mut VirtualScreenReader,
    limit: usize,
    matches: impl Fn(&str) -> bool,
) -> Option<String> {
    for _ in 0..limit {
        let phrase = reader.next()?.to_string();
        if matches(&phrase) {
            return Some(phrase);
        }
    }
    None
}

fn is_button(phrase: &str) -> bool {
    phrase.to_lowercase().contains("button")
}

// ============================================================================
// Moving to the first accordion button
// ============================================================================

#[test]
fn test_hear_purpose() {
    let mut reader = start();
    let spoken = navigate_until(&mut reader, 10, |p| p.contains("Cabecera 1")).unwrap();
    assert!(spoken.contains("Cabecera 1"));
}

#[test]
fn test_hear_button_role() {
    let mut reader = start();
    let spoken = navigate_until(&mut reader, 10, is_button).unwrap();
    assert!(spoken.starts_with("button"));
    assert!(spoken.contains("Cabecera 1"));
}

#[test]
fn test_hear_collapsed_state() {
    let mut reader = start();
    let spoken = navigate_until(&mut reader, 10, is_button).unwrap();
    assert!(spoken.to_lowercase().contains("not expanded"));
}

// ============================================================================
// Activating the accordion button
// ============================================================================

#[test]
fn test_hear_expanded_state() {
    let mut reader = start();
    navigate_until(&mut reader, 10, is_button).unwrap();
    assert!(reader.act());

    let spoken = reader.last_spoken_phrase().to_lowercase();
    assert!(spoken.contains("button"));
    assert!(spoken.contains("expanded"));
    assert!(!spoken.contains("not expanded"));
}

#[test]
fn test_hear_panel_content() {
    let mut reader = start();
    navigate_until(&mut reader, 10, is_button).unwrap();
    reader.act();

    let spoken = navigate_until(&mut reader, 10, |p| p.contains("Lorem ipsum")).unwrap();
    assert_eq!(spoken, "Lorem ipsum dolor sit amet");
}

#[test]
fn test_hear_region_role() {
    let mut reader = start();
    navigate_until(&mut reader, 10, is_button).unwrap();
    reader.act();

    let spoken = navigate_until(&mut reader, 10, |p| p.to_lowercase().contains("region")).unwrap();
    assert_eq!(spoken, "region, Cabecera 1");
}

#[test]
fn test_collapsed_panel_is_silent() {
    let mut reader = start();
    let heard = navigate_until(&mut reader, 30, |p| {
        p.contains("Lorem ipsum") || p.starts_with("region")
    });
    assert_eq!(heard, None);
}

#[test]
fn test_closing_panel_silences_it_again() {
    let mut reader = start();
    navigate_until(&mut reader, 10, is_button).unwrap();
    reader.act();
    reader.act();

    assert!(reader.last_spoken_phrase().ends_with("not expanded"));
    assert!(!reader.phrases().iter().any(|p| p.contains("Lorem ipsum")));
}

// ============================================================================
// Navigating between accordion items
// ============================================================================

#[test]
fn test_reach_all_buttons() {
    let mut reader = start();
    let mut buttons = Vec::new();
    for _ in 0..30 {
        match reader.next() {
            Some(phrase) if is_button(phrase) && phrase.contains("Cabecera") => {
                buttons.push(phrase.to_string())
            }
            Some(_) => {}
            None => break,
        }
    }

    assert!(buttons.len() >= 3);
    for title in ["Cabecera 1", "Cabecera 2", "Cabecera 3"] {
        assert!(buttons.iter().any(|b| b.contains(title)), "{} not heard", title);
    }
}

#[test]
fn test_previous_returns_to_button() {
    let mut reader = start();
    navigate_until(&mut reader, 10, is_button).unwrap();
    reader.act();
    reader.next();

    assert_eq!(reader.previous(), Some("button, Cabecera 1, expanded"));
}

// ============================================================================
// Container
// ============================================================================

#[test]
fn test_hear_container_label() {
    let mut reader = start();
    let spoken = reader.next().unwrap().to_lowercase();
    assert!(spoken.contains("list"));
    assert!(spoken.contains("acordeón accesible amb llista"));
}
