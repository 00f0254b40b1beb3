use accordion_shared::{AccordionConfig, AccordionController, AccordionError};
use leptos::logging::warn;

/// Accordion content bundled with the page.
const CONTENT_JSON: &str = include_str!("../content/accordion.json");

/// Build the controller for the bundled content.
///
/// Falls back to the built-in sections when the bundled JSON is unusable.
pub fn load_controller() -> AccordionController {
    parse_controller(CONTENT_JSON).unwrap_or_else(|err| {
        warn!("Invalid accordion content, using defaults: {}", err);
        AccordionController::default()
    })
}

fn parse_controller(json: &str) -> Result<AccordionController, AccordionError> {
    AccordionController::new(AccordionConfig::from_json(json)?)
}
