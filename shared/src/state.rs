use crate::error::AccordionError;
use crate::markup::{self, ItemAttrs};
use crate::types::{AccordionConfig, Item, OpenIndex};

/// Next open index after activating the section at `index`.
///
/// Activating the open section closes it; activating any other section opens
/// it, which closes the previous one since only a single index is tracked.
pub fn toggle(current: OpenIndex, index: usize) -> OpenIndex {
    if current == Some(index) {
        None
    } else {
        Some(index)
    }
}

// ============================================================================
// Activation
// ============================================================================

/// Keys that activate a focused control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActivationKey {
    Enter,
    Space,
}

impl ActivationKey {
    /// Map a `KeyboardEvent.key` value to an activation key.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Enter" => Some(ActivationKey::Enter),
            " " | "Spacebar" => Some(ActivationKey::Space),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ActivationKey::Enter => "Enter",
            ActivationKey::Space => "Space",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    Pointer,
    Key(ActivationKey),
}

// ============================================================================
// Controller
// ============================================================================

/// Fixed list of sections plus the single open index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccordionController {
    label: String,
    items: Vec<Item>,
    open: OpenIndex,
}

impl Default for AccordionController {
    fn default() -> Self {
        let config = AccordionConfig::default();
        Self {
            label: config.label,
            items: config.items,
            open: None,
        }
    }
}

impl AccordionController {
    /// Build a controller from validated content, every section collapsed.
    pub fn new(config: AccordionConfig) -> Result<Self, AccordionError> {
        config.validate()?;
        Ok(Self {
            label: config.label,
            items: config.items,
            open: None,
        })
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn open_index(&self) -> OpenIndex {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Open or close the section at `index`.
    ///
    /// Indices outside the item list are ignored.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.items.len() {
            log::warn!(
                "Ignoring activation of section {} (accordion has {} sections)",
                index,
                self.items.len()
            );
            return;
        }

        let next = toggle(self.open, index);
        log::debug!("Accordion open index {:?} -> {:?}", self.open, next);
        self.open = next;
    }

    /// Handle a user activation of the control at `index`.
    pub fn activate(&mut self, index: usize, activation: Activation) {
        if let Activation::Key(key) = activation {
            log::debug!("Control {} activated with {}", index, key.as_str());
        }
        self.toggle(index);
    }

    /// Attribute values of the section at `index` for the current state.
    pub fn attrs(&self, index: usize) -> ItemAttrs {
        let expanded = self.is_open(index);
        ItemAttrs {
            control_id: markup::control_id(index),
            region_id: markup::region_id(index),
            expanded,
            hidden: !expanded,
        }
    }

    /// Control ids in sequential focus navigation order.
    pub fn focus_order(&self) -> Vec<String> {
        (0..self.items.len()).map(markup::control_id).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expanded_flags(controller: &AccordionController) -> Vec<bool> {
        (0..controller.len()).map(|i| controller.attrs(i).expanded).collect()
    }

    #[test]
    fn test_toggle_transition() {
        assert_eq!(toggle(None, 0), Some(0));
        assert_eq!(toggle(Some(0), 0), None);
        assert_eq!(toggle(Some(0), 2), Some(2));
        assert_eq!(toggle(Some(2), 1), Some(1));
    }

    #[test]
    fn test_initial_state_collapsed() {
        let controller = AccordionController::default();
        assert_eq!(controller.open_index(), None);
        for i in 0..controller.len() {
            let attrs = controller.attrs(i);
            assert!(!attrs.expanded);
            assert!(attrs.hidden);
        }
    }

    #[test]
    fn test_at_most_one_expanded_for_all_sequences() {
        // Every activation sequence of length 4 over three sections.
        for seq in 0..81usize {
            let mut controller = AccordionController::default();
            let mut code = seq;
            for _ in 0..4 {
                controller.toggle(code % 3);
                code /= 3;

                let open = expanded_flags(&controller).iter().filter(|e| **e).count();
                assert!(open <= 1, "sequence {} left {} sections open", seq, open);
            }
        }
    }

    #[test]
    fn test_double_activation_restores_state() {
        for index in 0..3 {
            let mut controller = AccordionController::default();

            controller.toggle(index);
            let others_open = expanded_flags(&controller)
                .iter()
                .enumerate()
                .any(|(i, e)| i != index && *e);
            assert!(!others_open);

            controller.toggle(index);
            assert_eq!(expanded_flags(&controller), vec![false, false, false]);
        }
    }

    #[test]
    fn test_double_activation_after_switch_leaves_all_closed() {
        let mut controller = AccordionController::default();
        controller.toggle(2);
        controller.toggle(0);
        controller.toggle(0);
        assert_eq!(controller.open_index(), None);
    }

    #[test]
    fn test_switching_sections() {
        let mut controller = AccordionController::default();
        controller.toggle(0);
        assert_eq!(expanded_flags(&controller), vec![true, false, false]);

        controller.toggle(1);
        assert_eq!(expanded_flags(&controller), vec![false, true, false]);
        assert!(controller.attrs(0).hidden);
        assert!(!controller.attrs(1).hidden);

        controller.toggle(1);
        assert_eq!(expanded_flags(&controller), vec![false, false, false]);
        assert_eq!(controller.open_index(), None);
    }

    #[test]
    fn test_attribute_associations() {
        let controller = AccordionController::default();
        for i in 0..controller.len() {
            let attrs = controller.attrs(i);
            assert_eq!(attrs.control_id, format!("accordion-control-{}", i + 1));
            assert_eq!(attrs.region_id, format!("content-{}", i + 1));
        }
    }

    #[test]
    fn test_keyboard_matches_pointer() {
        let activations = [
            Activation::Pointer,
            Activation::Key(ActivationKey::Enter),
            Activation::Key(ActivationKey::Space),
        ];

        for activation in activations {
            let mut by_pointer = AccordionController::default();
            let mut by_other = AccordionController::default();
            for index in [0, 1, 1, 2, 0] {
                by_pointer.activate(index, Activation::Pointer);
                by_other.activate(index, activation);
                assert_eq!(by_pointer.open_index(), by_other.open_index());
            }
        }
    }

    #[test]
    fn test_activation_key_from_key() {
        assert_eq!(ActivationKey::from_key("Enter"), Some(ActivationKey::Enter));
        assert_eq!(ActivationKey::from_key(" "), Some(ActivationKey::Space));
        assert_eq!(ActivationKey::from_key("Spacebar"), Some(ActivationKey::Space));
        assert_eq!(ActivationKey::from_key("Tab"), None);
        assert_eq!(ActivationKey::from_key("a"), None);
    }

    #[test]
    fn test_out_of_range_toggle_ignored() {
        let mut controller = AccordionController::default();
        controller.toggle(1);
        controller.toggle(7);
        assert_eq!(controller.open_index(), Some(1));
    }

    #[test]
    fn test_new_rejects_invalid_content() {
        let config = AccordionConfig {
            label: "List".to_string(),
            items: Vec::new(),
        };
        assert_eq!(AccordionController::new(config), Err(AccordionError::NoItems));
    }

    #[test]
    fn test_focus_order() {
        let controller = AccordionController::default();
        assert_eq!(
            controller.focus_order(),
            vec!["accordion-control-1", "accordion-control-2", "accordion-control-3"]
        );
    }
}
