pub mod accordion;
