#![cfg_attr(not(test), no_std)]

//! Platform-independent core of the storybook: page data, the page-turn
//! state machine, and the view model handed to board renderers.

pub mod app;
pub mod content;
pub mod input;
pub mod render;
pub mod text_policy;
