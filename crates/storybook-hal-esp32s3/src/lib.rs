#![cfg_attr(not(test), no_std)]

//! Board glue for the storybook: Memory LCD, encoder and edge pads, and the
//! spread renderer. Only `embedded-hal` traits are used here; the firmware
//! binary supplies the concrete ESP32-S3 peripherals.

pub mod input;
pub mod platform;
pub mod render;
