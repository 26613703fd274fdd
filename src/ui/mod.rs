//! Terminal front end: shared icons, the network spinner, and the board
//! renderer.

pub mod board_render;
pub mod icons;
pub mod spinner;
