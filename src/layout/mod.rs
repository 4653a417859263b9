//! Measured layout: recorded drawing, auto-sized boxes, bounded tables and multi-page flow.

pub mod blocks;
pub mod boxed;
pub mod display;
pub mod flow;
pub mod table;
