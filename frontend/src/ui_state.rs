//! Small per-component state machines, kept free of rendering so their
//! transitions can be tested on their own.

pub mod form;
pub mod menu;
pub mod nav;
