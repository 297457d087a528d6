//! Site plumbing shared by every view: language context, viewport and reveal
//! state, page addressing, outbound links and browser glue.

pub mod dom;
pub mod language;
pub mod links;
pub mod page;
pub mod reveal;
pub mod settings;
pub mod viewport;
