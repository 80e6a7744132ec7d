//! folio
//!
//! Single-page personal portfolio rendered in the terminal, with an
//! active-section scroll tracker and a validated contact form.
//!
//! Pure Core / Impure Shell: `model`, `tracker`, `form` and `state` are
//! deterministic and take time as a parameter; `view`, `capability` and
//! the submit worker touch the terminal, the clipboard and the network.

pub mod capability;
pub mod config;
pub mod form;
pub mod logging;
pub mod model;
pub mod state;
pub mod tracker;
pub mod view;
