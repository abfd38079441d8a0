//! Navigation bar decisions: which links show for a session and which one is
//! highlighted for the current path. Rendering lives in
//! `components::layout::navbar`.

pub(crate) mod model;

pub(crate) use model::{LinkStyle, NavItem, ViewState, nav_items};
