//! HTML components for the landing page
//!
//! Maud component functions that serialize the page model. The layout
//! component owns the document skeleton while cards and social links are
//! rendered per entry.

pub mod card;
pub mod layout;
pub mod social;
