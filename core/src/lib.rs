//! Shared pieces of the Nails-by-Salma site: the display-ready content
//! model, the Strapi client that turns CMS responses into one view model,
//! and the section renderers both site variants use.

pub mod content;
pub mod icons;
pub mod strapi;
pub mod ui;
