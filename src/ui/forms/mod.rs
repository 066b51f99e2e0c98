//! Form rendering module
//!
//! - `field_renderer`: field rendering utilities
//! - `amt_form`: AMT parameter panel
//! - `inspection_form`: inspection report form

pub mod amt_form;
mod field_renderer;
pub mod inspection_form;
