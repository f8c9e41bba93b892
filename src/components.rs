//! Reusable HTML components
//!
//! Maud components and collaborators used around the presentation table:
//! the code-block collaborator, the in-app navigation link, and the page
//! wrapper for standalone output.

pub mod code_block;
pub mod layout;
pub mod link;
