pub mod catalog;
pub mod entities;
pub mod fallback;
pub mod fetch;
