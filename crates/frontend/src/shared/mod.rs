pub mod badge;
pub mod format;
pub mod icons;
