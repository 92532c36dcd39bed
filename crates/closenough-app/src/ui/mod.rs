pub mod dialogs;
pub mod form;
pub mod icon;
pub mod input;
