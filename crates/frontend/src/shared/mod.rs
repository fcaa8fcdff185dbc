pub mod api_utils;
pub mod dialogs;
pub mod download;
pub mod icons;
pub mod modal;
pub mod number_format;
