pub mod api_utils;
pub mod config;
pub mod entity_form;
pub mod icons;
pub mod modal;
pub mod resource_page;
pub mod toast;
