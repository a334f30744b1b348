pub mod action;
pub mod components;
pub mod config;
pub mod icons;
pub mod modal_frame;
pub mod notice;
pub mod scroll_lock;
