//! Bilingual IT-services landing page with a lead-capture contact form.

pub mod config;
pub mod contact;
pub mod delivery;
pub mod i18n;
pub mod page;
pub mod server;
pub mod telegram;
pub mod whatsapp;
