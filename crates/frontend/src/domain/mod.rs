pub mod a001_user;
pub mod a002_guidance_request;
pub mod a003_chat;
pub mod a004_notification;
pub mod a005_job;
pub mod a006_business;
pub mod a007_event;
pub mod a008_settings;
