//! Reusable view components shared by the pages.

pub mod alert_banner;
