//! Page components, one per route.

pub mod dashboard;
pub mod home;
pub mod login;
pub mod recover;
pub mod register;
pub mod restricted;
