pub mod admin_dashboard;
pub mod admin_login;
pub mod admin_ongoing_projects;
pub mod admin_projects;
pub mod admin_reviews;
pub mod home;
pub mod not_found;
pub mod ongoing_projects;
pub mod projects;
pub mod reviews;
