//! Page components for Leviathan.

mod about;
mod admin;
mod auth;
mod conservation;
mod contact;
mod dashboard;
mod home;
mod learning;
mod policy;
mod upload;

pub use about::About;
pub use admin::Admin;
pub use auth::{SignIn, SignUp};
pub use conservation::Conservation;
pub use contact::Contact;
pub use dashboard::Dashboard;
pub use home::Home;
pub use learning::Learning;
pub use policy::Policy;
pub use upload::Upload;
