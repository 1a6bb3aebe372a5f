mod components;

mod landing;
pub use landing::Landing;

mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod mentor;
mod parent;
mod student;
