//! Page Components

mod auth;
mod dashboard;
mod home;

pub use auth::AuthPage;
pub use dashboard::DashboardPage;
pub use home::HomePage;
