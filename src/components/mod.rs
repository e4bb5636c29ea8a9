//! UI Components
//!
//! Page-level and reusable Leptos components.

mod dashboard_page;
mod signin_page;
mod signup_page;
mod toast_host;
mod todo_row;

pub use dashboard_page::DashboardPage;
pub use signin_page::SigninPage;
pub use signup_page::SignupPage;
pub use toast_host::ToastHost;
pub use todo_row::TodoRow;
