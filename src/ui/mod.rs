//! UI components

mod login_window;
mod monitor_window;
mod value_prompt;

pub use login_window::present_login_window;
pub use monitor_window::present_monitor_window;
pub use value_prompt::show_value_prompt;
