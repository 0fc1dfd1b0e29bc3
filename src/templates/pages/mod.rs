pub mod check_email;
pub mod home;
pub mod leads;
pub mod login;

pub use check_email::check_email_content;
pub use home::home_page;
pub use leads::{leads_page, LeadsPageVm, Tab};
pub use login::login_page;
