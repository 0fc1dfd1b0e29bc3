pub mod errors;
pub mod html;

pub use errors::{html_error_response, ResultResp};
pub use html::{
    html_response, html_response_with_status, redirect, redirect_clearing_session,
    redirect_with_session,
};
