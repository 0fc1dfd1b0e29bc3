pub mod email_cta;
pub mod lead_card;
pub mod lead_form;

pub use email_cta::email_cta_form;
pub use lead_card::{lead_card, lead_card_list};
pub use lead_form::lead_form;
