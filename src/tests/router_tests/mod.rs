mod auth_tests;
mod form_tests;
mod leads_tests;
mod purchase_tests;
