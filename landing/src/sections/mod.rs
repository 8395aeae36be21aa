// Landing page sections
// Developed by The Deep Mirror Team (c)2026

mod faq;
mod features;
mod footer;
mod hero;
mod nav;
mod signup_form;
mod structured_data;

pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use nav::Nav;
pub use signup_form::SignupForm;
pub use structured_data::StructuredData;
