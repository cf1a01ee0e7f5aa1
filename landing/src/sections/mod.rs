// Landing page sections
// Developed by the SATI Consulting team (c)2025

mod about;
mod contact;
mod footer;
mod header;
mod hero;
mod icon;
mod scroll_to_top;
mod team;
mod testimonials;

pub use about::AboutUs;
pub use contact::Contact;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use icon::Icon;
pub use scroll_to_top::ScrollToTop;
pub use team::Team;
pub use testimonials::Testimonials;
