mod contact;
mod home;
mod waitlist;

pub use contact::Contact;
pub use home::Home;
pub use waitlist::Waitlist;
