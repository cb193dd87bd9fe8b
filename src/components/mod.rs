mod footer;
mod nav;

pub use footer::Footer;
pub use nav::Nav;
