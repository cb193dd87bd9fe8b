mod about;
mod contact;
mod home;
mod privacy;
mod service_detail;
mod services;
mod terms;
mod work;

pub use about::AboutPage;
pub use contact::ContactPage;
pub use home::HomePage;
pub use privacy::PrivacyPage;
pub use service_detail::ServiceDetailPage;
pub use services::ServicesPage;
pub use terms::TermsPage;
pub use work::WorkPage;
