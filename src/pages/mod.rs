mod admin;
mod application_detail;
mod applications;
mod change_password;
mod home;
mod interviews;
mod job_offer_detail;
mod job_offers;
mod login;
mod my_applications;
mod my_interviews;
mod profile;
mod users;

pub use admin::AdminPage;
pub use application_detail::ApplicationDetailPage;
pub use applications::ApplicationsPage;
pub use change_password::ChangePasswordPage;
pub use home::HomePage;
pub use interviews::InterviewsPage;
pub use job_offer_detail::JobOfferDetailPage;
pub use job_offers::JobOffersPage;
pub use login::LoginPage;
pub use my_applications::MyApplicationsPage;
pub use my_interviews::MyInterviewsPage;
pub use profile::ProfilePage;
pub use users::UsersPage;
