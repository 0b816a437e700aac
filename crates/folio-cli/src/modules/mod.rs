pub(crate) mod appointments;
pub(crate) mod auth;
pub(crate) mod blog;
pub(crate) mod experiences;
pub(crate) mod newsletter;
pub(crate) mod projects;
pub(crate) mod system;
pub(crate) mod testimonials;
