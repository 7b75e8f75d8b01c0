//! Study-guide subdomain.
//!
//! - [`template::GuideTemplate`] — prompt wording a topic is rendered into
//! - [`study_guide::StudyGuide`] — the generated guide returned to the user

pub mod study_guide;
pub mod template;
