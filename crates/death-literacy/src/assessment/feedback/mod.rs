mod recommendations;
mod synthesis;
pub mod views;

pub use recommendations::recommend;
pub use synthesis::{domain_insights, synthesize};
pub use views::{DomainInsight, FeedbackReport};
