// ATS application list: every returned application carries a quick-list match score.

pub mod handlers;
