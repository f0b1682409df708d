//! Pages
//!
//! One component per server-rendered page; the payload decides which mounts.

mod analysis_setup;
mod analysis_view;
mod dashboard;
mod object_form;

pub use analysis_setup::AnalysisSetup;
pub use analysis_view::AnalysisView;
pub use dashboard::Dashboard;
pub use object_form::ObjectForm;
