//! UI Components
//!
//! Reusable Leptos components.

mod chart_view;
mod comparison_table;
mod create_analysis_modal;
mod delete_analysis_modal;
mod delete_confirm_button;
mod field_list;
mod notification_stack;
mod object_cards;
mod star_rating;
mod stat_counter;
mod theme_toggle;

pub use chart_view::ChartView;
pub use comparison_table::{CellView, ComparisonTable};
pub use create_analysis_modal::CreateAnalysisModal;
pub use delete_analysis_modal::{DeleteAnalysisModal, DeleteDialog, PendingDelete};
pub use delete_confirm_button::DeleteConfirmButton;
pub use field_list::FieldList;
pub use notification_stack::NotificationStack;
pub use object_cards::ObjectCards;
pub use star_rating::StarRating;
pub use stat_counter::StatCounter;
pub use theme_toggle::ThemeToggle;
