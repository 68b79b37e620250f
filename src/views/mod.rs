pub mod dialog;
pub mod home;

pub use dialog::{dialog_view, DialogView, StepView};
pub use home::render_home_page;
