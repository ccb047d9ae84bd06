mod alert;
mod button;
mod modal;
mod spinner;
mod suggest_input;

pub(crate) use alert::{Alert, AlertKind};
pub(crate) use button::Button;
pub(crate) use modal::Modal;
pub(crate) use spinner::Spinner;
pub(crate) use suggest_input::SuggestInput;
