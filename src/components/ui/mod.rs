mod alert;
mod button;
mod card;
mod spinner;
mod text_field;

pub(crate) use alert::Alert;
pub(crate) use button::{Button, ButtonVariant};
pub(crate) use card::Card;
pub(crate) use spinner::Spinner;
pub(crate) use text_field::TextField;
