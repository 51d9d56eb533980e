mod button;
mod checkbox;
mod modal;

pub use button::Button;
pub use checkbox::TriStateCheckbox;
pub use modal::Modal;
