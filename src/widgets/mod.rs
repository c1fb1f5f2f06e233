mod badge;
mod button;
mod card;
mod dropdown;
mod icon_button;

pub use badge::Badge;
pub use button::{Button, ButtonSize, ButtonVariant};
pub use card::Card;
pub use dropdown::{Dropdown, DropdownCoordinator, ExclusiveOpen};
pub use icon_button::IconButton;
