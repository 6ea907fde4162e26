pub mod page;
pub mod social_button;
pub mod widgets;

pub use page::{LibraryEvent, Page};
pub use social_button::{HoverState, IconSet, SocialButton, SocialIcon};
pub use widgets::AnimationView;
