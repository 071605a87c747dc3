pub mod composer_component;
pub mod dialog_component;
pub mod dialogs;
pub mod feed_component;
pub mod post_card;
pub mod scrollbar_helper;
pub mod status_bar;

pub use composer_component::ComposerComponent;
pub use dialog_component::DialogComponent;
pub use feed_component::FeedComponent;
pub use scrollbar_helper::ScrollbarHelper;
pub use status_bar::{StatusBar, StatusInfo};
