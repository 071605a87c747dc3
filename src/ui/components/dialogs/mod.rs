pub mod attach_dialog;
pub mod common;
pub mod system_dialogs;
