use crate::models::PostId;
use crate::post_view::CopySlot;
use std::path::PathBuf;

/// Which pane receives plain key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Feed,
    Composer,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Navigation
    NextPost,
    PreviousPost,
    FocusComposer,
    FocusFeed,

    // Composer operations
    SubmitPost,
    CancelDraft,
    RemoveImage,
    AttachImage(PathBuf),
    ImageLoaded {
        path: PathBuf,
        bytes: Vec<u8>,
    },
    ImageLoadFailed {
        path: PathBuf,
        error: String,
    },

    // Post interactions
    ToggleLike(PostId),
    ToggleComments(PostId),
    ToggleColors(PostId),
    StartComment(PostId),
    SubmitComment(PostId),
    CopySlot {
        post_id: PostId,
        slot: CopySlot,
    },

    // UI operations
    ShowDialog(DialogType),
    HideDialog,
    CycleIconTheme,

    // App control
    Quit,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogType {
    AttachImage,
    Error(String),
    Info(String),
    Help,
    Logs,
}
