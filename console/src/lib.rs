//! Screen controllers of the podcast console.
//!
//! Each controller owns its working copy and talks to the backend through
//! [`fc_api::ApiClient`]. Mutations come back as [`form_state::Outcome`]
//! values, which the owning list folds in with
//! [`form_state::reconcile`]: channel outcomes go to [`ChannelList::apply`]
//! and episode outcomes to [`ChannelScreen::apply_episode`].

mod channel_list;
mod channel_screen;
mod context;
mod episode_screen;
mod error;

pub use channel_list::ChannelList;
pub use channel_screen::{
    ALIAS_EMPTY, ALIAS_IN_USE, ALIAS_INVALID, ChannelEdit, ChannelScreen,
    TITLE_EMPTY,
};
pub use context::AppContext;
pub use episode_screen::{EpisodeEdit, EpisodeScreen};
pub use error::ScreenError;
