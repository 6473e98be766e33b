//! UI Components for the share buttons.
//!
//! # Group Components
//! - [`ShareButtonsHorizontal`] - Twitter, Facebook and Reddit buttons in a row
//!
//! # Platform Components
//! - [`ShareSocialTwitter`] - Twitter web intent
//! - [`ShareSocialFacebook`] - Facebook sharer
//! - [`ShareSocialReddit`] - Reddit submit form

mod share_group;
mod share_social;

pub use share_group::*;
pub use share_social::*;
