//! One rule per capability, grouped by concern.

pub(crate) mod misc;
pub(crate) mod networking;
pub(crate) mod operators;
pub(crate) mod platforms;
