//! Request handlers.

pub(crate) mod webhook;
