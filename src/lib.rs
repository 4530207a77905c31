// SPDX-License-Identifier: MPL-2.0
//! `claim_uploader` is a small desktop form for submitting an insurance claim:
//! an email address plus a set of photos, posted as one multipart request to
//! a webhook.
//!
//! The form logic lives in [`form`] and is independent of the GUI; the Iced
//! application in [`app`] renders it and runs the I/O it asks for.

pub mod app;
pub mod error;
pub mod form;
pub mod i18n;
pub mod media;
pub mod transport;
pub mod ui;
