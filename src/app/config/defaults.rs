// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration constants.

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Webhook receiving the claim form when neither the CLI nor the config
/// file names another endpoint.
pub const DEFAULT_UPLOAD_ENDPOINT: &str =
    "https://sem89.app.n8n.cloud/webhook-test/upload-claim-form";

/// Smallest accepted request timeout (in seconds).
pub const MIN_UPLOAD_TIMEOUT_SECS: u64 = 1;

/// Largest accepted request timeout (in seconds).
pub const MAX_UPLOAD_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Window Defaults
// ==========================================================================

pub const WINDOW_DEFAULT_WIDTH: f32 = 820.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 760.0;
/// Wide enough for a full row of thumbnails inside the padded form panel,
/// plus the scrollbar.
pub const MIN_WINDOW_WIDTH: f32 = 760.0;
pub const MIN_WINDOW_HEIGHT: f32 = 520.0;

const _: () = {
    assert!(MIN_UPLOAD_TIMEOUT_SECS > 0);
    assert!(MAX_UPLOAD_TIMEOUT_SECS > MIN_UPLOAD_TIMEOUT_SECS);
    assert!(WINDOW_DEFAULT_WIDTH >= MIN_WINDOW_WIDTH);
    assert!(WINDOW_DEFAULT_HEIGHT >= MIN_WINDOW_HEIGHT);
};
