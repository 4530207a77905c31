// SPDX-License-Identifier: MPL-2.0
//! User interface: design tokens, styles and the form screen.

pub mod design_tokens;
pub mod styles;
pub mod theming;
pub mod upload_form;
