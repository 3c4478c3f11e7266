// SPDX-License-Identifier: MIT OR Apache-2.0

pub mod config_error;
pub mod linear_progress;
pub mod token_form;
pub mod toolbar;
pub mod video_control_buttons;
pub mod video_surface;
