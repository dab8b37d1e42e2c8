// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::domain::slider::RangeValues;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A thumb drag moved one of the bounds.
    RangeChanged(RangeValues),
    /// The pointer was released after a drag.
    RangeReleased,
    /// Hide the configuration notice.
    DismissNotice,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional directory containing `settings.toml`.
    pub config_dir: Option<String>,
}
