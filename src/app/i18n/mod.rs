// SPDX-License-Identifier: MPL-2.0
//! Localization built on Fluent resources embedded in the binary.

pub mod fluent;
