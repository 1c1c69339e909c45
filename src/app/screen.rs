// SPDX-License-Identifier: MPL-2.0
//! Screen enumeration for application navigation.

/// Screens the user can be on. The player fully occludes the browser, so
/// there is never more than one overlay and entry selection is
/// unreachable while it is open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Browser,
    Player,
}
