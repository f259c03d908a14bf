// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reply and error types produced by evaluating a query, and the
//! [token tree][fmt::TokenFmt] used to render them with styling.

pub mod fmt;
mod reply;

pub use reply::*;
