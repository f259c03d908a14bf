// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use displaydoc::Display;
use serde_derive::{Deserialize, Serialize};
use std::convert::TryFrom;
use thiserror::Error;

/// Rejected input to one of the algorithms in [crate::commands].
#[derive(Error, Display, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InputError {
    /// {operation} is only defined for positive integers, got {got}
    NotPositive { operation: String, got: i128 },
    /// {operation} is not defined for negative numbers, got {got}
    Negative { operation: String, got: i128 },
    /// {got} is too large for {operation}
    TooLarge { operation: String, got: i128 },
}

/// Narrows user input to a positive `u64`.
pub fn positive(operation: &str, got: i128) -> Result<u64, InputError> {
    if got < 1 {
        return Err(InputError::NotPositive {
            operation: operation.to_owned(),
            got,
        });
    }
    u64::try_from(got).map_err(|_| InputError::TooLarge {
        operation: operation.to_owned(),
        got,
    })
}

/// Narrows user input to a non-negative `u64`.
pub fn non_negative(operation: &str, got: i128) -> Result<u64, InputError> {
    if got < 0 {
        return Err(InputError::Negative {
            operation: operation.to_owned(),
            got,
        });
    }
    u64::try_from(got).map_err(|_| InputError::TooLarge {
        operation: operation.to_owned(),
        got,
    })
}

/// Like [non_negative], but also rejects values above `max`. Used for
/// operations whose cost grows with the input itself rather than its
/// square root.
pub fn at_most(operation: &str, got: i128, max: u64) -> Result<u64, InputError> {
    let value = non_negative(operation, got)?;
    if value > max {
        return Err(InputError::TooLarge {
            operation: operation.to_owned(),
            got,
        });
    }
    Ok(value)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn narrowing() {
        assert_eq!(positive("divisors", 12), Ok(12));
        assert_eq!(non_negative("factorial", 0), Ok(0));
        assert_eq!(
            positive("divisors", 0),
            Err(InputError::NotPositive {
                operation: "divisors".to_owned(),
                got: 0
            })
        );
        assert_eq!(
            positive("divisors", -7).unwrap_err().to_string(),
            "divisors is only defined for positive integers, got -7"
        );
        assert_eq!(
            non_negative("factorial", -1).unwrap_err().to_string(),
            "factorial is not defined for negative numbers, got -1"
        );
        assert_eq!(at_most("fibonacci", 10, 10), Ok(10));
        assert!(at_most("fibonacci", 11, 10).is_err());
        assert!(at_most("fibonacci", -1, 10).is_err());
        let huge = u64::MAX as i128 + 1;
        assert_eq!(
            positive("factors", huge).unwrap_err().to_string(),
            format!("{} is too large for factors", huge)
        );
    }
}
