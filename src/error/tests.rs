// depot-rs: Catalog and Fleet Desk Tool
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{ConfigError, DepotError, DepotResult, ShellError, bail_out};

#[test]
fn test_config_error_display() {
    let err = ConfigError::InvalidValue {
        section: "global".to_string(),
        key: "output_log_level".to_string(),
        message: "log level must be 0-6, got 9".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid value for 'output_log_level' in section '[global]': log level must be 0-6, got 9"
    );
}

#[test]
fn test_shell_error_display() {
    let err = ShellError::InvalidYear {
        input: "ninteen-sixty-five".to_string(),
    };
    insta::assert_snapshot!(
        err.to_string(),
        @"invalid year 'ninteen-sixty-five': not an integer"
    );
}

#[test]
fn test_bail_out_display() {
    let err = bail_out("no command specified");
    insta::assert_snapshot!(err.to_string(), @"fatal error: no command specified");
}

#[test]
fn test_depot_error_size() {
    // DepotError should be reasonably small
    // Box<str> variants (Bailed, Other) are 16 bytes (fat pointer: ptr + len)
    // With discriminant + alignment = 24 bytes
    let size = std::mem::size_of::<DepotError>();
    assert!(size <= 24, "DepotError is {size} bytes, expected <= 24");
}

#[test]
fn test_depot_result_size() {
    // Result<(), DepotError> should be reasonably small
    let size = std::mem::size_of::<DepotResult<()>>();
    assert!(size <= 24, "DepotResult<()> is {size} bytes, expected <= 24");
}

#[test]
fn test_shell_error_boxes_into_depot_error() {
    let err: DepotError = ShellError::UnexpectedEof.into();
    assert!(matches!(err, DepotError::Shell(_)));
    insta::assert_snapshot!(err.to_string(), @"shell error: unexpected end of input");
}
