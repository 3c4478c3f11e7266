/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 */

/// Number of characters of a meeting access key. Tokens of any other length
/// are kept in the text field but never submitted.
pub const ACCESS_KEY_LENGTH: usize = 24;

/// Query parameter that carries the access key in the page URL.
pub const TOKEN_QUERY_PARAM: &str = "token";
