// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Random, file-system-safe names for command files.

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Entropy per command file name. 12 bytes encode to 16 characters.
pub const TOKEN_BYTES: usize = 12;

/// Fill `size` bytes from the OS CSPRNG and base64url-encode them.
pub fn random_token(size: usize) -> Result<String, rand::Error> {
    let mut bytes = vec![0u8; size];
    OsRng.try_fill_bytes(&mut bytes)?;
    Ok(URL_SAFE_NO_PAD.encode(bytes))
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
