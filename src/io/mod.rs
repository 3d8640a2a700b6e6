// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! I/O module - mesh decoders and the extension table that chains them

mod ascii_stl;
mod binary_stl;
mod error;
mod format;
mod obj;

pub use error::{ParseError, ParseResult};
pub use format::{Format, MeshDecoder};

/// Non-empty, trimmed, UTF-8 lines; undecodable lines are skipped
pub(crate) fn text_lines(data: &[u8]) -> impl Iterator<Item = &str> {
    data.split(|&byte| byte == b'\n')
        .filter_map(|line| std::str::from_utf8(line).ok())
        .map(str::trim)
        .filter(|line| !line.is_empty())
}
