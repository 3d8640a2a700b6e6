// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Extension table and decoder variants

use super::{ascii_stl, binary_stl, obj, ParseResult};
use crate::geometry::Geometry;
use std::fmt;
use std::path::Path;

/// One structured decoder
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshDecoder {
    BinaryStl,
    AsciiStl,
    Obj,
}

impl MeshDecoder {
    pub fn decode(&self, data: &[u8]) -> ParseResult<Geometry> {
        match self {
            Self::BinaryStl => binary_stl::parse(data),
            Self::AsciiStl => ascii_stl::parse(data),
            Self::Obj => obj::parse(data),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Self::BinaryStl => "binary STL",
            Self::AsciiStl => "ASCII STL",
            Self::Obj => "OBJ",
        }
    }
}

impl fmt::Display for MeshDecoder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Upload format, chosen by file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Stl,
    Obj,
    /// Zip-packaged 3MF; recognised but never parsed
    ThreeMf,
    Unknown,
}

impl Format {
    /// Case-insensitive lookup on the final extension. A bare dotfile such
    /// as `.stl` has no extension under `Path` rules and maps to `Unknown`.
    pub fn from_filename(filename: &str) -> Self {
        let extension = Path::new(filename)
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("stl") => Self::Stl,
            Some("obj") => Self::Obj,
            Some("3mf") => Self::ThreeMf,
            _ => Self::Unknown,
        }
    }

    /// Decoders to try, in order
    pub fn decoders(&self) -> &'static [MeshDecoder] {
        match self {
            Self::Stl => &[MeshDecoder::BinaryStl, MeshDecoder::AsciiStl],
            Self::Obj => &[MeshDecoder::Obj],
            Self::ThreeMf | Self::Unknown => &[],
        }
    }

    pub fn is_archive(&self) -> bool {
        matches!(self, Self::ThreeMf)
    }
}
