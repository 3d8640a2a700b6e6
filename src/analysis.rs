// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Format dispatch with cascading fallback
//!
//! The extension picks a decoder chain; each failure moves to the next
//! decoder, and an exhausted or empty chain ends at the byte-length
//! heuristic. Analysis therefore always yields a geometry.

use crate::geometry::Geometry;
use crate::heuristic::{self, HEURISTIC_WARNING};
use crate::io::Format;
use log::{debug, warn};

pub const ARCHIVE_WARNING: &str = "Archive-packaged formats such as 3MF are not parsed.";

/// Derived geometry plus advisory warnings
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub format: Format,
    pub geometry: Geometry,
    pub warnings: Vec<String>,
}

pub fn analyse(filename: &str, data: &[u8]) -> Analysis {
    let format = Format::from_filename(filename);

    for decoder in format.decoders() {
        match decoder.decode(data) {
            Ok(geometry) => {
                debug!(
                    "{}: decoded as {} ({} triangles)",
                    filename, decoder, geometry.triangle_count
                );
                return Analysis {
                    format,
                    geometry,
                    warnings: Vec::new(),
                };
            }
            Err(err) => debug!("{}: {} decoder rejected input: {}", filename, decoder, err),
        }
    }

    warn!(
        "{}: falling back to heuristic estimate for {} bytes",
        filename,
        data.len()
    );

    let mut warnings = Vec::new();
    if format.is_archive() {
        warnings.push(ARCHIVE_WARNING.to_string());
    }
    warnings.push(HEURISTIC_WARNING.to_string());

    Analysis {
        format,
        geometry: heuristic::estimate(data.len()),
        warnings,
    }
}
