// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2025 Polyframe Inc.

//! Batch estimation over files and directories

use crate::estimator::{EstimateError, Estimator};
use crate::io::Format;
use crate::pricing::Estimate;
use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use walkdir::WalkDir;

/// What happened to one input file
#[derive(Debug)]
pub enum Outcome {
    Estimated(Box<Estimate>),
    Skipped(String),
    Failed(String),
}

/// Result of estimating one file
#[derive(Debug)]
pub struct FileReport {
    pub path: PathBuf,
    pub outcome: Outcome,
    pub duration: Duration,
}

/// Runner for estimating uploads from disk
pub struct Runner {
    estimator: Estimator,
}

impl Runner {
    pub fn new(estimator: Estimator) -> Self {
        Self { estimator }
    }

    /// Expand directories into the model files they contain. Files given
    /// explicitly are kept whatever their extension.
    pub fn discover(inputs: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for input in inputs {
            if input.is_dir() {
                let mut found: Vec<PathBuf> = WalkDir::new(input)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .filter(|e| e.file_type().is_file())
                    .filter(|e| is_model_file(e.path()))
                    .map(|e| e.path().to_path_buf())
                    .collect();
                found.sort();
                files.extend(found);
            } else {
                files.push(input.clone());
            }
        }

        files
    }

    /// Estimate every discovered file; files are independent and run in parallel
    pub fn run(&self, inputs: &[PathBuf]) -> Vec<FileReport> {
        Self::discover(inputs)
            .into_par_iter()
            .map(|path| self.run_file(&path))
            .collect()
    }

    pub fn run_file(&self, path: &Path) -> FileReport {
        let start = Instant::now();
        let outcome = match self.estimate_file(path) {
            Ok(estimate) => Outcome::Estimated(Box::new(estimate)),
            Err(err) => match err.downcast_ref::<EstimateError>() {
                Some(EstimateError::EmptyInput) => Outcome::Skipped("empty file".to_string()),
                None => Outcome::Failed(format!("{:#}", err)),
            },
        };

        FileReport {
            path: path.to_path_buf(),
            outcome,
            duration: start.elapsed(),
        }
    }

    fn estimate_file(&self, path: &Path) -> Result<Estimate> {
        let data = std::fs::read(path).with_context(|| format!("Failed to read {:?}", path))?;
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok(self.estimator.estimate(&filename, &data)?)
    }
}

fn is_model_file(path: &Path) -> bool {
    path.to_str()
        .map(|p| Format::from_filename(p) != Format::Unknown)
        .unwrap_or(false)
}
