use std::fs;
use std::io::Write;
use std::path;

use anyhow::Context as _;
use docsite_config::PROJECT_FILE;

use crate::error::Result;

const DOCSITE_YML: &str = "theme: cosmos
title: Project Documentation
locales:
  /:
    lang: en-US
themeConfig:
  docsDir: docs
  editLinks: false
  sidebar:
    auto: false
    nav:
      - title: Reference
        children:
          - title: Introduction
            path: /intro
            directory: true
  footer:
    services: []
    links: []
";

pub fn create_new_project<P: AsRef<path::Path>>(dest: P) -> Result<()> {
    create_new_project_for_path(dest.as_ref())
}

fn create_new_project_for_path(dest: &path::Path) -> Result<()> {
    fs::create_dir_all(dest)
        .with_context(|| format!("Failed to create directory {}", dest.display()))?;

    create_file(&dest.join(PROJECT_FILE), DOCSITE_YML)?;

    Ok(())
}

fn create_file(path: &path::Path, content: &str) -> Result<()> {
    log::trace!("Creating file {}", path.display());

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .with_context(|| format!("Failed to create file {}", path.display()))?;

    file.write_all(content.as_bytes())?;

    Ok(())
}
