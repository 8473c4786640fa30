//! Writing generated artifacts to disk.
//!
//! Both files are written concurrently and both results are awaited. A
//! failure on one artifact is reported alongside the other's outcome and
//! never prevents it from being written.

use std::fmt;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};

use thiserror::Error;

use crate::config::OutputConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Artifact {
    TailwindConfig,
    Stylesheet,
}

impl Artifact {
    fn success_message(self, path: &Path) -> String {
        match self {
            Artifact::TailwindConfig => format!(
                "Tailwind CSS configuration successfully saved to {}",
                path.display()
            ),
            Artifact::Stylesheet => {
                format!("CSS variables successfully saved to {}", path.display())
            }
        }
    }
}

impl fmt::Display for Artifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Artifact::TailwindConfig => write!(f, "Tailwind CSS configuration"),
            Artifact::Stylesheet => write!(f, "CSS variables"),
        }
    }
}

#[derive(Debug, Error)]
#[error("Error saving {artifact} to {}: {source}", .path.display())]
pub struct EmitError {
    pub artifact: Artifact,
    pub path: PathBuf,
    #[source]
    pub source: io::Error,
}

/// Both artifacts resolve to the same file, so one would silently replace
/// the other.
#[derive(Debug, Error)]
#[error("Tailwind CSS configuration and CSS variables would both be written to {}", .0.display())]
pub struct OutputConflict(pub PathBuf);

/// Result of writing one artifact.
#[derive(Debug)]
pub struct EmitOutcome {
    pub artifact: Artifact,
    pub path: PathBuf,
    pub result: Result<(), EmitError>,
}

impl EmitOutcome {
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Outcomes of a single emit, one per artifact in write order.
#[derive(Debug)]
pub struct EmitReport {
    pub outcomes: Vec<EmitOutcome>,
}

impl EmitReport {
    pub fn all_succeeded(&self) -> bool {
        self.outcomes.iter().all(EmitOutcome::is_ok)
    }

    pub fn failures(&self) -> impl Iterator<Item = &EmitError> {
        self.outcomes
            .iter()
            .filter_map(|outcome| outcome.result.as_ref().err())
    }

    pub fn outcome(&self, artifact: Artifact) -> Option<&EmitOutcome> {
        self.outcomes.iter().find(|o| o.artifact == artifact)
    }

    /// Print one console line per artifact, failures on stderr.
    pub fn print(&self) -> io::Result<()> {
        self.write_to(&mut io::stdout().lock(), &mut io::stderr().lock())
    }

    pub fn write_to<O: Write, E: Write>(&self, out: &mut O, err: &mut E) -> io::Result<()> {
        for outcome in &self.outcomes {
            match &outcome.result {
                Ok(()) => writeln!(out, "{}", outcome.artifact.success_message(&outcome.path))?,
                Err(e) => writeln!(err, "{}", e)?,
            }
        }
        Ok(())
    }
}

/// Writes the Tailwind fragment and the stylesheet to two distinct paths.
#[derive(Debug, Clone)]
pub struct FileEmitter {
    tailwind_path: PathBuf,
    stylesheet_path: PathBuf,
}

impl FileEmitter {
    pub fn new(
        tailwind_path: impl Into<PathBuf>,
        stylesheet_path: impl Into<PathBuf>,
    ) -> Result<Self, OutputConflict> {
        let tailwind_path = tailwind_path.into();
        let stylesheet_path = stylesheet_path.into();

        if lexical(&tailwind_path) == lexical(&stylesheet_path) {
            return Err(OutputConflict(stylesheet_path));
        }

        Ok(Self {
            tailwind_path,
            stylesheet_path,
        })
    }

    pub fn from_config(output: &OutputConfig) -> Result<Self, OutputConflict> {
        Self::new(output.tailwind_path(), output.stylesheet_path())
    }

    pub fn tailwind_path(&self) -> &Path {
        &self.tailwind_path
    }

    pub fn stylesheet_path(&self) -> &Path {
        &self.stylesheet_path
    }

    /// Write both artifacts and wait for both to settle.
    pub async fn emit(&self, tailwind_config: &str, stylesheet: &str) -> EmitReport {
        let (tailwind, css) = tokio::join!(
            write_artifact(Artifact::TailwindConfig, &self.tailwind_path, tailwind_config),
            write_artifact(Artifact::Stylesheet, &self.stylesheet_path, stylesheet),
        );

        EmitReport {
            outcomes: vec![tailwind, css],
        }
    }
}

async fn write_artifact(artifact: Artifact, path: &Path, contents: &str) -> EmitOutcome {
    let result = write_file(path, contents).await.map_err(|source| EmitError {
        artifact,
        path: path.to_path_buf(),
        source,
    });

    match &result {
        Ok(()) => tracing::debug!("Wrote {} bytes to {}", contents.len(), path.display()),
        // Printed to the user by EmitReport
        Err(e) => tracing::debug!("{}", e),
    }

    EmitOutcome {
        artifact,
        path: path.to_path_buf(),
        result,
    }
}

/// `./a/./b` and `a/b` name the same file.
fn lexical(path: &Path) -> PathBuf {
    path.components()
        .filter(|c| !matches!(c, Component::CurDir))
        .collect()
}

async fn write_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, contents).await
}
