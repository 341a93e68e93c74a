//! One validation run: read, parse, then the optional outputs.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use scrawl_fmt::{canonicalise, BeautifyFlags};
use scrawl_ir::Root;
use scrawl_lexer::{tokenize, LexError};
use thiserror::Error;
use tracing::{debug, info};

use crate::config::VerifyConfig;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("cannot read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("cannot write {}: {source}", path.display())]
    WriteFile { path: PathBuf, source: io::Error },
    #[error(transparent)]
    Parse(#[from] scrawl_parse::Error),
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error("cannot serialize definition tree: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cannot write output: {0}")]
    Output(#[from] io::Error),
}

/// Validate the configured protocol file. Summary and JSON go to `out`.
pub fn verify(config: &VerifyConfig, out: &mut dyn Write) -> Result<Root, CliError> {
    let source = fs::read_to_string(&config.protocol).map_err(|source| CliError::Read {
        path: config.protocol.clone(),
        source,
    })?;
    debug!(path = %config.protocol.display(), bytes = source.len(), "read protocol");

    let root = scrawl_parse::parse(&source, &config.allowlist())?;
    info!(
        path = %config.protocol.display(),
        components = root.component_data_types().len(),
        archetypes = root.archetypes().len(),
        hash = format_args!("{:#010x}", root.hash()),
        "protocol is valid"
    );

    if config.verbose {
        writeln!(out, "--- Summary ---")?;
        writeln!(out, "{root}")?;
    }
    if config.json {
        serde_json::to_writer_pretty(&mut *out, &root)?;
        writeln!(out)?;
    }
    if config.beautify {
        beautify(&source, config.output_path())?;
    }
    Ok(root)
}

/// Write the canonical form of `source`, comments kept, to `output`.
pub fn beautify(source: &str, output: &Path) -> Result<(), CliError> {
    let tokens = tokenize(source)?;
    let text = canonicalise(&tokens, BeautifyFlags::NORMAL);
    fs::write(output, &text).map_err(|source| CliError::WriteFile {
        path: output.to_path_buf(),
        source,
    })?;
    debug!(path = %output.display(), bytes = text.len(), "wrote canonical form");
    Ok(())
}

#[cfg(test)]
mod tests;
