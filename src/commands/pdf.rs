//! PDF-to-text conversion command.

use super::{RunOptions, finish};
use crate::cli::PdfToTextArgs;
use crate::config::Config;
use crate::error::{DeskError, Result};
use crate::invoke::format::absolutize;
use crate::invoke::{ExecMode, Invocation};
use std::path::Path;

/// Build the conversion invocation. The source must exist before anything
/// is resolved or spawned; a missing source is an explicit error, not a
/// silent no-op. The destination defaults to the source with a `.txt`
/// extension. Conversion can take a while on large documents, so it
/// launches detached through a shell.
pub fn plan(config: &Config, source: &Path, dest: Option<&Path>) -> Result<Invocation> {
    let source = absolutize(source)?;
    if !source.is_file() {
        return Err(DeskError::SourceFileMissing(source));
    }

    let dest = match dest {
        Some(dest) => absolutize(dest)?,
        None => source.with_extension("txt"),
    };

    Ok(Invocation {
        action: "pdf-to-text".to_string(),
        program: config.pdf.program.clone(),
        args: vec![
            source.to_string_lossy().into_owned(),
            dest.to_string_lossy().into_owned(),
        ],
        mode: ExecMode::AsyncShell {
            shell: config.shell.clone(),
        },
        workdir: None,
        output: Some(dest),
    })
}

pub fn cmd_pdf_to_text(args: PdfToTextArgs, config: &Config, opts: &RunOptions) -> Result<()> {
    let invocation = plan(config, &args.source, args.dest.as_deref())?;
    finish(invocation, opts)
}
