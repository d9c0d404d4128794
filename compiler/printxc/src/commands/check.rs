//! The `check` command: rewrite a template for a list of argument types.

use std::io::Write;

use printx::{SpecFlags, SpecifierList, TypeDescriptor, MAX_ARGS};
use printx_diagnostic::emitter::{ColorMode, DiagnosticEmitter, JsonEmitter, TerminalEmitter};
use printx_diagnostic::Diagnostic;
use printx_rewrite::Failure;
use printx_types::ctype::{ClassifyError, TypeRegistry};
use thiserror::Error;

use super::{EXIT_OK, EXIT_REJECTED, EXIT_USAGE};

/// How diagnostics are written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Rendered for a terminal, on stderr.
    #[default]
    Text,
    /// A JSON array, on stdout.
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<OutputFormat> {
        match value {
            "text" => Some(OutputFormat::Text),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// A `--define NAME=SPEC[:flag,..]` registration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Define {
    pub name: String,
    pub descriptor: TypeDescriptor,
}

impl Define {
    /// Parse `NAME=SPEC[:flag,..]`.
    ///
    /// Flags: `promotes`, `pointer`, `no-precision`, `position`.
    pub fn parse(text: &str) -> Result<Define, String> {
        let Some((name, rest)) = text.split_once('=') else {
            return Err(format!("`--define {text}`: expected NAME=SPEC"));
        };
        let (spec, flag_list) = rest.split_once(':').unwrap_or((rest, ""));
        let mut flags = SpecFlags::NONE;
        for flag in flag_list.split(',').filter(|flag| !flag.is_empty()) {
            flags |= match flag {
                "promotes" => SpecFlags::PROMOTES_TO_INT,
                "pointer" => SpecFlags::PRINTS_AS_POINTER,
                "no-precision" => SpecFlags::FORBIDS_PRECISION,
                "position" => SpecFlags::RECORDS_POSITION,
                _ => return Err(format!("`--define {text}`: unknown flag `{flag}`")),
            };
        }
        // Descriptors hold `&'static str`; the CLI registers a handful per run.
        let spec: &'static str = Box::leak(spec.to_owned().into_boxed_str());
        let Some(descriptor) = TypeDescriptor::checked(spec, flags) else {
            return Err(format!(
                "`--define {text}`: `{spec}` does not end in a conversion letter"
            ));
        };
        Ok(Define {
            name: name.trim().to_string(),
            descriptor,
        })
    }
}

/// Options for `printxc check`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CheckOptions {
    pub color: ColorMode,
    pub format: OutputFormat,
    pub defines: Vec<Define>,
    pub template: String,
    /// Argument type spellings, in argument order.
    pub types: Vec<String>,
}

/// Parse the arguments following `check`.
pub fn parse_check_options(args: &[String]) -> Result<CheckOptions, String> {
    let mut options = CheckOptions::default();
    let mut template = None;
    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if let Some(value) = arg.strip_prefix("--color=") {
            options.color =
                ColorMode::parse(value).ok_or_else(|| format!("invalid color mode `{value}`"))?;
        } else if let Some(value) = arg.strip_prefix("--format=") {
            options.format = OutputFormat::parse(value)
                .ok_or_else(|| format!("invalid output format `{value}`"))?;
        } else if let Some(value) = arg.strip_prefix("--define=") {
            options.defines.push(Define::parse(value)?);
        } else if arg == "--define" {
            i += 1;
            let value = args.get(i).ok_or("`--define` needs a value")?;
            options.defines.push(Define::parse(value)?);
        } else if arg.starts_with("--") {
            return Err(format!("unknown option `{arg}`"));
        } else if template.is_none() {
            template = Some(arg.clone());
        } else {
            options.types.push(arg.clone());
        }
        i += 1;
    }
    options.template = template.ok_or("missing template")?;
    Ok(options)
}

/// Why the argument types could not be turned into Specifier Records.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CheckError {
    #[error(transparent)]
    Classify(#[from] ClassifyError),

    #[error("{0} argument types given, at most {max} are supported", max = MAX_ARGS)]
    TooManyTypes(usize),
}

/// Classify every argument type, consulting the `--define`s first.
pub fn resolve_records(options: &CheckOptions) -> Result<Vec<TypeDescriptor>, CheckError> {
    if options.types.len() > MAX_ARGS {
        return Err(CheckError::TooManyTypes(options.types.len()));
    }
    let mut registry = TypeRegistry::new();
    for define in &options.defines {
        registry.register(&define.name, define.descriptor)?;
    }
    options
        .types
        .iter()
        .map(|spelling| registry.classify(spelling).map_err(CheckError::from))
        .collect()
}

/// Run `printxc check`, returning the exit code.
pub fn run_check(
    options: &CheckOptions,
    stdout: &mut impl Write,
    stderr: &mut impl Write,
    is_tty: bool,
) -> i32 {
    tracing::debug!(
        template = %options.template,
        types = options.types.len(),
        "checking template"
    );
    let descriptors = match resolve_records(options) {
        Ok(descriptors) => descriptors,
        Err(err) => {
            let _ = writeln!(stderr, "error: {err}");
            return EXIT_USAGE;
        }
    };
    let records = SpecifierList::from_slice(&descriptors);
    match printx_rewrite::transform(&options.template, &records) {
        Ok(format) => {
            let _ = writeln!(stdout, "{}", format.to_string_lossy());
            EXIT_OK
        }
        Err(failure) => {
            tracing::debug!(%failure, "template rejected");
            let diagnostic = annotate(&failure, options, &descriptors);
            match options.format {
                OutputFormat::Text => {
                    let mut emitter =
                        TerminalEmitter::with_color_mode(stderr, options.color, is_tty);
                    emitter.emit(&diagnostic);
                    emitter.emit_summary(1);
                    emitter.flush();
                }
                OutputFormat::Json => {
                    let mut emitter = JsonEmitter::new(stdout);
                    emitter.begin();
                    emitter.emit(&diagnostic);
                    emitter.end();
                    emitter.flush();
                }
            }
            EXIT_REJECTED
        }
    }
}

/// Attach a note naming the argument the rewriter was looking at.
fn annotate(
    failure: &Failure,
    options: &CheckOptions,
    descriptors: &[TypeDescriptor],
) -> Diagnostic {
    let diagnostic = failure.to_diagnostic(&options.template);
    let argument = failure.argument;
    match (options.types.get(argument), descriptors.get(argument)) {
        (Some(spelling), Some(descriptor)) => diagnostic.with_note(format!(
            "argument {} has type `{spelling}`, printed as {descriptor}",
            argument + 1
        )),
        _ => diagnostic.with_note(format!("{} argument type(s) given", options.types.len())),
    }
}
