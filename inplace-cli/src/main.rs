//! `inplace`: edit the string values of a JSON, YAML or TOML document through
//! inline fields in the terminal. Each save is written straight back to the
//! file; edits made to the file by other programs show up while viewing.

mod logging;

use std::fmt::Write as FmtWrite;
use std::path::PathBuf;
use std::time::Duration;

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, eyre};
use serde_json::Value;

use inplace::{
    DocumentStore, DocumentWatch, FieldBinding, InlineEditUI, UiOptions, io::pointer_label,
    store::string_at,
};

#[derive(Debug, Parser)]
#[command(
    name = "inplace",
    version,
    about = "Edit the string values of a document through inline terminal fields"
)]
struct Cli {
    /// Document to edit (.json, .yaml/.yml or .toml)
    #[arg(value_name = "DOCUMENT")]
    document: PathBuf,

    /// Field to edit as a JSON pointer, optionally with its own placeholder ("/title=Untitled").
    /// Repeat for more fields; defaults to every string value.
    #[arg(short = 'f', long = "field", value_name = "POINTER[=PLACEHOLDER]", action = ArgAction::Append)]
    fields: Vec<String>,

    /// Placeholder written back when a field is cleared
    #[arg(short = 'p', long = "placeholder", value_name = "TEXT", default_value = "Untitled")]
    placeholder: String,

    /// Title shown above the fields
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// How long save notices stay on screen
    #[arg(long = "notice-ms", value_name = "MILLIS", default_value_t = 3000)]
    notice_ms: u64,

    /// Artificial delay before each save
    #[arg(long = "latency-ms", value_name = "MILLIS", default_value_t = 0)]
    latency_ms: u64,

    /// Refuse every save instead of writing the document
    #[arg(long = "read-only")]
    read_only: bool,

    /// Do not pick up changes other programs make to the document
    #[arg(long = "no-watch")]
    no_watch: bool,

    /// Print the final values as JSON after quitting
    #[arg(long = "print")]
    print: bool,

    /// Where to write logs (defaults to inplace.log in the temp directory)
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct FieldSpec {
    pointer: String,
    placeholder: String,
    current: String,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let log_path = cli
        .log_file
        .clone()
        .unwrap_or_else(logging::default_log_path);
    let _log_guard = logging::init(&log_path)?;

    let store = DocumentStore::open(&cli.document)
        .map_err(Report::msg)?
        .with_read_only(cli.read_only)
        .with_latency(Duration::from_millis(cli.latency_ms));
    let document = store.document().map_err(Report::msg)?;

    let mut diagnostics = DiagnosticCollector::default();
    let specs = resolve_fields(&cli, &store, &document, &mut diagnostics)?;
    diagnostics.into_result()?;
    tracing::info!(
        document = %store.path().display(),
        format = %store.format(),
        fields = specs.len(),
        "document loaded"
    );

    let pointers = specs
        .iter()
        .map(|spec| spec.pointer.clone())
        .collect::<Vec<_>>();
    let bindings = specs.into_iter().map(|spec| {
        let committer = store.committer(spec.pointer.clone());
        FieldBinding::new(
            spec.pointer.clone(),
            pointer_label(&spec.pointer),
            spec.placeholder,
            spec.current,
            committer,
        )
    });

    let title = cli.title.clone().unwrap_or_else(|| {
        cli.document
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "inplace".to_string())
    });
    let options = UiOptions::default().with_notice_duration(Duration::from_millis(cli.notice_ms));
    let mut ui = InlineEditUI::new()
        .with_title(title)
        .with_options(options)
        .with_fields(bindings);
    if !cli.no_watch {
        match DocumentWatch::new(&store, pointers) {
            Ok(watch) => ui = ui.with_source(watch),
            Err(err) => tracing::warn!(error = %format!("{err:#}"), "continuing without file watch"),
        }
    }

    let values = ui.run().map_err(Report::msg)?;
    if cli.print {
        let map = values
            .into_iter()
            .map(|(pointer, value)| (pointer, Value::String(value)))
            .collect::<serde_json::Map<_, _>>();
        println!("{}", serde_json::to_string_pretty(&Value::Object(map))?);
    }
    Ok(())
}

fn resolve_fields(
    cli: &Cli,
    store: &DocumentStore,
    document: &Value,
    diagnostics: &mut DiagnosticCollector,
) -> Result<Vec<FieldSpec>> {
    if cli.fields.is_empty() {
        let pointers = store.string_fields().map_err(Report::msg)?;
        if pointers.is_empty() {
            diagnostics.push("document has no string values to edit");
        }
        return Ok(pointers
            .into_iter()
            .filter_map(|pointer| {
                let current = string_at(document, &pointer)?;
                Some(FieldSpec {
                    pointer,
                    placeholder: cli.placeholder.clone(),
                    current,
                })
            })
            .collect());
    }

    let mut specs = Vec::with_capacity(cli.fields.len());
    for raw in &cli.fields {
        let Some((pointer, placeholder)) = parse_field_arg(raw, &cli.placeholder) else {
            diagnostics.push(format!(
                "field '{raw}' must be a JSON pointer starting with '/'"
            ));
            continue;
        };
        if specs.iter().any(|spec: &FieldSpec| spec.pointer == pointer) {
            diagnostics.push(format!("field '{pointer}' listed more than once"));
            continue;
        }
        match string_at(document, &pointer) {
            Some(current) => specs.push(FieldSpec {
                pointer,
                placeholder,
                current,
            }),
            None => diagnostics.push(format!("no string value at '{pointer}'")),
        }
    }
    Ok(specs)
}

fn parse_field_arg(raw: &str, default_placeholder: &str) -> Option<(String, String)> {
    let (pointer, placeholder) = match raw.split_once('=') {
        Some((pointer, placeholder)) => (pointer.trim(), placeholder.to_string()),
        None => (raw.trim(), default_placeholder.to_string()),
    };
    if !pointer.starts_with('/') {
        return None;
    }
    Some((pointer.to_string(), placeholder))
}

#[derive(Debug, Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push(&mut self, message: impl Into<String>) {
        self.messages.push(message.into());
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("cannot start the editor:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_args_take_an_optional_placeholder() {
        assert_eq!(
            parse_field_arg("/title=Unnamed", "Untitled"),
            Some(("/title".to_string(), "Unnamed".to_string()))
        );
        assert_eq!(
            parse_field_arg("/info/text", "Untitled"),
            Some(("/info/text".to_string(), "Untitled".to_string()))
        );
        assert_eq!(parse_field_arg("title", "Untitled"), None);
    }

    #[test]
    fn diagnostics_are_numbered() {
        let mut diagnostics = DiagnosticCollector::default();
        diagnostics.push("first");
        diagnostics.push("second");
        let err = diagnostics.into_result().unwrap_err().to_string();
        assert!(err.contains("1. first"));
        assert!(err.contains("2. second"));
    }

    #[test]
    fn cli_parses_repeated_fields() {
        let cli = Cli::parse_from([
            "inplace",
            "campaign.json",
            "-f",
            "/title=Unnamed",
            "--field",
            "/info",
            "--read-only",
        ]);
        assert_eq!(cli.fields, vec!["/title=Unnamed", "/info"]);
        assert!(cli.read_only);
        assert_eq!(cli.placeholder, "Untitled");
    }
}
