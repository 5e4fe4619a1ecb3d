use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::Parser;
use codespan_reporting::files::SimpleFiles;
use codespan_reporting::term;
use codespan_reporting::term::termcolor::{ColorChoice, StandardStream};
use weft_config::Config;
use weft_engine::Project;

#[derive(Parser, Debug)]
#[command(name = "weft", version, about = "Tangle code and weave HTML from literate Markdown")]
struct Cli {
    /// Markdown documents to process; defaults to the config's `inputs`
    files: Vec<PathBuf>,

    /// Shared metadata file (`key: value` lines)
    #[arg(long, value_name = "FILE")]
    meta: Option<PathBuf>,

    /// Configuration file [default: ./weft.toml]
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Directory tangled `file:` outputs are written under
    #[arg(long, value_name = "DIR")]
    src_dir: Option<PathBuf>,

    /// Directory for woven HTML; beside each input when unset
    #[arg(long, value_name = "DIR")]
    doc_dir: Option<PathBuf>,

    /// Only tangle, skip HTML output
    #[arg(long)]
    no_weave: bool,

    /// Disable colored diagnostics
    #[arg(long)]
    no_color: bool,

    /// Debug logging
    #[arg(short, long)]
    verbose: bool,
}

/// Command line merged over the config file.
#[derive(Debug, PartialEq)]
struct Settings {
    files: Vec<PathBuf>,
    meta: Option<PathBuf>,
    src_dir: PathBuf,
    doc_dir: Option<PathBuf>,
    weave: bool,
}

impl Settings {
    fn resolve(cli: &Cli, config: Config) -> Result<Self> {
        let files = if cli.files.is_empty() {
            config.resolve_inputs()?
        } else {
            cli.files.clone()
        };
        Ok(Self {
            files,
            meta: cli.meta.clone().or(config.metadata),
            src_dir: cli
                .src_dir
                .clone()
                .or(config.source_output_dir)
                .unwrap_or_else(|| PathBuf::from(".")),
            doc_dir: cli.doc_dir.clone().or(config.doc_output_dir),
            weave: config.weave && !cli.no_weave,
        })
    }
}

fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("config file {} not found", path.display())),
        None => Ok(Config::load()?.unwrap_or_default()),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    env_logger::Builder::from_default_env()
        .filter_level(level)
        .init();

    match run(&cli) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            log::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Processes every input; `Ok(false)` when anything failed along the way.
fn run(cli: &Cli) -> Result<bool> {
    let settings = Settings::resolve(cli, load_config(cli)?)?;
    if settings.files.is_empty() {
        bail!("no input files: pass paths or set `inputs` in {}", weft_config::CONFIG_FILE_NAME);
    }

    let mut project = Project::new();
    let mut failed = false;

    if let Some(meta) = &settings.meta {
        failed |= project.add_metadata_path(meta).is_err();
    }
    for path in &settings.files {
        failed |= project.add_document_path(path).is_err();
    }

    let code = project.write_code_files(&settings.src_dir);
    log::info!(
        "code files: {} written, {} unchanged, {} failed",
        code.written,
        code.unchanged,
        code.failed
    );

    if settings.weave {
        let docs = project.write_doc_files(settings.doc_dir.as_deref());
        log::info!(
            "documents: {} written, {} unchanged, {} failed",
            docs.written,
            docs.unchanged,
            docs.failed
        );
    }

    let color = if cli.no_color {
        ColorChoice::Never
    } else {
        ColorChoice::Auto
    };
    report(&project, color)?;

    failed |= project.has_errors();
    Ok(!failed)
}

/// Renders diagnostics to stderr. Sources are registered in project order so
/// codespan file ids line up with `FileId`s.
fn report(project: &Project, color: ColorChoice) -> Result<()> {
    let mut files = SimpleFiles::new();
    for source in project.sources() {
        files.add(source.path.display().to_string(), source.text.as_str());
    }

    let writer = StandardStream::stderr(color);
    let config = term::Config::default();
    for diagnostic in project.diagnostics() {
        term::emit_to_write_style(&mut writer.lock(), &config, &files, &diagnostic.to_codespan())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("weft").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_without_config() {
        let settings = Settings::resolve(&cli(&["doc.md"]), Config::default()).unwrap();

        assert_eq!(
            settings,
            Settings {
                files: vec![PathBuf::from("doc.md")],
                meta: None,
                src_dir: PathBuf::from("."),
                doc_dir: None,
                weave: true,
            }
        );
    }

    #[test]
    fn test_command_line_overrides_config() {
        let config = Config {
            source_output_dir: Some(PathBuf::from("from-config")),
            metadata: Some(PathBuf::from("config-meta.txt")),
            ..Config::default()
        };

        let settings = Settings::resolve(
            &cli(&["--src-dir", "from-cli", "--no-weave", "doc.md"]),
            config,
        )
        .unwrap();

        assert_eq!(settings.src_dir, PathBuf::from("from-cli"));
        assert_eq!(settings.meta, Some(PathBuf::from("config-meta.txt")));
        assert!(!settings.weave);
    }

    #[test]
    fn test_inputs_come_from_config_when_no_files_given() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("one.md"), "").unwrap();
        let config = Config {
            inputs: vec![format!("{}/*.md", temp_dir.path().display())],
            ..Config::default()
        };

        let settings = Settings::resolve(&cli(&[]), config).unwrap();

        assert_eq!(settings.files, vec![temp_dir.path().join("one.md")]);
    }

    #[test]
    fn test_explicit_missing_config_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("nope.toml");

        let args = cli(&["--config", missing.to_str().unwrap()]);

        assert!(load_config(&args).is_err());
    }

    #[test]
    fn test_full_run_tangles_and_weaves() {
        let temp_dir = TempDir::new().unwrap();
        let doc = temp_dir.path().join("doc.md");
        std::fs::write(&doc, "# Doc\n\n```\n<<file:out.txt>>=\nhello\n```\n").unwrap();
        let src = temp_dir.path().join("src");

        let args = cli(&["--src-dir", src.to_str().unwrap(), "--no-color", doc.to_str().unwrap()]);
        assert!(run(&args).unwrap());
        assert!(std::fs::read_to_string(src.join("out.txt")).unwrap().contains("hello\n"));
        assert!(temp_dir.path().join("doc.html").exists());
    }

    #[test]
    fn test_missing_document_fails_the_run() {
        let temp_dir = TempDir::new().unwrap();
        let src = temp_dir.path().join("src");
        let missing = temp_dir.path().join("missing.md");

        let args = cli(&["--src-dir", src.to_str().unwrap(), "--no-color", missing.to_str().unwrap()]);

        assert!(!run(&args).unwrap());
    }
}
