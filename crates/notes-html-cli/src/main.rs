use anyhow::{Context, Result, bail};
use notes_html_config::Config;
use notes_html_engine::{DocumentRecord, MarkdownTranscoder, RenderLimits, io};
use std::{
    env, fs,
    path::{Path, PathBuf},
    process,
};

#[derive(Debug, PartialEq)]
enum Command {
    /// Print the HTML fragment for one note
    Render { file: PathBuf },
    /// Print name, title, line count and size for every note
    List { notes_dir: Option<PathBuf> },
    /// Write `<name>.html` for every note into `out_dir`
    Export {
        out_dir: PathBuf,
        notes_dir: Option<PathBuf>,
    },
}

fn parse_args(args: &[String]) -> Option<Command> {
    let rest: Vec<&str> = args.iter().skip(1).map(String::as_str).collect();
    match rest.as_slice() {
        ["render", file] => Some(Command::Render {
            file: PathBuf::from(*file),
        }),
        ["list"] => Some(Command::List { notes_dir: None }),
        ["list", dir] => Some(Command::List {
            notes_dir: Some(PathBuf::from(*dir)),
        }),
        ["export", out] => Some(Command::Export {
            out_dir: PathBuf::from(*out),
            notes_dir: None,
        }),
        ["export", out, dir] => Some(Command::Export {
            out_dir: PathBuf::from(*out),
            notes_dir: Some(PathBuf::from(*dir)),
        }),
        _ => None,
    }
}

fn usage(program: &str) -> String {
    format!(
        "Usage:\n  {program} render <file.md>\n  {program} list [notes-folder-path]\n  {program} export <out-dir> [notes-folder-path]"
    )
}

fn limits_from(config: Option<&Config>) -> RenderLimits {
    match config {
        Some(config) => RenderLimits {
            max_bytes: config.limits.max_bytes,
            max_lines: config.limits.max_lines,
        },
        None => RenderLimits::default(),
    }
}

fn resolve_notes_dir(arg: Option<PathBuf>, config: Option<&Config>) -> Result<PathBuf> {
    let (notes_path, from_config) = match (arg, config) {
        (Some(path), _) => (path, false),
        (None, Some(config)) => (config.notes_path.clone(), true),
        (None, None) => bail!(
            "No notes path provided and no config file found at {}",
            Config::config_path().display()
        ),
    };

    io::validate_notes_dir(&notes_path).with_context(|| {
        let source = if from_config {
            format!(" from config file '{}'", Config::config_path().display())
        } else {
            String::new()
        };
        format!("Notes path '{}'{source} is invalid", notes_path.display())
    })?;

    Ok(notes_path)
}

fn render_file(transcoder: &MarkdownTranscoder, file: &Path) -> Result<String> {
    let content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;
    transcoder
        .render(&content)
        .with_context(|| format!("Refusing to render {}", file.display()))
}

fn list_line(record: &DocumentRecord) -> String {
    format!(
        "{}\t{}\t{} lines\t{} bytes",
        record.name, record.title, record.line_count, record.size
    )
}

/// Exports every note; notes over the render limits are skipped with a warning.
fn export_notes(
    transcoder: &MarkdownTranscoder,
    notes_dir: &Path,
    out_dir: &Path,
) -> Result<usize> {
    let mut written = 0;
    for record in io::load_documents(notes_dir)? {
        let html = match transcoder.render(&record.content) {
            Ok(html) => html,
            Err(e) => {
                log::warn!("Skipping {}: {e}", record.name);
                continue;
            }
        };
        let target = record.name.with_extension("html");
        io::write_file(&target, out_dir, &html)
            .with_context(|| format!("Failed to write {target}"))?;
        log::debug!("Exported {} as {target}", record.name);
        written += 1;
    }
    Ok(written)
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args.first().map(String::as_str).unwrap_or("notes-html");
    let Some(command) = parse_args(&args) else {
        eprintln!("{}", usage(program));
        process::exit(1);
    };

    let config = Config::load().context("Failed to load config file")?;
    let transcoder = MarkdownTranscoder::new(limits_from(config.as_ref()));
    log::debug!("Render limits: {:?}", transcoder.limits());

    match command {
        Command::Render { file } => {
            print!("{}", render_file(&transcoder, &file)?);
        }
        Command::List { notes_dir } => {
            let notes_dir = resolve_notes_dir(notes_dir, config.as_ref())?;
            for record in io::load_documents(&notes_dir)? {
                println!("{}", list_line(&record));
            }
        }
        Command::Export { out_dir, notes_dir } => {
            let notes_dir = resolve_notes_dir(notes_dir, config.as_ref())?;
            let written = export_notes(&transcoder, &notes_dir, &out_dir)?;
            log::info!("Exported {written} notes to {}", out_dir.display());
        }
    }

    Ok(())
}
