//! noteflow - render Markdown notes for WeChat and Xiaohongshu

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use noteflow_config::Config;
use noteflow_engine::{
    DraftArticle, DraftRequest, EmphasisStyle, HeadingStyle, RenderOptions, ThemeRegistry,
    WechatRenderer, XhsRenderer, image_references, io, parse_frontmatter,
};
use relative_path::RelativePathBuf;

#[derive(Parser)]
#[command(name = "noteflow")]
#[command(version, about = "Render Markdown notes for WeChat and Xiaohongshu", long_about = None)]
#[command(after_help = "EXAMPLES:
    noteflow wechat post.md --theme tech     Styled HTML for the article editor
    noteflow xhs post.md --emphasis lenticular
    cat post.md | noteflow xhs -             Read the note from stdin
    noteflow draft post.md --cover MEDIA_ID  Draft payload as JSON")]
struct Cli {
    /// Config file (defaults to ~/.config/noteflow/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Log debug output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a note as WeChat article HTML
    Wechat {
        /// Note to render, or `-` for stdin
        note: PathBuf,

        /// Theme id
        #[arg(long)]
        theme: Option<String>,

        /// Keep heading levels as written
        #[arg(long)]
        no_heading_shift: bool,
    },

    /// Render a note as Xiaohongshu plain text
    Xhs {
        /// Note to render, or `-` for stdin
        note: PathBuf,

        /// Soft-wrap width, 0 disables wrapping
        #[arg(long, value_name = "N")]
        max_line_length: Option<usize>,

        /// Brackets used for bold text
        #[arg(long, value_enum)]
        emphasis: Option<EmphasisArg>,

        /// Heading markers
        #[arg(long, value_enum)]
        heading_style: Option<HeadingArg>,
    },

    /// Print the draft payload for a note as JSON
    Draft {
        /// Note to render, or `-` for stdin
        note: PathBuf,

        /// Theme id
        #[arg(long)]
        theme: Option<String>,

        /// Cover image media id
        #[arg(long, value_name = "MEDIA_ID")]
        cover: Option<String>,

        /// Article title
        #[arg(long)]
        title: Option<String>,
    },

    /// List available themes
    Themes,
}

#[derive(Clone, Copy, ValueEnum)]
enum EmphasisArg {
    /// 「text」
    Corner,
    /// 【text】
    Lenticular,
}

impl From<EmphasisArg> for EmphasisStyle {
    fn from(arg: EmphasisArg) -> Self {
        match arg {
            EmphasisArg::Corner => EmphasisStyle::Corner,
            EmphasisArg::Lenticular => EmphasisStyle::Lenticular,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum HeadingArg {
    Brackets,
    Emoji,
}

impl From<HeadingArg> for HeadingStyle {
    fn from(arg: HeadingArg) -> Self {
        match arg {
            HeadingArg::Brackets => HeadingStyle::Brackets,
            HeadingArg::Emoji => HeadingStyle::Emoji,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;
    let mut options = config.render_options();
    let themes = config.theme_registry();

    match cli.command {
        Command::Wechat {
            note,
            theme,
            no_heading_shift,
        } => {
            if let Some(theme) = theme {
                options.theme = theme;
            }
            if no_heading_shift {
                options.heading_shift = false;
            }
            let body = read_body(&note, &config)?;
            warn_local_images(&body);
            println!("{}", render_wechat(&body, &themes, &options));
        }
        Command::Xhs {
            note,
            max_line_length,
            emphasis,
            heading_style,
        } => {
            if let Some(max) = max_line_length {
                options.max_line_length = max;
            }
            if let Some(emphasis) = emphasis {
                options.emphasis_style = emphasis.into();
            }
            if let Some(heading_style) = heading_style {
                options.heading_style = heading_style.into();
            }
            let body = read_body(&note, &config)?;
            println!("{}", XhsRenderer::new(&options).render(&body));
        }
        Command::Draft {
            note,
            theme,
            cover,
            title,
        } => {
            if let Some(theme) = theme {
                options.theme = theme;
            }
            let source = read_source(&note, config.notes_path.as_deref())?;
            let frontmatter = parse_frontmatter(&source);
            warn_local_images(&frontmatter.content);

            let html = render_wechat(&frontmatter.content, &themes, &options);
            let defaults = config.draft_defaults(fallback_title(&note));
            let mut article = DraftArticle::from_note(&frontmatter, html, &defaults);
            if let Some(title) = title {
                article.title = title;
            }
            if let Some(cover) = cover {
                article.thumb_media_id = cover;
            }
            if article.thumb_media_id.is_empty() {
                log::warn!("No cover media id set; the draft API will reject this article");
            }

            let request = DraftRequest::from(article);
            println!("{}", serde_json::to_string_pretty(&request)?);
        }
        Command::Themes => {
            for (id, bundle) in themes.iter() {
                let marker = if id == options.theme { "*" } else { " " };
                println!("{marker} {id:<12} {}", bundle.name);
            }
        }
    }

    Ok(())
}

fn load_config(explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Config::load_from_path(path)?
            .with_context(|| format!("Config file not found: {}", path.display())),
        None => {
            let config = Config::load()?;
            if config.is_none() {
                log::debug!(
                    "No config file at {}, using defaults",
                    Config::config_path().display()
                );
            }
            Ok(config.unwrap_or_default())
        }
    }
}

fn render_wechat(body: &str, themes: &ThemeRegistry, options: &RenderOptions) -> String {
    if themes.get(&options.theme).is_none() {
        log::warn!("Unknown theme {:?}, using the default theme", options.theme);
    }
    WechatRenderer::new(themes, options).render(body)
}

/// The note's Markdown with any frontmatter removed.
fn read_body(note: &Path, config: &Config) -> Result<String> {
    let source = read_source(note, config.notes_path.as_deref())?;
    Ok(parse_frontmatter(&source).content)
}

/// Reads `-` from stdin, an existing path as given, and anything else
/// relative to the notes folder.
fn read_source(note: &Path, notes_path: Option<&Path>) -> Result<String> {
    if note == Path::new("-") {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read note from stdin")?;
        return Ok(source);
    }

    if note.exists() || note.is_absolute() {
        return io::read_note_at(note)
            .with_context(|| format!("Failed to read {}", note.display()));
    }

    let Some(notes_root) = notes_path else {
        bail!("Note not found: {}", note.display());
    };
    io::validate_notes_dir(notes_root)?;
    let relative = RelativePathBuf::from(note.to_string_lossy().into_owned());
    log::info!("Reading {} from {}", relative, notes_root.display());
    io::read_note(&relative, notes_root)
        .with_context(|| format!("Failed to read {relative} under {}", notes_root.display()))
}

fn warn_local_images(body: &str) {
    for image in image_references(body).iter().filter(|image| image.is_local()) {
        log::warn!(
            "Local image {} must be uploaded before publishing; it renders as a placeholder",
            image.url
        );
    }
}

fn fallback_title(note: &Path) -> String {
    note.file_stem()
        .filter(|_| note != Path::new("-"))
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "Untitled".to_string())
}
