use anyhow::{Context, Result, bail};
use clap::{ArgAction, Parser};
use paintapp::Config;
use paintapp::draw::{CairoSurface, RenderSurface, TRANSPARENT};
use paintapp::export;
use paintapp::input::{PreviewController, Tool};
use paintapp::script::{self, ScriptHost};
use std::io::Read;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "paintapp")]
#[command(
    version = concat!(
        env!("CARGO_PKG_VERSION"),
        " (",
        env!("PAINTAPP_GIT_HASH"),
        ", ",
        env!("PAINTAPP_BUILD_PROFILE"),
        ")"
    ),
    about = "Shape paint tool with live drag preview"
)]
struct Cli {
    /// Event script to replay ("-" reads from stdin)
    #[arg(long, short = 's', value_name = "FILE")]
    script: Option<PathBuf>,

    /// Write the finished canvas as PNG to this file
    #[arg(long, short = 'o', value_name = "FILE")]
    output: Option<PathBuf>,

    /// Save the finished canvas into the configured export directory
    #[arg(long, action = ArgAction::SetTrue)]
    save: bool,

    /// Print the finished canvas as a data URI on stdout
    #[arg(long, action = ArgAction::SetTrue)]
    data_uri: bool,

    /// Canvas width in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    width: Option<i32>,

    /// Canvas height in pixels (overrides the config file)
    #[arg(long, value_name = "PX")]
    height: Option<i32>,

    /// Tool selected before the script starts
    #[arg(long, short = 't', value_name = "TOOL")]
    tool: Option<String>,

    /// Configuration file (defaults to ~/.config/paintapp/config.toml)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let Some(script_path) = cli.script.as_ref() else {
        println!("paintapp: Shape paint tool with live drag preview");
        println!();
        println!("Usage:");
        println!("  paintapp --script events.txt --output canvas.png");
        println!("  paintapp --script - --data-uri < events.txt");
        println!("  paintapp --help");
        println!();
        println!("Script commands:");
        println!("  tool <line|semicircle|circle|triangle|rectangle|pentagon|hexagon>");
        println!("  color <#rrggbb|name>   width <px>   fill <on|off>");
        println!("  offset <left> <top>    down|move|up <x> <y>");
        println!("  cancel                 clear");
        return Ok(());
    };

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|err| {
            log::warn!("Failed to load config ({:#}); using defaults", err);
            Config::default()
        }),
    };

    let source = read_script(script_path)?;
    let commands = script::parse_script(&source)
        .with_context(|| format!("Invalid script {}", script_path.display()))?;

    let width = cli.width.unwrap_or(config.canvas.width);
    let height = cli.height.unwrap_or(config.canvas.height);
    let mut surface = CairoSurface::new(width, height).context("Failed to create canvas")?;

    let background = config.background_color();
    if background != TRANSPARENT {
        surface.paint(background);
    }

    let tool = cli
        .tool
        .as_deref()
        .map_or_else(|| config.initial_tool(), Tool::from_name);
    let controller = PreviewController::with_defaults(surface, tool, config.polygon_offsets());

    let mut host = ScriptHost::new(controller, config.initial_style(), background);
    host.run(&commands);
    log::info!("Replayed {} script commands", commands.len());

    let mut controller = host.into_controller();
    if controller.is_drawing() {
        log::warn!("Script ended mid-drag; discarding the live preview");
        controller.cancel();
    }
    let mut surface = controller.into_surface();

    if cli.output.is_none() && !cli.save && !cli.data_uri {
        log::warn!("No export requested (use --output, --save or --data-uri)");
    }

    if let Some(path) = &cli.output {
        export::write_png_file(&mut surface, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
    }

    if cli.save {
        let path = export::save_png(&mut surface, &config.export)?;
        println!("Saved {}", path.display());
    }

    if cli.data_uri {
        println!("{}", export::to_data_uri(&mut surface)?);
    }

    Ok(())
}

fn read_script(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut source = String::new();
        std::io::stdin()
            .read_to_string(&mut source)
            .context("Failed to read script from stdin")?;
        return Ok(source);
    }

    if !path.exists() {
        bail!("Script file {} does not exist", path.display());
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}
