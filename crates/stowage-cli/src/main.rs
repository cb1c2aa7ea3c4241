use serde::Serialize;
use std::io::Read;
use std::str::FromStr;
use stowage::render::present::{FilePresenter, Frame, PresentError, Presenter};
use stowage::render::raster::{RasterError, RasterOptions, svg_to_jpeg, svg_to_png};
use stowage::render::HeadlessError;
use stowage_render::{Camera, SvgRenderOptions};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Headless(HeadlessError),
    Raster(RasterError),
    Present(PresentError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Headless(err) => write!(f, "{err}"),
            CliError::Raster(err) => write!(f, "{err}"),
            CliError::Present(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<HeadlessError> for CliError {
    fn from(value: HeadlessError) -> Self {
        Self::Headless(value)
    }
}

impl From<RasterError> for CliError {
    fn from(value: RasterError) -> Self {
        Self::Raster(value)
    }
}

impl From<PresentError> for CliError {
    fn from(value: PresentError) -> Self {
        Self::Present(value)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Scene,
    Render,
}

#[derive(Debug, Clone, Copy, Default)]
enum RenderFormat {
    #[default]
    Svg,
    Png,
    Jpeg,
}

impl RenderFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Svg => "svg",
            Self::Png => "png",
            Self::Jpeg => "jpg",
        }
    }
}

impl FromStr for RenderFormat {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "png" => Ok(Self::Png),
            "jpg" | "jpeg" => Ok(Self::Jpeg),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    render_format: RenderFormat,
    render_scale: f32,
    background: Option<String>,
    azimuth: f64,
    elevation: f64,
    out: Option<String>,
}

fn usage() -> &'static str {
    "stowage-cli\n\
\n\
USAGE:\n\
  stowage-cli [scene] [--pretty] [<path>|-]\n\
  stowage-cli render [--format svg|png|jpg] [--scale <n>] [--background <css-color>] [--azimuth <deg>] [--elevation <deg>] [--out <path>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a placement document as produced by the placement optimizer\n\
    (an object with `items` and `placements`).\n\
  - scene prints the composed scene (boxes, labels, anchors) as JSON.\n\
  - render prints SVG to stdout by default; use --out to write a file.\n\
  - PNG output defaults to writing next to the input file (or ./out.png for stdin).\n\
  - JPG output defaults to writing next to the input file (or ./out.jpg for stdin).\n\
"
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args {
        command: Command::Scene,
        render_format: RenderFormat::Svg,
        render_scale: 1.0,
        azimuth: Camera::default().azimuth_deg,
        elevation: Camera::default().elevation_deg,
        ..Default::default()
    };

    let mut it = argv.iter().skip(1).peekable();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "scene" => args.command = Command::Scene,
            "render" => args.command = Command::Render,
            "--pretty" => args.pretty = true,
            "--format" => {
                let Some(fmt) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_format = fmt
                    .parse::<RenderFormat>()
                    .map_err(|_| CliError::Usage(usage()))?;
            }
            "--scale" => {
                let Some(scale) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.render_scale = scale.parse::<f32>().map_err(|_| CliError::Usage(usage()))?;
                if !(args.render_scale.is_finite() && args.render_scale > 0.0) {
                    return Err(CliError::Usage(usage()));
                }
            }
            "--background" => {
                let Some(bg) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                if !bg.trim().is_empty() {
                    args.background = Some(bg.trim().to_string());
                }
            }
            "--azimuth" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.azimuth = v.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--elevation" => {
                let Some(v) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.elevation = v.parse::<f64>().map_err(|_| CliError::Usage(usage()))?;
            }
            "--out" => {
                let Some(out) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.out = Some(out.clone());
            }
            other if other.starts_with('-') && other != "-" => {
                return Err(CliError::Usage(usage()));
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    Ok(())
}

fn default_raster_out_path(input: Option<&str>, ext: &str) -> std::path::PathBuf {
    match input {
        Some(path) if path != "-" => std::path::PathBuf::from(path).with_extension(ext),
        _ => std::path::PathBuf::from(format!("out.{ext}")),
    }
}

fn present_or_print(frame: Frame, out: Option<&str>) -> Result<(), CliError> {
    match out {
        None | Some("-") => {
            use std::io::Write;
            std::io::stdout().lock().write_all(&frame.bytes)?;
            Ok(())
        }
        Some(path) => {
            let mut presenter = FilePresenter::new(path);
            presenter.present(frame)?;
            Ok(())
        }
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let text = read_input(args.input.as_deref())?;

    match args.command {
        Command::Scene => {
            let scene = stowage::render::compose_scene_str(&text)?;
            write_json(&scene, args.pretty)?;
            Ok(())
        }
        Command::Render => {
            let camera = Camera::new(args.azimuth, args.elevation);
            let svg_options = SvgRenderOptions::default();
            let svg = stowage::render::render_svg_str(&text, &camera, &svg_options)?;

            match args.render_format {
                RenderFormat::Svg => match args.out.as_deref() {
                    None | Some("-") => {
                        print!("{svg}");
                        Ok(())
                    }
                    Some(path) => present_or_print(Frame::svg(svg), Some(path)),
                },
                RenderFormat::Png | RenderFormat::Jpeg => {
                    let raster = RasterOptions {
                        scale: args.render_scale,
                        background: args.background.clone(),
                        ..RasterOptions::default()
                    };
                    let frame = match args.render_format {
                        RenderFormat::Png => Frame::png(svg_to_png(&svg, &raster)?),
                        _ => Frame::jpeg(svg_to_jpeg(&svg, &raster)?),
                    };
                    let out = args.out.clone().unwrap_or_else(|| {
                        default_raster_out_path(
                            args.input.as_deref(),
                            args.render_format.extension(),
                        )
                        .to_string_lossy()
                        .to_string()
                    });
                    present_or_print(frame, Some(&out))
                }
            }
        }
    }
}

fn main() {
    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
