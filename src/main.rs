// main.rs
//
// Command-line front end: gathers cam parameters from flags, generates the cam
// and writes the drawing files.

use hypocam::float_types::Real;
use hypocam::{CamParameters, ClampMode, HypocycloidCam};
use std::fs;
use std::path::PathBuf;

const USAGE: &str = r#"hypocam

USAGE:
  hypocam [generate] [options]
  hypocam limits [options]

COMMANDS:
  generate   Generate the cam and pins and write drawing files (default)
  limits     Print the pressure-angle limits and cam properties only

OPTIONS:
  --pitch <float>            Tooth (lobe) pitch                [0.08]
  --bolt-circle <float>      Pin bolt circle, overrides --pitch
  --pin-diameter <float>     Pin (roller) diameter             [0.15]
  --eccentricity <float>     Eccentricity                      [0.05]
  --teeth <int>              Number of teeth in the cam        [10]
  --samples <int>            Line segments in the cam          [1000]
  --pressure-angle <float>   Pressure angle limit, degrees     [50]
  --offset <float>           Pressure angle offset             [0]
  --circle-segments <int>    Segments for circles              [180]
  --clamp-mode <mode>        offset | bound                    [offset]
  --out-dir <dir>            Output directory                  [.]
  --name <name>              Output file stem                  [hypocycloid_cam]
  --no-dxf                   Skip the DXF file
  --no-svg                   Skip the SVG file
  -h, --help                 Show this help
"#;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hypocam=info".into()),
        )
        .init();

    if let Err(err) = run() {
        tracing::error!("{err}");
        eprintln!("hypocam error: {err}");
        std::process::exit(1);
    }
}

struct Args {
    inner: std::vec::IntoIter<String>,
}

impl Args {
    fn new(args: Vec<String>) -> Self {
        Self { inner: args.into_iter() }
    }

    fn next(&mut self) -> Option<String> {
        self.inner.next()
    }

    fn value(&mut self, flag: &str) -> Result<String, String> {
        self.next().ok_or_else(|| format!("missing value for `{flag}`"))
    }

    fn real(&mut self, flag: &str) -> Result<Real, String> {
        let raw = self.value(flag)?;
        raw.parse::<Real>()
            .map_err(|e| format!("`{flag}` expects a number, got `{raw}`: {e}"))
    }

    fn count(&mut self, flag: &str) -> Result<usize, String> {
        let raw = self.value(flag)?;
        raw.parse::<usize>()
            .map_err(|e| format!("`{flag}` expects a whole number, got `{raw}`: {e}"))
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Command {
    Generate,
    Limits,
}

struct Options {
    params: CamParameters,
    out_dir: PathBuf,
    name: String,
    write_dxf: bool,
    write_svg: bool,
}

fn run() -> Result<(), String> {
    let mut args: Vec<String> = std::env::args().skip(1).collect();
    let command = match args.first().map(String::as_str) {
        Some("generate") => {
            args.remove(0);
            Command::Generate
        }
        Some("limits") => {
            args.remove(0);
            Command::Limits
        }
        _ => Command::Generate,
    };

    let Some(options) = parse_options(Args::new(args))? else {
        println!("{USAGE}");
        return Ok(());
    };

    let cam = HypocycloidCam::generate(options.params.clone()).map_err(|e| e.to_string())?;
    for warning in cam.warnings() {
        eprintln!("warning: {warning}");
    }

    if command == Command::Limits {
        for (key, value) in cam.properties() {
            println!("{key}: {value}");
        }
        return Ok(());
    }

    if !options.write_dxf && !options.write_svg {
        return Err("nothing to write (both --no-dxf and --no-svg set)".to_string());
    }
    fs::create_dir_all(&options.out_dir).map_err(|e| format!("create out dir: {e}"))?;

    if options.write_dxf {
        write_dxf(&cam, &options)?;
    }
    if options.write_svg {
        write_svg(&cam, &options)?;
    }
    Ok(())
}

fn parse_options(mut args: Args) -> Result<Option<Options>, String> {
    let mut params = CamParameters::default();
    let mut pitch: Option<Real> = None;
    let mut bolt_circle: Option<Real> = None;
    let mut options = Options {
        params: CamParameters::default(),
        out_dir: PathBuf::from("."),
        name: "hypocycloid_cam".to_string(),
        write_dxf: true,
        write_svg: true,
    };

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--pitch" => pitch = Some(args.real("--pitch")?),
            "--bolt-circle" => bolt_circle = Some(args.real("--bolt-circle")?),
            "--pin-diameter" => params.pin_diameter = args.real("--pin-diameter")?,
            "--eccentricity" => params.eccentricity = args.real("--eccentricity")?,
            "--teeth" => params.teeth = args.count("--teeth")?,
            "--samples" => params.samples = args.count("--samples")?,
            "--pressure-angle" => params.pressure_angle_limit = args.real("--pressure-angle")?,
            "--offset" => params.pressure_angle_offset = args.real("--offset")?,
            "--circle-segments" => params.circle_segments = args.count("--circle-segments")?,
            "--clamp-mode" => {
                params.clamp_mode = match args.value("--clamp-mode")?.as_str() {
                    "offset" => ClampMode::Offset,
                    "bound" => ClampMode::ToBound,
                    other => return Err(format!("unknown clamp mode `{other}` (offset | bound)")),
                }
            }
            "--out-dir" => options.out_dir = PathBuf::from(args.value("--out-dir")?),
            "--name" => options.name = args.value("--name")?,
            "--no-dxf" => options.write_dxf = false,
            "--no-svg" => options.write_svg = false,
            "-h" | "--help" | "help" => return Ok(None),
            other => return Err(format!("unknown option `{other}`\n\n{USAGE}")),
        }
    }

    // -b overrides -p
    params = match (bolt_circle, pitch) {
        (Some(b), _) => params.with_bolt_circle(b),
        (None, Some(p)) => params.with_pitch(p),
        (None, None) => params,
    };
    options.params = params;
    Ok(Some(options))
}

#[cfg(feature = "dxf-io")]
fn write_dxf(cam: &HypocycloidCam, options: &Options) -> Result<(), String> {
    let path = options.out_dir.join(format!("{}.dxf", options.name));
    let bytes = cam.to_dxf().map_err(|e| e.to_string())?;
    fs::write(&path, bytes).map_err(|e| format!("write {}: {e}", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(not(feature = "dxf-io"))]
fn write_dxf(_cam: &HypocycloidCam, _options: &Options) -> Result<(), String> {
    Err("DXF output requires the `dxf-io` feature".to_string())
}

#[cfg(feature = "svg-io")]
fn write_svg(cam: &HypocycloidCam, options: &Options) -> Result<(), String> {
    let path = options.out_dir.join(format!("{}.svg", options.name));
    let document = cam.to_svg().map_err(|e| e.to_string())?;
    fs::write(&path, document).map_err(|e| format!("write {}: {e}", path.display()))?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(not(feature = "svg-io"))]
fn write_svg(_cam: &HypocycloidCam, _options: &Options) -> Result<(), String> {
    Err("SVG output requires the `svg-io` feature".to_string())
}
