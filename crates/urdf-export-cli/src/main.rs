//! CAD assembly to URDF export entry point

use std::path::PathBuf;
use std::process::ExitCode;

use urdf_export_core::{
    AssemblyFile, AssemblyFileError, ExportOptions, extract, render_text, urdf_document,
};

const USAGE: &str =
    "Usage: urdf-export <assembly.(ron|json)> [--robot-name NAME] [--mesh-package NAME] [--urdf-out FILE]";

#[derive(Debug, Clone, PartialEq)]
struct CliOptions {
    input: PathBuf,
    robot_name: Option<String>,
    mesh_package: Option<String>,
    urdf_out: Option<PathBuf>,
}

fn parse_args(args: &[String]) -> Result<CliOptions, String> {
    let mut input = None;
    let mut robot_name = None;
    let mut mesh_package = None;
    let mut urdf_out = None;

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--robot-name" => {
                robot_name = Some(iter.next().ok_or("--robot-name requires a value")?.clone());
            }
            "--mesh-package" => {
                mesh_package = Some(iter.next().ok_or("--mesh-package requires a value")?.clone());
            }
            "--urdf-out" => {
                urdf_out = Some(PathBuf::from(
                    iter.next().ok_or("--urdf-out requires a value")?,
                ));
            }
            flag if flag.starts_with("--") => return Err(format!("unknown flag: {flag}")),
            path => {
                if input.is_some() {
                    return Err("multiple input files given".to_string());
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    Ok(CliOptions {
        input: input.ok_or("missing assembly file argument")?,
        robot_name,
        mesh_package,
        urdf_out,
    })
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error(transparent)]
    Assembly(#[from] AssemblyFileError),
    #[error("IO error: {0}")]
    Io(String),
}

fn run(options: &CliOptions) -> Result<(), CliError> {
    let assembly = AssemblyFile::load(&options.input)?;
    tracing::info!(
        name = %assembly.name,
        components = assembly.components.len(),
        "loaded assembly"
    );

    let report = extract(&assembly.components);

    let mut export = ExportOptions::default();
    if let Some(ref name) = options.robot_name {
        export.robot_name = name.clone();
    }
    if let Some(ref package) = options.mesh_package {
        export.mesh_package = package.clone();
    }

    print!("{}", render_text(&report));

    let urdf = urdf_document(&report, &export);
    if let Some(ref path) = options.urdf_out {
        std::fs::write(path, &urdf).map_err(|e| CliError::Io(e.to_string()))?;
        tracing::info!(path = %path.display(), "wrote URDF");
    } else {
        print!("{urdf}");
    }

    Ok(())
}

fn main() -> ExitCode {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "urdf_export=info,urdf_export_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_args(&args) {
        Ok(options) => options,
        Err(message) => {
            eprintln!("{message}\n{USAGE}");
            return ExitCode::FAILURE;
        }
    };

    match run(&options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Failed: {error}");
            ExitCode::FAILURE
        }
    }
}
