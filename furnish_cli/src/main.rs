//! # Furnish CLI
//!
//! Reads a furniture request as JSON (from a file or stdin), runs the
//! generation pipeline and prints a summary, the design JSON, the render
//! scene or a persistence record.
//!
//! ```text
//! furnish generate request.json
//! furnish generate - --output json < request.json
//! furnish -vv generate request.json --config engine.toml --seed 7
//! furnish engineer table wood 240 90 75 --load 80
//! ```

mod logger;

use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};

use furnish_core::engineering::{compute_engineering_spec, EngineeringSpec};
use furnish_core::{
    generate_design_with, Design, DesignError, DesignRecord, Dimensions, EngineSettings, FurnitureRequest,
    FurnitureType, Material,
};

#[derive(Parser)]
#[command(name = "furnish")]
#[command(about = "Parametric furniture generator", long_about = None)]
struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Silence all log output
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a design from a JSON request
    Generate {
        /// Request file, or `-` for stdin
        input: PathBuf,

        /// Engine settings file (.toml or .json)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Seed for random partition strategies
        #[arg(long)]
        seed: Option<u64>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Summary)]
        output: OutputFormat,
    },
    /// Print the engineering spec for an envelope
    Engineer {
        furniture_type: String,
        material: String,
        length: f64,
        width: f64,
        height: f64,

        /// Design load in kg (defaults by furniture type)
        #[arg(long)]
        load: Option<f64>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Human-readable report
    Summary,
    /// Full design as pretty JSON
    Json,
    /// Render scene as pretty JSON
    Scene,
    /// Design wrapped in a persistence record
    Record,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(logger::level_for(cli.verbose, cli.quiet));

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Structured errors go out as JSON for callers to parse
            match err.downcast_ref::<DesignError>() {
                Some(design_err) => match serde_json::to_string_pretty(design_err) {
                    Ok(json) => eprintln!("{}", json),
                    Err(_) => eprintln!("Error: {}", design_err),
                },
                None => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}

fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Generate {
            input,
            config,
            seed,
            output,
        } => generate(&input, config.as_deref(), seed, output),
        Commands::Engineer {
            furniture_type,
            material,
            length,
            width,
            height,
            load,
        } => engineer(&furniture_type, &material, Dimensions::new(length, width, height), load),
    }
}

fn read_input(input: &Path) -> Result<String> {
    if input == Path::new("-") {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).context("Failed to read request from stdin")?;
        Ok(text)
    } else {
        fs::read_to_string(input).with_context(|| format!("Failed to read {}", input.display()))
    }
}

fn load_settings(path: Option<&Path>) -> Result<EngineSettings> {
    let Some(path) = path else {
        return Ok(EngineSettings::default());
    };
    let text = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    let is_json = path.extension().and_then(|e| e.to_str()) == Some("json");
    let settings = if is_json {
        EngineSettings::from_json_str(&text)?
    } else {
        EngineSettings::from_toml_str(&text)?
    };
    Ok(settings)
}

fn generate(input: &Path, config: Option<&Path>, seed: Option<u64>, output: OutputFormat) -> Result<()> {
    let mut settings = load_settings(config)?;
    if seed.is_some() {
        settings.random_seed = seed;
    }

    let request = FurnitureRequest::from_json(&read_input(input)?)?;
    let design = generate_design_with(&request, &settings)?;

    match output {
        OutputFormat::Summary => print_summary(&design),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&design)?),
        OutputFormat::Scene => println!("{}", serde_json::to_string_pretty(&design.scene())?),
        OutputFormat::Record => {
            let record = DesignRecord::new(request, design);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
    }
    Ok(())
}

fn engineer(furniture_type: &str, material: &str, dims: Dimensions, load: Option<f64>) -> Result<()> {
    let furniture_type = FurnitureType::from_str_flexible(furniture_type)?;
    let material = Material::from_str_flexible(material)?;
    dims.validate_envelope()?;

    let spec = compute_engineering_spec(furniture_type, &dims, material, load);
    print_engineering(furniture_type, material, &dims, &spec);
    Ok(())
}

fn print_engineering(furniture_type: FurnitureType, material: Material, dims: &Dimensions, spec: &EngineeringSpec) {
    println!("═══════════════════════════════════════");
    println!("  ENGINEERING SPEC");
    println!("═══════════════════════════════════════");
    println!();
    println!("Input:");
    println!("  Type:      {}", furniture_type);
    println!("  Material:  {}", material.display_name());
    println!("  Envelope:  {:.0} × {:.0} × {:.0} cm", dims.length, dims.width, dims.height);
    println!("  Load:      {:.0} kg", spec.load_analysis.total_load_kg);
    println!();
    println!("Sizing:");
    println!("  Legs:      {} × {:.2} cm square", spec.leg_count, spec.leg_size_cm);
    println!("  Surface:   {:.1} cm", spec.top_thickness_cm);
    if let Some(check) = &spec.deflection {
        println!(
            "  δ:         {:.3} cm at {:.1} cm, {:.3} cm at {:.1} cm (limit {:.1})",
            check.deflection_cm,
            check.initial_thickness_cm,
            check.final_deflection_cm,
            check.recommended_thickness_cm,
            check.limit_cm
        );
    }
    for addition in &spec.additions {
        println!(
            "  Addition:  {:?} × {} ({:.1} × {:.1} × {:.1} cm)",
            addition.kind,
            addition.quantity,
            addition.dimensions.length,
            addition.dimensions.width,
            addition.dimensions.height
        );
    }
    print_warnings(&spec.warnings);
}

fn print_summary(design: &Design) {
    println!("═══════════════════════════════════════");
    println!("  {} DESIGN", design.furniture_type.display_name().to_uppercase());
    println!("═══════════════════════════════════════");
    println!();
    println!(
        "Envelope:  {:.0} × {:.0} × {:.0} cm, {}",
        design.dimensions.length,
        design.dimensions.width,
        design.dimensions.height,
        design.material.display_name()
    );
    println!(
        "Sizing:    legs {:.2} cm, surfaces {:.1} cm",
        design.engineering.leg_size_cm, design.engineering.top_thickness_cm
    );
    println!();
    println!("Parts:");
    for line in &design.cost_breakdown.items {
        println!(
            "  {:>3} × {:<32} {:>10.2}  ({:>5.1}%)",
            line.quantity, line.name, line.cost, line.percentage
        );
    }
    println!("  {:<38} {:>10.2}", "Total", design.total_cost);
    println!();
    println!("Positioned parts:  {}", design.positioned_parts.len());
    println!("Assembly time:     {:.0} min", design.assembly_time_minutes);
    println!("Estimated weight:  {:.1} kg", design.structural.estimated_weight_kg);
    println!("Stability ratio:   {:.2}", design.structural.stability_ratio);

    let divided: Vec<_> = design.partitions.iter().filter(|s| s.dividers > 0).collect();
    if !divided.is_empty() {
        println!();
        println!("Dividers:");
        for shelf in divided {
            println!("  Shelf {}: {} at {:?}", shelf.visual_index, shelf.dividers, shelf.cut_fractions);
        }
    }

    println!();
    println!("Instructions:");
    for (i, step) in design.instructions.iter().enumerate() {
        println!("  {}. {}", i + 1, step);
    }
    print_warnings(&design.warnings);
}

fn print_warnings(warnings: &[String]) {
    if warnings.is_empty() {
        return;
    }
    println!();
    println!("Warnings:");
    for warning in warnings {
        println!("  ⚠ {}", warning);
    }
}
