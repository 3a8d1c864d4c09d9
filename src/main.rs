//! Solar sizer entry point — CLI wiring around the sizing chain.

use std::path::Path;
use std::process;

use chrono::Utc;

use solar_sizer::config::DesignConfig;
use solar_sizer::io::export::export_loads_csv;
use solar_sizer::loads::LoadRegistry;
use solar_sizer::location;
use solar_sizer::project::{JsonFileStore, ProjectStore, Snapshot};
use solar_sizer::report::render_report;
use solar_sizer::sizing::{SizingResults, recalculate};

/// Store file used when `--store` is not given.
const DEFAULT_STORE_PATH: &str = "solar-projects.json";

/// Parsed CLI arguments.
struct CliArgs {
    scenario_path: Option<String>,
    preset: Option<String>,
    templates: Vec<String>,
    latitude: Option<f64>,
    climate: Option<String>,
    report_out: Option<String>,
    csv_out: Option<String>,
    store_path: Option<String>,
    save_name: Option<String>,
    load_id: Option<u64>,
    list_projects: bool,
    #[cfg(feature = "api")]
    serve: bool,
    #[cfg(feature = "api")]
    port: u16,
}

fn print_help() {
    eprintln!("solar-sizer — off-grid solar power system sizing calculator");
    eprintln!();
    eprintln!("Usage: solar-sizer [OPTIONS]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --scenario <path>     Load design from TOML config file");
    eprintln!("  --preset <name>       Use a built-in preset (blank, cabin, homestead)");
    eprintln!("  --template <name>     Add a quick-pick appliance (repeatable)");
    eprintln!("  --latitude <deg>      Estimate peak sun hours from a latitude");
    eprintln!("  --climate <zone>      Set peak sun hours from a climate zone");
    eprintln!("                        (tropical, subtropical, temperate, northern)");
    eprintln!("  --report-out <path>   Write the text design report");
    eprintln!("  --csv-out <path>      Write the appliance breakdown as CSV");
    eprintln!("  --store <path>        Project store file (default: {DEFAULT_STORE_PATH})");
    eprintln!("  --save <name>         Save the design as a named project");
    eprintln!("  --load <id>           Load a saved project instead of the scenario");
    eprintln!("  --list-projects       List saved projects and exit");
    #[cfg(feature = "api")]
    {
        eprintln!("  --serve               Start REST API server after sizing");
        eprintln!("  --port <u16>          API server port (default: 3000)");
    }
    eprintln!("  --help                Show this help message");
    eprintln!();
    eprintln!("If no --scenario or --preset is given, the cabin preset is used.");
}

fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        scenario_path: None,
        preset: None,
        templates: Vec::new(),
        latitude: None,
        climate: None,
        report_out: None,
        csv_out: None,
        store_path: None,
        save_name: None,
        load_id: None,
        list_projects: false,
        #[cfg(feature = "api")]
        serve: false,
        #[cfg(feature = "api")]
        port: 3000,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "-h" => {
                print_help();
                process::exit(0);
            }
            "--scenario" => {
                i += 1;
                cli.scenario_path = Some(required_value(&args, i, "--scenario", "a path"));
            }
            "--preset" => {
                i += 1;
                cli.preset = Some(required_value(&args, i, "--preset", "a name"));
            }
            "--template" => {
                i += 1;
                cli.templates
                    .push(required_value(&args, i, "--template", "a name"));
            }
            "--latitude" => {
                i += 1;
                let raw = required_value(&args, i, "--latitude", "a number");
                match raw.parse::<f64>() {
                    Ok(v) => cli.latitude = Some(v),
                    Err(_) => {
                        eprintln!("error: --latitude value \"{raw}\" is not a number");
                        process::exit(1);
                    }
                }
            }
            "--climate" => {
                i += 1;
                cli.climate = Some(required_value(&args, i, "--climate", "a zone name"));
            }
            "--report-out" => {
                i += 1;
                cli.report_out = Some(required_value(&args, i, "--report-out", "a path"));
            }
            "--csv-out" => {
                i += 1;
                cli.csv_out = Some(required_value(&args, i, "--csv-out", "a path"));
            }
            "--store" => {
                i += 1;
                cli.store_path = Some(required_value(&args, i, "--store", "a path"));
            }
            "--save" => {
                i += 1;
                cli.save_name = Some(required_value(&args, i, "--save", "a project name"));
            }
            "--load" => {
                i += 1;
                let raw = required_value(&args, i, "--load", "a project id");
                match raw.parse::<u64>() {
                    Ok(v) => cli.load_id = Some(v),
                    Err(_) => {
                        eprintln!("error: --load value \"{raw}\" is not a valid project id");
                        process::exit(1);
                    }
                }
            }
            "--list-projects" => {
                cli.list_projects = true;
            }
            #[cfg(feature = "api")]
            "--serve" => {
                cli.serve = true;
            }
            #[cfg(feature = "api")]
            "--port" => {
                i += 1;
                let raw = required_value(&args, i, "--port", "a u16");
                match raw.parse::<u16>() {
                    Ok(p) => cli.port = p,
                    Err(_) => {
                        eprintln!("error: --port value \"{raw}\" is not a valid u16");
                        process::exit(1);
                    }
                }
            }
            other => {
                eprintln!("error: unknown argument \"{other}\"");
                print_help();
                process::exit(1);
            }
        }
        i += 1;
    }

    if cli.latitude.is_some() && cli.climate.is_some() {
        eprintln!("error: --latitude and --climate are mutually exclusive");
        process::exit(1);
    }

    cli
}

fn required_value(args: &[String], i: usize, flag: &str, what: &str) -> String {
    match args.get(i) {
        Some(v) => v.clone(),
        None => {
            eprintln!("error: {flag} requires {what} argument");
            process::exit(1);
        }
    }
}

fn main() {
    let cli = parse_args();

    // Load config: --scenario takes priority, then --preset, then the cabin default
    let mut design = if let Some(ref path) = cli.scenario_path {
        match DesignConfig::from_toml_file(Path::new(path)) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else if let Some(ref name) = cli.preset {
        match DesignConfig::from_preset(name) {
            Ok(cfg) => cfg,
            Err(e) => {
                eprintln!("{e}");
                process::exit(1);
            }
        }
    } else {
        DesignConfig::cabin()
    };

    // Apply peak-sun-hour overrides. A bad latitude is a notice, not a failure:
    // the configured PSH stays in effect.
    if let Some(lat) = cli.latitude {
        match location::peak_sun_hours_for_latitude(lat) {
            Some(psh) => {
                design.system.peak_sun_hours = psh;
                eprintln!("Latitude {lat}° → peak sun hours set to {psh}");
            }
            None => {
                eprintln!(
                    "notice: latitude {lat} is outside [-90, 90]; keeping peak sun hours {}",
                    design.system.peak_sun_hours
                );
            }
        }
    }
    if let Some(ref zone_name) = cli.climate {
        match zone_name.parse::<location::ClimateZone>() {
            Ok(zone) => {
                design.system.peak_sun_hours = zone.peak_sun_hours();
                eprintln!(
                    "Climate zone {} → peak sun hours set to {}",
                    zone.name(),
                    zone.peak_sun_hours()
                );
            }
            Err(e) => {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }

    // Validate at the boundary; the sizing chain assumes clean input.
    let errors = design.validate();
    if !errors.is_empty() {
        for e in &errors {
            eprintln!("{e}");
        }
        process::exit(1);
    }

    let store_requested = cli.store_path.is_some()
        || cli.save_name.is_some()
        || cli.load_id.is_some()
        || cli.list_projects;
    let store_path = cli
        .store_path
        .clone()
        .unwrap_or_else(|| DEFAULT_STORE_PATH.to_string());
    let mut store = JsonFileStore::new(&store_path);

    if cli.list_projects {
        match store.projects() {
            Ok(projects) if projects.is_empty() => println!("No saved projects."),
            Ok(projects) => {
                for p in projects {
                    println!("{}  {}  ({})", p.id, p.name, p.saved_at);
                }
            }
            Err(e) => eprintln!("notice: {e}"),
        }
        return;
    }

    // Build the working state, either from a saved project or the scenario.
    let mut registry = design.build_registry();
    let mut params = design.system.clone();
    let mut stored_results: Option<SizingResults> = None;

    if let Some(id) = cli.load_id {
        match store.load_project(id) {
            Ok(Some(project)) => {
                eprintln!("Loaded project \"{}\" (saved {})", project.name, project.saved_at);
                registry = LoadRegistry::from_loads(project.snapshot.loads);
                params = project.snapshot.params;
                stored_results = project.snapshot.results;
            }
            Ok(None) => {
                eprintln!("notice: no project with id {id}; using the configured design");
            }
            Err(e) => {
                eprintln!("notice: {e}; using the configured design");
            }
        }
    } else {
        for name in &cli.templates {
            if let Err(e) = registry.add_template(name) {
                eprintln!("error: {e}");
                process::exit(1);
            }
        }
    }

    // A loaded project keeps its saved results verbatim; everything else is
    // recomputed from the current state.
    let results = stored_results.unwrap_or_else(|| recalculate(registry.loads(), &params));

    println!("{results}");

    if let Some(ref path) = cli.report_out {
        let generated_at = Utc::now().to_rfc3339();
        let report = render_report(&generated_at, registry.loads(), &params, &results);
        if let Err(e) = std::fs::write(path, report) {
            eprintln!("error: failed to write report: {e}");
            process::exit(1);
        }
        eprintln!("Report written to {path}");
    }

    if let Some(ref path) = cli.csv_out {
        if let Err(e) = export_loads_csv(registry.loads(), Path::new(path)) {
            eprintln!("error: failed to write CSV: {e}");
            process::exit(1);
        }
        eprintln!("Load breakdown written to {path}");
    }

    if let Some(ref name) = cli.save_name {
        let snapshot = Snapshot::capture(registry.loads(), &params, &results);
        match store.save_project(name, snapshot) {
            Ok(id) => eprintln!("Project \"{name}\" saved with id {id}"),
            Err(e) => eprintln!("notice: project not saved: {e}"),
        }
    }

    // Opportunistic working-state persistence; failures never block anything.
    if store_requested {
        let snapshot = Snapshot::capture(registry.loads(), &params, &results);
        if let Err(e) = store.save_workspace(&snapshot) {
            eprintln!("notice: workspace not persisted: {e}");
        }
    }

    // Start API server if requested
    #[cfg(feature = "api")]
    if cli.serve {
        use std::net::SocketAddr;
        use std::sync::Arc;

        let state = Arc::new(solar_sizer::api::AppState {
            params,
            loads: registry.into_loads(),
            results,
        });
        let addr = SocketAddr::from(([0, 0, 0, 0], cli.port));
        let rt = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
            eprintln!("error: failed to create tokio runtime: {e}");
            process::exit(1);
        });
        rt.block_on(solar_sizer::api::serve(state, addr));
    }
}
