use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;

use areaundercurve::configuration::Configuration;
use areaundercurve::integration::diagnosticsink::{
    DiagnosticSink,
    LogSink,
    SilentSink
};
use areaundercurve::integration::integrationrequest::{
    IntegrationRequest,
    DEFAULT_ALGORITHM,
    DEFAULT_LOWER,
    DEFAULT_STEP_SIZE,
    DEFAULT_UPPER
};
use areaundercurve::integration::integrator::Integrator;
use areaundercurve::integration::quadraturerule::QuadratureRule;
use areaundercurve::manager::manager::IManager;
use areaundercurve::math::polynomial::coefficientparser::parse_coefficients;

/// Find the approximate area under a polynomial curve.
///
/// e.g. the area of y=x^2 + 2x - 2 over [1, 50] with 0.1 wide midpoint slices:
///   areaundercurve --polynomial "{2:1, 1:2, 0:-2}" --lower 1 --upper 50 --step 0.1 --algorithm midpoint
#[derive(Parser, Debug)]
#[command(name = "areaundercurve", version, verbatim_doc_comment)]
struct Cli {
    /// Coefficients as {DegreeN1:CoefficientM1, DegreeN2:CoefficientM2, ...}
    #[arg(short, long)]
    polynomial: Option<String>,

    /// Lower bound of the interval
    #[arg(short, long, default_value_t = DEFAULT_LOWER, allow_hyphen_values = true)]
    lower: f64,

    /// Upper bound of the interval
    #[arg(short, long, default_value_t = DEFAULT_UPPER, allow_hyphen_values = true)]
    upper: f64,

    /// Width of each slice
    #[arg(short, long, default_value_t = DEFAULT_STEP_SIZE, allow_hyphen_values = true)]
    step: f64,

    /// One of: midpoint, trapezoid, simpson
    #[arg(short, long, default_value = DEFAULT_ALGORITHM)]
    algorithm: String,

    /// JSON file of named requests, used instead of the options above
    #[arg(short, long, conflicts_with = "polynomial")]
    config: Option<String>,

    /// Run only this request from the configuration file
    #[arg(short, long, requires = "config")]
    request: Option<String>,

    /// Print the available algorithms and exit
    #[arg(long)]
    list_algorithms: bool,

    /// Suppress the bounds, polynomial and algorithm descriptions
    #[arg(short, long)]
    quiet: bool
}

type NamedRequests = Vec<(Option<String>, Arc<IntegrationRequest>)>;

fn requests_from_options(cli: &Cli) -> Result<NamedRequests, String> {
    let literal = cli
        .polynomial
        .as_deref()
        .ok_or_else(|| "Polynomial not specified or invalid".to_owned())?;
    let coefficients = parse_coefficients(literal).map_err(|e| e.to_string())?;
    if coefficients.is_empty() {
        return Err("Polynomial not specified or invalid".to_owned());
    }
    let request = IntegrationRequest::from_parts(coefficients, cli.lower, cli.upper, cli.step, &cli.algorithm)
        .map_err(|e| e.to_string())?;
    Ok(vec![(None, Arc::new(request))])
}

fn requests_from_config(cli: &Cli, config_path: &str) -> Result<NamedRequests, String> {
    let config = Configuration::new();
    config.from_reader(config_path).map_err(|e| e.to_string())?;
    let manager = config.integration_request_manager();
    let names = match &cli.request {
        Some(name) => vec![name.clone()],
        None => manager.names()
    };
    names
        .into_iter()
        .map(|name| -> Result<_, String> {
            let request = manager.get(&name).map_err(|e| e.to_string())?;
            Ok((Some(name), request))
        })
        .collect()
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_filter = if cli.quiet { "warn" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .format_target(false)
        .init();

    if cli.list_algorithms {
        for rule in QuadratureRule::ALL {
            println!("{}", rule);
        }
        return ExitCode::SUCCESS;
    }

    let requests = match &cli.config {
        Some(config_path) => requests_from_config(&cli, config_path),
        None => requests_from_options(&cli)
    };
    let requests = match requests {
        Ok(requests) => requests,
        Err(message) => {
            log::error!("{}", message);
            eprintln!("Run with --help for usage.");
            return ExitCode::from(2);
        }
    };

    let sink: &dyn DiagnosticSink = if cli.quiet { &SilentSink } else { &LogSink };
    let integrator = Integrator::new(sink);
    for (name, request) in requests {
        if let Some(name) = &name {
            log::info!("Request: {}", name);
        }
        match integrator.integrate_request(&request) {
            Ok(area) => println!("Total Area ({}) = {}", request.rule(), area),
            Err(error) => {
                log::error!("{}", error);
                return ExitCode::from(2);
            }
        }
    }
    ExitCode::SUCCESS
}
