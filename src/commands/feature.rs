use colored::Colorize;
use dialoguer::Select;
use std::fs;
use std::path::Path;

use super::locate;
use super::templates::{self, endpoint, feature as feature_templates, PropertyDefinition};
use crate::augment::{self, Outcome};

/// Kind of feature being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureType {
    Command,
    Query,
}

impl FeatureType {
    /// Directory the feature files land in, under the feature folder.
    pub fn folder(&self) -> &'static str {
        match self {
            FeatureType::Command => "Commands",
            FeatureType::Query => "Queries",
        }
    }

    /// Class-name suffix, e.g. `QrSaleCommand` / `QrSaleQuery`.
    pub fn suffix(&self) -> &'static str {
        match self {
            FeatureType::Command => "Command",
            FeatureType::Query => "Query",
        }
    }
}

/// Raw CLI flags for `cqrsgen add feature`, before resolution into
/// [`FeatureOptions`].
pub struct CliFeatureOpts {
    pub feature_type: Option<String>,
    pub endpoint: Option<String>,
    pub project_name: Option<String>,
    pub prop_req: Option<String>,
    pub prop_resp: Option<String>,
    pub no_validator: bool,
    pub no_interactive: bool,
}

/// Resolved generation options after flag parsing or interactive prompts.
pub struct FeatureOptions {
    pub feature_type: FeatureType,
    pub endpoint: Option<String>,
    pub project_name: Option<String>,
    pub request_properties: Vec<PropertyDefinition>,
    pub response_properties: Vec<PropertyDefinition>,
    pub validator: bool,
}

/// Generate a feature.
///
/// Resolves the feature type from `cli_opts`:
/// - `--type command|query` uses the given value (unknown values fall
///   back to command, the default);
/// - omitted with `--no-interactive`: command;
/// - otherwise, prompts with a `dialoguer` select.
pub fn run(name: &str, cli_opts: CliFeatureOpts) -> Result<(), Box<dyn std::error::Error>> {
    let opts = resolve_options(cli_opts)?;
    generate(name, &opts)
}

fn resolve_options(cli: CliFeatureOpts) -> Result<FeatureOptions, Box<dyn std::error::Error>> {
    let feature_type = match cli.feature_type.as_deref() {
        Some("query") => FeatureType::Query,
        Some(_) => FeatureType::Command,
        None if cli.no_interactive => FeatureType::Command,
        None => prompt_type()?,
    };

    Ok(FeatureOptions {
        feature_type,
        endpoint: cli.endpoint,
        project_name: cli.project_name,
        request_properties: cli
            .prop_req
            .as_deref()
            .map(templates::parse_properties)
            .unwrap_or_default(),
        response_properties: cli
            .prop_resp
            .as_deref()
            .map(templates::parse_properties)
            .unwrap_or_default(),
        validator: !cli.no_validator,
    })
}

fn prompt_type() -> Result<FeatureType, Box<dyn std::error::Error>> {
    let choices = &["Command", "Query"];
    let idx = Select::new()
        .with_prompt("Feature type")
        .items(choices)
        .default(0)
        .interact()?;
    Ok(if idx == 1 {
        FeatureType::Query
    } else {
        FeatureType::Command
    })
}

/// Generate all feature files and, when an endpoint controller is named,
/// wire the endpoint method into it.
///
/// Creates `Application/<Feature>/{Commands|Queries}` and
/// `Abstraction/<Feature>/{Request,Response}`, writes the rendered
/// sources (refusing to overwrite existing files), and prints one status
/// line per file. A missing endpoint controller is a warning, not a
/// failure: the generated feature is complete without the wiring.
pub fn generate(name: &str, opts: &FeatureOptions) -> Result<(), Box<dyn std::error::Error>> {
    if name.trim().is_empty() {
        return Err("Feature name cannot be empty".into());
    }

    let project = locate::locate()?;
    let project_name = opts
        .project_name
        .clone()
        .unwrap_or_else(|| project.project_name.clone());
    let suffix = opts.feature_type.suffix();

    let app_type_folder = project
        .application_layer
        .join(name)
        .join(opts.feature_type.folder());
    let request_folder = project.abstraction_layer.join(name).join("Request");
    let response_folder = project.abstraction_layer.join(name).join("Response");
    fs::create_dir_all(&app_type_folder)?;
    fs::create_dir_all(&request_folder)?;
    fs::create_dir_all(&response_folder)?;

    let (feature_code, handler_code) = match opts.feature_type {
        FeatureType::Command => (
            feature_templates::command(&project_name, name),
            feature_templates::command_handler(&project_name, name),
        ),
        FeatureType::Query => (
            feature_templates::query(&project_name, name),
            feature_templates::query_handler(&project_name, name),
        ),
    };

    write_new(&app_type_folder.join(format!("{name}{suffix}.cs")), &feature_code)?;
    write_new(
        &app_type_folder.join(format!("{name}{suffix}Handler.cs")),
        &handler_code,
    )?;

    if opts.validator {
        let validator_code = match opts.feature_type {
            FeatureType::Command => feature_templates::command_validator(&project_name, name),
            FeatureType::Query => feature_templates::query_validator(&project_name, name),
        };
        write_new(
            &app_type_folder.join(format!("{name}{suffix}Validator.cs")),
            &validator_code,
        )?;
    }

    write_new(
        &request_folder.join(format!("{name}Request.cs")),
        &feature_templates::request(&project_name, name, &opts.request_properties),
    )?;
    write_new(
        &response_folder.join(format!("{name}Response.cs")),
        &feature_templates::response(&project_name, name, &opts.response_properties),
    )?;

    if let Some(controller) = &opts.endpoint {
        add_endpoint(name, opts.feature_type, controller, &project)?;
    }

    Ok(())
}

fn add_endpoint(
    name: &str,
    feature_type: FeatureType,
    controller: &str,
    project: &locate::ProjectStructure,
) -> Result<(), Box<dyn std::error::Error>> {
    let controller_file = project
        .controllers_layer
        .join(controller)
        .join(format!("{controller}Controller.cs"));
    let snippet = endpoint::render(name, feature_type);

    match augment::augment(&controller_file, &snippet)? {
        Outcome::Added => {
            println!(
                "{} Endpoint {} added to {}",
                "✓".green(),
                name.cyan(),
                controller_file.display().to_string().cyan()
            );
        }
        Outcome::ControllerMissing => {
            println!(
                "{} Controller not found: {}",
                "!".yellow(),
                controller_file.display()
            );
        }
    }

    Ok(())
}

fn write_new(path: &Path, content: &str) -> Result<(), Box<dyn std::error::Error>> {
    if path.exists() {
        return Err(format!("File '{}' already exists", path.display()).into());
    }
    fs::write(path, content)?;

    println!(
        "{} {} created",
        "✓".green(),
        path.display().to_string().cyan()
    );
    Ok(())
}
