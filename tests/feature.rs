use cqrsgen::commands::feature::{self, FeatureOptions, FeatureType};
use cqrsgen::commands::locate;
use cqrsgen::commands::templates::parse_properties;
use serial_test::serial;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ── CWD Guard ───────────────────────────────────────────────────────

struct CwdGuard {
    original: PathBuf,
}

impl CwdGuard {
    fn new(path: &Path) -> Self {
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(path).unwrap();
        CwdGuard { original }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

fn scaffold_solution() {
    fs::create_dir_all("src/Acme.Payments.Application").unwrap();
    fs::create_dir_all("src/Acme.Payments.Abstraction").unwrap();
    fs::create_dir_all("src/Acme.Payments.Controllers").unwrap();
}

fn command_opts() -> FeatureOptions {
    FeatureOptions {
        feature_type: FeatureType::Command,
        endpoint: None,
        project_name: None,
        request_properties: Vec::new(),
        response_properties: Vec::new(),
        validator: true,
    }
}

// ── locate ──────────────────────────────────────────────────────────

#[test]
#[serial]
fn locate_finds_all_layers() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();

    let project = locate::locate().unwrap();
    assert_eq!(project.project_name, "Acme.Payments.Application");
    assert!(project.abstraction_layer.ends_with("Acme.Payments.Abstraction"));
    assert!(project.controllers_layer.ends_with("Acme.Payments.Controllers"));
}

#[test]
#[serial]
fn locate_without_src_errors() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());

    let result = locate::locate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("'src'"));
}

#[test]
#[serial]
fn locate_without_application_layer_errors() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    fs::create_dir_all("src").unwrap();

    let result = locate::locate();
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("Application"));
}

// ── feature generation ──────────────────────────────────────────────

#[test]
#[serial]
fn generate_command_creates_all_files() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();

    feature::generate("QrSale", &command_opts()).unwrap();

    let app = Path::new("src/Acme.Payments.Application/QrSale/Commands");
    assert!(app.join("QrSaleCommand.cs").exists());
    assert!(app.join("QrSaleCommandHandler.cs").exists());
    assert!(app.join("QrSaleCommandValidator.cs").exists());

    let abs = Path::new("src/Acme.Payments.Abstraction/QrSale");
    assert!(abs.join("Request/QrSaleRequest.cs").exists());
    assert!(abs.join("Response/QrSaleResponse.cs").exists());
}

#[test]
#[serial]
fn generate_query_uses_queries_folder() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();

    let opts = FeatureOptions {
        feature_type: FeatureType::Query,
        ..command_opts()
    };
    feature::generate("QrSale", &opts).unwrap();

    let app = Path::new("src/Acme.Payments.Application/QrSale/Queries");
    assert!(app.join("QrSaleQuery.cs").exists());
    assert!(app.join("QrSaleQueryHandler.cs").exists());
}

#[test]
#[serial]
fn generate_without_validator_skips_validator_file() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();

    let opts = FeatureOptions {
        validator: false,
        ..command_opts()
    };
    feature::generate("QrSale", &opts).unwrap();

    let app = Path::new("src/Acme.Payments.Application/QrSale/Commands");
    assert!(app.join("QrSaleCommand.cs").exists());
    assert!(!app.join("QrSaleCommandValidator.cs").exists());
}

#[test]
#[serial]
fn generate_blank_name_errors() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();

    let result = feature::generate("   ", &command_opts());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("empty"));
}

#[test]
#[serial]
fn generate_existing_file_errors() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();
    fs::create_dir_all("src/Acme.Payments.Application/QrSale/Commands").unwrap();
    fs::write(
        "src/Acme.Payments.Application/QrSale/Commands/QrSaleCommand.cs",
        "existing",
    )
    .unwrap();

    let result = feature::generate("QrSale", &command_opts());
    assert!(result.is_err());
    assert!(result.unwrap_err().to_string().contains("already exists"));
}

#[test]
#[serial]
fn generate_renders_request_properties() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();

    let opts = FeatureOptions {
        request_properties: parse_properties("Name:string,OrderId:int"),
        ..command_opts()
    };
    feature::generate("QrSale", &opts).unwrap();

    let request =
        fs::read_to_string("src/Acme.Payments.Abstraction/QrSale/Request/QrSaleRequest.cs")
            .unwrap();
    assert!(request.contains("public string Name { get; set; }"));
    assert!(request.contains("public int OrderId { get; set; }"));
}

#[test]
#[serial]
fn generate_project_name_override_changes_namespaces() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();

    let opts = FeatureOptions {
        project_name: Some("Orbit.Billing.Application".into()),
        ..command_opts()
    };
    feature::generate("QrSale", &opts).unwrap();

    let command =
        fs::read_to_string("src/Acme.Payments.Application/QrSale/Commands/QrSaleCommand.cs")
            .unwrap();
    assert!(command.contains("namespace Orbit.Billing.Application.QrSale.Commands;"));
    assert!(command.contains("using Orbit.Billing.Infrastructure.CQRS.Concrete;"));
}

// ── endpoint wiring ─────────────────────────────────────────────────

#[test]
#[serial]
fn endpoint_spliced_into_declaration_style_controller() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();
    fs::create_dir_all("src/Acme.Payments.Controllers/Sale").unwrap();
    fs::write(
        "src/Acme.Payments.Controllers/Sale/SaleController.cs",
        "namespace Acme.Payments.Controllers.Sale;\n\npublic class SaleController\n{\n}\n",
    )
    .unwrap();

    let opts = FeatureOptions {
        endpoint: Some("Sale".into()),
        ..command_opts()
    };
    feature::generate("QrSale", &opts).unwrap();

    let controller =
        fs::read_to_string("src/Acme.Payments.Controllers/Sale/SaleController.cs").unwrap();
    assert!(controller.contains("[HttpPost]"));
    assert!(controller.contains("[Route(\"qr-sale\")]"));
    assert!(controller.contains("new QrSaleCommand()"));
    // Member spliced before the file's final closing brace.
    let method_pos = controller.find("[HttpPost]").unwrap();
    let last_brace = controller.rfind('}').unwrap();
    assert!(method_pos < last_brace);
}

#[test]
#[serial]
fn endpoint_spliced_inside_block_controller_with_existing_members() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();
    fs::create_dir_all("src/Acme.Payments.Controllers/Sale").unwrap();
    fs::write(
        "src/Acme.Payments.Controllers/Sale/SaleController.cs",
        "namespace Acme.Payments.Controllers.Sale\n{\n    public class SaleController\n    {\n        [HttpGet]\n        public void Existing()\n        {\n        }\n    }\n}\n",
    )
    .unwrap();

    let opts = FeatureOptions {
        feature_type: FeatureType::Query,
        endpoint: Some("Sale".into()),
        ..command_opts()
    };
    feature::generate("QrSale", &opts).unwrap();

    let controller =
        fs::read_to_string("src/Acme.Payments.Controllers/Sale/SaleController.cs").unwrap();
    assert!(controller.contains("new QrSaleQuery()"));
    // Nested inside the class body: the new member sits after the existing
    // one and before the class and namespace closes.
    let new_member = controller.find("[Route(\"qr-sale\")]").unwrap();
    let existing = controller.find("Existing()").unwrap();
    let ns_close = controller.rfind('}').unwrap();
    assert!(existing < new_member);
    assert!(new_member < ns_close);
    assert!(controller.ends_with("    }\n}\n"));
}

#[test]
#[serial]
fn missing_controller_warns_but_generation_succeeds() {
    let tmp = TempDir::new().unwrap();
    let _cwd = CwdGuard::new(tmp.path());
    scaffold_solution();

    let opts = FeatureOptions {
        endpoint: Some("Ghost".into()),
        ..command_opts()
    };
    feature::generate("QrSale", &opts).unwrap();

    // Feature files exist, controller was not created.
    assert!(
        Path::new("src/Acme.Payments.Application/QrSale/Commands/QrSaleCommand.cs").exists()
    );
    assert!(!Path::new("src/Acme.Payments.Controllers/Ghost/GhostController.cs").exists());
}
