//! C# source templates for the generated feature files.
//!
//! Namespaces derive from the application layer's directory name
//! (e.g. `Acme.Payments.Application`); the base solution name is that
//! name minus the `.Application` suffix.

use super::{properties_block, PropertyDefinition};

fn base_name(project_name: &str) -> String {
    project_name.replace(".Application", "")
}

pub fn command(project_name: &str, feature: &str) -> String {
    let base = base_name(project_name);
    format!(
        r#"using {base}.Infrastructure.CQRS.Concrete;
using {base}.Abstraction.{feature}.Response;

namespace {project_name}.{feature}.Commands;

public class {feature}Command : ApiCommand<{feature}Response>
{{
}}
"#
    )
}

pub fn command_handler(project_name: &str, feature: &str) -> String {
    let base = base_name(project_name);
    format!(
        r#"using {base}.Infrastructure.CQRS.Concrete;
using {base}.Abstraction.{feature}.Response;

namespace {project_name}.{feature}.Commands;

public class {feature}CommandHandler : ApiCommandHandler<{feature}Command, {feature}Response>
{{
    public override async Task<{feature}Response?> Handle({feature}Command request, CancellationToken cancellationToken)
    {{
        // TODO: Add your business logic here.
        return new {feature}Response();
    }}
}}
"#
    )
}

pub fn command_validator(project_name: &str, feature: &str) -> String {
    let base = base_name(project_name);
    format!(
        r#"using {base}.Infrastructure.Validation.Concrete;

namespace {project_name}.{feature}.Commands;

public class {feature}CommandValidator : ApiValidator<{feature}Command>
{{
    public {feature}CommandValidator()
    {{
    }}
}}
"#
    )
}

pub fn query(project_name: &str, feature: &str) -> String {
    let base = base_name(project_name);
    format!(
        r#"using {base}.Infrastructure.CQRS.Concrete;
using {base}.Abstraction.{feature}.Response;

namespace {project_name}.{feature}.Queries;

public class {feature}Query : ApiQuery<{feature}Response>
{{
}}
"#
    )
}

pub fn query_handler(project_name: &str, feature: &str) -> String {
    let base = base_name(project_name);
    format!(
        r#"using {base}.Infrastructure.CQRS.Concrete;
using {base}.Abstraction.{feature}.Response;

namespace {project_name}.{feature}.Queries;

public class {feature}QueryHandler : ApiQueryHandler<{feature}Query, {feature}Response>
{{
    public override async Task<{feature}Response?> Handle({feature}Query request, CancellationToken cancellationToken)
    {{
        // TODO: Add your business logic here.
        return new {feature}Response();
    }}
}}
"#
    )
}

pub fn query_validator(project_name: &str, feature: &str) -> String {
    let base = base_name(project_name);
    format!(
        r#"using {base}.Infrastructure.Validation.Concrete;

namespace {project_name}.{feature}.Queries;

public class {feature}QueryValidator : ApiValidator<{feature}Query>
{{
    public {feature}QueryValidator()
    {{
    }}
}}
"#
    )
}

pub fn request(project_name: &str, feature: &str, props: &[PropertyDefinition]) -> String {
    let base = base_name(project_name);
    let properties = properties_block(props);
    format!(
        r#"namespace {base}.Abstraction.{feature}.Request;

public class {feature}Request
{{{properties}}}
"#
    )
}

pub fn response(project_name: &str, feature: &str, props: &[PropertyDefinition]) -> String {
    let base = base_name(project_name);
    let properties = properties_block(props);
    format!(
        r#"namespace {base}.Abstraction.{feature}.Response;

public class {feature}Response
{{{properties}}}
"#
    )
}
