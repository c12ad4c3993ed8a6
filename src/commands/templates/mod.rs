pub mod endpoint;
pub mod feature;

/// A `Name:Type` pair for generated request/response classes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyDefinition {
    pub name: String,
    pub ty: String,
}

/// Parse a `Name:Type,Name:Type` property list.
///
/// Entries are trimmed; malformed entries (no `:`, empty name or type)
/// are skipped rather than rejected.
pub fn parse_properties(spec: &str) -> Vec<PropertyDefinition> {
    spec.split(',')
        .filter_map(|entry| {
            let mut parts = entry.trim().splitn(2, ':');
            let name = parts.next()?.trim();
            let ty = parts.next()?.trim();
            if name.is_empty() || ty.is_empty() {
                return None;
            }
            Some(PropertyDefinition {
                name: name.to_string(),
                ty: ty.to_string(),
            })
        })
        .collect()
}

/// Convert PascalCase to kebab-case (route names).
pub fn to_kebab_case(name: &str) -> String {
    let mut result = String::new();
    for (i, c) in name.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('-');
            }
            result.push(c.to_lowercase().next().unwrap());
        } else {
            result.push(c);
        }
    }
    result
}

/// Render the property block of a generated class body.
///
/// Empty input renders an empty block so the class body stays `{}`.
pub fn properties_block(props: &[PropertyDefinition]) -> String {
    if props.is_empty() {
        return String::new();
    }

    let mut code = String::from("\n");
    for prop in props {
        code.push_str(&format!(
            "    public {} {} {{ get; set; }}\n\n",
            prop.ty, prop.name
        ));
    }
    code
}
