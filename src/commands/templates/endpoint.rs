//! Endpoint method snippet spliced into an existing controller.

use super::to_kebab_case;
use crate::commands::feature::FeatureType;

/// Render the endpoint method for a feature.
///
/// Commands post a body, queries get from the query string; the route is
/// the kebab-cased feature name. The snippet starts with a newline and
/// carries its own member-level indentation, so the augmentation engine
/// can place it verbatim.
pub fn render(feature: &str, feature_type: FeatureType) -> String {
    let http_method = match feature_type {
        FeatureType::Command => "HttpPost",
        FeatureType::Query => "HttpGet",
    };
    let parameter_binding = match feature_type {
        FeatureType::Command => "FromBody",
        FeatureType::Query => "FromQuery",
    };
    let route = to_kebab_case(feature);
    let suffix = feature_type.suffix();

    format!(
        r#"
    [{http_method}]
    [Route("{route}")]
    [ProducesResponseType(typeof(ApiResponse<{feature}Response>), (int)System.Net.HttpStatusCode.OK)]
    public async Task<ApiResponse<{feature}Response>> {feature}(
        [{parameter_binding}] {feature}Request request,
        CancellationToken cancellationToken)
    {{
        var response = await _cqrsProcessor.ProcessAsync(new {feature}{suffix}(), cancellationToken);
        return SetResponse(response);
    }}
"#
    )
}
