//! OpenAPI Documentation
//!
//! OpenAPI 3.0 description of every route, served at `/swagger/doc.json` and
//! rendered by Swagger UI at `/swagger/index.html`. Parameter ranges and
//! enumerations are taken from the validating types, so the document cannot
//! drift from what the API accepts.

use std::collections::BTreeMap;

use mrt_core::{TransportMode, MAX_WARPS_LIMIT};
use serde::Serialize;
use serde_json::{json, Value};

/// API versions mounted under `/api`
const VERSIONS: [&str; 2] = ["v1", "v2"];

/// OpenAPI specification root
#[derive(Debug, Clone, Serialize)]
pub struct OpenApiSpec {
    pub openapi: String,
    pub info: ApiInfo,
    pub tags: Vec<Tag>,
    pub paths: BTreeMap<String, PathItem>,
    pub components: Components,
}

impl OpenApiSpec {
    /// Generate the MRT API specification
    pub fn generate() -> Self {
        let mut paths = BTreeMap::new();

        for version in VERSIONS {
            Self::insert_version_paths(&mut paths, version);
        }

        paths.insert(
            "/ping".to_string(),
            PathItem::get(Operation {
                tags: vec!["Health".to_string()],
                summary: "Heartbeat".to_string(),
                description: Some("Answers `.` without touching the database.".to_string()),
                operation_id: "ping".to_string(),
                parameters: vec![],
                responses: BTreeMap::from([(
                    "200".to_string(),
                    Response::with_content("Alive", "text/plain", Schema::string()),
                )]),
            }),
        );
        paths.insert(
            "/health".to_string(),
            PathItem::get(Operation {
                tags: vec!["Health".to_string()],
                summary: "Health check".to_string(),
                description: Some(
                    "`healthy` when the warp database answers, `degraded` otherwise.".to_string(),
                ),
                operation_id: "healthCheck".to_string(),
                parameters: vec![],
                responses: BTreeMap::from([(
                    "200".to_string(),
                    Response::json("Service status", Schema::reference("Health")),
                )]),
            }),
        );

        Self {
            openapi: "3.0.3".to_string(),
            info: ApiInfo {
                title: "MRT API".to_string(),
                description: Some(
                    "Read-only access to warps, companies and worlds of the Minecart Rapid Transit server."
                        .to_string(),
                ),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            tags: ["Warps", "Companies", "Worlds", "Health"]
                .into_iter()
                .map(|name| Tag {
                    name: name.to_string(),
                })
                .collect(),
            paths,
            components: Self::generate_components(),
        }
    }

    fn insert_version_paths(paths: &mut BTreeMap<String, PathItem>, version: &str) {
        let prefix = format!("/api/{}", version);
        let suffix = version.to_uppercase();

        let list_schema = if version == "v1" {
            Schema::array(Schema::reference("Warp"))
        } else {
            Schema::reference("WarpList")
        };

        paths.insert(
            format!("{}/warps", prefix),
            PathItem::get(Operation {
                tags: vec!["Warps".to_string()],
                summary: "List warps".to_string(),
                description: Some(format!(
                    "List warps. Maximum number of warps returned per request is {}. \
                     Use the 'offset' query parameter to show further entries.",
                    MAX_WARPS_LIMIT
                )),
                operation_id: format!("listWarps{}", suffix),
                parameters: Self::warp_list_parameters(),
                responses: Self::responses(
                    Response::json("Matching warps", list_schema),
                    &["400", "422", "500"],
                ),
            }),
        );
        paths.insert(
            format!("{}/warps/{{id}}", prefix),
            PathItem::get(Operation {
                tags: vec!["Warps".to_string()],
                summary: "Get warp by ID".to_string(),
                description: None,
                operation_id: format!("getWarp{}", suffix),
                parameters: vec![Parameter::path(
                    "id",
                    "Warp ID",
                    Schema::integer().with_range(Some(0), None),
                )],
                responses: Self::responses(
                    Response::json("The warp", Schema::reference("Warp")),
                    &["400", "404", "422", "500"],
                ),
            }),
        );
        paths.insert(
            format!("{}/companies", prefix),
            PathItem::get(Operation {
                tags: vec!["Companies".to_string()],
                summary: "List all companies".to_string(),
                description: None,
                operation_id: format!("listCompanies{}", suffix),
                parameters: vec![Parameter::query(
                    "mode",
                    "Filter by transport mode.",
                    Schema::string().with_enum(TransportMode::ALL.iter().map(|m| json!(m.as_str()))),
                )],
                responses: Self::responses(
                    Response::json("Companies", Schema::array(Schema::reference("Company"))),
                    &["400", "422"],
                ),
            }),
        );
        paths.insert(
            format!("{}/companies/{{id}}", prefix),
            PathItem::get(Operation {
                tags: vec!["Companies".to_string()],
                summary: "Get company by ID".to_string(),
                description: None,
                operation_id: format!("getCompany{}", suffix),
                parameters: vec![Parameter::path("id", "Company ID", Schema::string())],
                responses: Self::responses(
                    Response::json("The company", Schema::reference("Company")),
                    &["404", "422"],
                ),
            }),
        );
        paths.insert(
            format!("{}/worlds", prefix),
            PathItem::get(Operation {
                tags: vec!["Worlds".to_string()],
                summary: "List all worlds".to_string(),
                description: None,
                operation_id: format!("listWorlds{}", suffix),
                parameters: vec![],
                responses: Self::responses(
                    Response::json("Worlds", Schema::array(Schema::reference("World"))),
                    &["422"],
                ),
            }),
        );
        paths.insert(
            format!("{}/worlds/{{id}}", prefix),
            PathItem::get(Operation {
                tags: vec!["Worlds".to_string()],
                summary: "Get world by ID".to_string(),
                description: None,
                operation_id: format!("getWorld{}", suffix),
                parameters: vec![Parameter::path("id", "World ID", Schema::string())],
                responses: Self::responses(
                    Response::json("The world", Schema::reference("World")),
                    &["404", "422"],
                ),
            }),
        );
    }

    fn warp_list_parameters() -> Vec<Parameter> {
        vec![
            Parameter::query("name", "Filter by warp name.", Schema::string()),
            Parameter::query(
                "player",
                "Filter by player UUID (can be with or without hyphens).",
                Schema::string(),
            ),
            Parameter::query(
                "company",
                "Filter by company ID (from /companies).",
                Schema::string(),
            ),
            Parameter::query("world", "Filter by world ID (from /worlds).", Schema::string()),
            Parameter::query(
                "type",
                "Filter by type (0 = private, 1 = public).",
                Schema::integer().with_enum([json!(0), json!(1)]),
            ),
            Parameter::query(
                "order_by",
                "Order by 'name', 'creation_date', or 'visits'.",
                Schema::string().with_enum(["name", "creation_date", "visits"].map(|v| json!(v))),
            ),
            Parameter::query(
                "sort_by",
                "Sort by 'asc' (ascending) or 'desc' (descending).",
                Schema::string().with_enum(["asc", "desc"].map(|v| json!(v))),
            ),
            Parameter::query(
                "limit",
                &format!(
                    "Limit number of warps returned. Maximum limit is {}.",
                    MAX_WARPS_LIMIT
                ),
                Schema::integer()
                    .with_range(Some(0), Some(i64::from(MAX_WARPS_LIMIT)))
                    .with_default(json!(MAX_WARPS_LIMIT)),
            ),
            Parameter::query(
                "offset",
                "Number of warps to skip before returning.",
                Schema::integer()
                    .with_range(Some(0), None)
                    .with_default(json!(0)),
            ),
        ]
    }

    /// `200` plus the listed error statuses
    fn responses(ok: Response, errors: &[&str]) -> BTreeMap<String, Response> {
        let mut responses = BTreeMap::from([("200".to_string(), ok)]);

        for status in errors {
            let description = match *status {
                "400" => "Bad request.",
                "404" => "Resource not found.",
                "422" => "Error rendering response.",
                _ => "Internal server error.",
            };
            responses.insert(
                status.to_string(),
                Response::json(description, Schema::reference("Error")),
            );
        }

        responses
    }

    fn generate_components() -> Components {
        let uuid = || Schema::string().with_format("uuid");
        let double = || Schema::number().with_format("double");

        let schemas = BTreeMap::from([
            (
                "Warp".to_string(),
                Schema::object(
                    [
                        ("id", Schema::integer().with_range(Some(0), None)),
                        ("name", Schema::string()),
                        ("playerUUID", uuid()),
                        ("worldUUID", uuid()),
                        ("x", double()),
                        ("y", double()),
                        ("z", double()),
                        ("pitch", double()),
                        ("yaw", double()),
                        ("creationDate", Schema::string().with_format("date-time")),
                        (
                            "type",
                            Schema::integer()
                                .with_enum([json!(0), json!(1)])
                                .described("0 = private, 1 = public"),
                        ),
                        ("visits", Schema::integer().with_range(Some(0), None)),
                        ("welcomeMessage", Schema::string().nullable()),
                    ],
                    &[
                        "id",
                        "name",
                        "playerUUID",
                        "worldUUID",
                        "x",
                        "y",
                        "z",
                        "pitch",
                        "yaw",
                        "creationDate",
                        "type",
                        "visits",
                        "welcomeMessage",
                    ],
                ),
            ),
            (
                "Pagination".to_string(),
                Schema::object(
                    [
                        ("limit", Schema::integer()),
                        ("offset", Schema::integer()),
                        ("hits", Schema::integer().described("Warps in this page")),
                        (
                            "total_hits",
                            Schema::integer().described("Warps matching the filters"),
                        ),
                    ],
                    &["limit", "offset", "hits", "total_hits"],
                ),
            ),
            (
                "WarpList".to_string(),
                Schema::object(
                    [
                        ("pagination", Schema::reference("Pagination")),
                        ("result", Schema::array(Schema::reference("Warp"))),
                    ],
                    &["pagination", "result"],
                ),
            ),
            (
                "Company".to_string(),
                Schema::object(
                    [
                        ("id", Schema::string()),
                        ("name", Schema::string()),
                        (
                            "pattern",
                            Schema::string().described("SQL LIKE pattern matched against warp names"),
                        ),
                        (
                            "mode",
                            Schema::string()
                                .with_enum(TransportMode::ALL.iter().map(|m| json!(m.as_str()))),
                        ),
                    ],
                    &["id", "name", "pattern"],
                ),
            ),
            (
                "World".to_string(),
                Schema::object([("id", Schema::string()), ("uuid", uuid())], &["id", "uuid"]),
            ),
            (
                "Health".to_string(),
                Schema::object(
                    [
                        (
                            "status",
                            Schema::string().with_enum([json!("healthy"), json!("degraded")]),
                        ),
                        ("version", Schema::string()),
                        (
                            "store",
                            Schema::string().with_enum([json!("available"), json!("unavailable")]),
                        ),
                    ],
                    &["status", "version", "store"],
                ),
            ),
            (
                "Error".to_string(),
                Schema::object(
                    [
                        ("message", Schema::string()),
                        ("detail", Schema::string()),
                        ("error", Schema::string()),
                    ],
                    &["message"],
                ),
            ),
        ]);

        Components { schemas }
    }

    /// Export specification as JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

/// Swagger UI page reading `/swagger/doc.json`
pub const SWAGGER_UI_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>MRT API</title>
    <link rel="stylesheet" type="text/css" href="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui.css" />
</head>
<body>
    <div id="swagger-ui"></div>
    <script src="https://unpkg.com/swagger-ui-dist@5.9.0/swagger-ui-bundle.js"></script>
    <script>
        window.onload = function() {
            SwaggerUIBundle({
                url: '/swagger/doc.json',
                dom_id: '#swagger-ui',
                deepLinking: true
            });
        };
    </script>
</body>
</html>
"#;

// Supporting types

#[derive(Debug, Clone, Serialize)]
pub struct ApiInfo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Tag {
    pub name: String,
}

/// Every route is read-only
#[derive(Debug, Clone, Serialize)]
pub struct PathItem {
    pub get: Operation,
}

impl PathItem {
    fn get(operation: Operation) -> Self {
        Self { get: operation }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Operation {
    pub tags: Vec<String>,
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "operationId")]
    pub operation_id: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    pub responses: BTreeMap<String, Response>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Parameter {
    pub name: String,
    #[serde(rename = "in")]
    pub location: String,
    pub description: String,
    pub required: bool,
    pub schema: Schema,
}

impl Parameter {
    pub fn query(name: &str, description: &str, schema: Schema) -> Self {
        Self {
            name: name.to_string(),
            location: "query".to_string(),
            description: description.to_string(),
            required: false,
            schema,
        }
    }

    pub fn path(name: &str, description: &str, schema: Schema) -> Self {
        Self {
            name: name.to_string(),
            location: "path".to_string(),
            description: description.to_string(),
            required: true,
            schema,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<BTreeMap<String, MediaType>>,
}

impl Response {
    fn with_content(description: &str, media_type: &str, schema: Schema) -> Self {
        Self {
            description: description.to_string(),
            content: Some(BTreeMap::from([(
                media_type.to_string(),
                MediaType { schema },
            )])),
        }
    }

    fn json(description: &str, schema: Schema) -> Self {
        Self::with_content(description, "application/json", schema)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct MediaType {
    pub schema: Schema,
}

#[derive(Debug, Clone, Serialize)]
pub struct Components {
    pub schemas: BTreeMap<String, Schema>,
}

/// Subset of the OpenAPI schema object used by this API
#[derive(Debug, Clone, Default, Serialize)]
pub struct Schema {
    #[serde(rename = "$ref", skip_serializing_if = "Option::is_none")]
    pub reference: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub schema_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "enum", skip_serializing_if = "Vec::is_empty")]
    pub enum_values: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub nullable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
}

impl Schema {
    fn typed(schema_type: &str) -> Self {
        Self {
            schema_type: Some(schema_type.to_string()),
            ..Self::default()
        }
    }

    pub fn reference(name: &str) -> Self {
        Self {
            reference: Some(format!("#/components/schemas/{}", name)),
            ..Self::default()
        }
    }

    pub fn string() -> Self {
        Self::typed("string")
    }

    pub fn integer() -> Self {
        Self::typed("integer")
    }

    pub fn number() -> Self {
        Self::typed("number")
    }

    pub fn array(items: Schema) -> Self {
        Self {
            items: Some(Box::new(items)),
            ..Self::typed("array")
        }
    }

    pub fn object<const N: usize>(properties: [(&str, Schema); N], required: &[&str]) -> Self {
        Self {
            properties: properties
                .into_iter()
                .map(|(name, schema)| (name.to_string(), schema))
                .collect(),
            required: required.iter().map(|name| name.to_string()).collect(),
            ..Self::typed("object")
        }
    }

    pub fn with_format(mut self, format: &str) -> Self {
        self.format = Some(format.to_string());
        self
    }

    pub fn with_enum(mut self, values: impl IntoIterator<Item = Value>) -> Self {
        self.enum_values = values.into_iter().collect();
        self
    }

    pub fn with_range(mut self, minimum: Option<i64>, maximum: Option<i64>) -> Self {
        self.minimum = minimum;
        self.maximum = maximum;
        self
    }

    pub fn with_default(mut self, default: Value) -> Self {
        self.default = Some(default);
        self
    }

    pub fn described(mut self, description: &str) -> Self {
        self.description = Some(description.to_string());
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }
}
