//! Request handling
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - list_categories: List categories with labels, base units and units
//! - list_units: List the units of one category
//! - help: Documentation for the conversion functions

use measure_core::{MeasureError, Value};
use measure_plugin::PluginRegistry;
use serde_json::{json, Value as JsonValue};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::protocol::{McpError, McpRequest, McpResponse};

const SERVER_NAME: &str = "measure";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

pub struct Server {
    registry: PluginRegistry,
    config: ServerConfig,
}

impl Server {
    pub fn new(registry: PluginRegistry, config: ServerConfig) -> Self {
        Self { registry, config }
    }

    /// Handle one line of input; `None` when no response is due
    pub fn handle_line(&self, line: &str) -> Option<String> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let response = match serde_json::from_str::<McpRequest>(line) {
            Ok(request) => {
                debug!(method = %request.method, "processing request");
                let response = self.handle_request(&request);
                if request.id.is_none() {
                    debug!(method = %request.method, "notification processed");
                    return None;
                }
                response
            }
            Err(e) => {
                warn!(error = %e, "unparseable request");
                McpResponse::failure(None, McpError::parse_error(e))
            }
        };

        match serde_json::to_string(&response) {
            Ok(json) => Some(json),
            Err(e) => {
                warn!(error = %e, "failed to serialize response");
                None
            }
        }
    }

    pub fn handle_request(&self, request: &McpRequest) -> McpResponse {
        let result = match request.method.as_str() {
            "initialize" => self.handle_initialize(&request.params),
            "initialized" | "notifications/initialized" => Ok(json!({})),
            "ping" => Ok(json!({})),
            "tools/list" => Ok(tools_list()),
            "tools/call" => self.handle_tool_call(&request.params),
            _ => Err(McpError::method_not_found(&request.method)),
        };

        match result {
            Ok(r) => McpResponse::success(request.id.clone(), r),
            Err(e) => McpResponse::failure(request.id.clone(), e),
        }
    }

    fn handle_initialize(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let client_info = params.as_ref()
            .and_then(|p| p.get("clientInfo"))
            .and_then(|c| c.get("name"))
            .and_then(|n| n.as_str())
            .unwrap_or("unknown");

        let client_protocol = params.as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(|v| v.as_str())
            .unwrap_or(self.config.protocol_version.as_str());

        info!(client = client_info, protocol = client_protocol, "client connected");

        Ok(json!({
            "protocolVersion": client_protocol,
            "serverInfo": {
                "name": SERVER_NAME,
                "version": SERVER_VERSION,
                "description": "Unit conversion for length, weight, temperature, volume and time"
            },
            "capabilities": {
                "tools": { "listChanged": false }
            },
            "instructions": "Use list_categories to see categories and their units, then convert(value, category, from_unit, to_unit)."
        }))
    }

    fn handle_tool_call(&self, params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
        let params = params.as_ref()
            .ok_or_else(|| McpError::invalid_params("Missing params"))?;

        let name = params.get("name")
            .and_then(|v| v.as_str())
            .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

        let args = params.get("arguments").cloned().unwrap_or(json!({}));

        match name {
            "convert" => self.tool_convert(&args),
            "list_categories" => Ok(self.tool_list_categories()),
            "list_units" => self.tool_list_units(&args),
            "help" => Ok(self.tool_help(&args)),
            _ => Err(McpError::invalid_params(format!("Unknown tool: {}", name))),
        }
    }

    fn tool_list_categories(&self) -> JsonValue {
        let categories = self.registry.call_function("list_categories", &[]);
        let text = categories.as_list()
            .unwrap_or(&[])
            .iter()
            .filter_map(|c| c.get("label").as_text().map(str::to_string))
            .collect::<Vec<_>>()
            .join(", ");

        json!({
            "content": [{ "type": "text", "text": text }],
            "data": categories.to_json()
        })
    }

    fn tool_list_units(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let category = string_arg(args, "category")?;
        let units = self.registry.call_function("list_units", &[Value::from(category)]);

        if let Some(e) = units.as_error() {
            return Ok(tool_error("Error listing units", e));
        }

        let text = units.as_list()
            .unwrap_or(&[])
            .iter()
            .filter_map(Value::as_text)
            .collect::<Vec<_>>()
            .join(", ");

        Ok(json!({
            "content": [{ "type": "text", "text": text }],
            "data": units.to_json()
        }))
    }

    fn tool_convert(&self, args: &JsonValue) -> Result<JsonValue, McpError> {
        let value = number_arg(args, "value")?;
        let category = string_arg(args, "category")?;
        let from = string_arg(args, "from_unit")?;
        let to = string_arg(args, "to_unit")?;

        match self.convert_line(value, category, from, to) {
            Ok(result) => Ok(result),
            Err(e) => {
                debug!(error = %e, "conversion failed");
                Ok(tool_error("Error in conversion", &e))
            }
        }
    }

    fn convert_line(&self, value: f64, category: &str, from: &str, to: &str) -> Result<JsonValue, MeasureError> {
        let args = [Value::Number(value), Value::from(category), Value::from(from), Value::from(to)];
        let result = match self.registry.call_function("convert", &args) {
            Value::Number(n) => n,
            Value::Error(e) => return Err(e),
            other => return Err(unexpected_result("convert", &other)),
        };

        let input = self.format_number(value)?;
        let formatted = self.format_number(result)?;

        Ok(json!({
            "content": [{ "type": "text", "text": format!("{} {} = {} {}", input, from, formatted, to) }],
            "result": result,
            "formatted": formatted,
            "isError": false
        }))
    }

    fn format_number(&self, n: f64) -> Result<String, MeasureError> {
        match self.registry.call_function("format_result", &[Value::Number(n)]) {
            Value::Text(s) => Ok(s),
            Value::Error(e) => Err(e),
            other => Err(unexpected_result("format_result", &other)),
        }
    }

    fn tool_help(&self, args: &JsonValue) -> JsonValue {
        let name = args.get("name").and_then(|v| v.as_str());
        let help = self.registry.help(name);

        json!({
            "content": [{ "type": "text", "text": format_help(&help) }],
            "data": help.to_json()
        })
    }
}

fn tool_error(context: &str, e: &MeasureError) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": format!("{}: {}", context, e.message) }],
        "error": e,
        "isError": true
    })
}

fn unexpected_result(func: &str, value: &Value) -> MeasureError {
    MeasureError::internal(format!("{}() returned {}", func, value.type_name()))
}

fn string_arg<'a>(args: &'a JsonValue, name: &str) -> Result<&'a str, McpError> {
    args.get(name)
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))
}

fn number_arg(args: &JsonValue, name: &str) -> Result<f64, McpError> {
    let value = args.get(name)
        .ok_or_else(|| McpError::invalid_params(format!("Missing {} argument", name)))?;

    let number = match value {
        JsonValue::Number(n) => n.as_f64(),
        JsonValue::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    number.ok_or_else(|| McpError::invalid_params(format!("Argument {} must be a number", name)))
}

fn format_help(help: &Value) -> String {
    match help {
        Value::Object(map) => {
            let mut out = String::new();
            if let Some(Value::Text(n)) = map.get("name") { out.push_str(&format!("# {}\n\n", n)); }
            if let Some(Value::Text(d)) = map.get("description") { out.push_str(&format!("{}\n\n", d)); }
            if let Some(Value::Text(u)) = map.get("usage") { out.push_str(&format!("**Usage:** `{}`\n\n", u)); }
            if let Some(Value::List(args)) = map.get("args") {
                if !args.is_empty() {
                    out.push_str("**Arguments:**\n");
                    for arg in args {
                        out.push_str(&format!("- `{}` ({}): {}\n",
                            arg.get("name").as_text().unwrap_or("?"),
                            arg.get("type").as_text().unwrap_or("?"),
                            arg.get("description").as_text().unwrap_or("")));
                    }
                    out.push('\n');
                }
            }
            if let Some(Value::Text(r)) = map.get("returns") { out.push_str(&format!("**Returns:** {}\n\n", r)); }
            if let Some(Value::List(examples)) = map.get("examples") {
                if !examples.is_empty() {
                    out.push_str("**Examples:**\n");
                    for example in examples.iter().filter_map(Value::as_text) {
                        out.push_str(&format!("- `{}`\n", example));
                    }
                    out.push('\n');
                }
            }
            if let Some(Value::List(related)) = map.get("related") {
                let names: Vec<&str> = related.iter().filter_map(Value::as_text).collect();
                if !names.is_empty() {
                    out.push_str(&format!("**Related:** {}\n\n", names.join(", ")));
                }
            }
            if let Some(Value::Object(funcs)) = map.get("functions") {
                for (category, names) in funcs {
                    let names: Vec<&str> = names.as_list().unwrap_or(&[]).iter().filter_map(Value::as_text).collect();
                    out.push_str(&format!("**{}:** {}\n", category, names.join(", ")));
                }
            }
            out
        }
        Value::Error(e) => format!("Error: {}", e.message),
        other => format!("{:?}", other),
    }
}

fn tools_list() -> JsonValue {
    json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "value": { "type": "number", "description": "Value to convert" },
                        "category": {
                            "type": "string",
                            "description": "Category identifier",
                            "enum": ["Length", "Weight", "Temperature", "Volume", "Time"]
                        },
                        "from_unit": { "type": "string", "description": "Source unit, e.g. \"meter\"" },
                        "to_unit": { "type": "string", "description": "Target unit, e.g. \"foot\"" }
                    },
                    "required": ["value", "category", "from_unit", "to_unit"]
                }
            },
            {
                "name": "list_categories",
                "description": "List measurement categories with labels, base units and units.",
                "inputSchema": { "type": "object", "properties": {} }
            },
            {
                "name": "list_units",
                "description": "List the units of a category in display order.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": { "type": "string", "description": "Category identifier" }
                    },
                    "required": ["category"]
                }
            },
            {
                "name": "help",
                "description": "Get documentation for a function, or general help.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "name": { "type": "string", "description": "Function name. Omit for general help." }
                    }
                }
            }
        ]
    })
}
