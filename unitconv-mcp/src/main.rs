//! unitconv MCP Server
//!
//! Line-delimited JSON-RPC over stdio. One server process is one user
//! session: the history and language live for as long as the process does.
//!
//! Tools:
//! - convert: Convert a value between two units of a category
//! - list_categories: Categories and their units
//! - history: Conversions made in this session
//! - export_pdf: Save the history as a PDF
//! - set_language: Change the interface language
//! - labels: Interface labels in the current language

mod config;

use std::io::{self, BufRead, Write};

use serde::{Deserialize, Serialize};
use serde_json::{json, Value as JsonValue};
use tracing_subscriber::EnvFilter;
use unitconv::{
    Category, CachingTranslator, ConversionRequest, ConvertView, ExportStatus, GoogleTranslator, Language,
    Passthrough, Session, Translator, UcError, UnitConverterApp,
};

use crate::config::Config;

const PROTOCOL_VERSION: &str = "2025-11-25";
const SERVER_NAME: &str = "unitconv";
const SERVER_VERSION: &str = env!("CARGO_PKG_VERSION");

// MCP Protocol types
#[derive(Debug, Deserialize)]
struct McpRequest {
    #[allow(dead_code)]
    jsonrpc: String,
    id: Option<JsonValue>,
    method: String,
    #[serde(default)]
    params: Option<JsonValue>,
}

#[derive(Debug, Serialize)]
struct McpResponse {
    jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    id: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<JsonValue>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<McpError>,
}

#[derive(Debug, Serialize)]
struct McpError {
    code: i32,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<JsonValue>,
}

impl McpError {
    fn invalid_params(message: impl Into<String>) -> Self {
        Self { code: -32602, message: message.into(), data: None }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self { code: -32603, message: message.into(), data: None }
    }
}

fn create_translator(config: &Config) -> Box<dyn Translator> {
    if config.offline {
        tracing::info!("offline mode, labels stay in English");
        return Box::new(Passthrough);
    }
    match GoogleTranslator::new(config.translator_config()) {
        Ok(translator) => Box::new(CachingTranslator::new(translator)),
        Err(e) => {
            tracing::warn!(error = %e, "translation client unavailable, labels stay in English");
            Box::new(Passthrough)
        }
    }
}

fn main() {
    // stdout carries the protocol, logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    let config = Config::from_env();
    let app = UnitConverterApp::new(create_translator(&config), config.settings());
    let mut session = Session::new(config.language);

    tracing::info!(version = SERVER_VERSION, protocol = PROTOCOL_VERSION, "unitconv MCP server started");
    tracing::info!(language = config.language.code(), export_path = %config.export_path.display(), "session ready");

    let stdin = io::stdin();
    let mut reader = io::BufReader::new(stdin.lock());

    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => {
                tracing::info!("client disconnected (EOF)");
                break;
            }
            Ok(_) => {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let Some(response) = process_line(&app, &mut session, line) else {
                    continue;
                };
                if let Err(e) = write_response(&response) {
                    tracing::error!(error = %e, "error writing response");
                    break;
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "error reading input");
                break;
            }
        }
    }

    tracing::info!(conversions = session.history().len(), "server shutting down");
}

fn write_response(response: &McpResponse) -> io::Result<()> {
    let json = serde_json::to_string(response)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)?;
    stdout.flush()
}

/// Handle one input line. Notifications produce no response.
fn process_line<T: Translator>(app: &UnitConverterApp<T>, session: &mut Session, line: &str) -> Option<McpResponse> {
    let request: McpRequest = match serde_json::from_str(line) {
        Ok(r) => r,
        Err(e) => {
            tracing::warn!(error = %e, "error parsing request");
            return Some(McpResponse {
                jsonrpc: "2.0".to_string(),
                id: None,
                result: None,
                error: Some(McpError {
                    code: -32700,
                    message: format!("Parse error: {}", e),
                    data: None,
                }),
            });
        }
    };

    tracing::debug!(method = %request.method, "processing");
    let response = handle_request(app, session, &request);

    if request.id.is_none() {
        tracing::debug!(method = %request.method, "notification processed");
        return None;
    }
    Some(response)
}

fn handle_request<T: Translator>(app: &UnitConverterApp<T>, session: &mut Session, request: &McpRequest) -> McpResponse {
    let result = match request.method.as_str() {
        // Lifecycle
        "initialize" => handle_initialize(&request.params),
        "initialized" | "notifications/initialized" => Ok(json!({})),
        "ping" => Ok(json!({})),

        // Tools
        "tools/list" => handle_tools_list(),
        "tools/call" => handle_tool_call(app, session, &request.params),

        _ => Err(McpError {
            code: -32601,
            message: format!("Method not found: {}", request.method),
            data: None,
        }),
    };

    match result {
        Ok(r) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: Some(r),
            error: None,
        },
        Err(e) => McpResponse {
            jsonrpc: "2.0".to_string(),
            id: request.id.clone(),
            result: None,
            error: Some(e),
        },
    }
}

fn handle_initialize(params: &Option<JsonValue>) -> Result<JsonValue, McpError> {
    let client_info = params.as_ref()
        .and_then(|p| p.get("clientInfo"))
        .and_then(|c| c.get("name"))
        .and_then(|n| n.as_str())
        .unwrap_or("unknown");

    // Answer with the client's protocol version
    let client_protocol = params.as_ref()
        .and_then(|p| p.get("protocolVersion"))
        .and_then(|v| v.as_str())
        .unwrap_or(PROTOCOL_VERSION);

    tracing::info!(client = client_info, protocol = client_protocol, "client connected");

    Ok(json!({
        "protocolVersion": client_protocol,
        "serverInfo": {
            "name": SERVER_NAME,
            "version": SERVER_VERSION,
            "description": "Unit converter with conversion history and PDF export"
        },
        "capabilities": {
            "tools": {
                "listChanged": false
            }
        },
        "instructions": "Use 'list_categories' to see the units of each category, then 'convert' with a category and two of its units. Successful conversions are kept in 'history' and can be saved with 'export_pdf'."
    }))
}

fn handle_tools_list() -> Result<JsonValue, McpError> {
    let categories: Vec<&'static str> = Category::all().map(Into::into).collect();
    let languages: Vec<&'static str> = Language::all().map(Language::code).collect();

    Ok(json!({
        "tools": [
            {
                "name": "convert",
                "description": "Convert a value between two units of the same category. Successful conversions are added to the history.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "category": {
                            "type": "string",
                            "description": "Conversion category",
                            "enum": categories
                        },
                        "value": {
                            "type": "number",
                            "description": "Value to convert"
                        },
                        "from_unit": {
                            "type": "string",
                            "description": "Unit name, e.g. meters"
                        },
                        "to_unit": {
                            "type": "string",
                            "description": "Unit name, e.g. kilometers"
                        }
                    },
                    "required": ["category", "value", "from_unit", "to_unit"]
                }
            },
            {
                "name": "list_categories",
                "description": "List the conversion categories and their units.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "history",
                "description": "Show the conversions made in this session, oldest first.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "export_pdf",
                "description": "Save the conversion history as a PDF.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            },
            {
                "name": "set_language",
                "description": "Change the interface language.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "language": {
                            "type": "string",
                            "description": "Language code",
                            "enum": languages
                        }
                    },
                    "required": ["language"]
                }
            },
            {
                "name": "labels",
                "description": "Interface labels in the current language.",
                "inputSchema": {
                    "type": "object",
                    "properties": {}
                }
            }
        ]
    }))
}

fn handle_tool_call<T: Translator>(
    app: &UnitConverterApp<T>,
    session: &mut Session,
    params: &Option<JsonValue>,
) -> Result<JsonValue, McpError> {
    let params = params.as_ref().ok_or_else(|| McpError::invalid_params("Missing params"))?;

    let name = params.get("name")
        .and_then(|v| v.as_str())
        .ok_or_else(|| McpError::invalid_params("Missing tool name"))?;

    let args = params.get("arguments").cloned().unwrap_or(json!({}));

    match name {
        "convert" => tool_convert(app, session, &args),
        "list_categories" => tool_list_categories(app),
        "history" => tool_history(app, session),
        "export_pdf" => tool_export_pdf(app, session),
        "set_language" => tool_set_language(app, session, &args),
        "labels" => tool_labels(app, session),
        _ => Err(McpError {
            code: -32602,
            message: format!("Unknown tool: {}", name),
            data: to_json(&UcError::unknown_tool(name)).ok(),
        }),
    }
}

fn to_json<S: Serialize>(value: &S) -> Result<JsonValue, McpError> {
    serde_json::to_value(value).map_err(|e| McpError::internal(format!("Serialization failed: {}", e)))
}

fn tool_result(text: String, view: JsonValue, is_error: bool) -> JsonValue {
    json!({
        "content": [{ "type": "text", "text": text }],
        "view": view,
        "isError": is_error
    })
}

fn tool_error(error: UcError) -> Result<JsonValue, McpError> {
    let text = error.to_string();
    Ok(json!({
        "content": [{ "type": "text", "text": text }],
        "error": to_json(&error)?,
        "isError": true
    }))
}

fn string_arg<'a>(tool: &str, args: &'a JsonValue, name: &str) -> Result<&'a str, UcError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Err(UcError::arg_missing(tool, name)),
        Some(v) => v.as_str().ok_or_else(|| UcError::arg_type(tool, name, "string")),
    }
}

fn number_arg(tool: &str, args: &JsonValue, name: &str) -> Result<f64, UcError> {
    match args.get(name) {
        None | Some(JsonValue::Null) => Err(UcError::arg_missing(tool, name)),
        Some(JsonValue::String(s)) => s.trim().parse().map_err(|_| UcError::arg_type(tool, name, "number")),
        Some(v) => v.as_f64().ok_or_else(|| UcError::arg_type(tool, name, "number")),
    }
}

fn parse_convert_args(args: &JsonValue) -> Result<(Category, ConversionRequest), UcError> {
    let category = string_arg("convert", args, "category")?;
    let category: Category = category.parse()
        .map_err(|_| UcError::arg_type("convert", "category", "one of Length, Weight, Temperature, Volume, Time, Speed"))?;
    let value = number_arg("convert", args, "value")?;
    let from_unit = string_arg("convert", args, "from_unit")?;
    let to_unit = string_arg("convert", args, "to_unit")?;
    Ok((category, ConversionRequest::new(value, from_unit, to_unit)))
}

fn tool_convert<T: Translator>(app: &UnitConverterApp<T>, session: &mut Session, args: &JsonValue) -> Result<JsonValue, McpError> {
    let (category, request) = match parse_convert_args(args) {
        Ok(parsed) => parsed,
        Err(e) => return tool_error(e),
    };

    let view = app.convert(session, &request, category);
    let (text, is_error) = match &view {
        ConvertView::Converted { heading, value, .. } => {
            (format!("{}: {:.4} {}", heading.text, value, request.to_unit), false)
        }
        ConvertView::Failed { message, .. } => (message.text.clone(), true),
    };
    Ok(tool_result(text, to_json(&view)?, is_error))
}

fn tool_list_categories<T: Translator>(app: &UnitConverterApp<T>) -> Result<JsonValue, McpError> {
    let categories = app.categories();
    let text = categories.iter()
        .map(|c| {
            let units: Vec<&str> = c.units.iter().map(|u| u.as_str()).collect();
            format!("{}: {}", c.category, units.join(", "))
        })
        .collect::<Vec<_>>()
        .join("\n");
    Ok(tool_result(text, to_json(&categories)?, false))
}

fn tool_history<T: Translator>(app: &UnitConverterApp<T>, session: &Session) -> Result<JsonValue, McpError> {
    let view = app.history(session);
    let mut text = format!("## {}", view.heading.text);
    for entry in &view.entries {
        text.push_str("\n- ");
        text.push_str(entry);
    }
    Ok(tool_result(text, to_json(&view)?, false))
}

fn tool_export_pdf<T: Translator>(app: &UnitConverterApp<T>, session: &Session) -> Result<JsonValue, McpError> {
    let status = app.export_pdf(session);
    let (text, is_error) = match &status {
        ExportStatus::Saved { message, report } => {
            (format!("{} ({})", message.text, report.path.display()), false)
        }
        ExportStatus::Warning { message, .. } => (message.text.clone(), true),
    };
    Ok(tool_result(text, to_json(&status)?, is_error))
}

fn tool_set_language<T: Translator>(app: &UnitConverterApp<T>, session: &mut Session, args: &JsonValue) -> Result<JsonValue, McpError> {
    let language = match string_arg("set_language", args, "language") {
        Ok(s) => s,
        Err(e) => return tool_error(e),
    };
    let Some(language) = Language::parse_any(language) else {
        return tool_error(UcError::arg_type("set_language", "language", "one of en, ur, es, fr, de"));
    };

    session.set_language(language);
    tracing::info!(language = language.code(), "language changed");

    let title = app.labels(session)
        .into_iter()
        .find(|l| l.label == unitconv::Label::Title)
        .map(|l| l.text.text)
        .unwrap_or_default();
    Ok(tool_result(
        format!("{} ({})", title, language.code()),
        json!({ "language": language }),
        false,
    ))
}

fn tool_labels<T: Translator>(app: &UnitConverterApp<T>, session: &Session) -> Result<JsonValue, McpError> {
    let labels = app.labels(session);
    let text = labels.iter()
        .map(|l| format!("{}: {}", to_json(&l.label).ok().and_then(|k| k.as_str().map(String::from)).unwrap_or_default(), l.text.text))
        .collect::<Vec<_>>()
        .join("\n");
    Ok(tool_result(text, to_json(&labels)?, false))
}

#[cfg(test)]
mod tests {
    use super::*;
    use unitconv::{codes, Settings};

    fn app() -> UnitConverterApp<Passthrough> {
        UnitConverterApp::new(Passthrough, Settings::default())
    }

    fn call(app: &UnitConverterApp<Passthrough>, session: &mut Session, line: &str) -> JsonValue {
        let response = process_line(app, session, line).expect("response expected");
        serde_json::to_value(&response).unwrap()
    }

    fn tool_call(name: &str, arguments: JsonValue) -> String {
        json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "tools/call",
            "params": { "name": name, "arguments": arguments }
        }).to_string()
    }

    #[test]
    fn test_initialize() {
        let mut session = Session::default();
        let response = call(&app(), &mut session, r#"{"jsonrpc":"2.0","id":0,"method":"initialize","params":{"protocolVersion":"2025-06-18","clientInfo":{"name":"test"}}}"#);
        assert_eq!(response["result"]["protocolVersion"], "2025-06-18");
        assert_eq!(response["result"]["serverInfo"]["name"], SERVER_NAME);
    }

    #[test]
    fn test_notification_gets_no_response() {
        let mut session = Session::default();
        assert!(process_line(&app(), &mut session, r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#).is_none());
    }

    #[test]
    fn test_parse_error() {
        let mut session = Session::default();
        let response = call(&app(), &mut session, "{not json");
        assert_eq!(response["error"]["code"], -32700);
    }

    #[test]
    fn test_unknown_method() {
        let mut session = Session::default();
        let response = call(&app(), &mut session, r#"{"jsonrpc":"2.0","id":3,"method":"resources/list"}"#);
        assert_eq!(response["error"]["code"], -32601);
        assert_eq!(response["id"], 3);
    }

    #[test]
    fn test_tools_list() {
        let mut session = Session::default();
        let response = call(&app(), &mut session, r#"{"jsonrpc":"2.0","id":1,"method":"tools/list"}"#);
        let names: Vec<&str> = response["result"]["tools"].as_array().unwrap()
            .iter()
            .map(|t| t["name"].as_str().unwrap())
            .collect();
        assert_eq!(names, ["convert", "list_categories", "history", "export_pdf", "set_language", "labels"]);
    }

    #[test]
    fn test_convert_then_history() {
        let app = app();
        let mut session = Session::default();

        let response = call(&app, &mut session, &tool_call("convert", json!({
            "category": "Length", "value": 1.0, "from_unit": "miles", "to_unit": "kilometers"
        })));
        assert_eq!(response["result"]["isError"], false);
        assert_eq!(response["result"]["content"][0]["text"], "Result: 1.6093 kilometers");

        let response = call(&app, &mut session, &tool_call("history", json!({})));
        assert_eq!(response["result"]["view"]["entries"][0], "1.0 miles = 1.6093 kilometers");
    }

    #[test]
    fn test_convert_failure_is_tool_error() {
        let app = app();
        let mut session = Session::default();

        let response = call(&app, &mut session, &tool_call("convert", json!({
            "category": "Length", "value": 5, "from_unit": "meters", "to_unit": "kilograms"
        })));
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(response["result"]["view"]["error"]["code"], codes::INVALID_UNIT);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_convert_argument_errors() {
        let app = app();
        let mut session = Session::default();

        let response = call(&app, &mut session, &tool_call("convert", json!({
            "category": "Length", "from_unit": "meters", "to_unit": "feet"
        })));
        assert_eq!(response["result"]["error"]["code"], codes::ARG_MISSING);

        let response = call(&app, &mut session, &tool_call("convert", json!({
            "category": "Length", "value": [1], "from_unit": "meters", "to_unit": "feet"
        })));
        assert_eq!(response["result"]["error"]["code"], codes::ARG_TYPE);

        let response = call(&app, &mut session, &tool_call("convert", json!({
            "category": "Distance", "value": 1, "from_unit": "meters", "to_unit": "feet"
        })));
        assert_eq!(response["result"]["error"]["code"], codes::ARG_TYPE);
    }

    #[test]
    fn test_value_as_string() {
        let mut session = Session::default();
        let response = call(&app(), &mut session, &tool_call("convert", json!({
            "category": "temperature", "value": "100", "from_unit": "celsius", "to_unit": "kelvin"
        })));
        assert_eq!(response["result"]["view"]["value"], 373.15);
    }

    #[test]
    fn test_unknown_tool() {
        let mut session = Session::default();
        let response = call(&app(), &mut session, &tool_call("teleport", json!({})));
        assert_eq!(response["error"]["code"], -32602);
        assert_eq!(response["error"]["data"]["code"], codes::UNKNOWN_TOOL);
    }

    #[test]
    fn test_export_without_history_warns() {
        let dir = tempfile::tempdir().unwrap();
        let app = UnitConverterApp::new(Passthrough, Settings { export_path: dir.path().join("h.pdf") });
        let mut session = Session::default();

        let response = call(&app, &mut session, &tool_call("export_pdf", json!({})));
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(response["result"]["content"][0]["text"], "No conversion history to save.");
        assert_eq!(response["result"]["view"]["error"]["code"], codes::NO_HISTORY);
    }

    #[test]
    fn test_export_with_history() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("h.pdf");
        let app = UnitConverterApp::new(Passthrough, Settings { export_path: path.clone() });
        let mut session = Session::default();

        call(&app, &mut session, &tool_call("convert", json!({
            "category": "Weight", "value": 2, "from_unit": "kilograms", "to_unit": "pounds"
        })));
        let response = call(&app, &mut session, &tool_call("export_pdf", json!({})));
        assert_eq!(response["result"]["isError"], false);
        assert_eq!(response["result"]["view"]["status"], "saved");
        assert!(path.exists());
    }

    #[test]
    fn test_set_language() {
        let app = app();
        let mut session = Session::default();

        let response = call(&app, &mut session, &tool_call("set_language", json!({ "language": "de" })));
        assert_eq!(response["result"]["isError"], false);
        assert_eq!(session.language(), Language::German);

        let response = call(&app, &mut session, &tool_call("set_language", json!({ "language": "xx" })));
        assert_eq!(response["result"]["isError"], true);
        assert_eq!(session.language(), Language::German);
    }

    #[test]
    fn test_labels_and_categories() {
        let app = app();
        let mut session = Session::default();

        let response = call(&app, &mut session, &tool_call("labels", json!({})));
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.contains("save_as_pdf: Save as PDF"));

        let response = call(&app, &mut session, &tool_call("list_categories", json!({})));
        let text = response["result"]["content"][0]["text"].as_str().unwrap();
        assert!(text.starts_with("Length: meters, kilometers"));
        assert!(text.contains("Speed: meters_per_second"));
    }
}
