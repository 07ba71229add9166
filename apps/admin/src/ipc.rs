//! # IPC Host
//!
//! JSON-lines command channel between the admin UI and this process.
//!
//! ## Protocol
//! ```text
//! stdin  (one request per line)
//!   {"id": 1, "cmd": "get_customer", "args": {"id": "c-42"}}
//!
//! stdout (one response per line, same id)
//!   {"id": 1, "ok": true,  "data": {...}}
//!   {"id": 1, "ok": false, "error": {"code": "NOT_FOUND", "message": "..."}}
//! ```
//!
//! - `id` is echoed back untouched (any JSON value, `null` if absent).
//! - `args` may be omitted for commands without arguments.
//! - A line that is not a request gets an `INVALID_REQUEST` response and the
//!   loop carries on. Blank lines are ignored. EOF ends the loop.
//! - Logs go to stderr; stdout carries responses only.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::time::Instant;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info, warn};

use crate::commands::{customer, material, system};
use crate::error::ApiError;
use crate::state::AppState;
use forge_core::search::MaterialFilter;
use forge_core::validation::FormMode;
use forge_core::{CustomerDraft, MaterialDraft};

/// Every command name `dispatch` understands.
pub const COMMANDS: &[&str] = &[
    "list_customers",
    "get_customer",
    "validate_customer",
    "create_customer",
    "update_customer",
    "delete_customer",
    "list_materials",
    "get_material",
    "validate_material",
    "create_material",
    "update_material",
    "delete_material",
    "health",
];

/// One request line.
#[derive(Debug, Clone, Deserialize)]
pub struct Request {
    #[serde(default)]
    pub id: Value,
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

/// One response line.
#[derive(Debug, Clone, Serialize)]
pub struct Response {
    pub id: Value,
    pub ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiError>,
}

impl Response {
    pub fn success(id: Value, data: Value) -> Self {
        Response {
            id,
            ok: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failure(id: Value, error: ApiError) -> Self {
        Response {
            id,
            ok: false,
            data: None,
            error: Some(error),
        }
    }
}

// =============================================================================
// Argument Shapes
// =============================================================================

#[derive(Debug, Deserialize)]
struct IdArgs {
    id: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct QueryArgs {
    query: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MaterialListArgs {
    query: Option<String>,
    low_stock_only: Option<bool>,
}

#[derive(Debug, Deserialize)]
struct DraftArgs<T> {
    draft: T,
}

#[derive(Debug, Deserialize)]
struct UpdateArgs<T> {
    id: String,
    draft: T,
}

#[derive(Debug, Deserialize)]
struct ValidateMaterialArgs {
    draft: MaterialDraft,
    #[serde(default)]
    mode: Option<FormMode>,
}

/// Decodes `args`, treating a missing value as `{}`.
fn parse_args<T: DeserializeOwned>(cmd: &str, args: Value) -> Result<T, ApiError> {
    let args = if args.is_null() {
        Value::Object(Default::default())
    } else {
        args
    };
    serde_json::from_value(args)
        .map_err(|e| ApiError::invalid_request(format!("Invalid arguments for {}: {}", cmd, e)))
}

fn to_data<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value)
        .map_err(|e| ApiError::internal(format!("Failed to encode response: {}", e)))
}

// =============================================================================
// Dispatch
// =============================================================================

/// Runs one command and returns its JSON result.
pub async fn dispatch(state: &AppState, cmd: &str, args: Value) -> Result<Value, ApiError> {
    let db = &state.db;

    match cmd {
        "list_customers" => {
            let QueryArgs { query } = parse_args(cmd, args)?;
            to_data(customer::list_customers(db, query).await?)
        }
        "get_customer" => {
            let IdArgs { id } = parse_args(cmd, args)?;
            to_data(customer::get_customer(db, id).await?)
        }
        "validate_customer" => {
            let DraftArgs::<CustomerDraft> { draft } = parse_args(cmd, args)?;
            to_data(customer::validate_customer(draft).await?)
        }
        "create_customer" => {
            let DraftArgs::<CustomerDraft> { draft } = parse_args(cmd, args)?;
            to_data(customer::create_customer(db, draft).await?)
        }
        "update_customer" => {
            let UpdateArgs::<CustomerDraft> { id, draft } = parse_args(cmd, args)?;
            to_data(customer::update_customer(db, id, draft).await?)
        }
        "delete_customer" => {
            let IdArgs { id } = parse_args(cmd, args)?;
            to_data(customer::delete_customer(db, id).await?)
        }
        "list_materials" => {
            let MaterialListArgs {
                query,
                low_stock_only,
            } = parse_args(cmd, args)?;
            let filter = MaterialFilter {
                query: query.unwrap_or_default(),
                low_stock_only: low_stock_only.unwrap_or(false),
            };
            to_data(material::list_materials(db, filter).await?)
        }
        "get_material" => {
            let IdArgs { id } = parse_args(cmd, args)?;
            to_data(material::get_material(db, id).await?)
        }
        "validate_material" => {
            let ValidateMaterialArgs { draft, mode } = parse_args(cmd, args)?;
            to_data(material::validate_material(draft, mode).await?)
        }
        "create_material" => {
            let DraftArgs::<MaterialDraft> { draft } = parse_args(cmd, args)?;
            to_data(material::create_material(db, draft).await?)
        }
        "update_material" => {
            let UpdateArgs::<MaterialDraft> { id, draft } = parse_args(cmd, args)?;
            to_data(material::update_material(db, id, draft).await?)
        }
        "delete_material" => {
            let IdArgs { id } = parse_args(cmd, args)?;
            to_data(material::delete_material(db, id).await?)
        }
        "health" => to_data(system::health(db).await?),
        other => Err(ApiError::invalid_request(format!("Unknown command: {}", other))),
    }
}

/// Handles one input line. Returns `None` for blank lines.
pub async fn handle_line(state: &AppState, line: &str) -> Option<Response> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Unparseable request line");
            return Some(Response::failure(
                Value::Null,
                ApiError::invalid_request(format!("Malformed JSON: {}", e)),
            ));
        }
    };

    let id = value.get("id").cloned().unwrap_or(Value::Null);
    let request: Request = match serde_json::from_value(value) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Request without a command");
            return Some(Response::failure(
                id,
                ApiError::invalid_request(format!("Invalid request: {}", e)),
            ));
        }
    };

    let start = Instant::now();
    let result = dispatch(state, &request.cmd, request.args).await;
    debug!(
        cmd = %request.cmd,
        ok = result.is_ok(),
        elapsed_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Command handled"
    );

    Some(match result {
        Ok(data) => Response::success(request.id, data),
        Err(error) => Response::failure(request.id, error),
    })
}

/// Serves requests from `reader` until EOF, writing responses to `writer`.
pub async fn serve<R, W>(state: &AppState, reader: R, mut writer: W) -> std::io::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    info!(commands = COMMANDS.len(), "IPC host ready");

    let mut lines = reader.lines();
    let mut handled: u64 = 0;

    while let Some(line) = lines.next_line().await? {
        let Some(response) = handle_line(state, &line).await else {
            continue;
        };

        let mut out = serde_json::to_vec(&response)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        out.push(b'\n');
        writer.write_all(&out).await?;
        writer.flush().await?;
        handled += 1;
    }

    info!(handled, "Input closed, IPC host stopping");
    Ok(())
}
