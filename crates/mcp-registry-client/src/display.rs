//! Human-readable rendering of server listings.
//!
//! Optional fields degrade to `N/A`. The `server` key of each item is
//! required: an item without it fails with [`DisplayError::MissingField`].
//!
//! Only the first entry of `packages` is shown; a server with several
//! packages is rendered as if it had just the first one.

use serde_json::Value;
use std::borrow::Cow;
use std::io::{self, Write};

use crate::error::DisplayError;

/// Placeholder for absent fields
const NOT_AVAILABLE: &str = "N/A";

/// Width of the card borders
const CARD_WIDTH: usize = 80;

/// Server item sequence from a servers response.
///
/// Accepts a bare array or the `{"servers": [...]}` envelope returned by the
/// registry; anything else yields an empty slice.
pub fn server_items(response: &Value) -> &[Value] {
    match response {
        Value::Array(items) => items,
        Value::Object(map) => map
            .get("servers")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or_default(),
        _ => &[],
    }
}

/// Write a detailed view of one server item.
pub fn write_server_details<W: Write>(out: &mut W, item: &Value) -> Result<(), DisplayError> {
    let server = server_record(item)?;

    writeln!(out, "Name:       {}", field_or_na(server, "name"))?;
    writeln!(out, "Description: {}", field_or_na(server, "description"))?;
    writeln!(out, "Version:    {}", field_or_na(server, "version"))?;

    let remotes = array_field(server, "remotes");
    if !remotes.is_empty() {
        writeln!(out, "Remotes:    {} remote endpoint(s)", remotes.len())?;
        for remote in remotes {
            writeln!(
                out,
                "  - {}: {}",
                field_or_na(remote, "type"),
                field_or_na(remote, "url")
            )?;
        }
    }

    if let Some(package) = array_field(server, "packages").first() {
        writeln!(out, "Transport:  {}", transport_type(package))?;
        writeln!(out, "Identifier: {}", field_or_na(package, "identifier"))?;
    }

    writeln!(out)?;
    Ok(())
}

/// Write server items as numbered cards.
pub fn write_server_cards<W: Write>(out: &mut W, items: &[Value]) -> Result<(), DisplayError> {
    for (idx, item) in items.iter().enumerate() {
        let server = server_record(item)?;
        let package = first_package(server);

        writeln!(out, "{}", "=".repeat(CARD_WIDTH))?;
        writeln!(out, "Server #{}", idx + 1)?;
        writeln!(out, "{}", "-".repeat(CARD_WIDTH))?;
        writeln!(out, "Name:       {}", field_or_na(server, "name"))?;
        writeln!(out, "Transport:  {}", transport_type(package))?;
        writeln!(out, "Registry:   {}", field_or_na(package, "registryType"))?;
        writeln!(out, "Identifier: {}", field_or_na(package, "identifier"))?;
    }
    Ok(())
}

/// Print a detailed view of one server item to stdout.
pub fn print_server_details(item: &Value) -> Result<(), DisplayError> {
    let mut out = io::stdout().lock();
    write_server_details(&mut out, item)?;
    out.flush()?;
    Ok(())
}

/// Print server items as numbered cards to stdout.
pub fn print_server_cards(items: &[Value]) -> Result<(), DisplayError> {
    let mut out = io::stdout().lock();
    write_server_cards(&mut out, items)?;
    out.flush()?;
    Ok(())
}

fn server_record(item: &Value) -> Result<&Value, DisplayError> {
    item.get("server")
        .filter(|server| server.is_object())
        .ok_or(DisplayError::MissingField("server"))
}

/// First package, or an empty record when there are none
fn first_package(server: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    array_field(server, "packages").first().unwrap_or(&EMPTY)
}

fn transport_type(package: &Value) -> Cow<'_, str> {
    package
        .get("transport")
        .map_or(Cow::Borrowed(NOT_AVAILABLE), |t| field_or_na(t, "type"))
}

fn array_field<'a>(value: &'a Value, key: &str) -> &'a [Value] {
    value
        .get(key)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

/// Lookup with default: strings render bare, other values as JSON, absent or
/// null as `N/A`.
fn field_or_na<'a>(value: &'a Value, key: &str) -> Cow<'a, str> {
    match value.get(key) {
        None | Some(Value::Null) => Cow::Borrowed(NOT_AVAILABLE),
        Some(Value::String(s)) => Cow::Borrowed(s),
        Some(other) => Cow::Owned(other.to_string()),
    }
}
