/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! Scalar typing and the marshaller registry.
//!
//! Untagged plain scalars are coerced against a single
//! canonical pattern; explicit `!!` tags resolve to a
//! [Marshaller] which overrides that coercion when the
//! tagged value completes.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::{
    error::{Error, ErrorKind, Result},
    value::{Mapping, Value},
};

/// Canonical typing pattern for untagged plain scalars
static TYPED: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^(false|true|null|~|[-+]?[0-9]*\.?[0-9]+([eE][-+]?[0-9]+)?)$")
        .expect("typing pattern compiles")
});

/// The value coercions explicit `!!` tags can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Marshaller
{
    Str,
    Int,
    Null,
    Bool,
    Map,
    Seq,
    Set,
}

impl Marshaller
{
    /// Resolve a scanned tag against the registry. Only the
    /// default (empty) handle carries marshallers; anything
    /// else resolves to None and is rejected when applied.
    pub(crate) fn resolve(tag: &str) -> Option<Self>
    {
        let text = tag.strip_prefix('!').unwrap_or(tag);

        let (prefix, name) = text.split_once('!')?;

        if !prefix.is_empty()
        {
            return None;
        }

        match name
        {
            "str" => Some(Self::Str),
            "int" => Some(Self::Int),
            "null" => Some(Self::Null),
            "bool" => Some(Self::Bool),
            "map" => Some(Self::Map),
            "seq" => Some(Self::Seq),
            "set" => Some(Self::Set),
            _ => None,
        }
    }

    /// Apply this coercion to a completed value. Scalar
    /// coercions reject containers outright.
    pub(crate) fn marshal(self, value: Value) -> Result<Value>
    {
        match (self, value)
        {
            (Self::Map, value) => marshal_map(value),
            (Self::Seq, value) => marshal_seq(value),
            (Self::Set, value) => marshal_set(value),
            (_, Value::Seq(_)) => Err(Error::new(ErrorKind::ScalarGotList)),
            (_, Value::Map(_)) => Err(Error::new(ErrorKind::ScalarGotMap)),
            (Self::Str, value) => Ok(Value::Str(value.to_string())),
            (Self::Null, _) => Ok(Value::Null),
            (Self::Int, value) => marshal_int(value),
            (Self::Bool, value) => marshal_bool(value),
        }
    }
}

/// Accept a mapping unchanged, or merge a sequence of
/// mappings into one
fn marshal_map(value: Value) -> Result<Value>
{
    match value
    {
        Value::Map(map) => Ok(Value::Map(map)),
        Value::Seq(items) if items.iter().all(|item| matches!(item, Value::Map(_))) =>
        {
            let mut merged = Mapping::new();

            for item in items
            {
                if let Value::Map(map) = item
                {
                    for (key, entry) in map
                    {
                        merged.insert(key, entry);
                    }
                }
            }

            Ok(Value::Map(merged))
        },
        _ => Err(Error::new(ErrorKind::NotAMap)),
    }
}

/// Accept a sequence unchanged, or flatten a mapping to
/// [k1, v1, k2, v2, ..]
fn marshal_seq(value: Value) -> Result<Value>
{
    match value
    {
        Value::Seq(items) => Ok(Value::Seq(items)),
        Value::Map(map) =>
        {
            let mut items = Vec::with_capacity(map.len() * 2);

            for (key, entry) in map
            {
                items.push(key);
                items.push(entry);
            }

            Ok(Value::Seq(items))
        },
        _ => Err(Error::new(ErrorKind::NotAListOrMap)),
    }
}

/// A mapping's keys, in insertion order
fn marshal_set(value: Value) -> Result<Value>
{
    match value
    {
        Value::Map(map) => Ok(Value::Seq(map.into_iter().map(|(key, _)| key).collect())),
        _ => Err(Error::new(ErrorKind::SetNeedsMap)),
    }
}

fn marshal_int(value: Value) -> Result<Value>
{
    match value
    {
        Value::Int(i) => Ok(Value::Int(i)),
        Value::Float(fl) => Ok(Value::Int(fl as i64)),
        Value::Bool(b) => Ok(Value::Int(b as i64)),
        other =>
        {
            let text = other.to_string();

            text.trim()
                .parse::<i64>()
                .map(Value::Int)
                .map_err(|_| Error::new(ErrorKind::NotAnInt(text)))
        },
    }
}

fn marshal_bool(value: Value) -> Result<Value>
{
    let text = value.to_string();

    match text.to_ascii_lowercase().as_str()
    {
        "true" | "y" | "yes" | "on" => Ok(Value::Bool(true)),
        "false" | "n" | "no" | "off" => Ok(Value::Bool(false)),
        _ => Err(Error::new(ErrorKind::NotABool(text))),
    }
}

/// Coerce an untagged plain scalar: null/bool/int/float
/// when the canonical pattern matches, the trimmed text
/// otherwise
pub(crate) fn default_marshal(raw: &str) -> Value
{
    let text = raw.trim();

    if text.is_empty()
    {
        return Value::Str(raw.into());
    }

    if !TYPED.is_match(text)
    {
        return Value::Str(text.into());
    }

    let lowered = text.to_ascii_lowercase();

    match lowered.as_str()
    {
        "null" | "~" => Value::Null,
        "true" => Value::Bool(true),
        "false" => Value::Bool(false),
        number =>
        {
            if let Ok(i) = number.parse::<i64>()
            {
                return Value::Int(i);
            }

            match number.parse::<f64>()
            {
                Ok(fl) => Value::Float(fl),
                Err(_) => Value::Str(text.into()),
            }
        },
    }
}
