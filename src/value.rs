/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use std::fmt;

/// A value deserialized from a YAML document.
///
/// Mapping keys keep the textual form they had in the
/// source; only plain scalars in value position are coerced
/// to the null/bool/int/float types.
#[derive(Debug, Clone, PartialEq)]
pub enum Value
{
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Seq(Vec<Value>),
    Map(Mapping),
}

impl Value
{
    pub fn is_null(&self) -> bool
    {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool>
    {
        match self
        {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64>
    {
        match self
        {
            Self::Int(i) => Some(*i),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<f64>
    {
        match self
        {
            Self::Float(fl) => Some(*fl),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str>
    {
        match self
        {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Value]>
    {
        match self
        {
            Self::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Mapping>
    {
        match self
        {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Fetch the value stored under the given string key,
    /// if self is a mapping that contains it
    pub fn get(&self, key: &str) -> Option<&Value>
    {
        self.as_map().and_then(|map| map.get_str(key))
    }
}

impl fmt::Display for Value
{
    /// Plain text rendering, as used for joined multi line
    /// scalars and the !!str coercion
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        match self
        {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::Float(fl) => write!(f, "{}", fl),
            Self::Str(s) => f.write_str(s),
            Self::Seq(items) =>
            {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate()
                {
                    if i > 0
                    {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            },
            Self::Map(map) =>
            {
                f.write_str("{")?;
                for (i, (key, value)) in map.iter().enumerate()
                {
                    if i > 0
                    {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                f.write_str("}")
            },
        }
    }
}

impl From<bool> for Value
{
    fn from(b: bool) -> Self
    {
        Self::Bool(b)
    }
}

impl From<i64> for Value
{
    fn from(i: i64) -> Self
    {
        Self::Int(i)
    }
}

impl From<f64> for Value
{
    fn from(fl: f64) -> Self
    {
        Self::Float(fl)
    }
}

impl From<&str> for Value
{
    fn from(s: &str) -> Self
    {
        Self::Str(s.into())
    }
}

impl From<String> for Value
{
    fn from(s: String) -> Self
    {
        Self::Str(s)
    }
}

impl From<Vec<Value>> for Value
{
    fn from(items: Vec<Value>) -> Self
    {
        Self::Seq(items)
    }
}

impl From<Mapping> for Value
{
    fn from(map: Mapping) -> Self
    {
        Self::Map(map)
    }
}

/// An insertion ordered mapping with last-write-wins
/// duplicate handling: re-inserting a key replaces its
/// value in place
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mapping
{
    entries: Vec<(Value, Value)>,
}

impl Mapping
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn len(&self) -> usize
    {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.entries.is_empty()
    }

    /// Store .value under .key, replacing the value of an
    /// equal key already present
    pub fn insert(&mut self, key: Value, value: Value)
    {
        match self.entries.iter_mut().find(|(k, _)| *k == key)
        {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: &Value) -> Option<&Value>
    {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Fetch by string key
    pub fn get_str(&self, key: &str) -> Option<&Value>
    {
        self.entries
            .iter()
            .find(|(k, _)| matches!(k, Value::Str(s) if s == key))
            .map(|(_, v)| v)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Value, Value)>
    {
        self.entries.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = &Value>
    {
        self.entries.iter().map(|(k, _)| k)
    }
}

impl IntoIterator for Mapping
{
    type IntoIter = std::vec::IntoIter<(Value, Value)>;
    type Item = (Value, Value);

    fn into_iter(self) -> Self::IntoIter
    {
        self.entries.into_iter()
    }
}

impl std::iter::FromIterator<(Value, Value)> for Mapping
{
    fn from_iter<T: IntoIterator<Item = (Value, Value)>>(iter: T) -> Self
    {
        let mut map = Self::new();

        for (key, value) in iter
        {
            map.insert(key, value);
        }

        map
    }
}
