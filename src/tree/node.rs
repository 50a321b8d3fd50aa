/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

use slotmap::{new_key_type, SlotMap};

use crate::{
    error::{Error, ErrorKind, Result},
    tree::PendingTag,
    value::{Mapping, Value},
};

new_key_type! {
    /// Identifier used for locating [ParseNode]s in the
    /// builder's store.
    ///
    /// An invariant of this type is that one should never use
    /// [NodeIndex]s as indexes into stores that did not generate
    /// the [NodeIndex].
    pub(in crate::tree) struct NodeIndex;
}

/// Indent of an open node. A wrapper around usize that can
/// also express the missing indent of nodes born inside
/// flow collections, which never take part in block
/// indentation arithmetic.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(in crate::tree) struct Indent(Option<usize>);

impl Indent
{
    pub fn unknown() -> Self
    {
        Self(None)
    }

    pub fn get(self) -> Option<usize>
    {
        self.0
    }

    /// The smaller of two indents, where a missing indent
    /// simply yields the other
    pub fn min_with(self, other: Self) -> Self
    {
        match (self.0, other.0)
        {
            (Some(a), Some(b)) => Self(Some(a.min(b))),
            (Some(a), None) => Self(Some(a)),
            (None, b) => Self(b),
        }
    }
}

impl From<usize> for Indent
{
    fn from(indent: usize) -> Self
    {
        Self(Some(indent))
    }
}

/// What shape of node a token demands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(in crate::tree) enum Shape
{
    Map,
    Seq,
    Scalar,
}

/// A node on the builder's stack: the staging fields every
/// shape shares, plus the shape specific collected target.
///
/// A node stages at most one value (and, for mappings, one
/// key) at a time; auto apply moves the staged pair or
/// element into the target. The collected target only
/// materializes on the first apply, so a node that never
/// applied collapses to null when popped.
#[derive(Debug)]
pub(in crate::tree) struct ParseNode
{
    pub indent:      Indent,
    pub prev:        Option<NodeIndex>,
    pub is_temp:     bool,
    pub needs_apply: bool,
    pub last_value:  Option<Value>,
    pub anchor:      Option<String>,
    pub tag:         Option<PendingTag>,
    pub kind:        NodeKind,
}

#[derive(Debug)]
pub(in crate::tree) enum NodeKind
{
    /// Ordered key/value container, with its staged key
    Map
    {
        target:   Option<Mapping>,
        last_key: Option<Value>,
    },
    /// Element container
    Seq
    {
        target: Option<Vec<Value>>
    },
    /// Single value holder
    Scalar
    {
        target: Option<Value>
    },
}

impl ParseNode
{
    pub fn new(shape: Shape, indent: Indent, tag: Option<PendingTag>) -> Self
    {
        let kind = match shape
        {
            Shape::Map => NodeKind::Map {
                target:   None,
                last_key: None,
            },
            Shape::Seq => NodeKind::Seq { target: None },
            Shape::Scalar => NodeKind::Scalar { target: None },
        };

        Self {
            indent,
            prev: None,
            is_temp: false,
            needs_apply: false,
            last_value: None,
            anchor: None,
            tag,
            kind,
        }
    }

    pub fn shape(&self) -> Shape
    {
        match self.kind
        {
            NodeKind::Map { .. } => Shape::Map,
            NodeKind::Seq { .. } => Shape::Seq,
            NodeKind::Scalar { .. } => Shape::Scalar,
        }
    }

    /// Stage a key on a mapping node. A payload-less key
    /// (bare ':') stages as nothing and later applies as
    /// null, so such keys never collide.
    pub fn set_key(&mut self, key: Option<Value>) -> Result<()>
    {
        match &mut self.kind
        {
            NodeKind::Map { last_key, .. } =>
            {
                if let Some(previous) = last_key
                {
                    return Err(Error::new(ErrorKind::KeyNotConsumed(previous.to_string())));
                }

                *last_key = key;
                self.needs_apply = true;

                Ok(())
            },
            _ => Err(Error::new(ErrorKind::KeyNotAllowed)),
        }
    }

    /// Stage a value. A second non null value staged before
    /// the first applies joins onto it with a single space,
    /// which is how multi line plain scalars fold; null
    /// never joins.
    pub fn set_value(&mut self, value: Value)
    {
        self.needs_apply = true;

        match value
        {
            Value::Null =>
            {},
            value => match self.last_value.take()
            {
                None => self.last_value = Some(value),
                Some(previous) =>
                {
                    self.last_value = Some(Value::Str(format!("{} {}", previous, value)));
                },
            },
        }
    }

    /// Move the staged value (and key) into the collected
    /// target
    pub fn apply(&mut self)
    {
        let value = self.last_value.take().unwrap_or(Value::Null);

        match &mut self.kind
        {
            NodeKind::Map { target, last_key } =>
            {
                let key = last_key.take().unwrap_or(Value::Null);

                target.get_or_insert_with(Mapping::new).insert(key, value);
            },
            NodeKind::Seq { target } => target.get_or_insert_with(Vec::new).push(value),
            NodeKind::Scalar { target } => *target = Some(value),
        }

        self.needs_apply = false;
    }

    /// The node's completed value; a container that never
    /// applied is null
    pub fn take_target(&mut self) -> Value
    {
        match &mut self.kind
        {
            NodeKind::Map { target, .. } => target.take().map(Value::Map).unwrap_or(Value::Null),
            NodeKind::Seq { target } => target.take().map(Value::Seq).unwrap_or(Value::Null),
            NodeKind::Scalar { target } => target.take().unwrap_or(Value::Null),
        }
    }
}

/// Arena owning every open node, keyed by [NodeIndex]
#[derive(Debug, Default)]
pub(in crate::tree) struct Storage
{
    nodes: SlotMap<NodeIndex, ParseNode>,
}

impl Storage
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub fn insert(&mut self, node: ParseNode) -> NodeIndex
    {
        self.nodes.insert(node)
    }

    pub fn get(&self, index: NodeIndex) -> Option<&ParseNode>
    {
        self.nodes.get(index)
    }

    pub fn get_mut(&mut self, index: NodeIndex) -> Option<&mut ParseNode>
    {
        self.nodes.get_mut(index)
    }

    pub fn remove(&mut self, index: NodeIndex) -> Option<ParseNode>
    {
        self.nodes.remove(index)
    }
}
