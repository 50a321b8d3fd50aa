/*
 * This Source Code Form is subject to the terms of the
 * Mozilla Public License, v. 2.0. If a copy of the MPL
 * was not distributed with this file, You can obtain one at http://mozilla.org/MPL/2.0/.
 */

//! The parse tree builder: consumes the scanner's token
//! stream and folds it into a list of document values.
//!
//! Open collections live on a stack of nodes linked by
//! back references; each incoming token either re-uses the
//! top node, pops nodes whose indent it undercuts, or
//! pushes a fresh node. Values stage on their node and
//! apply when the next structural token demands it, which
//! is also the moment anchors bind.

mod node;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use log::debug;

use crate::{
    error::{Error, ErrorKind, Result},
    scanner::entry::TokenEntry,
    tag::{default_marshal, Marshaller},
    token::{ScalarStyle, Token},
    tree::node::{Indent, NodeIndex, ParseNode, Shape, Storage},
    value::Value,
};

/// A tag waiting for the value it binds to. Claimed either
/// by the next node created or by the next value pushed
/// directly; a tag that resolved to no marshaller rejects
/// whatever it is eventually applied to.
#[derive(Debug)]
pub(in crate::tree) struct PendingTag
{
    handle:     String,
    marshaller: Option<Marshaller>,
    indent:     Indent,
}

impl PendingTag
{
    pub(in crate::tree) fn marshal(self, value: Value) -> Result<Value>
    {
        match self.marshaller
        {
            Some(marshaller) => marshaller.marshal(value),
            None => Err(Error::new(ErrorKind::UnknownTag(self.handle))),
        }
    }
}

/// Owner of the document being assembled: the node stack
/// (head plus back links), the anchor table, any pending
/// tag or anchor, and the completed documents.
#[derive(Debug)]
pub(crate) struct Root
{
    docs:           Vec<Value>,
    head:           Option<NodeIndex>,
    anchors:        HashMap<String, Value>,
    pending_tag:    Option<PendingTag>,
    pending_anchor: Option<String>,
    doc_consumed:   bool,
    store:          Storage,
}

impl Root
{
    pub fn new() -> Self
    {
        Self {
            docs:           Vec::new(),
            head:           None,
            anchors:        HashMap::new(),
            pending_tag:    None,
            pending_anchor: None,
            doc_consumed:   true,
            store:          Storage::new(),
        }
    }

    /// Process one token against the tree
    pub fn consume(&mut self, entry: TokenEntry<'_>) -> Result<()>
    {
        let indent = entry.indent();

        match entry.into_token()
        {
            Token::StreamStart | Token::Directive(_, _) | Token::Comment(_) | Token::EmptyLine =>
            {
                Ok(())
            },
            Token::StreamEnd | Token::DocumentEnd => self.pop_doc(),
            Token::DocumentStart =>
            {
                self.pop_doc()?;

                // An explicit marker starts a document even
                // if nothing follows it
                self.doc_consumed = false;

                Ok(())
            },
            Token::BlockEntry => self.ensure_node(indent, Shape::Seq),
            Token::Key(key) =>
            {
                let key = key.map(|text| Value::Str(text.into_owned()));

                self.push_key(indent, key)
            },
            Token::Scalar(text, style) =>
            {
                // Plain untagged scalars coerce; anything
                // else reaches its marshaller (or the tree)
                // as raw text
                let value = match (&self.pending_tag, style)
                {
                    (None, ScalarStyle::Plain) => default_marshal(&text),
                    _ => Value::Str(text.into_owned()),
                };

                self.push_value(indent, value)
            },
            Token::Alias(name) =>
            {
                let value = self
                    .anchors
                    .get(name.as_ref())
                    .cloned()
                    .unwrap_or(Value::Null);

                self.push_value(indent, value)
            },
            Token::Anchor(name) =>
            {
                self.set_anchor(name.into_owned());

                Ok(())
            },
            Token::Tag(handle, marshaller) =>
            {
                self.set_tag(handle.into_owned(), marshaller, indent)
            },
            Token::FlowMappingStart => self.push_node(Shape::Map, Indent::unknown()),
            Token::FlowSequenceStart => self.push_node(Shape::Seq, Indent::unknown()),
            Token::FlowEntry =>
            {
                self.auto_apply_head();

                Ok(())
            },
            Token::FlowEnd => self.pop(),
        }
    }

    /// The assembled documents
    pub fn into_docs(self) -> Vec<Value>
    {
        self.docs
    }

    fn head_node(&mut self) -> Option<&mut ParseNode>
    {
        match self.head
        {
            Some(index) => self.store.get_mut(index),
            None => None,
        }
    }

    /// Attach an anchor to the current node, or hold it on
    /// the root until a node exists to carry it
    fn set_anchor(&mut self, name: String)
    {
        if let Some(node) = self.head_node()
        {
            node.anchor = Some(name);

            return;
        }

        self.pending_anchor = Some(name);
    }

    /// Indent of the node atop the stack, if any
    fn head_indent(&self) -> Option<Indent>
    {
        self.head
            .and_then(|index| self.store.get(index))
            .map(|node| node.indent)
    }

    /// Record a pending tag; a second tag before the first
    /// found its value is an error
    fn set_tag(
        &mut self,
        handle: String,
        marshaller: Option<Marshaller>,
        indent: usize,
    ) -> Result<()>
    {
        if self.pending_tag.is_some()
        {
            return Err(Error::new(ErrorKind::ConsecutiveTags));
        }

        self.pending_tag = Some(PendingTag {
            handle,
            marshaller,
            indent: Indent::from(indent),
        });

        Ok(())
    }

    /// Apply the pending tag to a directly pushed value
    fn claim_tag(&mut self, value: Value) -> Result<Value>
    {
        match self.pending_tag.take()
        {
            Some(tag) => tag.marshal(value),
            None => Ok(value),
        }
    }

    /// Bind the node's anchor (if any) to its staged value,
    /// then apply the staged pair or element
    fn auto_apply(&mut self, index: NodeIndex)
    {
        let bound = match self.store.get_mut(index)
        {
            Some(node) =>
            {
                let bound = node
                    .anchor
                    .take()
                    .map(|name| (name, node.last_value.clone().unwrap_or(Value::Null)));

                if node.needs_apply
                {
                    node.apply();
                }

                bound
            },
            None => None,
        };

        if let Some((name, value)) = bound
        {
            self.anchors.insert(name, value);
        }
    }

    fn auto_apply_head(&mut self)
    {
        if let Some(index) = self.head
        {
            self.auto_apply(index);
        }
    }

    /// Whether the top of the stack must pop before a block
    /// token at .indent can apply
    fn needs_pop(&self, indent: usize) -> bool
    {
        match self.head.and_then(|index| self.store.get(index))
        {
            Some(node) => match node.indent.get()
            {
                Some(column) => column > indent,
                None => false,
            },
            None => false,
        }
    }

    /// Whether a token at .indent demanding .shape needs a
    /// fresh node pushed
    fn needs_new_node(&self, indent: usize, shape: Shape) -> bool
    {
        match self.head.and_then(|index| self.store.get(index))
        {
            None => true,
            Some(node) if node.shape() != shape => true,
            Some(node) => match node.indent.get()
            {
                // Flow nodes swallow every deeper indent
                None => false,
                Some(column) => indent > column,
            },
        }
    }

    /// Pop until .indent fits, then make sure the top node
    /// matches .shape
    fn ensure_node(&mut self, indent: usize, shape: Shape) -> Result<()>
    {
        while self.needs_pop(indent)
        {
            self.pop()?;
        }

        if self.needs_new_node(indent, shape)
        {
            if shape == Shape::Seq
            {
                if let Some(column) = self.head_indent().and_then(Indent::get)
                {
                    if indent < column
                    {
                        return Err(Error::new(ErrorKind::UnderIndented(column)));
                    }
                }
            }

            self.push_node(shape, Indent::from(indent))?;
        }

        self.auto_apply_head();

        Ok(())
    }

    /// Stage a key on the mapping at .indent, creating or
    /// re-using it as needed
    fn push_key(&mut self, indent: usize, key: Option<Value>) -> Result<()>
    {
        self.ensure_node(indent, Shape::Map)?;

        match self.head_node()
        {
            Some(node) => node.set_key(key),
            None => Ok(()),
        }
    }

    /// Stage a value on the current node, synthesizing a
    /// scalar node for a bare document value
    fn push_value(&mut self, indent: usize, value: Value) -> Result<()>
    {
        let value = self.claim_tag(value)?;

        if self.head.is_none()
        {
            self.push_node(Shape::Scalar, Indent::from(indent))?;
        }

        let is_temp = match self.head_node()
        {
            Some(node) =>
            {
                node.set_value(value);

                node.is_temp
            },
            None => false,
        };

        // A temporary node holds exactly one value
        if is_temp
        {
            self.pop()?;
        }

        Ok(())
    }

    /// Push a fresh node above the current head, claiming
    /// the pending tag (which drags the node's indent down
    /// to the tag's). An indented node pushed over an
    /// indent-less (flow) parent is temporary; one pushed
    /// over deeper block nodes pops them first.
    fn push_node(&mut self, shape: Shape, indent: Indent) -> Result<()>
    {
        // A claimed tag drags a block node's indent down to
        // its own; flow nodes stay indent-less
        let (indent, tag) = match self.pending_tag.take()
        {
            Some(tag) if indent.get().is_some() => (indent.min_with(tag.indent), Some(tag)),
            Some(tag) => (indent, Some(tag)),
            None => (indent, None),
        };

        let mut node = ParseNode::new(shape, indent, tag);

        match self.head_indent()
        {
            // Over an indent-less (flow) parent, an
            // indented node is temporary
            Some(head_indent) if head_indent.get().is_none() =>
            {
                node.is_temp = node.indent.get().is_some();
            },
            Some(_) =>
            {
                if let Some(column) = node.indent.get()
                {
                    while let Some(head_column) = self.head_indent().and_then(Indent::get)
                    {
                        if column >= head_column
                        {
                            break;
                        }

                        self.pop()?;
                    }
                }
            },
            None => self.doc_consumed = false,
        }

        node.prev = self.head;

        if let Some(anchor) = self.pending_anchor.take()
        {
            node.anchor = Some(anchor);
        }

        self.head = Some(self.store.insert(node));

        Ok(())
    }

    /// Pop the head node, applying its completed value to
    /// the node below it, or finishing the document when
    /// none remains
    fn pop(&mut self) -> Result<()>
    {
        let index = match self.head
        {
            Some(index) => index,
            None => return Err(Error::new(ErrorKind::FlowEndWithoutNode)),
        };

        self.auto_apply(index);

        let mut node = match self.store.remove(index)
        {
            Some(node) => node,
            None => return Err(Error::new(ErrorKind::FlowEndWithoutNode)),
        };

        self.head = node.prev;

        let mut value = node.take_target();

        if let Some(tag) = node.tag.take()
        {
            value = tag.marshal(value)?;
        }

        match self.head
        {
            Some(below) =>
            {
                if let Some(parent) = self.store.get_mut(below)
                {
                    parent.set_value(value);
                }

                self.auto_apply(below);
            },
            None => self.finish_doc(value)?,
        }

        Ok(())
    }

    /// Record a completed document value
    fn finish_doc(&mut self, value: Value) -> Result<()>
    {
        self.doc_consumed = true;

        let value = self.claim_tag(value)?;

        debug!("document {} complete", self.docs.len() + 1);

        self.docs.push(value);

        Ok(())
    }

    /// Close any open nodes; an explicitly started document
    /// that produced nothing records the empty string
    fn pop_doc(&mut self) -> Result<()>
    {
        if self.head.is_some()
        {
            while self.head.is_some()
            {
                self.pop()?;
            }

            return Ok(());
        }

        if !self.doc_consumed
        {
            self.finish_doc(Value::Str(String::new()))?;
        }

        Ok(())
    }
}
