use crate::error::{Error, ErrorKind, Result};

/// Tracks the stack of open flow collections. Every '{' or
/// '[' records the ender that must eventually close it;
/// closing with the wrong ender, or with nothing open, is a
/// structural error. While at least one collection is open
/// the scanner tokenizes in the flow context, where
/// indentation is ignored and entries are ',' delimited.
#[derive(Debug, Clone, Default)]
pub(in crate::scanner) struct Context
{
    enders: Vec<char>,
}

impl Context
{
    pub fn new() -> Self
    {
        Self::default()
    }

    /// Check if we are currently in the flow context
    pub fn is_flow(&self) -> bool
    {
        !self.enders.is_empty()
    }

    /// Record the ender a freshly opened collection expects
    pub fn push(&mut self, ender: char)
    {
        self.enders.push(ender);
    }

    /// Close the innermost collection, verifying .found is
    /// the ender it expects
    pub fn pop(&mut self, found: char) -> Result<()>
    {
        match self.enders.pop()
        {
            Some(expected) if expected == found => Ok(()),
            Some(expected) =>
            {
                Err(Error::new(ErrorKind::MismatchedFlowEnder(found, expected)))
            },
            None => Err(Error::new(ErrorKind::UnmatchedFlowEnder(found))),
        }
    }
}
