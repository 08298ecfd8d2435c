use std::fmt;

use crate::error::BoardError;

/// Upper bound for the number of ports on either side of a node.
pub const DEFAULT_MAX_PORTS: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PortSide {
    Input,
    Output,
}

impl fmt::Display for PortSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PortSide::Input => "input",
            PortSide::Output => "output",
        };
        write!(f, "{}", s)
    }
}

/// Validated number of input and output ports for a new node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PortCounts {
    inputs: usize,
    outputs: usize,
}

impl PortCounts {
    /// Validate raw form values. Each count must lie in `0..=max`.
    pub fn new(inputs: i64, outputs: i64, max: usize) -> Result<Self, BoardError> {
        Ok(Self {
            inputs: Self::check(PortSide::Input, inputs, max)?,
            outputs: Self::check(PortSide::Output, outputs, max)?,
        })
    }

    fn check(side: PortSide, value: i64, max: usize) -> Result<usize, BoardError> {
        match usize::try_from(value) {
            Ok(v) if v <= max => Ok(v),
            _ => Err(BoardError::PortCountOutOfRange { side, value, max }),
        }
    }

    pub fn inputs(&self) -> usize {
        self.inputs
    }

    pub fn outputs(&self) -> usize {
        self.outputs
    }
}
