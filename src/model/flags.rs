use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flags {
    bits: u8,
}

impl Flags {
    pub const ERROR_BOUND: u8 = 0b01;
    pub const MONOTONICITY: u8 = 0b10;

    pub fn empty() -> Self {
        Self { bits: 0 }
    }

    pub fn set(&mut self, bit: u8) {
        self.bits |= bit;
    }

    pub fn contains(&self, bit: u8) -> bool {
        self.bits & bit != 0
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    pub fn to_csv(&self) -> String {
        if self.bits == 0 {
            return ".".to_string();
        }
        let mut parts = Vec::new();
        if self.contains(Self::ERROR_BOUND) {
            parts.push("ERROR_BOUND");
        }
        if self.contains(Self::MONOTONICITY) {
            parts.push("MONOTONICITY");
        }
        parts.join(",")
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/model/flags.rs"]
mod tests;
