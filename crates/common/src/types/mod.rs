use serde::{Deserialize, Serialize};

#[derive(Serialize, Debug)]
pub struct Message {
    pub message: &'static str,
}

/// Body of a successful delete.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deleted {
    pub deleted: bool,
}

impl Deleted {
    pub fn yes() -> Self { Self { deleted: true } }
}

/// Body of a PATCH that carried no applicable fields.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Updated {
    pub updated: bool,
}

impl Updated {
    pub fn nothing() -> Self { Self { updated: false } }
}
