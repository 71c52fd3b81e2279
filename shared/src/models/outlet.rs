//! Outlet models

use serde::{Deserialize, Serialize};

/// A physical retail location that receives stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outlet {
    pub id: String,
    pub name: String,
    pub location: String,
}
