//! Success envelope for `/api/v1` responses.
//!
//! Trees, members, graphs and profiles are all returned as `{ "data": ... }`;
//! failures use the `{ "error", "code" }` shape from [`crate::error`].

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}
