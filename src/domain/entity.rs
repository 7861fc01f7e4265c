//! Shape shared by every managed inventory record
//!
//! An entity has a numeric id assigned at creation, exactly one field whose
//! value must be distinct across the collection, a creation request and a
//! partial-update patch.

use std::fmt;

pub trait Entity: Clone + Send + Sync + 'static {
    /// Creation request: every attribute except the id.
    type Create: Send + Sync + 'static;
    /// Partial update: `None` leaves the stored value untouched.
    type Patch: Send + Sync + 'static;
    /// Type of the uniqueness field.
    type Key: PartialEq + fmt::Display + Send + Sync;

    /// Human-readable entity name used in error messages and log fields.
    const NAME: &'static str;
    /// Name of the uniqueness field as exposed over the API.
    const UNIQUE_FIELD: &'static str;

    fn id(&self) -> i32;

    fn unique_key(&self) -> &Self::Key;

    fn create_key(request: &Self::Create) -> &Self::Key;

    fn patch_key(patch: &Self::Patch) -> Option<&Self::Key>;

    fn from_create(id: i32, request: Self::Create) -> Self;

    /// Overwrite every field present in `patch`. The id is never touched.
    fn merge(&mut self, patch: Self::Patch);
}
