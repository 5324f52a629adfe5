#[cfg(feature = "send")]
pub(crate) type OurRc<T> = std::sync::Arc<T>;

#[cfg(not(feature = "send"))]
pub(crate) type OurRc<T> = std::rc::Rc<T>;

pub(crate) type OurStr = OurRc<str>;

/// One-based entity identifier, assigned in record insertion order.
pub type EntId = u32;

/// One-based name identifier. Every display name and every synonym
/// gets its own NameId; several NameIds can point at the same EntId.
pub type NameId = u32;
