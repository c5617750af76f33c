//! Type-erased containers for initialized feature state.
//!
//! Feature crates return their state wrapped in an [`InitializedSlice`],
//! letting the facade hand back one homogeneous list regardless of which
//! slices are compiled in.

use std::any::{Any, TypeId, type_name};
use std::fmt::Debug;

/// State object a feature slice hands back from its `init` function.
pub trait FeatureSlice: Any + Debug + Send + Sync {
    /// Exposes the concrete state for downcasting.
    fn as_any(&self) -> &dyn Any;
}

/// One initialized feature slice, erased to its trait object.
#[derive(Debug)]
pub struct InitializedSlice {
    pub id: TypeId,
    pub state: Box<dyn FeatureSlice>,
    state_type: &'static str,
}

impl InitializedSlice {
    /// Wraps a concrete feature state.
    pub fn new<T: FeatureSlice>(state: T) -> Self {
        Self { id: TypeId::of::<T>(), state: Box::new(state), state_type: type_name::<T>() }
    }

    /// Recovers the concrete state, `None` if this slice holds another type.
    #[must_use]
    pub fn downcast_ref<T: FeatureSlice>(&self) -> Option<&T> {
        self.state.as_any().downcast_ref::<T>()
    }

    /// Whether this slice holds state of type `T`.
    #[must_use]
    pub fn holds<T: FeatureSlice>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Fully qualified type name of the stored state, for diagnostics.
    #[must_use]
    pub const fn state_type(&self) -> &'static str {
        self.state_type
    }
}
