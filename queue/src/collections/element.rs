use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

/// Fundamental constraints for values stored in a [`Queue`](crate::Queue).
///
/// `Default` provides the value written into allocated but unoccupied slots and into
/// slots vacated by a removal.
pub trait Element: Debug + Default + 'static {}

macro_rules! impl_element_for_primitives {
  ($($ty:ty),* $(,)?) => {
    $(impl Element for $ty {})*
  };
}

impl_element_for_primitives!(i8, i16, i32, i64, i128, isize);
impl_element_for_primitives!(u8, u16, u32, u64, u128, usize);
impl_element_for_primitives!(f32, f64, bool, char, ());

impl Element for String {}

impl<T> Element for Option<T> where T: Debug + 'static {}

impl<T> Element for Vec<T> where T: Debug + 'static {}

impl<T> Element for Box<T> where T: Debug + Default + 'static {}

impl<T> Element for Rc<T> where T: Debug + Default + 'static {}

impl<T> Element for Arc<T> where T: Debug + Default + 'static {}
