//! How an edge element yields its target id and its payload.
//!
//! This is the only rule table consulted by descriptors and by the fallback
//! implementations of the adjacency traits:
//!
//! | element              | target id | inner value      |
//! |----------------------|-----------|------------------|
//! | integer `t`          | `t`       | `&t`             |
//! | `String`, `&str`     | itself    | itself, borrowed |
//! | `(t,)`               | `t`       | `&t`             |
//! | `(t, v)`             | `t`       | `&v`             |
//! | `(t, a, b)`          | `t`       | `(&a, &b)`       |
//! | `(t, a, b, c)`       | `t`       | `(&a, &b, &c)`   |
//! | user type            | user rule | user rule        |
//!
//! User structs opt in by implementing [`EdgeShape`] themselves, usually
//! returning `self` whole as the inner value.

/// Structural view of one element of an edge container.
pub trait EdgeShape {
    type Id;
    type Inner<'a>
    where
        Self: 'a;
    type InnerMut<'a>
    where
        Self: 'a;

    fn target_id(&self) -> &Self::Id;
    fn inner_value(&self) -> Self::Inner<'_>;
    fn inner_value_mut(&mut self) -> Self::InnerMut<'_>;
}

/// Edge elements which store the id of the vertex they leave.
///
/// Reverse adjacency needs this to recover the true origin of an in-edge.
pub trait SourcedShape: EdgeShape {
    fn source_id(&self) -> &Self::Id;
}

macro_rules! self_shape {
    ($($t:ty),*) => {$(
        impl EdgeShape for $t {
            type Id = $t;
            type Inner<'a> = &'a $t;
            type InnerMut<'a> = &'a mut $t;

            fn target_id(&self) -> &$t {
                self
            }

            fn inner_value(&self) -> &$t {
                self
            }

            fn inner_value_mut(&mut self) -> &mut $t {
                self
            }
        }
    )*};
}

self_shape!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, String, Box<str>);

impl<'s> EdgeShape for &'s str {
    type Id = &'s str;
    type Inner<'a> = &'a &'s str where Self: 'a;
    type InnerMut<'a> = &'a mut &'s str where Self: 'a;

    fn target_id(&self) -> &&'s str {
        self
    }

    fn inner_value(&self) -> &&'s str {
        self
    }

    fn inner_value_mut(&mut self) -> &mut &'s str {
        self
    }
}

impl<T> EdgeShape for (T,) {
    type Id = T;
    type Inner<'a> = &'a T where Self: 'a;
    type InnerMut<'a> = &'a mut T where Self: 'a;

    fn target_id(&self) -> &T {
        &self.0
    }

    fn inner_value(&self) -> &T {
        &self.0
    }

    fn inner_value_mut(&mut self) -> &mut T {
        &mut self.0
    }
}

impl<T, V> EdgeShape for (T, V) {
    type Id = T;
    type Inner<'a> = &'a V where Self: 'a;
    type InnerMut<'a> = &'a mut V where Self: 'a;

    fn target_id(&self) -> &T {
        &self.0
    }

    fn inner_value(&self) -> &V {
        &self.1
    }

    fn inner_value_mut(&mut self) -> &mut V {
        &mut self.1
    }
}

impl<T, A, B> EdgeShape for (T, A, B) {
    type Id = T;
    type Inner<'a> = (&'a A, &'a B) where Self: 'a;
    type InnerMut<'a> = (&'a mut A, &'a mut B) where Self: 'a;

    fn target_id(&self) -> &T {
        &self.0
    }

    fn inner_value(&self) -> (&A, &B) {
        (&self.1, &self.2)
    }

    fn inner_value_mut(&mut self) -> (&mut A, &mut B) {
        (&mut self.1, &mut self.2)
    }
}

impl<T, A, B, C> EdgeShape for (T, A, B, C) {
    type Id = T;
    type Inner<'a> = (&'a A, &'a B, &'a C) where Self: 'a;
    type InnerMut<'a> = (&'a mut A, &'a mut B, &'a mut C) where Self: 'a;

    fn target_id(&self) -> &T {
        &self.0
    }

    fn inner_value(&self) -> (&A, &B, &C) {
        (&self.1, &self.2, &self.3)
    }

    fn inner_value_mut(&mut self) -> (&mut A, &mut B, &mut C) {
        (&mut self.1, &mut self.2, &mut self.3)
    }
}
