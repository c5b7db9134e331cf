// row
/// Implement [`Row`](crate::filter::Row) for a plain struct by listing the
/// fields that filters may reference. Each listed field must be `Clone` and
/// convertible into [`Value`](crate::value::Value).
///
/// ```ignore
/// struct Task { id: String, done: bool }
/// wherekit::impl_row!(Task { id, done });
/// ```
#[macro_export]
macro_rules! impl_row {
    ( $ty:ty { $( $field:ident ),* $(,)? } ) => {
        impl $crate::filter::Row for $ty {
            fn field(&self, name: &str) -> $crate::filter::FieldPresence<'_> {
                match name {
                    $(
                        stringify!($field) => $crate::filter::FieldPresence::Present(
                            ::std::borrow::Cow::Owned($crate::value::Value::from(
                                ::std::clone::Clone::clone(&self.$field),
                            )),
                        ),
                    )*
                    _ => $crate::filter::FieldPresence::Missing,
                }
            }
        }
    };
}
