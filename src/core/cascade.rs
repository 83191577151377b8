/// Returns the first value `field` yields across `layers`, innermost first.
///
/// Layers are partial configuration fragments (data item, series, global
/// option). A layer that leaves the field unset is skipped.
pub fn first_defined<'a, L, T>(layers: &[&'a L], field: impl Fn(&'a L) -> Option<T>) -> Option<T>
where
    L: ?Sized,
{
    layers.iter().find_map(|layer| field(*layer))
}

/// Whether any layer defines the field, regardless of its value.
pub fn is_defined<'a, L, T>(layers: &[&'a L], field: impl Fn(&'a L) -> Option<T>) -> bool
where
    L: ?Sized,
{
    first_defined(layers, field).is_some()
}
